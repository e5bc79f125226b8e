pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod message;
pub mod specialty;
pub mod user;

pub use appointment::Appointment;
pub use doctor::{Doctor, TimeSlot};
pub use enums::{AppointmentStatus, MessageSender};
pub use message::ChatMessage;
pub use specialty::Specialty;
pub use user::{ProfileUpdate, Registration, User};
