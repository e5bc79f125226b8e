use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::doctor::Doctor;
use super::enums::AppointmentStatus;

/// A booked appointment. The doctor is embedded as a full snapshot,
/// not a reference into the catalog.
///
/// Created by booking; mutated only by cancellation. Diagnosis,
/// prescription and notes appear only on completed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor: Doctor,
    pub date: NaiveDate,
    /// HH:MM, copied from the chosen slot.
    pub time: String,
    pub status: AppointmentStatus,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
    pub notes: Option<String>,
}
