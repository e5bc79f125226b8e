//! In-memory appointment collection: booking and cancellation, plus the
//! projections the appointment screens render.
//!
//! Appointments embed a snapshot of the doctor at booking time. Cancelling
//! is the only state transition; completed records exist only as seed data.

use chrono::{Duration, NaiveDate, Utc};

use crate::catalog::Catalog;
use crate::models::{Appointment, AppointmentStatus, Doctor, TimeSlot};

// ─── Collection ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
    last_id_ms: i64,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            last_id_ms: 0,
        }
    }

    /// Start from the demo records: two scheduled visits ahead of `today`
    /// and two completed ones behind it.
    pub fn seeded(catalog: &Catalog, today: NaiveDate) -> Self {
        let appointments = SEED_ROWS
            .iter()
            .filter_map(|row| {
                let doctor = catalog.doctor_by_id(row.doctor_id)?;
                Some(Appointment {
                    id: row.id.to_string(),
                    doctor: doctor.clone(),
                    date: today + Duration::days(row.day_offset),
                    time: row.time.to_string(),
                    status: row.status,
                    symptoms: Some(row.symptoms.to_string()),
                    diagnosis: row.diagnosis.map(str::to_string),
                    prescription: row.prescription.map(str::to_string),
                    notes: row.notes.map(str::to_string),
                })
            })
            .collect();

        Self {
            appointments,
            last_id_ms: 0,
        }
    }

    /// Record a new scheduled appointment and return its id.
    ///
    /// The same slot can be booked any number of times; slot availability
    /// belongs to the catalog and is never written back.
    pub fn book(&mut self, doctor: &Doctor, slot: &TimeSlot, symptoms: Option<String>) -> String {
        let id = self.next_id();
        tracing::info!(
            appointment_id = %id,
            doctor = %doctor.name,
            date = %slot.date,
            time = %slot.time,
            "Appointment booked"
        );

        self.appointments.push(Appointment {
            id: id.clone(),
            doctor: doctor.clone(),
            date: slot.date,
            time: slot.time.clone(),
            status: AppointmentStatus::Scheduled,
            symptoms,
            diagnosis: None,
            prescription: None,
            notes: None,
        });

        id
    }

    /// Cancel a scheduled appointment. Completed and already-cancelled
    /// records are left untouched; unknown ids are ignored.
    pub fn cancel(&mut self, id: &str) {
        match self.appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) if appointment.status == AppointmentStatus::Scheduled => {
                appointment.status = AppointmentStatus::Cancelled;
                tracing::info!(appointment_id = %id, "Appointment cancelled");
            }
            Some(appointment) => {
                tracing::debug!(
                    appointment_id = %id,
                    status = appointment.status.as_str(),
                    "Cancel ignored: appointment is not scheduled"
                );
            }
            None => {
                tracing::debug!(appointment_id = %id, "Cancel ignored: unknown appointment");
            }
        }
    }

    /// Millisecond timestamp id, bumped forward when two bookings land in
    /// the same millisecond.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id_ms = if now > self.last_id_ms {
            now
        } else {
            self.last_id_ms + 1
        };
        self.last_id_ms.to_string()
    }

    pub fn find(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    // ─── Projections ──────────────────────────────────────────────────────────

    /// "Mis Citas" view: scheduled and cancelled appointments, scheduled
    /// first, each group in date-ascending order.
    pub fn upcoming(&self) -> Vec<Appointment> {
        let mut upcoming: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    AppointmentStatus::Scheduled | AppointmentStatus::Cancelled
                )
            })
            .cloned()
            .collect();

        upcoming.sort_by(|a, b| {
            status_rank(a.status)
                .cmp(&status_rank(b.status))
                .then(a.date.cmp(&b.date))
        });
        upcoming
    }

    /// "Historial" view: completed and cancelled appointments, newest first.
    pub fn history(&self) -> Vec<Appointment> {
        let mut past: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    AppointmentStatus::Completed | AppointmentStatus::Cancelled
                )
            })
            .cloned()
            .collect();

        past.sort_by(|a, b| b.date.cmp(&a.date));
        past
    }
}

impl Default for AppointmentBook {
    fn default() -> Self {
        Self::new()
    }
}

fn status_rank(status: AppointmentStatus) -> u8 {
    match status {
        AppointmentStatus::Scheduled => 0,
        _ => 1,
    }
}

// ─── Seed data ────────────────────────────────────────────────────────────────

struct SeedRow {
    id: &'static str,
    doctor_id: &'static str,
    day_offset: i64,
    time: &'static str,
    status: AppointmentStatus,
    symptoms: &'static str,
    diagnosis: Option<&'static str>,
    prescription: Option<&'static str>,
    notes: Option<&'static str>,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        id: "1",
        doctor_id: "1",
        day_offset: 2,
        time: "10:00",
        status: AppointmentStatus::Scheduled,
        symptoms: "Dolor de cabeza frecuente",
        diagnosis: None,
        prescription: None,
        notes: None,
    },
    SeedRow {
        id: "2",
        doctor_id: "3",
        day_offset: 5,
        time: "14:30",
        status: AppointmentStatus::Scheduled,
        symptoms: "Control pediátrico",
        diagnosis: None,
        prescription: None,
        notes: None,
    },
    SeedRow {
        id: "3",
        doctor_id: "2",
        day_offset: -10,
        time: "09:00",
        status: AppointmentStatus::Completed,
        symptoms: "Chequeo cardiovascular",
        diagnosis: Some("Presión arterial ligeramente elevada"),
        prescription: Some("Losartán 50mg - 1 vez al día"),
        notes: Some("Control en 3 meses. Reducir consumo de sal."),
    },
    SeedRow {
        id: "4",
        doctor_id: "4",
        day_offset: -30,
        time: "11:00",
        status: AppointmentStatus::Completed,
        symptoms: "Manchas en la piel",
        diagnosis: Some("Dermatitis leve"),
        prescription: Some("Crema hidratante con urea al 10%"),
        notes: Some("Evitar exposición solar directa."),
    },
];
