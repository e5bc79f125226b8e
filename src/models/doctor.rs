use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable (date, time) unit belonging to a doctor.
///
/// `available` is assigned once at generation time and never re-derived.
/// Booking an appointment does not flip it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// `"{date}-{time}"`, e.g. `"2026-08-24-09:00"`.
    pub id: String,
    pub date: NaiveDate,
    /// HH:MM, e.g. `"09:00"`.
    pub time: String,
    pub available: bool,
}

/// Doctor reference data. `available_slots` is generated once when the
/// catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub specialty_id: String,
    pub rating: f64,
    /// Years of practice.
    pub experience: u32,
    /// Consultation price in euros.
    pub price: u32,
    pub photo_url: String,
    pub available_slots: Vec<TimeSlot>,
}
