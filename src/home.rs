//! Home screen data layer.
//!
//! Single fetch for everything the home screen renders: the greeting name,
//! a short preview of upcoming appointments, and the featured specialties.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::AppError;
use crate::models::{Appointment, AppointmentStatus, Specialty};
use crate::state::AppState;

/// Home screen data, assembled in a single fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeData {
    pub greeting_name: String,
    pub upcoming_appointments: Vec<Appointment>,
    pub featured_specialties: Vec<Specialty>,
}

/// Assemble the home screen content.
///
/// The appointment preview takes the first scheduled visits in collection
/// order, not date order, matching the "Próximas Citas" card list. Signed
/// out (or a blank first name) greets the generic visitor.
pub fn fetch_home_data(state: &AppState) -> Result<HomeData, AppError> {
    let greeting_name = state
        .read_user()?
        .as_ref()
        .map(|u| u.first_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Usuario".to_string());

    let book = state.read_book()?;
    let upcoming_appointments: Vec<Appointment> = book
        .all()
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
        .take(config::HOME_APPOINTMENT_LIMIT)
        .cloned()
        .collect();

    let featured_specialties: Vec<Specialty> = state
        .catalog()
        .specialties()
        .iter()
        .take(config::HOME_SPECIALTY_LIMIT)
        .cloned()
        .collect();

    Ok(HomeData {
        greeting_name,
        upcoming_appointments,
        featured_specialties,
    })
}
