//! Screen routing.
//!
//! Mirrors the navigation map of the app shell: two public auth screens,
//! the protected screens behind the session guard, and the booking flow
//! with its dynamic segments. Unknown paths resolve to the not-found
//! screen without consulting the guard.

/// One screen of the app, with any ids its path carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Assistant,
    Appointments,
    History,
    AppointmentDetail { appointment_id: String },
    Profile,
    SelectSpecialty,
    SelectDoctor { specialty_id: String },
    SelectDateTime { doctor_id: String },
    Payment { doctor_id: String, slot_id: String },
}

impl Route {
    /// Match a path against the navigation map. Leading and trailing
    /// slashes are tolerated; empty dynamic segments are not.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            [""] => Some(Route::Login),
            ["register"] => Some(Route::Register),
            ["home"] => Some(Route::Home),
            ["ai-assistant"] => Some(Route::Assistant),
            ["appointments"] => Some(Route::Appointments),
            ["history"] => Some(Route::History),
            ["profile"] => Some(Route::Profile),
            ["appointment", id] if !id.is_empty() => Some(Route::AppointmentDetail {
                appointment_id: (*id).to_string(),
            }),
            ["book", "specialty"] => Some(Route::SelectSpecialty),
            ["book", "doctor", id] if !id.is_empty() => Some(Route::SelectDoctor {
                specialty_id: (*id).to_string(),
            }),
            ["book", "datetime", id] if !id.is_empty() => Some(Route::SelectDateTime {
                doctor_id: (*id).to_string(),
            }),
            ["book", "payment", doctor_id, slot_id]
                if !doctor_id.is_empty() && !slot_id.is_empty() =>
            {
                Some(Route::Payment {
                    doctor_id: (*doctor_id).to_string(),
                    slot_id: (*slot_id).to_string(),
                })
            }
            _ => None,
        }
    }

    /// The canonical path for this screen, as the navigation calls build it.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/home".to_string(),
            Route::Assistant => "/ai-assistant".to_string(),
            Route::Appointments => "/appointments".to_string(),
            Route::History => "/history".to_string(),
            Route::AppointmentDetail { appointment_id } => {
                format!("/appointment/{appointment_id}")
            }
            Route::Profile => "/profile".to_string(),
            Route::SelectSpecialty => "/book/specialty".to_string(),
            Route::SelectDoctor { specialty_id } => format!("/book/doctor/{specialty_id}"),
            Route::SelectDateTime { doctor_id } => format!("/book/datetime/{doctor_id}"),
            Route::Payment { doctor_id, slot_id } => {
                format!("/book/payment/{doctor_id}/{slot_id}")
            }
        }
    }

    /// Everything except the auth screens sits behind the session guard.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

/// Outcome of navigating to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    RedirectToLogin,
    NotFound,
}

/// Apply the session guard to a path.
pub fn resolve(path: &str, authenticated: bool) -> Resolution {
    match Route::parse(path) {
        None => Resolution::NotFound,
        Some(route) if route.requires_auth() && !authenticated => Resolution::RedirectToLogin,
        Some(route) => Resolution::Page(route),
    }
}
