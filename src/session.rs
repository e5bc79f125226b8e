//! Simulated authentication and profile management.
//!
//! There is no backend: any non-empty credential pair signs in the demo
//! user after a fixed delay, and registration accepts whatever the form
//! collected. Form validation mirrors what the login and registration
//! screens enforce before submitting.

use std::time::Duration;

use crate::config;
use crate::error::AppError;
use crate::models::{ProfileUpdate, Registration, User};
use crate::state::AppState;

/// Sign in. Succeeds whenever both fields are non-empty; the session then
/// holds the demo user with the submitted email.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<bool, AppError> {
    tokio::time::sleep(Duration::from_millis(config::AUTH_DELAY_MS)).await;

    if email.is_empty() || password.is_empty() {
        tracing::debug!("Login rejected: empty credentials");
        return Ok(false);
    }

    state.set_user(demo_user(email))?;
    tracing::info!(email = %email, "User logged in");
    Ok(true)
}

/// Create an account. Only the email and password gate success; optional
/// fields left blank are stored as empty strings.
pub async fn register(
    state: &AppState,
    data: Registration,
    password: &str,
) -> Result<bool, AppError> {
    tokio::time::sleep(Duration::from_millis(config::AUTH_DELAY_MS)).await;

    if data.email.is_empty() || password.is_empty() {
        tracing::debug!("Registration rejected: missing email or password");
        return Ok(false);
    }

    let user = User {
        id: "1".to_string(),
        email: data.email,
        first_name: data.first_name,
        last_name: data.last_name,
        dni: data.dni.unwrap_or_default(),
        birth_date: data.birth_date.unwrap_or_default(),
        phone: data.phone.unwrap_or_default(),
        avatar_url: None,
    };
    tracing::info!(email = %user.email, "User registered");
    state.set_user(user)?;
    Ok(true)
}

/// Sign out immediately.
pub fn logout(state: &AppState) -> Result<(), AppError> {
    state.clear_user()?;
    tracing::info!("User logged out");
    Ok(())
}

/// Apply profile edits after the simulated save delay. Ignored when no
/// user is signed in.
pub async fn save_profile(state: &AppState, update: ProfileUpdate) -> Result<(), AppError> {
    tokio::time::sleep(Duration::from_millis(config::AUTH_DELAY_MS)).await;

    let mut guard = state.write_user()?;
    match guard.as_mut() {
        Some(user) => {
            update.apply_to(user);
            tracing::info!(email = %user.email, "Profile updated");
        }
        None => tracing::debug!("Profile update ignored: no active session"),
    }
    Ok(())
}

/// What the login screen checks before submitting.
pub fn validate_login_form(email: &str, password: &str) -> Result<(), AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("Por favor completa todos los campos"));
    }
    Ok(())
}

/// What the registration screen checks before submitting, in screen order.
pub fn validate_registration_form(
    data: &Registration,
    password: &str,
    confirm_password: &str,
) -> Result<(), AppError> {
    if data.email.is_empty()
        || password.is_empty()
        || data.first_name.is_empty()
        || data.last_name.is_empty()
    {
        return Err(AppError::validation(
            "Por favor completa los campos obligatorios",
        ));
    }
    if password != confirm_password {
        return Err(AppError::validation("Las contraseñas no coinciden"));
    }
    if password.chars().count() < config::MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            "La contraseña debe tener al menos 6 caracteres",
        ));
    }
    Ok(())
}

/// The fixed demo identity every successful login resolves to.
fn demo_user(email: &str) -> User {
    User {
        id: "1".to_string(),
        email: email.to_string(),
        first_name: "Juan".to_string(),
        last_name: "Pérez García".to_string(),
        dni: "12345678A".to_string(),
        birth_date: "1990-05-15".to_string(),
        phone: "+34 612 345 678".to_string(),
        avatar_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_state() -> AppState {
        AppState::with_today(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
    }

    #[tokio::test]
    async fn login_with_any_credentials_succeeds() {
        let state = test_state();

        let ok = login(&state, "a@b.com", "x").await.unwrap();
        assert!(ok);

        let user = state.current_user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.first_name, "Juan");
        assert_eq!(user.last_name, "Pérez García");
        assert_eq!(user.dni, "12345678A");
    }

    #[tokio::test]
    async fn login_with_empty_field_fails() {
        let state = test_state();

        assert!(!login(&state, "", "x").await.unwrap());
        assert!(!login(&state, "a@b.com", "").await.unwrap());
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn register_requires_email_and_password() {
        let state = test_state();

        let ok = register(&state, Registration::default(), "secret")
            .await
            .unwrap();
        assert!(!ok);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn register_defaults_optional_fields_to_empty() {
        let state = test_state();
        let data = Registration {
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            ..Default::default()
        };

        assert!(register(&state, data, "123456").await.unwrap());

        let user = state.current_user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.dni, "");
        assert_eq!(user.birth_date, "");
        assert_eq!(user.phone, "");
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let state = test_state();
        login(&state, "a@b.com", "x").await.unwrap();

        logout(&state).unwrap();
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn save_profile_merges_edited_fields() {
        let state = test_state();
        login(&state, "a@b.com", "x").await.unwrap();

        let update = ProfileUpdate {
            first_name: Some("Ana".to_string()),
            phone: Some("+34 600 000 000".to_string()),
            ..Default::default()
        };
        save_profile(&state, update).await.unwrap();

        let user = state.current_user().unwrap();
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.phone, "+34 600 000 000");
        // Untouched fields keep their values.
        assert_eq!(user.last_name, "Pérez García");
        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn save_profile_without_session_is_ignored() {
        let state = test_state();
        let update = ProfileUpdate {
            first_name: Some("Ana".to_string()),
            ..Default::default()
        };

        save_profile(&state, update).await.unwrap();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_form_requires_both_fields() {
        let err = validate_login_form("", "x").unwrap_err();
        assert_eq!(err.to_string(), "Por favor completa todos los campos");

        let err = validate_login_form("a@b.com", "").unwrap_err();
        assert_eq!(err.to_string(), "Por favor completa todos los campos");

        assert!(validate_login_form("a@b.com", "x").is_ok());
    }

    #[test]
    fn registration_form_checks_in_screen_order() {
        let mut data = Registration {
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            ..Default::default()
        };

        // Missing required field wins over the password checks.
        data.first_name.clear();
        let err = validate_registration_form(&data, "abc", "xyz").unwrap_err();
        assert_eq!(err.to_string(), "Por favor completa los campos obligatorios");
        data.first_name = "Ana".to_string();

        let err = validate_registration_form(&data, "123456", "654321").unwrap_err();
        assert_eq!(err.to_string(), "Las contraseñas no coinciden");

        let err = validate_registration_form(&data, "12345", "12345").unwrap_err();
        assert_eq!(
            err.to_string(),
            "La contraseña debe tener al menos 6 caracteres"
        );

        assert!(validate_registration_form(&data, "123456", "123456").is_ok());
    }
}
