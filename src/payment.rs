//! Simulated checkout: card form shaping and validation, plus the payment
//! step that records the appointment once the fixed processing delay
//! elapses. No charge happens and the card data is never stored.

use std::time::Duration;

use crate::config;
use crate::error::AppError;
use crate::state::AppState;

/// Shown in place of the checkout when the doctor or slot id carried by
/// the route does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Información no encontrada";

/// Card form fields, kept as the user typed them (post-formatting).
#[derive(Debug, Clone, Default)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub card_name: String,
}

/// What the payment form checks on submit.
pub fn validate_card(card: &CardDetails) -> Result<(), AppError> {
    if card.card_number.is_empty()
        || card.expiry.is_empty()
        || card.cvv.is_empty()
        || card.card_name.is_empty()
    {
        return Err(AppError::validation(
            "Por favor completa todos los campos de pago",
        ));
    }

    let digits = card
        .card_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();
    if digits < config::MIN_CARD_DIGITS {
        return Err(AppError::validation("Número de tarjeta inválido"));
    }

    Ok(())
}

/// Confirm the booking: resolve the doctor and slot, validate the card,
/// wait out the simulated processing time, then record the appointment.
/// Returns the new appointment id. An empty symptom description is stored
/// as no description at all.
pub async fn process(
    state: &AppState,
    doctor_id: &str,
    slot_id: &str,
    card: &CardDetails,
    symptoms: &str,
) -> Result<String, AppError> {
    let doctor = state
        .catalog()
        .doctor_by_id(doctor_id)
        .ok_or_else(|| AppError::not_found("Doctor", doctor_id))?;
    state
        .catalog()
        .slot(doctor_id, slot_id)
        .ok_or_else(|| AppError::not_found("TimeSlot", slot_id))?;

    validate_card(card)?;

    tracing::info!(doctor = %doctor.name, amount = doctor.price, "Processing payment");
    tokio::time::sleep(Duration::from_millis(config::PAYMENT_DELAY_MS)).await;

    let symptoms = if symptoms.is_empty() {
        None
    } else {
        Some(symptoms.to_string())
    };
    state.book_appointment(doctor_id, slot_id, symptoms)
}

// ─── Input shaping ────────────────────────────────────────────────────────────

/// Digits grouped in fours: "1234567890123456" becomes
/// "1234 5678 9012 3456". Capped at the display length.
pub fn format_card_number(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut formatted = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(ch);
    }
    formatted.chars().take(config::CARD_NUMBER_MAX_LEN).collect()
}

/// "MMAA" becomes "MM/AA". The slash appears as soon as two digits are
/// typed, so "12" renders as "12/".
pub fn format_expiry(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let month = &digits[..2];
        let year = &digits[2..digits.len().min(4)];
        format!("{month}/{year}")
    } else {
        digits
    }
}

/// Digits only, at most three.
pub fn format_cvv(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::NaiveDate;

    fn test_state() -> AppState {
        AppState::with_today(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
    }

    fn valid_card() -> CardDetails {
        CardDetails {
            card_number: "1234 5678 9012 3456".to_string(),
            expiry: "12/26".to_string(),
            cvv: "123".to_string(),
            card_name: "Juan Pérez".to_string(),
        }
    }

    #[test]
    fn card_number_groups_digits_in_fours() {
        assert_eq!(format_card_number("1234567890123456"), "1234 5678 9012 3456");
        assert_eq!(format_card_number("12a34-56b78"), "1234 5678");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn card_number_caps_at_display_length() {
        assert_eq!(
            format_card_number("12345678901234567890"),
            "1234 5678 9012 3456"
        );
    }

    #[test]
    fn expiry_gets_a_slash_from_two_digits_on() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1226"), "12/26");
        assert_eq!(format_expiry("12/26"), "12/26");
        assert_eq!(format_expiry("122634"), "12/26");
    }

    #[test]
    fn cvv_keeps_at_most_three_digits() {
        assert_eq!(format_cvv("12a3456"), "123");
        assert_eq!(format_cvv("9"), "9");
    }

    #[test]
    fn validation_requires_every_field() {
        let mut card = valid_card();
        card.card_name.clear();

        let err = validate_card(&card).unwrap_err();
        assert_eq!(err.to_string(), "Por favor completa todos los campos de pago");
    }

    #[test]
    fn validation_rejects_short_card_numbers() {
        let mut card = valid_card();
        card.card_number = "1234 5678".to_string();

        let err = validate_card(&card).unwrap_err();
        assert_eq!(err.to_string(), "Número de tarjeta inválido");

        assert!(validate_card(&valid_card()).is_ok());
    }

    #[tokio::test]
    async fn process_records_the_appointment() {
        let state = test_state();
        let slot_id = state.catalog().doctor_by_id("1").unwrap().available_slots[0]
            .id
            .clone();

        let id = process(&state, "1", &slot_id, &valid_card(), "Dolor de espalda")
            .await
            .unwrap();

        let appointment = state.find_appointment(&id).unwrap().unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.symptoms.as_deref(), Some("Dolor de espalda"));
    }

    #[tokio::test]
    async fn empty_symptoms_are_stored_as_none() {
        let state = test_state();
        let slot_id = state.catalog().doctor_by_id("2").unwrap().available_slots[5]
            .id
            .clone();

        let id = process(&state, "2", &slot_id, &valid_card(), "").await.unwrap();

        let appointment = state.find_appointment(&id).unwrap().unwrap();
        assert!(appointment.symptoms.is_none());
    }

    #[tokio::test]
    async fn process_rejects_unknown_doctor() {
        let state = test_state();
        let err = process(&state, "99", "2026-03-02-09:00", &valid_card(), "").await;
        assert!(matches!(err, Err(AppError::NotFound { entity, .. }) if entity == "Doctor"));
        assert_eq!(NOT_FOUND_MESSAGE, "Información no encontrada");
    }

    #[tokio::test]
    async fn process_rejects_unknown_slot() {
        let state = test_state();
        let err = process(&state, "1", "2099-01-01-09:00", &valid_card(), "").await;
        assert!(matches!(err, Err(AppError::NotFound { entity, .. }) if entity == "TimeSlot"));
    }

    #[tokio::test]
    async fn failed_validation_books_nothing() {
        let state = test_state();
        let slot_id = state.catalog().doctor_by_id("1").unwrap().available_slots[0]
            .id
            .clone();
        let before = state.read_book().unwrap().len();

        let result = process(&state, "1", &slot_id, &CardDetails::default(), "").await;
        assert!(result.is_err());
        assert_eq!(state.read_book().unwrap().len(), before);
    }
}
