//! Shared application state.
//!
//! `AppState` is the single in-memory store behind every screen: the fixed
//! provider catalog plus the authenticated user and the appointment
//! collection, each behind an `RwLock` so concurrent readers never block
//! each other.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDate};

use crate::appointments::AppointmentBook;
use crate::catalog::Catalog;
use crate::error::AppError;
use crate::models::{Appointment, User};

// ═══════════════════════════════════════════════════════════
// AppState: shared by every operation
// ═══════════════════════════════════════════════════════════

/// Application state, wrapped in `Arc` at startup.
///
/// The catalog is immutable after construction; only the user session and
/// the appointment book take write locks.
pub struct AppState {
    /// Fixed directory of specialties and doctors.
    catalog: Catalog,
    /// Authenticated user. `None` when signed out.
    user: RwLock<Option<User>>,
    /// Booked appointments, pre-seeded with the demo records.
    book: RwLock<AppointmentBook>,
}

impl AppState {
    /// State anchored to the local calendar date.
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// State anchored to an explicit date. Slot calendars and seed
    /// appointments are generated relative to `today`.
    pub fn with_today(today: NaiveDate) -> Self {
        let catalog = Catalog::new(today);
        let book = AppointmentBook::seeded(&catalog, today);
        Self {
            catalog,
            user: RwLock::new(None),
            book: RwLock::new(book),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ── Session access ──────────────────────────────────────

    pub fn read_user(&self) -> Result<RwLockReadGuard<'_, Option<User>>, AppError> {
        self.user.read().map_err(|_| AppError::LockPoisoned)
    }

    pub fn write_user(&self) -> Result<RwLockWriteGuard<'_, Option<User>>, AppError> {
        self.user.write().map_err(|_| AppError::LockPoisoned)
    }

    /// Owned copy of the authenticated user.
    pub fn current_user(&self) -> Result<User, AppError> {
        let guard = self.read_user()?;
        guard.clone().ok_or(AppError::NotAuthenticated)
    }

    pub fn set_user(&self, user: User) -> Result<(), AppError> {
        let mut guard = self.write_user()?;
        *guard = Some(user);
        Ok(())
    }

    pub fn clear_user(&self) -> Result<(), AppError> {
        let mut guard = self.write_user()?;
        *guard = None;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    // ── Appointment access ──────────────────────────────────

    pub fn read_book(&self) -> Result<RwLockReadGuard<'_, AppointmentBook>, AppError> {
        self.book.read().map_err(|_| AppError::LockPoisoned)
    }

    pub fn write_book(&self) -> Result<RwLockWriteGuard<'_, AppointmentBook>, AppError> {
        self.book.write().map_err(|_| AppError::LockPoisoned)
    }

    /// Resolve the doctor and slot from the catalog, then record the
    /// appointment. The slot id must belong to that doctor's calendar.
    pub fn book_appointment(
        &self,
        doctor_id: &str,
        slot_id: &str,
        symptoms: Option<String>,
    ) -> Result<String, AppError> {
        let doctor = self
            .catalog
            .doctor_by_id(doctor_id)
            .ok_or_else(|| AppError::not_found("Doctor", doctor_id))?;
        let slot = self
            .catalog
            .slot(doctor_id, slot_id)
            .ok_or_else(|| AppError::not_found("TimeSlot", slot_id))?;

        let mut book = self.write_book()?;
        Ok(book.book(doctor, slot, symptoms))
    }

    pub fn cancel_appointment(&self, id: &str) -> Result<(), AppError> {
        let mut book = self.write_book()?;
        book.cancel(id);
        Ok(())
    }

    pub fn upcoming_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(self.read_book()?.upcoming())
    }

    pub fn appointment_history(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(self.read_book()?.history())
    }

    pub fn find_appointment(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        Ok(self.read_book()?.find(id).cloned())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn test_user() -> User {
        User {
            id: "1".to_string(),
            email: "juan@example.com".to_string(),
            first_name: "Juan".to_string(),
            last_name: "Pérez García".to_string(),
            dni: "12345678A".to_string(),
            birth_date: "1990-05-15".to_string(),
            phone: "+34 612 345 678".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn new_state_has_no_user() {
        let state = AppState::with_today(fixed_today());
        assert!(!state.is_authenticated());
        assert!(matches!(
            state.current_user(),
            Err(AppError::NotAuthenticated)
        ));
    }

    #[test]
    fn set_and_clear_user() {
        let state = AppState::with_today(fixed_today());

        state.set_user(test_user()).unwrap();
        assert!(state.is_authenticated());
        assert_eq!(state.current_user().unwrap().email, "juan@example.com");

        state.clear_user().unwrap();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn seeded_appointments_visible_through_state() {
        let state = AppState::with_today(fixed_today());

        let upcoming = state.upcoming_appointments().unwrap();
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, "1");
        assert_eq!(upcoming[0].date, fixed_today() + chrono::Duration::days(2));

        assert_eq!(state.appointment_history().unwrap().len(), 2);
    }

    #[test]
    fn book_appointment_resolves_catalog_entries() {
        let state = AppState::with_today(fixed_today());
        let slot_id = state.catalog().doctor_by_id("5").unwrap().available_slots[3]
            .id
            .clone();

        let id = state
            .book_appointment("5", &slot_id, Some("Consulta de control".to_string()))
            .unwrap();

        let appointment = state.find_appointment(&id).unwrap().unwrap();
        assert_eq!(appointment.doctor.id, "5");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn book_appointment_rejects_unknown_doctor() {
        let state = AppState::with_today(fixed_today());
        let err = state.book_appointment("99", "2026-03-02-09:00", None);
        match err {
            Err(AppError::NotFound { entity, id }) => {
                assert_eq!(entity, "Doctor");
                assert_eq!(id, "99");
            }
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn book_appointment_rejects_unknown_slot() {
        let state = AppState::with_today(fixed_today());
        let err = state.book_appointment("1", "2099-01-01-09:00", None);
        match err {
            Err(AppError::NotFound { entity, id }) => {
                assert_eq!(entity, "TimeSlot");
                assert_eq!(id, "2099-01-01-09:00");
            }
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn cancel_through_state() {
        let state = AppState::with_today(fixed_today());
        state.cancel_appointment("1").unwrap();
        let appointment = state.find_appointment("1").unwrap().unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn concurrent_reads_do_not_block() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(AppState::with_today(fixed_today()));
        let mut handles = vec![];

        for _ in 0..10 {
            let state = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                assert!(!state.is_authenticated());
                assert_eq!(state.upcoming_appointments().unwrap().len(), 2);
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
