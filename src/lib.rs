pub mod appointments; // Booking, cancellation, and screen projections
pub mod assistant; // Symptom triage conversation
pub mod catalog; // Fixed specialties, doctors, and slot calendars
pub mod config;
pub mod error;
pub mod home; // Home screen data
pub mod matcher; // Symptom keyword matching
pub mod models;
pub mod payment; // Simulated checkout
pub mod routes; // Navigation map and session guard
pub mod session; // Simulated auth and profile management
pub mod state; // Shared in-memory state

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Call once at startup; respects
/// RUST_LOG when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("SaludYa core starting v{}", config::APP_VERSION);
}
