//! Fixed application constants: simulated latencies, scheduling window,
//! validation thresholds, and home screen limits.

/// Application-level constants
pub const APP_NAME: &str = "SaludYa";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulated latency for login, registration, and profile saves (ms)
pub const AUTH_DELAY_MS: u64 = 1000;
/// Simulated latency before the assistant replies (ms)
pub const ASSISTANT_REPLY_DELAY_MS: u64 = 1500;
/// Simulated latency for payment processing (ms)
pub const PAYMENT_DELAY_MS: u64 = 2000;

/// Booking window: slots are generated for this many days starting tomorrow
pub const SLOT_WINDOW_DAYS: i64 = 14;

/// Daily consultation times. Morning and afternoon blocks with a midday gap.
pub const SLOT_TIMES: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30",
];

/// Probability that a generated slot is marked unavailable
pub const SLOT_UNAVAILABLE_BIAS: f64 = 0.3;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum digit count for a card number to pass validation
pub const MIN_CARD_DIGITS: usize = 16;
/// Display length cap for a formatted card number ("1234 5678 9012 3456")
pub const CARD_NUMBER_MAX_LEN: usize = 19;

/// How many upcoming appointments the home screen previews
pub const HOME_APPOINTMENT_LIMIT: usize = 2;
/// How many specialties the home screen features
pub const HOME_SPECIALTY_LIMIT: usize = 4;

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME").replace('-', "_"))
}
