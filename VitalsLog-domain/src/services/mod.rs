pub mod alerts;
pub mod formatting;
pub mod journal;
pub mod status;
pub mod validation;

// Domain services
// The rule functions are pure; the journal is the only stateful service.

pub use alerts::check_for_alerts;
pub use journal::{
    create_default_journal_service, HealthJournalService, HealthJournalServiceTrait,
    JournalServiceError,
};
pub use status::{
    blood_pressure_status, classify_reading, classify_vital, heart_rate_status, spo2_status,
    temperature_status,
};
pub use validation::{validate_health_entry, validate_login_credentials, validate_reading};
