// VitalsLog Domain
// This crate contains the rule engine for the VitalsLog application:
// threshold registry, entry validation, alert evaluation and status tiers.

// Clinical thresholds shared by every rule
pub mod thresholds;

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Error types
pub mod error;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use entities::{
    AlertResult, EntryStatuses, HealthEntry, HealthEntryCandidate, LoginCredentials,
    ValidationOutcome, VitalKind, VitalMeasurement, VitalReading, VitalStatus,
};
pub use error::ValidationFailure;
pub use services::{
    check_for_alerts, classify_reading, classify_vital, validate_health_entry,
    validate_login_credentials,
};
pub use thresholds::THRESHOLDS;
