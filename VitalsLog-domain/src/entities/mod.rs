// Domain entities and value objects
pub mod alerts;
pub mod conversions;
pub mod credentials;
pub mod dashboard;
pub mod status;
pub mod validation;
pub mod vitals;

// Re-export common types for easier imports
pub use alerts::AlertResult;
pub use credentials::LoginCredentials;
pub use dashboard::DashboardSummary;
pub use status::{EntryStatuses, VitalKind, VitalMeasurement, VitalStatus};
pub use validation::ValidationOutcome;
pub use vitals::{HealthEntry, HealthEntryCandidate, RecordedEntry, VitalReading};
