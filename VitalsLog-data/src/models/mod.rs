// Storage models
pub mod health_entry;
