use chrono::{DateTime, Utc};
use uuid::Uuid;
use vitals_log_data::models::health_entry::{CreateHealthEntryRecord, HealthEntryRecord};

use crate::entities::vitals::{HealthEntry, VitalReading};

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Parse a string entry ID into a UUID with a readable error
pub fn parse_string_to_uuid(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("Invalid UUID format: {}", id))
}

/// Convert a stored record into a domain entry
pub fn convert_to_domain_entry(record: HealthEntryRecord) -> HealthEntry {
    HealthEntry {
        id: record.id,
        user_id: record.user_id,
        recorded_at: record.recorded_at,
        vitals: VitalReading {
            heart_rate: record.heart_rate,
            systolic: record.systolic,
            diastolic: record.diastolic,
            spo2: record.spo2,
            temperature: record.temperature,
            symptoms: record.symptoms,
            notes: record.notes,
        },
        has_alert: record.has_alert,
    }
}

/// Build the storage request for a validated reading
pub fn convert_to_data_create_request(
    user_id: &str,
    recorded_at: DateTime<Utc>,
    reading: &VitalReading,
    has_alert: bool,
) -> CreateHealthEntryRecord {
    CreateHealthEntryRecord {
        user_id: user_id.to_string(),
        recorded_at,
        heart_rate: reading.heart_rate,
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        spo2: reading.spo2,
        temperature: reading.temperature,
        symptoms: reading.symptoms.clone(),
        notes: reading.notes.clone(),
        has_alert,
    }
}
