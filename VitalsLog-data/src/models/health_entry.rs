use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage model for a logged health entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEntryRecord {
    /// Unique identifier for the entry
    pub id: String,

    /// Owner of the entry
    pub user_id: String,

    /// When the vitals were taken
    pub recorded_at: DateTime<Utc>,

    /// Heart rate in beats per minute
    pub heart_rate: f64,

    /// Systolic blood pressure in mmHg
    pub systolic: f64,

    /// Diastolic blood pressure in mmHg
    pub diastolic: f64,

    /// Blood oxygen saturation in percent
    pub spo2: f64,

    /// Body temperature in degrees Celsius
    pub temperature: f64,

    /// Symptom labels in display order
    pub symptoms: Vec<String>,

    /// Optional free-text notes
    pub notes: Option<String>,

    /// Whether the entry crossed an alert breakpoint when it was logged
    pub has_alert: bool,
}

/// Input data for storing a new health entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHealthEntryRecord {
    pub user_id: String,
    pub recorded_at: DateTime<Utc>,
    pub heart_rate: f64,
    pub systolic: f64,
    pub diastolic: f64,
    pub spo2: f64,
    pub temperature: f64,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
    pub has_alert: bool,
}

impl CreateHealthEntryRecord {
    /// Attach an identifier, producing the stored form
    pub fn into_record(self, id: String) -> HealthEntryRecord {
        HealthEntryRecord {
            id,
            user_id: self.user_id,
            recorded_at: self.recorded_at,
            heart_rate: self.heart_rate,
            systolic: self.systolic,
            diastolic: self.diastolic,
            spo2: self.spo2,
            temperature: self.temperature,
            symptoms: self.symptoms,
            notes: self.notes,
            has_alert: self.has_alert,
        }
    }
}

/// Query parameters for listing a user's entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryQuery {
    /// Only entries recorded at or after this instant
    pub since: Option<DateTime<Utc>>,

    /// Only entries recorded at or before this instant
    pub until: Option<DateTime<Utc>>,

    /// Maximum number of entries to return
    pub limit: Option<usize>,

    /// Number of entries to skip
    pub offset: Option<usize>,

    /// Newest first when true or unset
    pub sort_desc: Option<bool>,
}
