use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::alerts::AlertResult;

/// A health entry as submitted, before validation
///
/// Numeric fields that are absent, non-numeric or non-finite are held as
/// `None` and reported as required by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryCandidate {
    #[serde(default, deserialize_with = "lenient_number")]
    pub heart_rate: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub systolic: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub diastolic: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub spo2: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl HealthEntryCandidate {
    /// Decode a candidate from JSON text
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Candidate with every vital filled in
    pub fn new(
        heart_rate: f64,
        systolic: f64,
        diastolic: f64,
        spo2: f64,
        temperature: f64,
    ) -> Self {
        Self {
            heart_rate: Some(heart_rate),
            systolic: Some(systolic),
            diastolic: Some(diastolic),
            spo2: Some(spo2),
            temperature: Some(temperature),
            symptoms: Vec::new(),
            notes: None,
        }
    }

    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validate and convert into a [`VitalReading`]
    pub fn into_reading(self) -> Result<VitalReading, crate::error::ValidationFailure> {
        crate::services::validation::validate_reading(&self)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .filter(|n| n.is_finite()))
}

/// A validated set of vitals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    /// Beats per minute
    pub heart_rate: f64,

    /// mmHg
    pub systolic: f64,

    /// mmHg
    pub diastolic: f64,

    /// Percent oxygen saturation
    pub spo2: f64,

    /// Degrees Celsius
    pub temperature: f64,

    /// Symptom labels in display order
    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A logged entry as held by the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    pub id: String,
    pub user_id: String,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub vitals: VitalReading,
    /// Alert flag stamped when the entry was logged
    pub has_alert: bool,
}

/// Result of logging an entry: the stored entry and the alerts it raised
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEntry {
    pub entry: HealthEntry,
    pub alert: AlertResult,
}
