use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::thresholds::THRESHOLDS;

/// Display severity of a reading
///
/// Ordered by severity so the worst of several tiers is their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Warning,
    Danger,
}

impl VitalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Warning => "warning",
            VitalStatus::Danger => "danger",
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which vital a measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Spo2,
    Temperature,
}

impl VitalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heart_rate",
            VitalKind::BloodPressure => "blood_pressure",
            VitalKind::Spo2 => "spo2",
            VitalKind::Temperature => "temperature",
        }
    }

    /// Display label from the threshold registry
    pub fn label(self) -> &'static str {
        match self {
            VitalKind::HeartRate => THRESHOLDS.heart_rate.label,
            VitalKind::BloodPressure => THRESHOLDS.blood_pressure.label,
            VitalKind::Spo2 => THRESHOLDS.spo2.label,
            VitalKind::Temperature => THRESHOLDS.temperature.label,
        }
    }

    /// Display unit from the threshold registry
    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::HeartRate => THRESHOLDS.heart_rate.unit,
            VitalKind::BloodPressure => THRESHOLDS.blood_pressure.unit,
            VitalKind::Spo2 => THRESHOLDS.spo2.unit,
            VitalKind::Temperature => THRESHOLDS.temperature.unit,
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "heart_rate" | "heartrate" | "hr" => Ok(VitalKind::HeartRate),
            "blood_pressure" | "bloodpressure" | "bp" => Ok(VitalKind::BloodPressure),
            "spo2" | "oxygen" => Ok(VitalKind::Spo2),
            "temperature" | "temp" => Ok(VitalKind::Temperature),
            other => Err(format!("Unknown vital kind: {}", other)),
        }
    }
}

/// A single measurement to classify
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VitalMeasurement {
    HeartRate { value: f64 },
    Spo2 { value: f64 },
    Temperature { value: f64 },
    BloodPressure { systolic: f64, diastolic: f64 },
}

impl VitalMeasurement {
    /// Build a measurement from a kind and its value(s)
    ///
    /// Blood pressure takes `value` as systolic and `second` as diastolic and
    /// returns `None` without the second value; other kinds ignore `second`.
    pub fn new(kind: VitalKind, value: f64, second: Option<f64>) -> Option<Self> {
        match kind {
            VitalKind::HeartRate => Some(VitalMeasurement::HeartRate { value }),
            VitalKind::Spo2 => Some(VitalMeasurement::Spo2 { value }),
            VitalKind::Temperature => Some(VitalMeasurement::Temperature { value }),
            VitalKind::BloodPressure => second.map(|diastolic| VitalMeasurement::BloodPressure {
                systolic: value,
                diastolic,
            }),
        }
    }

    pub fn kind(&self) -> VitalKind {
        match self {
            VitalMeasurement::HeartRate { .. } => VitalKind::HeartRate,
            VitalMeasurement::Spo2 { .. } => VitalKind::Spo2,
            VitalMeasurement::Temperature { .. } => VitalKind::Temperature,
            VitalMeasurement::BloodPressure { .. } => VitalKind::BloodPressure,
        }
    }
}

/// Tier for every card of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStatuses {
    pub heart_rate: VitalStatus,
    pub blood_pressure: VitalStatus,
    pub spo2: VitalStatus,
    pub temperature: VitalStatus,
}

impl EntryStatuses {
    /// Most severe tier across the entry
    pub fn overall(&self) -> VitalStatus {
        [self.heart_rate, self.blood_pressure, self.spo2, self.temperature]
            .into_iter()
            .max()
            .unwrap_or(VitalStatus::Normal)
    }
}
