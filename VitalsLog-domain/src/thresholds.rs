//! Threshold registry
//!
//! Acceptable ranges, alert breakpoints and display cutoffs for every vital.
//! The validator, the alert evaluator and the status classifier all read
//! from [`THRESHOLDS`]; nothing else in the crate declares a clinical number.

use serde::Serialize;

/// Inclusive acceptable range for a measured value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

impl VitalRange {
    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Single-sided breakpoint; crossing it is strict
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    /// Crossed when the value is strictly greater
    Above(f64),
    /// Crossed when the value is strictly less
    Below(f64),
}

impl Breakpoint {
    /// Whether `value` lies strictly beyond the breakpoint
    pub fn is_crossed(&self, value: f64) -> bool {
        match *self {
            Breakpoint::Above(limit) => value > limit,
            Breakpoint::Below(limit) => value < limit,
        }
    }
}

/// Thresholds for a single-valued vital
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalThreshold {
    /// Values outside this range are rejected at entry time
    pub range: VitalRange,
    /// Clinical alert trigger, also the classifier's danger cutoff
    pub alert: Breakpoint,
    /// Classifier warning cutoff
    pub warning: Breakpoint,
    pub unit: &'static str,
    pub label: &'static str,
}

/// Joint systolic/diastolic cutoff; either side alone crosses it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureCutoff {
    pub systolic: f64,
    pub diastolic: f64,
}

impl PressureCutoff {
    /// Strictly above on systolic OR diastolic
    pub fn is_crossed(&self, systolic: f64, diastolic: f64) -> bool {
        systolic > self.systolic || diastolic > self.diastolic
    }
}

/// Blood pressure thresholds
///
/// There is no alert breakpoint here: the alert evaluator never considers
/// blood pressure. The cutoffs feed the status classifier only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureThreshold {
    pub systolic: VitalRange,
    pub diastolic: VitalRange,
    pub warning: PressureCutoff,
    pub danger: PressureCutoff,
    pub systolic_label: &'static str,
    pub diastolic_label: &'static str,
    pub unit: &'static str,
    pub label: &'static str,
}

/// Every threshold the rule engine uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRegistry {
    pub heart_rate: VitalThreshold,
    pub spo2: VitalThreshold,
    pub temperature: VitalThreshold,
    pub blood_pressure: BloodPressureThreshold,
    /// Longest accepted notes, in characters
    pub notes_max_chars: u64,
}

pub const HEART_RATE: VitalThreshold = VitalThreshold {
    range: VitalRange { min: 40.0, max: 200.0 },
    alert: Breakpoint::Above(120.0),
    warning: Breakpoint::Above(100.0),
    unit: "bpm",
    label: "Heart Rate",
};

pub const SPO2: VitalThreshold = VitalThreshold {
    range: VitalRange { min: 70.0, max: 100.0 },
    alert: Breakpoint::Below(90.0),
    warning: Breakpoint::Below(94.0),
    unit: "%",
    label: "Blood Oxygen",
};

pub const TEMPERATURE: VitalThreshold = VitalThreshold {
    range: VitalRange { min: 34.0, max: 42.0 },
    alert: Breakpoint::Above(39.0),
    warning: Breakpoint::Above(37.5),
    unit: "°C",
    label: "Temperature",
};

pub const BLOOD_PRESSURE: BloodPressureThreshold = BloodPressureThreshold {
    systolic: VitalRange { min: 50.0, max: 250.0 },
    diastolic: VitalRange { min: 30.0, max: 150.0 },
    warning: PressureCutoff { systolic: 140.0, diastolic: 90.0 },
    danger: PressureCutoff { systolic: 180.0, diastolic: 120.0 },
    systolic_label: "Systolic",
    diastolic_label: "Diastolic",
    unit: "mmHg",
    label: "Blood Pressure",
};

pub const NOTES_MAX_CHARS: u64 = 500;

/// Process-wide registry
pub static THRESHOLDS: ThresholdRegistry = ThresholdRegistry {
    heart_rate: HEART_RATE,
    spo2: SPO2,
    temperature: TEMPERATURE,
    blood_pressure: BLOOD_PRESSURE,
    notes_max_chars: NOTES_MAX_CHARS,
};
