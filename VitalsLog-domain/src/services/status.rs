use crate::entities::status::{EntryStatuses, VitalMeasurement, VitalStatus};
use crate::entities::vitals::VitalReading;
use crate::thresholds::{VitalThreshold, BLOOD_PRESSURE, HEART_RATE, SPO2, TEMPERATURE};

fn tier(threshold: &VitalThreshold, value: f64) -> VitalStatus {
    if threshold.alert.is_crossed(value) {
        VitalStatus::Danger
    } else if threshold.warning.is_crossed(value) {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Danger above 120 bpm, warning above 100
pub fn heart_rate_status(value: f64) -> VitalStatus {
    tier(&HEART_RATE, value)
}

/// Danger below 90 %, warning below 94
pub fn spo2_status(value: f64) -> VitalStatus {
    tier(&SPO2, value)
}

/// Danger above 39 °C, warning above 37.5
pub fn temperature_status(value: f64) -> VitalStatus {
    tier(&TEMPERATURE, value)
}

/// Either side alone can escalate; the danger check runs first.
pub fn blood_pressure_status(systolic: f64, diastolic: f64) -> VitalStatus {
    if BLOOD_PRESSURE.danger.is_crossed(systolic, diastolic) {
        VitalStatus::Danger
    } else if BLOOD_PRESSURE.warning.is_crossed(systolic, diastolic) {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

pub fn classify_vital(measurement: &VitalMeasurement) -> VitalStatus {
    match *measurement {
        VitalMeasurement::HeartRate { value } => heart_rate_status(value),
        VitalMeasurement::Spo2 { value } => spo2_status(value),
        VitalMeasurement::Temperature { value } => temperature_status(value),
        VitalMeasurement::BloodPressure { systolic, diastolic } => {
            blood_pressure_status(systolic, diastolic)
        }
    }
}

/// Classify every card of an entry
pub fn classify_reading(reading: &VitalReading) -> EntryStatuses {
    EntryStatuses {
        heart_rate: heart_rate_status(reading.heart_rate),
        blood_pressure: blood_pressure_status(reading.systolic, reading.diastolic),
        spo2: spo2_status(reading.spo2),
        temperature: temperature_status(reading.temperature),
    }
}
