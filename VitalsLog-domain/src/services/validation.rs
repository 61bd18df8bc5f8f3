use std::borrow::Cow;

use tracing::debug;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::credentials::LoginCredentials;
use crate::entities::validation::ValidationOutcome;
use crate::entities::vitals::{HealthEntryCandidate, VitalReading};
use crate::error::ValidationFailure;
use crate::thresholds::{VitalRange, BLOOD_PRESSURE, HEART_RATE, SPO2, TEMPERATURE, THRESHOLDS};

/// One required numeric field of a health entry
#[derive(Debug, Clone, Copy)]
pub struct RangeRule {
    /// Key used in error maps, matching the serialized field name
    pub field: &'static str,
    /// Human name used in the "is required" message
    pub label: &'static str,
    pub range: VitalRange,
    pub value: fn(&HealthEntryCandidate) -> Option<f64>,
}

impl RangeRule {
    /// Check the candidate's value for this rule, returning it if acceptable
    ///
    /// NaN and infinite values count as missing.
    pub fn check(&self, candidate: &HealthEntryCandidate) -> Result<f64, ValidationError> {
        let value = (self.value)(candidate)
            .filter(|value| value.is_finite())
            .ok_or_else(|| rule_error("required", format!("{} is required", self.label)))?;

        if value < self.range.min {
            let mut err = rule_error("range", format!("Must be at least {}", self.range.min));
            err.add_param(Cow::from("min"), &self.range.min);
            err.add_param(Cow::from("value"), &value);
            return Err(err);
        }

        if value > self.range.max {
            let mut err = rule_error("range", format!("Must be at most {}", self.range.max));
            err.add_param(Cow::from("max"), &self.range.max);
            err.add_param(Cow::from("value"), &value);
            return Err(err);
        }

        Ok(value)
    }
}

fn rule_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

fn field_heart_rate(c: &HealthEntryCandidate) -> Option<f64> {
    c.heart_rate
}

fn field_systolic(c: &HealthEntryCandidate) -> Option<f64> {
    c.systolic
}

fn field_diastolic(c: &HealthEntryCandidate) -> Option<f64> {
    c.diastolic
}

fn field_spo2(c: &HealthEntryCandidate) -> Option<f64> {
    c.spo2
}

fn field_temperature(c: &HealthEntryCandidate) -> Option<f64> {
    c.temperature
}

/// Range rules for a health entry, in field order
pub const HEALTH_ENTRY_RULES: [RangeRule; 5] = [
    RangeRule {
        field: "heartRate",
        label: "Heart rate",
        range: HEART_RATE.range,
        value: field_heart_rate,
    },
    RangeRule {
        field: "systolic",
        label: "Systolic",
        range: BLOOD_PRESSURE.systolic,
        value: field_systolic,
    },
    RangeRule {
        field: "diastolic",
        label: "Diastolic",
        range: BLOOD_PRESSURE.diastolic,
        value: field_diastolic,
    },
    RangeRule {
        field: "spo2",
        label: "SpO2",
        range: SPO2.range,
        value: field_spo2,
    },
    RangeRule {
        field: "temperature",
        label: "Temperature",
        range: TEMPERATURE.range,
        value: field_temperature,
    },
];

/// Validate a candidate and build the reading it describes
pub fn validate_reading(
    candidate: &HealthEntryCandidate,
) -> Result<VitalReading, ValidationFailure> {
    let mut errors = ValidationErrors::new();

    let values = HEALTH_ENTRY_RULES.map(|rule| match rule.check(candidate) {
        Ok(value) => Some(value),
        Err(err) => {
            errors.add(rule.field, err);
            None
        }
    });

    if let Some(notes) = &candidate.notes {
        let max = Some(THRESHOLDS.notes_max_chars);
        if !validator::validate_length(notes.as_str(), None, max, None) {
            let mut err = rule_error(
                "length",
                format!("Notes must be {} characters or fewer", THRESHOLDS.notes_max_chars),
            );
            err.add_param(Cow::from("max"), &THRESHOLDS.notes_max_chars);
            errors.add("notes", err);
        }
    }

    let failure = ValidationFailure::from(errors);
    match values {
        [Some(heart_rate), Some(systolic), Some(diastolic), Some(spo2), Some(temperature)]
            if failure.errors().is_empty() =>
        {
            Ok(VitalReading {
                heart_rate,
                systolic,
                diastolic,
                spo2,
                temperature,
                symptoms: candidate.symptoms.clone(),
                notes: candidate.notes.clone(),
            })
        }
        _ => {
            let fields: Vec<&String> = failure.errors().keys().collect();
            debug!(?fields, "Health entry rejected");
            Err(failure)
        }
    }
}

/// Validate a candidate health entry, reporting every failing field
pub fn validate_health_entry(candidate: &HealthEntryCandidate) -> ValidationOutcome {
    match validate_reading(candidate) {
        Ok(_) => ValidationOutcome::valid(),
        Err(failure) => failure.into(),
    }
}

/// Validate login form input: email syntax and minimum password length
pub fn validate_login_credentials(credentials: &LoginCredentials) -> ValidationOutcome {
    match credentials.validate() {
        Ok(()) => ValidationOutcome::valid(),
        Err(errors) => {
            let failure = ValidationFailure::from(errors);
            let fields: Vec<&String> = failure.errors().keys().collect();
            debug!(?fields, "Login credentials rejected");
            failure.into()
        }
    }
}
