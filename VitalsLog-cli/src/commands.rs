use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use vitals_log_domain::{
    check_for_alerts, classify_reading, classify_vital, validate_health_entry,
    validate_login_credentials, AlertResult, EntryStatuses, HealthEntryCandidate, LoginCredentials,
    ValidationOutcome, VitalKind, VitalMeasurement, VitalStatus, THRESHOLDS,
};

use crate::cli::Command;
use crate::error::CliError;
use crate::input::load_candidate;

/// What a command prints and whether it should exit successfully
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub body: Value,
    pub success: bool,
}

impl CommandOutput {
    fn new<T: Serialize>(body: &T, success: bool) -> Result<Self, CliError> {
        Ok(Self { body: serde_json::to_value(body)?, success })
    }
}

/// One classified measurement
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(flatten)]
    pub measurement: VitalMeasurement,
    pub label: &'static str,
    pub unit: &'static str,
    pub status: VitalStatus,
}

/// Everything the rule engine has to say about one entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryReport {
    pub validation: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<AlertResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<EntryStatuses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<VitalStatus>,
}

/// Run a parsed command
pub fn execute(command: &Command) -> Result<CommandOutput, CliError> {
    debug!(?command, "Executing command");
    match command {
        Command::Validate { input } => {
            let outcome = validate_health_entry(&load_candidate(input)?);
            CommandOutput::new(&outcome, outcome.success)
        }
        Command::Alerts { input } => alerts(&load_candidate(input)?),
        Command::Classify { kind, value, second } => classify(*kind, *value, *second),
        Command::Report { input } => {
            let report = report(&load_candidate(input)?);
            CommandOutput::new(&report, report.validation.success)
        }
        Command::Login { email, password } => {
            let credentials = LoginCredentials {
                email: email.clone(),
                password: password.clone(),
            };
            let outcome = validate_login_credentials(&credentials);
            CommandOutput::new(&outcome, outcome.success)
        }
        Command::Thresholds => CommandOutput::new(&THRESHOLDS, true),
    }
}

fn alerts(candidate: &HealthEntryCandidate) -> Result<CommandOutput, CliError> {
    match candidate.clone().into_reading() {
        Ok(reading) => {
            let result = check_for_alerts(&reading);
            if result.has_alert() {
                info!(count = result.messages().len(), "Entry raises alerts");
            }
            CommandOutput::new(&result, true)
        }
        Err(failure) => CommandOutput::new(&ValidationOutcome::from(failure), false),
    }
}

fn classify(kind: VitalKind, value: f64, second: Option<f64>) -> Result<CommandOutput, CliError> {
    let measurement = VitalMeasurement::new(kind, value, second).ok_or(CliError::MissingDiastolic)?;
    let classification = Classification {
        measurement,
        label: kind.label(),
        unit: kind.unit(),
        status: classify_vital(&measurement),
    };
    CommandOutput::new(&classification, true)
}

/// Build the combined report; alerts and statuses only for valid entries
pub fn report(candidate: &HealthEntryCandidate) -> EntryReport {
    match candidate.clone().into_reading() {
        Ok(reading) => {
            let statuses = classify_reading(&reading);
            EntryReport {
                validation: ValidationOutcome::valid(),
                alerts: Some(check_for_alerts(&reading)),
                overall: Some(statuses.overall()),
                statuses: Some(statuses),
            }
        }
        Err(failure) => EntryReport {
            validation: failure.into(),
            alerts: None,
            statuses: None,
            overall: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_heart_rate() {
        let output = classify(VitalKind::HeartRate, 110.0, None).unwrap();
        assert!(output.success);
        assert_eq!(output.body["kind"], "heart_rate");
        assert_eq!(output.body["value"], 110.0);
        assert_eq!(output.body["unit"], "bpm");
        assert_eq!(output.body["status"], "warning");
    }

    #[test]
    fn test_classify_blood_pressure_needs_second_value() {
        assert!(matches!(
            classify(VitalKind::BloodPressure, 150.0, None),
            Err(CliError::MissingDiastolic)
        ));

        let output = classify(VitalKind::BloodPressure, 120.0, Some(125.0)).unwrap();
        assert_eq!(output.body["systolic"], 120.0);
        assert_eq!(output.body["diastolic"], 125.0);
        assert_eq!(output.body["status"], "danger");
    }

    #[test]
    fn test_report_for_valid_entry() {
        let candidate = HealthEntryCandidate::new(72.0, 145.0, 80.0, 92.0, 36.6);
        let report = report(&candidate);

        assert!(report.validation.success);
        assert!(!report.alerts.as_ref().unwrap().has_alert());
        let statuses = report.statuses.unwrap();
        assert_eq!(statuses.blood_pressure, VitalStatus::Warning);
        assert_eq!(statuses.spo2, VitalStatus::Warning);
        assert_eq!(report.overall, Some(VitalStatus::Warning));
    }

    #[test]
    fn test_report_for_invalid_entry_skips_evaluation() {
        let candidate = HealthEntryCandidate {
            spo2: None,
            ..HealthEntryCandidate::new(72.0, 120.0, 80.0, 98.0, 36.6)
        };
        let body = serde_json::to_value(report(&candidate)).unwrap();

        assert_eq!(
            body,
            json!({ "validation": { "success": false, "errors": { "spo2": "SpO2 is required" } } })
        );
    }

    #[test]
    fn test_alerts_for_invalid_entry_fails() {
        let candidate = HealthEntryCandidate::new(250.0, 120.0, 80.0, 98.0, 36.6);
        let output = alerts(&candidate).unwrap();
        assert!(!output.success);
        assert_eq!(output.body["errors"]["heartRate"], "Must be at most 200");
    }

    #[test]
    fn test_login_without_password() {
        let command = Command::Login {
            email: Some("user@example.com".to_string()),
            password: None,
        };
        let output = execute(&command).unwrap();
        assert!(!output.success);
        assert_eq!(output.body["errors"]["password"], "Password is required");
    }

    #[test]
    fn test_thresholds_lists_every_vital() {
        let output = execute(&Command::Thresholds).unwrap();
        assert_eq!(output.body["heartRate"]["range"]["max"], 200.0);
        assert_eq!(output.body["notesMaxChars"], 500);
    }
}
