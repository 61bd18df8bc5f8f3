use vitals_log_domain::thresholds::{BLOOD_PRESSURE, HEART_RATE, SPO2, TEMPERATURE};
use vitals_log_domain::{
    check_for_alerts, classify_vital, validate_health_entry, validate_login_credentials,
    HealthEntryCandidate, LoginCredentials, VitalKind, VitalMeasurement, VitalReading, VitalStatus,
    THRESHOLDS,
};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

fn candidate(hr: f64, sys: f64, dia: f64, spo2: f64, temp: f64) -> HealthEntryCandidate {
    HealthEntryCandidate::new(hr, sys, dia, spo2, temp)
}

fn normal() -> HealthEntryCandidate {
    candidate(72.0, 120.0, 80.0, 98.0, 36.6)
}

#[test]
fn registry_constants_feed_every_rule() {
    assert_eq!(THRESHOLDS.heart_rate, HEART_RATE);
    assert_eq!(THRESHOLDS.spo2, SPO2);
    assert_eq!(THRESHOLDS.temperature, TEMPERATURE);
    assert_eq!(THRESHOLDS.blood_pressure, BLOOD_PRESSURE);
    assert_eq!(THRESHOLDS.notes_max_chars, 500);
}

#[test]
fn every_inclusive_range_boundary_is_accepted() {
    initialize();
    let lows = candidate(40.0, 50.0, 30.0, 70.0, 34.0);
    let highs = candidate(200.0, 250.0, 150.0, 100.0, 42.0);

    assert!(validate_health_entry(&lows).success);
    assert!(validate_health_entry(&highs).success);
}

#[test]
fn just_outside_each_range_is_rejected() {
    initialize();
    let lows = candidate(39.9, 49.9, 29.9, 69.9, 33.9);
    let outcome = validate_health_entry(&lows);

    assert!(!outcome.success);
    assert_eq!(outcome.error_for("heartRate"), Some("Must be at least 40"));
    assert_eq!(outcome.error_for("systolic"), Some("Must be at least 50"));
    assert_eq!(outcome.error_for("diastolic"), Some("Must be at least 30"));
    assert_eq!(outcome.error_for("spo2"), Some("Must be at least 70"));
    assert_eq!(outcome.error_for("temperature"), Some("Must be at least 34"));

    let highs = candidate(200.1, 250.1, 150.1, 100.1, 42.1);
    let outcome = validate_health_entry(&highs);
    assert_eq!(outcome.errors.len(), 5);
    assert_eq!(outcome.error_for("temperature"), Some("Must be at most 42"));
}

#[test]
fn notes_length_is_inclusive_in_characters() {
    let at_limit = normal().with_notes("é".repeat(500));
    assert!(validate_health_entry(&at_limit).success);

    let over = normal().with_notes("a".repeat(501));
    assert_eq!(
        validate_health_entry(&over).error_for("notes"),
        Some("Notes must be 500 characters or fewer")
    );
}

#[test]
fn decoded_json_with_missing_and_mistyped_numbers() {
    let raw = r#"{"heartRate":"fast","systolic":120,"spo2":98,"temperature":36.6}"#;
    let decoded = HealthEntryCandidate::from_json(raw).unwrap();
    let outcome = validate_health_entry(&decoded);

    assert_eq!(outcome.error_for("heartRate"), Some("Heart rate is required"));
    assert_eq!(outcome.error_for("diastolic"), Some("Diastolic is required"));
    assert_eq!(outcome.errors.len(), 2);
}

#[test]
fn validation_outcome_json_shape() {
    let outcome = validate_health_entry(&candidate(20.0, 120.0, 80.0, 98.0, 36.6));
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"success":false,"errors":{"heartRate":"Must be at least 40"}}"#
    );
}

#[test]
fn alert_threshold_is_strict() {
    let reading = normal().into_reading().unwrap();
    let at = VitalReading { heart_rate: 120.0, ..reading.clone() };
    assert!(!check_for_alerts(&at).has_alert());

    let above = VitalReading { heart_rate: 121.0, ..reading };
    assert_eq!(check_for_alerts(&above).messages(), ["Heart rate critically elevated"]);
}

#[test]
fn alert_messages_keep_fixed_order() {
    let reading = candidate(150.0, 120.0, 80.0, 85.0, 40.0).into_reading().unwrap();
    assert_eq!(
        check_for_alerts(&reading).messages(),
        ["Heart rate critically elevated", "Blood oxygen dangerously low", "Fever detected"]
    );

    let reading = candidate(130.0, 120.0, 80.0, 95.0, 40.0).into_reading().unwrap();
    assert_eq!(
        check_for_alerts(&reading).messages(),
        ["Heart rate critically elevated", "Fever detected"]
    );
}

#[test]
fn blood_pressure_is_classified_but_never_alerts() {
    let reading = candidate(72.0, 240.0, 140.0, 98.0, 36.6).into_reading().unwrap();
    assert!(!check_for_alerts(&reading).has_alert());

    let measurement = VitalMeasurement::new(VitalKind::BloodPressure, 240.0, Some(140.0)).unwrap();
    assert_eq!(classify_vital(&measurement), VitalStatus::Danger);
}

#[test]
fn classifier_boundaries() {
    let status = |kind: VitalKind, value: f64| {
        classify_vital(&VitalMeasurement::new(kind, value, None).unwrap())
    };

    assert_eq!(status(VitalKind::HeartRate, 100.0), VitalStatus::Normal);
    assert_eq!(status(VitalKind::HeartRate, 120.0), VitalStatus::Warning);
    assert_eq!(status(VitalKind::HeartRate, 121.0), VitalStatus::Danger);
    assert_eq!(status(VitalKind::Spo2, 94.0), VitalStatus::Normal);
    assert_eq!(status(VitalKind::Spo2, 90.0), VitalStatus::Warning);
    assert_eq!(status(VitalKind::Spo2, 89.0), VitalStatus::Danger);
    assert_eq!(status(VitalKind::Temperature, 37.5), VitalStatus::Normal);
    assert_eq!(status(VitalKind::Temperature, 39.0), VitalStatus::Warning);
    assert_eq!(status(VitalKind::Temperature, 39.1), VitalStatus::Danger);
}

#[test]
fn login_credential_cases() {
    initialize();
    let valid = validate_login_credentials(&LoginCredentials::new("user@example.com", "123456"));
    assert!(valid.success);

    let short = validate_login_credentials(&LoginCredentials::new("user@example.com", "12345"));
    assert_eq!(short.error_for("password"), Some("Password must be at least 6 characters"));

    let malformed = validate_login_credentials(&LoginCredentials::new("not-an-email", "123456"));
    assert_eq!(malformed.error_for("email"), Some("Invalid email format"));

    let empty = validate_login_credentials(&LoginCredentials::new("", "123456"));
    assert!(!empty.success);
    assert!(empty.error_for("email").is_some());

    let missing = validate_login_credentials(&LoginCredentials::default());
    assert_eq!(missing.error_for("email"), Some("Email is required"));
    assert_eq!(missing.error_for("password"), Some("Password is required"));
}

#[test]
fn rule_functions_are_idempotent() {
    let entry = candidate(130.0, 190.0, 95.0, 88.0, 39.5);
    assert_eq!(validate_health_entry(&entry), validate_health_entry(&entry));

    let reading = entry.clone().into_reading().unwrap();
    assert_eq!(check_for_alerts(&reading), check_for_alerts(&reading));

    let measurement = VitalMeasurement::new(VitalKind::Temperature, 38.0, None).unwrap();
    assert_eq!(classify_vital(&measurement), classify_vital(&measurement));

    let credentials = LoginCredentials::new("user@example.com", "123");
    assert_eq!(
        validate_login_credentials(&credentials),
        validate_login_credentials(&credentials)
    );
}
