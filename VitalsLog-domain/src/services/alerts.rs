use crate::entities::alerts::AlertResult;
use crate::entities::vitals::VitalReading;
use crate::thresholds::THRESHOLDS;

pub const HEART_RATE_ALERT: &str = "Heart rate critically elevated";
pub const SPO2_ALERT: &str = "Blood oxygen dangerously low";
pub const FEVER_ALERT: &str = "Fever detected";

/// Check a validated reading against the alert breakpoints
///
/// Messages always come out in the order heart rate, SpO2, temperature.
/// Blood pressure and symptoms never raise an alert here.
pub fn check_for_alerts(entry: &VitalReading) -> AlertResult {
    let checks = [
        (THRESHOLDS.heart_rate.alert.is_crossed(entry.heart_rate), HEART_RATE_ALERT),
        (THRESHOLDS.spo2.alert.is_crossed(entry.spo2), SPO2_ALERT),
        (THRESHOLDS.temperature.alert.is_crossed(entry.temperature), FEVER_ALERT),
    ];

    let messages = checks
        .into_iter()
        .filter(|(crossed, _)| *crossed)
        .map(|(_, message)| message.to_string())
        .collect();

    AlertResult::from_messages(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::normal_reading as base_entry;

    #[test]
    fn test_no_alerts_for_normal_vitals() {
        let result = check_for_alerts(&base_entry());
        assert!(!result.has_alert());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn test_heart_rate_alert_is_strict() {
        let at_limit = check_for_alerts(&VitalReading { heart_rate: 120.0, ..base_entry() });
        assert!(!at_limit.has_alert());

        let above = check_for_alerts(&VitalReading { heart_rate: 121.0, ..base_entry() });
        assert!(above.has_alert());
        assert_eq!(above.messages(), [HEART_RATE_ALERT]);
    }

    #[test]
    fn test_spo2_alert_is_strict() {
        assert!(!check_for_alerts(&VitalReading { spo2: 90.0, ..base_entry() }).has_alert());

        let low = check_for_alerts(&VitalReading { spo2: 88.0, ..base_entry() });
        assert_eq!(low.messages(), [SPO2_ALERT]);
    }

    #[test]
    fn test_fever_alert_is_strict() {
        assert!(!check_for_alerts(&VitalReading { temperature: 39.0, ..base_entry() }).has_alert());

        let fever = check_for_alerts(&VitalReading { temperature: 39.5, ..base_entry() });
        assert_eq!(fever.messages(), [FEVER_ALERT]);
    }

    #[test]
    fn test_all_alerts_in_fixed_order() {
        let result = check_for_alerts(&VitalReading {
            heart_rate: 150.0,
            spo2: 85.0,
            temperature: 40.0,
            ..base_entry()
        });
        assert!(result.has_alert());
        assert_eq!(result.messages(), [HEART_RATE_ALERT, SPO2_ALERT, FEVER_ALERT]);
    }

    #[test]
    fn test_only_relevant_alerts() {
        let result = check_for_alerts(&VitalReading {
            heart_rate: 130.0,
            spo2: 95.0,
            temperature: 40.0,
            ..base_entry()
        });
        assert_eq!(result.messages(), [HEART_RATE_ALERT, FEVER_ALERT]);
        assert!(!result.messages().iter().any(|m| m == SPO2_ALERT));
    }

    #[test]
    fn test_blood_pressure_and_symptoms_never_alert() {
        let result = check_for_alerts(&VitalReading {
            systolic: 240.0,
            diastolic: 145.0,
            symptoms: vec!["Chest pain".to_string(), "Dizziness".to_string()],
            ..base_entry()
        });
        assert!(!result.has_alert());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let entry = VitalReading { heart_rate: 150.0, spo2: 85.0, ..base_entry() };
        assert_eq!(check_for_alerts(&entry), check_for_alerts(&entry));
    }
}
