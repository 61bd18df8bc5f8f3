// Testing utilities and fixtures for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

// Re-export the failing repository from the data layer
pub use vitals_log_data::repository::tests::UnavailableHealthEntryRepository;

use chrono::{DateTime, Duration, Utc};

use crate::entities::vitals::{HealthEntryCandidate, VitalReading};
use crate::services::journal::{HealthJournalServiceTrait, JournalServiceError};

/// Unremarkable vitals that pass validation and raise no alert
pub fn normal_candidate() -> HealthEntryCandidate {
    HealthEntryCandidate::new(72.0, 120.0, 80.0, 98.0, 36.6)
}

/// Validated form of [`normal_candidate`]
pub fn normal_reading() -> VitalReading {
    VitalReading {
        heart_rate: 72.0,
        systolic: 120.0,
        diastolic: 80.0,
        spo2: 98.0,
        temperature: 36.6,
        symptoms: Vec::new(),
        notes: None,
    }
}

/// Two weeks of sample history as `(days ago, candidate, expected alert flag)`
pub fn sample_history() -> Vec<(i64, HealthEntryCandidate, bool)> {
    vec![
        (
            0,
            HealthEntryCandidate::new(72.0, 120.0, 80.0, 98.0, 36.6)
                .with_notes("Feeling great today"),
            false,
        ),
        (
            1,
            HealthEntryCandidate::new(130.0, 145.0, 95.0, 96.0, 37.2)
                .with_symptoms(["Palpitations", "Anxiety"])
                .with_notes("After intense workout"),
            true,
        ),
        (
            2,
            HealthEntryCandidate::new(68.0, 118.0, 76.0, 88.0, 36.8)
                .with_symptoms(["Shortness of Breath", "Fatigue"]),
            true,
        ),
        (
            3,
            HealthEntryCandidate::new(75.0, 122.0, 82.0, 97.0, 39.5)
                .with_symptoms(["Fever", "Body Aches", "Chills"])
                .with_notes("Coming down with something"),
            true,
        ),
        (4, HealthEntryCandidate::new(70.0, 115.0, 75.0, 99.0, 36.5), false),
        (
            5,
            HealthEntryCandidate::new(82.0, 130.0, 85.0, 96.0, 36.9).with_symptoms(["Headache"]),
            false,
        ),
        (
            6,
            HealthEntryCandidate::new(125.0, 150.0, 98.0, 87.0, 39.8)
                .with_symptoms(["Fever", "Chest Pain", "Shortness of Breath", "Dizziness"])
                .with_notes("Went to urgent care"),
            true,
        ),
        (
            7,
            HealthEntryCandidate::new(66.0, 110.0, 70.0, 98.0, 36.4).with_notes("Good rest day"),
            false,
        ),
        (
            9,
            HealthEntryCandidate::new(78.0, 125.0, 80.0, 95.0, 37.1)
                .with_symptoms(["Fatigue", "Insomnia"]),
            false,
        ),
        (
            12,
            HealthEntryCandidate::new(71.0, 118.0, 78.0, 97.0, 36.7)
                .with_symptoms(["Congestion", "Sore Throat"])
                .with_notes("Mild cold symptoms"),
            false,
        ),
    ]
}

/// Log [`sample_history`] for `user_id`, counting back from `now`
pub async fn seed_journal<S>(
    service: &S,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<usize, JournalServiceError>
where
    S: HealthJournalServiceTrait + Sync,
{
    let history = sample_history();
    let count = history.len();
    for (days_ago, candidate, _) in history {
        service
            .add_entry(user_id, candidate, Some(now - Duration::days(days_ago)))
            .await?;
    }
    Ok(count)
}
