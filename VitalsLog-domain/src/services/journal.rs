use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::entities::alerts::AlertResult;
use crate::entities::conversions;
use crate::entities::dashboard::DashboardSummary;
use crate::entities::vitals::{HealthEntry, HealthEntryCandidate, RecordedEntry};
use crate::error::ValidationFailure;
use crate::services::alerts::check_for_alerts;
use crate::services::formatting::{greeting_at, is_same_day};
use crate::services::status::classify_reading;
use crate::services::validation::validate_reading;
use vitals_log_data::models::health_entry::EntryQuery;
use vitals_log_data::repository::{HealthEntryRepositoryTrait, RepositoryError};

/// Journal service errors
#[derive(Debug, Error)]
pub enum JournalServiceError {
    /// The submitted entry failed validation
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Not found error
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Trait for journal service operations
#[async_trait]
pub trait HealthJournalServiceTrait {
    /// Validate and evaluate a candidate without storing it
    fn preview_alerts(
        &self,
        candidate: &HealthEntryCandidate,
    ) -> Result<AlertResult, JournalServiceError>;

    /// Validate, evaluate and store an entry
    async fn add_entry(
        &self,
        user_id: &str,
        candidate: HealthEntryCandidate,
        recorded_at: Option<DateTime<Utc>>,
    ) -> Result<RecordedEntry, JournalServiceError>;

    /// All of a user's entries, newest first
    async fn history(&self, user_id: &str) -> Result<Vec<HealthEntry>, JournalServiceError>;

    /// One page of a user's entries, newest first, plus the total count
    async fn history_page(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<HealthEntry>, usize), JournalServiceError>;

    /// A user's newest entry
    async fn latest_entry(&self, user_id: &str) -> Result<Option<HealthEntry>, JournalServiceError>;

    /// An entry by ID
    async fn entry_by_id(&self, id: &str) -> Result<HealthEntry, JournalServiceError>;

    /// The newest entry logged on `now`'s day
    async fn todays_entry(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<HealthEntry>, JournalServiceError>;

    /// Greeting, today's entry, its status tiers and its alerts
    async fn dashboard(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary, JournalServiceError>;
}

/// Journal of logged health entries
pub struct HealthJournalService<R: HealthEntryRepositoryTrait> {
    repository: R,
}

impl<R: HealthEntryRepositoryTrait> HealthJournalService<R> {
    /// Create a new journal service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> JournalServiceError {
        match err {
            RepositoryError::NotFound(msg) => JournalServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => {
                JournalServiceError::Validation(ValidationFailure::field("entry", msg))
            }
            _ => JournalServiceError::Repository(err.to_string()),
        }
    }
}

#[async_trait]
impl<R> HealthJournalServiceTrait for HealthJournalService<R>
where
    R: HealthEntryRepositoryTrait + Send + Sync,
{
    fn preview_alerts(
        &self,
        candidate: &HealthEntryCandidate,
    ) -> Result<AlertResult, JournalServiceError> {
        let reading = validate_reading(candidate)?;
        Ok(check_for_alerts(&reading))
    }

    async fn add_entry(
        &self,
        user_id: &str,
        candidate: HealthEntryCandidate,
        recorded_at: Option<DateTime<Utc>>,
    ) -> Result<RecordedEntry, JournalServiceError> {
        let reading = candidate.into_reading()?;
        let alert = check_for_alerts(&reading);
        if alert.has_alert() {
            warn!(user_id, messages = ?alert.messages(), "Entry crosses alert thresholds");
        }

        let request = conversions::convert_to_data_create_request(
            user_id,
            recorded_at.unwrap_or_else(Utc::now),
            &reading,
            alert.has_alert(),
        );

        let record = self
            .repository
            .create(request)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        let entry = conversions::convert_to_domain_entry(record);
        info!(entry_id = %entry.id, has_alert = entry.has_alert, "Logged health entry");

        Ok(RecordedEntry { entry, alert })
    }

    async fn history(&self, user_id: &str) -> Result<Vec<HealthEntry>, JournalServiceError> {
        let (records, _) = self
            .repository
            .get_for_user(user_id, EntryQuery::default())
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(records.into_iter().map(conversions::convert_to_domain_entry).collect())
    }

    async fn history_page(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<HealthEntry>, usize), JournalServiceError> {
        let query = EntryQuery {
            limit: Some(limit),
            offset: Some(offset),
            ..EntryQuery::default()
        };
        let (records, total) = self
            .repository
            .get_for_user(user_id, query)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        let entries = records.into_iter().map(conversions::convert_to_domain_entry).collect();
        Ok((entries, total))
    }

    async fn latest_entry(
        &self,
        user_id: &str,
    ) -> Result<Option<HealthEntry>, JournalServiceError> {
        let record = self
            .repository
            .get_latest_for_user(user_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(record.map(conversions::convert_to_domain_entry))
    }

    async fn entry_by_id(&self, id: &str) -> Result<HealthEntry, JournalServiceError> {
        let id_uuid = conversions::parse_string_to_uuid(id)
            .map_err(|msg| ValidationFailure::field("id", msg))?;

        let record = self
            .repository
            .get_by_id(id_uuid)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                JournalServiceError::NotFound(format!("Health entry with ID {} not found", id))
            })?;

        Ok(conversions::convert_to_domain_entry(record))
    }

    async fn todays_entry(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<HealthEntry>, JournalServiceError> {
        let today = self
            .history(user_id)
            .await?
            .into_iter()
            .find(|entry| is_same_day(entry.recorded_at, now));
        debug!(user_id, found = today.is_some(), "Looked up today's entry");
        Ok(today)
    }

    async fn dashboard(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary, JournalServiceError> {
        let today = self.todays_entry(user_id, now).await?;
        let statuses = today.as_ref().map(|entry| classify_reading(&entry.vitals));
        let alert_messages = today
            .as_ref()
            .map(|entry| check_for_alerts(&entry.vitals).into_messages())
            .unwrap_or_default();

        Ok(DashboardSummary {
            greeting: greeting_at(now),
            today,
            statuses,
            alert_messages,
        })
    }
}

/// Create a journal backed by the in-memory repository from the data layer
pub fn create_default_journal_service() -> impl HealthJournalServiceTrait + Send + Sync {
    let repository = vitals_log_data::repository::HealthEntryRepository::new();
    HealthJournalService::new(repository)
}
