use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use crate::models::health_entry::{CreateHealthEntryRecord, EntryQuery, HealthEntryRecord};

/// Repository trait for logged health entries
#[async_trait]
pub trait HealthEntryRepositoryTrait {
    /// Store a new entry, assigning it an identifier
    async fn create(
        &self,
        request: CreateHealthEntryRecord,
    ) -> Result<HealthEntryRecord, RepositoryError>;

    /// Get an entry by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<HealthEntryRecord>, RepositoryError>;

    /// Get a user's entries matching the query, plus the total before pagination
    async fn get_for_user(
        &self,
        user_id: &str,
        query: EntryQuery,
    ) -> Result<(Vec<HealthEntryRecord>, usize), RepositoryError>;

    /// Get the newest entry for a user
    async fn get_latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<HealthEntryRecord>, RepositoryError>;
}

/// Repository for health entries backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct HealthEntryRepository {
    storage: InMemoryStorage,
}

impl HealthEntryRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    /// Create a repository that shares an existing storage
    pub fn with_storage(storage: InMemoryStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl HealthEntryRepositoryTrait for HealthEntryRepository {
    async fn create(
        &self,
        request: CreateHealthEntryRecord,
    ) -> Result<HealthEntryRecord, RepositoryError> {
        if request.user_id.trim().is_empty() {
            return Err(RepositoryError::Validation("user id must not be empty".to_string()));
        }

        let entry = request.into_record(Uuid::new_v4().to_string());
        info!(entry_id = %entry.id, user_id = %entry.user_id, "Storing health entry");
        self.storage.store_entry(&entry).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<HealthEntryRecord>, RepositoryError> {
        debug!("Getting health entry by ID: {}", id);
        self.storage.get_by_id(&id.to_string()).await
    }

    async fn get_for_user(
        &self,
        user_id: &str,
        query: EntryQuery,
    ) -> Result<(Vec<HealthEntryRecord>, usize), RepositoryError> {
        debug!(user_id, ?query, "Listing health entries");
        self.storage.get_for_user(user_id, &query).await
    }

    async fn get_latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<HealthEntryRecord>, RepositoryError> {
        debug!(user_id, "Getting latest health entry");
        self.storage.get_latest_for_user(user_id).await
    }
}

/// Mock health entry repositories for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Repository whose every call fails, for exercising error paths
    #[derive(Debug, Clone, Default)]
    pub struct UnavailableHealthEntryRepository;

    impl UnavailableHealthEntryRepository {
        /// Create a new failing repository
        pub fn new() -> Self {
            Self
        }

        fn unavailable() -> RepositoryError {
            RepositoryError::Unavailable("mock repository is configured to fail".to_string())
        }
    }

    #[async_trait]
    impl HealthEntryRepositoryTrait for UnavailableHealthEntryRepository {
        async fn create(
            &self,
            _request: CreateHealthEntryRecord,
        ) -> Result<HealthEntryRecord, RepositoryError> {
            Err(Self::unavailable())
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Option<HealthEntryRecord>, RepositoryError> {
            Err(Self::unavailable())
        }

        async fn get_for_user(
            &self,
            _user_id: &str,
            _query: EntryQuery,
        ) -> Result<(Vec<HealthEntryRecord>, usize), RepositoryError> {
            Err(Self::unavailable())
        }

        async fn get_latest_for_user(
            &self,
            _user_id: &str,
        ) -> Result<Option<HealthEntryRecord>, RepositoryError> {
            Err(Self::unavailable())
        }
    }

}
