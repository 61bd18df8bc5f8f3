use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::errors::RepositoryError;
use crate::models::health_entry::{EntryQuery, HealthEntryRecord};

/// In-memory storage implementation for health entries
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Entries keyed by id
    entries: Arc<Mutex<HashMap<String, HealthEntryRecord>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store an entry in memory
    pub async fn store_entry(
        &self,
        entry: &HealthEntryRecord,
    ) -> Result<HealthEntryRecord, RepositoryError> {
        let mut store = self.entries.lock()?;
        store.insert(entry.id.clone(), entry.clone());
        Ok(entry.clone())
    }

    /// Get an entry by ID from memory
    pub async fn get_by_id(&self, id: &str) -> Result<Option<HealthEntryRecord>, RepositoryError> {
        let store = self.entries.lock()?;
        Ok(store.get(id).cloned())
    }

    /// Get the newest entry for a user
    pub async fn get_latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<HealthEntryRecord>, RepositoryError> {
        let store = self.entries.lock()?;
        let latest = store
            .values()
            .filter(|entry| entry.user_id == user_id)
            .max_by(|a, b| a.recorded_at.cmp(&b.recorded_at).then_with(|| a.id.cmp(&b.id)))
            .cloned();
        Ok(latest)
    }

    /// Get a user's entries matching the query, plus the total before pagination
    pub async fn get_for_user(
        &self,
        user_id: &str,
        query: &EntryQuery,
    ) -> Result<(Vec<HealthEntryRecord>, usize), RepositoryError> {
        let store = self.entries.lock()?;
        let sort_desc = query.sort_desc.unwrap_or(true);

        let mut entries: Vec<HealthEntryRecord> = store
            .values()
            .filter(|entry| {
                if entry.user_id != user_id {
                    return false;
                }

                if let Some(since) = query.since {
                    if entry.recorded_at < since {
                        return false;
                    }
                }

                if let Some(until) = query.until {
                    if entry.recorded_at > until {
                        return false;
                    }
                }

                true
            })
            .cloned()
            .collect();

        // Ties broken by id so repeated reads page identically
        entries.sort_by(|a, b| {
            let cmp = a
                .recorded_at
                .cmp(&b.recorded_at)
                .then_with(|| a.id.cmp(&b.id));
            if sort_desc {
                cmp.reverse()
            } else {
                cmp
            }
        });

        let total = entries.len();
        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(total);

        let page = entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect();

        Ok((page, total))
    }

    /// Number of stored entries across all users
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.entries.lock()?.len())
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}
