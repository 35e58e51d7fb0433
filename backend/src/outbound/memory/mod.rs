//! In-process user store.
//!
//! Holds every registered user in a vector behind a single mutex. Identifier
//! assignment and append happen under one lock acquisition, so identifiers
//! are dense and unique even under concurrent registrations. Contents are
//! lost when the process exits.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{UserId, UserRecord, ValidatedRegistration};

/// Append-only [`UserStore`] backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, UserStoreError> {
        self.records
            .lock()
            .map_err(|_| UserStoreError::unavailable("user store lock poisoned"))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn append(
        &self,
        registration: &ValidatedRegistration,
        created_at: DateTime<Utc>,
    ) -> Result<UserRecord, UserStoreError> {
        let mut records = self.lock()?;
        let id =
            UserId::after_count(records.len()).ok_or_else(UserStoreError::id_space_exhausted)?;
        let record = UserRecord::build(registration, id, created_at);
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, UserStoreError> {
        Ok(self.lock()?.clone())
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserStoreError> {
        let records = self.lock()?;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }
}
