//! Driven port for the append-only user store.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{UserId, UserRecord, ValidatedRegistration};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user store adapters.
    pub enum UserStoreError {
        /// The backing store cannot serve requests.
        Unavailable { message: String } => "user store unavailable: {message}",
        /// No further sequential identifiers can be assigned.
        IdSpaceExhausted => "user store has no identifiers left",
    }
}

/// Append-only collection of registered users.
///
/// Implementations assign identifiers sequentially from 1 and must do so in
/// the same critical section as the append, so concurrent registrations never
/// share an identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Assign the next identifier, build the record and append it.
    async fn append(
        &self,
        registration: &ValidatedRegistration,
        created_at: DateTime<Utc>,
    ) -> Result<UserRecord, UserStoreError>;

    /// Every stored record in insertion order.
    async fn list_all(&self) -> Result<Vec<UserRecord>, UserStoreError>;

    /// Record with the given identifier, if stored.
    async fn get_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserStoreError>;
}
