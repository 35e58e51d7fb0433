//! Driving port for registering and looking up users.
//!
//! HTTP handlers call this port with the raw request body; validation, id
//! assignment and storage all happen behind it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Error, RawInput, Rejection, UserId, UserRecord};

use super::UserStoreError;

/// Why a registration did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The input broke one or more validation rules.
    #[error("registration rejected: {0}")]
    Rejected(Rejection),
    /// The input was valid but could not be stored.
    #[error(transparent)]
    Storage(#[from] UserStoreError),
}

/// Domain use-case port for user registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate `raw` and store the resulting record.
    async fn register(&self, raw: &RawInput) -> Result<UserRecord, RegistrationError>;

    /// Every registered user in registration order.
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error>;

    /// The user with `id`, or a `not_found` error.
    async fn find_user(&self, id: UserId) -> Result<UserRecord, Error>;
}
