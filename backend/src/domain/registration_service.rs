//! User registration domain service.
//!
//! Implements the [`UserRegistration`] driving port on top of a
//! [`UserStore`]. Creation timestamps come from the injected clock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info};

use crate::domain::ports::{RegistrationError, UserRegistration, UserStore, UserStoreError};
use crate::domain::{Error, RawInput, UserId, UserRecord, validate_registration};

/// Registration service implementing the driving port.
#[derive(Clone)]
pub struct RegistrationService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> RegistrationService<S> {
    /// Create a service over `store`, stamping records with `clock`.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl<S> RegistrationService<S>
where
    S: UserStore,
{
    fn map_store_error(error: UserStoreError) -> Error {
        error!(%error, "user store failure");
        Error::internal(format!("user store error: {error}"))
    }
}

#[async_trait]
impl<S> UserRegistration for RegistrationService<S>
where
    S: UserStore,
{
    async fn register(&self, raw: &RawInput) -> Result<UserRecord, RegistrationError> {
        let registration = validate_registration(raw).map_err(|rejection| {
            debug!(
                violations = rejection.violations().len(),
                "registration rejected"
            );
            RegistrationError::Rejected(rejection)
        })?;

        let record = self
            .store
            .append(&registration, self.clock.utc())
            .await
            .map_err(|err| {
                error!(error = %err, "failed to store registration");
                RegistrationError::Storage(err)
            })?;

        info!(user_id = %record.id(), "user registered");
        Ok(record)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, Error> {
        self.store.list_all().await.map_err(Self::map_store_error)
    }

    async fn find_user(&self, id: UserId) -> Result<UserRecord, Error> {
        self.store
            .get_by_id(id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }
}
