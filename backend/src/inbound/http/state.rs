//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, so they can be exercised with test doubles.

use std::sync::Arc;

use crate::domain::ports::{FixtureRoadmapQuery, RoadmapQuery, UserRegistration};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration and lookup.
    pub registration: Arc<dyn UserRegistration>,
    /// Learning roadmap reads.
    pub roadmap: Arc<dyn RoadmapQuery>,
}

impl HttpState {
    /// Construct state with the built-in roadmap.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use userlab::domain::RegistrationService;
    /// use userlab::inbound::http::state::HttpState;
    /// use userlab::outbound::memory::InMemoryUserStore;
    ///
    /// let service = RegistrationService::new(
    ///     Arc::new(InMemoryUserStore::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _registration = state.registration.clone();
    /// ```
    pub fn new(registration: Arc<dyn UserRegistration>) -> Self {
        Self::with_roadmap(registration, Arc::new(FixtureRoadmapQuery))
    }

    /// Construct state from explicit ports.
    pub fn with_roadmap(
        registration: Arc<dyn UserRegistration>,
        roadmap: Arc<dyn RoadmapQuery>,
    ) -> Self {
        Self {
            registration,
            roadmap,
        }
    }
}
