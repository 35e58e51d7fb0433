//! Builders wiring domain services to their adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use userlab::domain::RegistrationService;
use userlab::inbound::http::state::HttpState;
use userlab::outbound::memory::InMemoryUserStore;

/// Build handler state over a fresh in-memory store and the system clock.
///
/// The store is created once and shared by every worker.
pub(crate) fn build_http_state() -> web::Data<HttpState> {
    let registration = RegistrationService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(DefaultClock),
    );
    web::Data::new(HttpState::new(Arc::new(registration)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn state_registers_into_a_shared_store() {
        let state = build_http_state();
        let body = json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "password1",
            "passwordConfirmation": "password1",
        });
        let raw = body.as_object().expect("object body");

        let first = state.registration.register(raw).await.expect("first");
        let second = state.registration.register(raw).await.expect("second");

        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
        assert_eq!(state.registration.list_users().await.expect("list").len(), 2);
    }
}
