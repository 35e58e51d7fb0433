//! Test utilities for the userlab crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::RegistrationService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserStore;

mod clock;

pub use clock::FixedClock;

/// Instant used by fixtures: 2024-05-01T12:00:00Z.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// HTTP state backed by an empty in-memory store and a clock stopped at
/// [`fixture_timestamp`].
///
/// # Examples
/// ```
/// use userlab::test_support::memory_state;
///
/// let state = memory_state();
/// let _roadmap = state.roadmap.clone();
/// ```
pub fn memory_state() -> HttpState {
    let service = RegistrationService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(FixedClock::new(fixture_timestamp())),
    );
    HttpState::new(Arc::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::Clock;

    #[test]
    fn fixed_clock_only_moves_when_advanced() {
        let clock = FixedClock::new(fixture_timestamp());
        assert_eq!(clock.utc(), fixture_timestamp());
        assert_eq!(clock.utc(), fixture_timestamp());
        clock.advance_seconds(90);
        assert_eq!(
            clock.utc().to_rfc3339(),
            "2024-05-01T12:01:30+00:00"
        );
    }
}
