//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`UserRegistration`], [`RoadmapQuery`]) are what inbound
//! adapters call; the driven port ([`UserStore`]) is what storage adapters
//! implement. Each port exposes typed errors.

mod macros;
pub(crate) use macros::define_port_error;

mod roadmap_query;
mod user_registration;
mod user_store;

pub use roadmap_query::{FixtureRoadmapQuery, RoadmapQuery};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::{RegistrationError, UserRegistration};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
