//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store guarded by a mutex.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business rules.

pub mod memory;
