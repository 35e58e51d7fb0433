//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently only trace id
//! assignment.

pub mod trace;

pub use trace::Trace;
