//! Logging facility for pricetrail.
//!
//! Structured logging over `tracing`, initialized once at process startup.
//! Field keys and event names come from `pricetrail_core_types::schema` so
//! log lines stay consistent across crates.

pub mod init;

pub use init::{init, Profile};
