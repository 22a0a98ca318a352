//! Concept layer for thingdb
//!
//! This crate turns wire payloads into typed concepts and runs the queries
//! those concepts expose:
//! - decode: wire message -> Attribute / Thing
//! - Attribute: immutable local snapshot of an attribute
//! - RemoteAttribute: attribute bound to a live transaction
//! - Owners: lazy owner stream returned by `RemoteAttribute::get_owners`
//! - Transaction / ResponseChannel: what this crate needs from the transport
//!
//! Nothing here caches, writes, or validates value ranges.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute;
pub mod decode;
pub mod owners;
pub mod remote;
pub mod response;
pub mod thing;
pub mod transaction;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-exports
pub use attribute::Attribute;
pub use owners::Owners;
pub use remote::RemoteAttribute;
pub use response::ResponseParts;
pub use thing::{Entity, Relation, Thing};
pub use transaction::{ResponseChannel, Transaction};

/// Tracing target for events emitted by this crate
pub(crate) const LOG_TARGET: &str = "thingdb::concept";
