//! Public types for the thingdb API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Identity, values and type descriptors
// ============================================================================

pub use thingdb_core::{AttributeType, Iid, ThingType, ThingTypeKind};
pub use thingdb_core::{AttributeValue, ValueKind};

// Errors
pub use thingdb_core::{ConceptError, ConceptResult};

// Decode configuration
pub use thingdb_core::{DateTimeZone, DecodeConfig};

// Wire messages exchanged with the transport
pub use thingdb_core::wire;

// ============================================================================
// Concepts and queries
// ============================================================================

pub use thingdb_concept::{Attribute, Entity, Relation, RemoteAttribute, Thing};
pub use thingdb_concept::{Owners, ResponseParts};

// Collaborator interface implemented by transports
pub use thingdb_concept::{ResponseChannel, Transaction};

// Decoding utilities
pub use thingdb_concept::decode;
