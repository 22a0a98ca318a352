//! Core types for thingdb concepts
//!
//! This crate defines the data shared by every layer of the concept model:
//! - Iid: opaque, server-assigned concept identifier
//! - ValueKind / AttributeValue: the closed set of attribute scalars
//! - AttributeType / ThingType: type descriptors
//! - wire: messages exchanged with the transaction collaborator
//! - ConceptError: error taxonomy shared by all crates
//! - DecodeConfig: decoding options

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;
pub mod value;
pub mod wire;

// Re-exports
pub use config::{DateTimeZone, DecodeConfig};
pub use error::{ConceptError, ConceptResult};
pub use types::{AttributeType, Iid, ThingType, ThingTypeKind};
pub use value::{AttributeValue, ValueKind};
