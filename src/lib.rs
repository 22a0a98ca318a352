//! thingdb: typed attribute concepts for a graph-database client
//!
//! Decodes attributes from wire messages into immutable local snapshots,
//! binds them to a live transaction, and streams their owners.
//!
//! # Example
//!
//! ```ignore
//! let attribute = Attribute::of(&message)?;
//! let remote = attribute.as_remote(&transaction);
//! for owner in remote.get_owners(Some(&ThingType::entity("person")))? {
//!     println!("{}", owner?.iid());
//! }
//! ```

pub mod types;

pub use types::*;
