//! Concept identity and type descriptors
//!
//! - Iid: opaque byte-string identifier assigned by the server
//! - AttributeType: descriptor of an attribute type and its value kind
//! - ThingType: descriptor of any thing type, used for owner filters

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::value::ValueKind;

/// Label of the root thing type
pub const ROOT_THING_TYPE_LABEL: &str = "thing";

/// Opaque, server-assigned concept identifier
///
/// Unique within a database generation and never modified by the client.
/// Displayed as lowercase hex with a `0x` prefix.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iid(Vec<u8>);

impl Iid {
    /// Wrap raw identifier bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Iid(bytes.into())
    }

    /// Raw identifier bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// True if the identifier has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering with `0x` prefix
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + self.0.len() * 2);
        out.push_str("0x");
        for byte in &self.0 {
            let _ = write!(out, "{:02x}", byte);
        }
        out
    }
}

impl fmt::Display for Iid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Iid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iid({})", self.to_hex())
    }
}

impl From<Vec<u8>> for Iid {
    fn from(bytes: Vec<u8>) -> Self {
        Iid(bytes)
    }
}

impl From<&[u8]> for Iid {
    fn from(bytes: &[u8]) -> Self {
        Iid(bytes.to_vec())
    }
}

/// Descriptor of an attribute type
///
/// Owned by the type system; attributes hold a clone of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeType {
    label: String,
    value_kind: ValueKind,
}

impl AttributeType {
    /// Create a descriptor
    pub fn new(label: impl Into<String>, value_kind: ValueKind) -> Self {
        Self {
            label: label.into(),
            value_kind,
        }
    }

    /// Type label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Kind of value held by instances of this type
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.value_kind)
    }
}

/// What a thing type describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThingTypeKind {
    /// The root `thing` type
    Root,
    /// An entity type
    Entity,
    /// A relation type
    Relation,
    /// An attribute type with its value kind
    Attribute(ValueKind),
}

/// Descriptor of any thing type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThingType {
    label: String,
    kind: ThingTypeKind,
}

impl ThingType {
    /// The root thing type
    pub fn root() -> Self {
        Self {
            label: ROOT_THING_TYPE_LABEL.to_string(),
            kind: ThingTypeKind::Root,
        }
    }

    /// An entity type
    pub fn entity(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ThingTypeKind::Entity,
        }
    }

    /// A relation type
    pub fn relation(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ThingTypeKind::Relation,
        }
    }

    /// An attribute type
    pub fn attribute(label: impl Into<String>, value_kind: ValueKind) -> Self {
        Self {
            label: label.into(),
            kind: ThingTypeKind::Attribute(value_kind),
        }
    }

    /// Type label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// What this type describes
    pub fn kind(&self) -> ThingTypeKind {
        self.kind
    }

    /// The attribute descriptor, if this is an attribute type
    pub fn as_attribute_type(&self) -> Option<AttributeType> {
        match self.kind {
            ThingTypeKind::Attribute(value_kind) => {
                Some(AttributeType::new(self.label.clone(), value_kind))
            }
            _ => None,
        }
    }
}

impl From<AttributeType> for ThingType {
    fn from(t: AttributeType) -> Self {
        ThingType::attribute(t.label, t.value_kind)
    }
}

impl fmt::Display for ThingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
