//! Local attribute concept
//!
//! An [`Attribute`] is an immutable, disconnected snapshot: an IID, the
//! attribute type it belongs to, and one scalar value whose kind matches the
//! type. It can be cloned and shared freely. To run queries about it, bind
//! it to a transaction with [`Attribute::as_remote`].

use std::hash::{Hash, Hasher};

use thingdb_core::wire::ThingMessage;
use thingdb_core::{
    AttributeType, AttributeValue, ConceptError, ConceptResult, DecodeConfig, Iid, ValueKind,
};

use crate::decode;
use crate::remote::RemoteAttribute;
use crate::transaction::Transaction;

/// Immutable local snapshot of an attribute
///
/// Two attributes are equal when they have the same IID and value kind.
#[derive(Debug, Clone)]
pub struct Attribute {
    iid: Iid,
    attribute_type: AttributeType,
    value: AttributeValue,
    inferred: bool,
}

impl Attribute {
    /// Assemble an attribute from already-decoded parts
    ///
    /// Fails if the value kind does not match the type's declared kind.
    pub fn new(iid: Iid, attribute_type: AttributeType, value: AttributeValue) -> ConceptResult<Self> {
        if value.kind() != attribute_type.value_kind() {
            return Err(ConceptError::malformed(format!(
                "attribute type '{}' declares {} but the value is {}",
                attribute_type.label(),
                attribute_type.value_kind(),
                value.kind()
            )));
        }
        Ok(Self {
            iid,
            attribute_type,
            value,
            inferred: false,
        })
    }

    /// Decode from a wire message using the default decode config
    pub fn of(msg: &ThingMessage) -> ConceptResult<Self> {
        Self::of_with_config(msg, DecodeConfig::default())
    }

    /// Decode from a wire message
    pub fn of_with_config(msg: &ThingMessage, config: DecodeConfig) -> ConceptResult<Self> {
        decode::decode_attribute(msg, config)
    }

    pub(crate) fn with_inferred(mut self, inferred: bool) -> Self {
        self.inferred = inferred;
        self
    }

    /// Concept identifier
    pub fn iid(&self) -> &Iid {
        &self.iid
    }

    /// Attribute type
    pub fn get_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    /// Scalar value
    pub fn get_value(&self) -> &AttributeValue {
        &self.value
    }

    /// Kind of the scalar value
    pub fn value_kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Whether the server produced this attribute by inference
    pub fn is_inferred(&self) -> bool {
        self.inferred
    }

    /// Bind a copy of this attribute to `transaction`
    ///
    /// Does no I/O. The remote attribute carries the value captured here and
    /// is never refreshed from the server.
    pub fn as_remote<'t>(&self, transaction: &'t dyn Transaction) -> RemoteAttribute<'t> {
        RemoteAttribute::new(transaction, self.clone())
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.iid == other.iid && self.value_kind() == other.value_kind()
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iid.hash(state);
        self.value_kind().hash(state);
    }
}
