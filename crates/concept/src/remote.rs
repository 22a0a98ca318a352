//! Remote attribute concept
//!
//! A [`RemoteAttribute`] is an attribute snapshot plus a borrowed handle to
//! the transaction it was bound to. It is the only attribute form that can
//! issue queries; the snapshot itself is never refreshed.

use std::fmt;

use thingdb_core::wire::{AttributeGetOwnersReq, ThingMessage, TransactionRequest};
use thingdb_core::{
    AttributeType, AttributeValue, ConceptError, ConceptResult, Iid, ThingType, ValueKind,
};

use crate::attribute::Attribute;
use crate::decode;
use crate::owners::Owners;
use crate::response::ResponseParts;
use crate::transaction::Transaction;
use crate::LOG_TARGET;

/// Attribute bound to a live transaction
///
/// Valid only while the transaction is open. The transaction is borrowed,
/// so it outlives every proxy created from it.
#[derive(Clone)]
pub struct RemoteAttribute<'t> {
    transaction: &'t dyn Transaction,
    attribute: Attribute,
}

impl<'t> RemoteAttribute<'t> {
    /// Bind `attribute` to `transaction`
    pub fn new(transaction: &'t dyn Transaction, attribute: Attribute) -> Self {
        Self {
            transaction,
            attribute,
        }
    }

    /// Decode a wire message straight into a remote attribute
    ///
    /// Uses the transaction's decode config.
    pub fn of(transaction: &'t dyn Transaction, msg: &ThingMessage) -> ConceptResult<Self> {
        let attribute = decode::decode_attribute(msg, transaction.decode_config())?;
        Ok(Self::new(transaction, attribute))
    }

    /// Concept identifier
    pub fn iid(&self) -> &Iid {
        self.attribute.iid()
    }

    /// Attribute type
    pub fn get_type(&self) -> &AttributeType {
        self.attribute.get_type()
    }

    /// Scalar value captured when this proxy was created
    pub fn get_value(&self) -> &AttributeValue {
        self.attribute.get_value()
    }

    /// Kind of the scalar value
    pub fn value_kind(&self) -> ValueKind {
        self.attribute.value_kind()
    }

    /// Whether the server produced this attribute by inference
    pub fn is_inferred(&self) -> bool {
        self.attribute.is_inferred()
    }

    /// The transaction this proxy issues requests through
    pub fn transaction(&self) -> &'t dyn Transaction {
        self.transaction
    }

    /// Bind the same snapshot to another transaction
    pub fn as_remote<'u>(&self, transaction: &'u dyn Transaction) -> RemoteAttribute<'u> {
        RemoteAttribute::new(transaction, self.attribute.clone())
    }

    /// Local snapshot of this attribute
    pub fn to_local(&self) -> Attribute {
        self.attribute.clone()
    }

    /// Consume into the local snapshot
    pub fn into_local(self) -> Attribute {
        self.attribute
    }

    /// Stream the things that own this attribute
    ///
    /// Sends one request carrying the IID and, when given, the owner type
    /// filter (applied by the server). The returned iterator pulls response
    /// pages only as it is consumed; owners come out in page order, then
    /// entry order. Calling this again issues a fresh request.
    ///
    /// Fails with `TransactionClosed` if the transaction is no longer open.
    /// Transport errors propagate unchanged, here or from the iterator.
    pub fn get_owners(&self, owner_type: Option<&ThingType>) -> ConceptResult<Owners<'t>> {
        if !self.transaction.is_open() {
            return Err(ConceptError::TransactionClosed);
        }

        let request = TransactionRequest::attribute_get_owners(AttributeGetOwnersReq {
            iid: self.iid().as_bytes().to_vec(),
            owner_type: owner_type.map(decode::encode_thing_type),
        });
        let request_id = request.request_id;

        tracing::debug!(
            target: LOG_TARGET,
            iid = %self.iid(),
            request_id = %request_id,
            owner_type = ?owner_type.map(ThingType::label),
            "Requesting attribute owners"
        );

        let channel = self.transaction.stream(request)?;
        Ok(Owners::new(
            ResponseParts::new(request_id, channel),
            self.transaction.decode_config(),
        ))
    }
}

impl fmt::Debug for RemoteAttribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteAttribute")
            .field("attribute", &self.attribute)
            .field("transaction_open", &self.transaction.is_open())
            .finish()
    }
}

impl PartialEq for RemoteAttribute<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.attribute == other.attribute
    }
}

impl Eq for RemoteAttribute<'_> {}
