//! Wire messages exchanged with the transaction collaborator
//!
//! These mirror the server protocol closely: a thing message carries its
//! IID, a type sub-message and a one-of value union. Requests are wrapped in
//! a [`TransactionRequest`] with a request id; responses arrive as a stream
//! of [`ResponsePart`]s.
//!
//! All messages derive serde so transports and tests can build them from
//! JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Encoding of a type sub-message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeEncoding {
    /// The root thing type
    ThingType,
    /// An entity type
    EntityType,
    /// A relation type
    RelationType,
    /// An attribute type
    AttributeType,
    /// A role type
    RoleType,
}

/// Value type declared by an attribute type sub-message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireValueType {
    /// Abstract root attribute type; never carried by a concrete attribute
    Object,
    /// Boolean
    Boolean,
    /// Long
    Long,
    /// Double
    Double,
    /// String
    String,
    /// Date-time
    DateTime,
}

/// Type sub-message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMessage {
    /// Type label
    pub label: String,
    /// What kind of type this is
    pub encoding: TypeEncoding,
    /// Declared value type; only meaningful for attribute types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<WireValueType>,
}

/// One-of value union of a thing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMessage {
    /// Boolean branch
    Boolean(bool),
    /// Long branch
    Long(i64),
    /// Double branch
    Double(f64),
    /// String branch
    String(String),
    /// Date-time branch: milliseconds since the Unix epoch, UTC
    DateTime(i64),
}

/// A thing as sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingMessage {
    /// Raw IID bytes
    pub iid: Vec<u8>,
    /// Type sub-message
    #[serde(rename = "type")]
    pub thing_type: TypeMessage,
    /// Value union; populated for attributes only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueMessage>,
    /// Whether the thing was produced by inference
    #[serde(default)]
    pub inferred: bool,
}

/// Request for the owners of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGetOwnersReq {
    /// IID of the attribute whose owners are requested
    pub iid: Vec<u8>,
    /// Optional owner type filter, applied by the server
    #[serde(default)]
    pub owner_type: Option<TypeMessage>,
}

/// Body of a transaction request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestBody {
    /// Stream the owners of an attribute
    AttributeGetOwners(AttributeGetOwnersReq),
    /// Ask the server to continue a paused stream
    StreamContinue,
}

/// A request sent through a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Correlates response parts with this request
    pub request_id: Uuid,
    /// What is being asked
    pub body: RequestBody,
}

impl TransactionRequest {
    /// A new owners request with a fresh request id
    pub fn attribute_get_owners(req: AttributeGetOwnersReq) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            body: RequestBody::AttributeGetOwners(req),
        }
    }

    /// A continue request for an already running stream
    pub fn stream_continue(request_id: Uuid) -> Self {
        Self {
            request_id,
            body: RequestBody::StreamContinue,
        }
    }
}

/// Control state carried by a stream part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamState {
    /// The server paused; the client must send a continue request
    Continue,
    /// The stream has ended
    Done,
}

/// One part of a streamed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePart {
    /// A page of owners
    AttributeGetOwners {
        /// Owners in server order
        things: Vec<ThingMessage>,
    },
    /// Stream control
    Stream(StreamState),
    /// No response case was populated
    Unset,
}
