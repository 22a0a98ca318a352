//! Wire decoding
//!
//! Reconstructs typed concepts from wire messages. The declared value kind
//! comes from the type sub-message; the populated branch of the value union
//! must match it exactly. Any shape violation is a
//! [`ConceptError::MalformedResponse`]: it signals a protocol mismatch and is
//! never recovered from.
//!
//! Scalars are copied verbatim. Date-times arrive as milliseconds since the
//! Unix epoch and are converted to civil time in the configured zone.

use chrono::{NaiveDateTime, TimeZone, Utc};
use thingdb_core::wire::{ThingMessage, TypeEncoding, TypeMessage, ValueMessage, WireValueType};
use thingdb_core::{
    AttributeType, AttributeValue, ConceptError, ConceptResult, DateTimeZone, DecodeConfig, Iid,
    ThingType, ThingTypeKind, ValueKind,
};

use crate::attribute::Attribute;
use crate::thing::{Entity, Relation, Thing};
use crate::LOG_TARGET;

/// Decode a concept identifier; empty identifiers are rejected
pub fn decode_iid(bytes: &[u8]) -> ConceptResult<Iid> {
    if bytes.is_empty() {
        return Err(ConceptError::malformed("thing has an empty iid"));
    }
    Ok(Iid::from_bytes(bytes))
}

/// Map a declared wire value type to a concrete value kind
pub fn decode_value_kind(value_type: Option<WireValueType>) -> ConceptResult<ValueKind> {
    match value_type {
        Some(WireValueType::Boolean) => Ok(ValueKind::Boolean),
        Some(WireValueType::Long) => Ok(ValueKind::Long),
        Some(WireValueType::Double) => Ok(ValueKind::Double),
        Some(WireValueType::String) => Ok(ValueKind::String),
        Some(WireValueType::DateTime) => Ok(ValueKind::DateTime),
        Some(WireValueType::Object) => Err(ConceptError::malformed(
            "attribute type declares the abstract object value type",
        )),
        None => Err(ConceptError::malformed(
            "attribute type does not declare a value type",
        )),
    }
}

/// Wire value type of a value kind
pub fn encode_value_kind(kind: ValueKind) -> WireValueType {
    match kind {
        ValueKind::Boolean => WireValueType::Boolean,
        ValueKind::Long => WireValueType::Long,
        ValueKind::Double => WireValueType::Double,
        ValueKind::String => WireValueType::String,
        ValueKind::DateTime => WireValueType::DateTime,
    }
}

/// Decode an attribute type descriptor
pub fn decode_attribute_type(msg: &TypeMessage) -> ConceptResult<AttributeType> {
    if msg.encoding != TypeEncoding::AttributeType {
        return Err(ConceptError::malformed(format!(
            "type '{}' is a {:?}, expected an attribute type",
            msg.label, msg.encoding
        )));
    }
    Ok(AttributeType::new(
        msg.label.clone(),
        decode_value_kind(msg.value_type)?,
    ))
}

/// Decode any thing type descriptor
pub fn decode_thing_type(msg: &TypeMessage) -> ConceptResult<ThingType> {
    match msg.encoding {
        TypeEncoding::ThingType => Ok(ThingType::root()),
        TypeEncoding::EntityType => Ok(ThingType::entity(msg.label.clone())),
        TypeEncoding::RelationType => Ok(ThingType::relation(msg.label.clone())),
        TypeEncoding::AttributeType => decode_attribute_type(msg).map(ThingType::from),
        TypeEncoding::RoleType => Err(ConceptError::malformed(format!(
            "role type '{}' is not a thing type",
            msg.label
        ))),
    }
}

/// Encode a thing type descriptor, e.g. to send it as an owner filter
pub fn encode_thing_type(thing_type: &ThingType) -> TypeMessage {
    let (encoding, value_type) = match thing_type.kind() {
        ThingTypeKind::Root => (TypeEncoding::ThingType, None),
        ThingTypeKind::Entity => (TypeEncoding::EntityType, None),
        ThingTypeKind::Relation => (TypeEncoding::RelationType, None),
        ThingTypeKind::Attribute(kind) => {
            (TypeEncoding::AttributeType, Some(encode_value_kind(kind)))
        }
    };
    TypeMessage {
        label: thing_type.label().to_string(),
        encoding,
        value_type,
    }
}

/// Convert epoch milliseconds (UTC) to civil time in `zone`
///
/// Millisecond precision is kept exactly; no floating-point division is
/// involved.
pub fn decode_date_time(millis: i64, zone: DateTimeZone) -> ConceptResult<NaiveDateTime> {
    let out_of_range =
        || ConceptError::malformed(format!("date-time {}ms is out of range", millis));
    let instant = Utc.timestamp_millis_opt(millis).single().ok_or_else(out_of_range)?;
    zone.to_civil(instant).ok_or_else(out_of_range)
}

/// Decode the value union against the declared kind
pub fn decode_value(
    value: Option<&ValueMessage>,
    kind: ValueKind,
    config: DecodeConfig,
) -> ConceptResult<AttributeValue> {
    let value = value.ok_or_else(|| {
        ConceptError::malformed(format!("{} attribute has no value populated", kind))
    })?;
    match (kind, value) {
        (ValueKind::Boolean, ValueMessage::Boolean(b)) => Ok(AttributeValue::Boolean(*b)),
        (ValueKind::Long, ValueMessage::Long(n)) => Ok(AttributeValue::Long(*n)),
        (ValueKind::Double, ValueMessage::Double(d)) => Ok(AttributeValue::Double(*d)),
        (ValueKind::String, ValueMessage::String(s)) => Ok(AttributeValue::String(s.clone())),
        (ValueKind::DateTime, ValueMessage::DateTime(millis)) => {
            decode_date_time(*millis, config.datetime_zone).map(AttributeValue::DateTime)
        }
        (kind, other) => Err(ConceptError::malformed(format!(
            "{} attribute carries a {} value",
            kind,
            populated_branch(other)
        ))),
    }
}

fn populated_branch(value: &ValueMessage) -> &'static str {
    match value {
        ValueMessage::Boolean(_) => "boolean",
        ValueMessage::Long(_) => "long",
        ValueMessage::Double(_) => "double",
        ValueMessage::String(_) => "string",
        ValueMessage::DateTime(_) => "datetime",
    }
}

/// Decode an attribute from a thing message
pub fn decode_attribute(msg: &ThingMessage, config: DecodeConfig) -> ConceptResult<Attribute> {
    let iid = decode_iid(&msg.iid)?;
    let attribute_type = decode_attribute_type(&msg.thing_type)?;
    let value = decode_value(msg.value.as_ref(), attribute_type.value_kind(), config)?;
    tracing::trace!(
        target: LOG_TARGET,
        iid = %iid,
        attribute_type = %attribute_type.label(),
        kind = %value.kind(),
        "Decoded attribute"
    );
    Ok(Attribute::new(iid, attribute_type, value)?.with_inferred(msg.inferred))
}

/// Decode any thing (entity, relation, or attribute) from a thing message
pub fn decode_thing(msg: &ThingMessage, config: DecodeConfig) -> ConceptResult<Thing> {
    match msg.thing_type.encoding {
        TypeEncoding::EntityType => Ok(Thing::Entity(Entity::new(
            decode_iid(&msg.iid)?,
            decode_thing_type(&msg.thing_type)?,
            msg.inferred,
        ))),
        TypeEncoding::RelationType => Ok(Thing::Relation(Relation::new(
            decode_iid(&msg.iid)?,
            decode_thing_type(&msg.thing_type)?,
            msg.inferred,
        ))),
        TypeEncoding::AttributeType => decode_attribute(msg, config).map(Thing::Attribute),
        other => Err(ConceptError::malformed(format!(
            "thing {} has a {:?} type, which has no instances",
            Iid::from_bytes(msg.iid.clone()),
            other
        ))),
    }
}
