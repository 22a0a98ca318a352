//! Shared helpers for the attribute concept test suite

use thingdb::wire::{ThingMessage, ValueMessage};
use thingdb::{Attribute, DecodeConfig};

pub use thingdb_concept::testing::{
    attribute_message, entity_message, relation_message, ScriptedTransaction,
};

/// Route tracing output through the test harness (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Decode `value` as an attribute with UTC date-times
pub fn decode_utc(value: ValueMessage) -> Attribute {
    Attribute::of_with_config(&attribute_message(&[0x01, 0x02], "attr", value), DecodeConfig::utc())
        .unwrap()
}

/// A representative value of every kind
pub fn sample_values() -> Vec<ValueMessage> {
    vec![
        ValueMessage::Boolean(true),
        ValueMessage::Long(42),
        ValueMessage::Double(3.25),
        ValueMessage::String("grüße".to_string()),
        ValueMessage::DateTime(1_617_235_200_123),
    ]
}

/// Owner page entries for a list of single-byte iids
pub fn people(iids: &[u8]) -> Vec<ThingMessage> {
    iids.iter().map(|b| entity_message(&[*b], "person")).collect()
}
