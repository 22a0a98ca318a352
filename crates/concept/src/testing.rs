//! Test support: a scripted transaction and wire message builders
//!
//! [`ScriptedTransaction`] plays back response parts queued ahead of time,
//! one script per `stream` call, and records every request it receives and
//! every part pulled from it. Available under `cfg(test)` and the
//! `test-utils` feature.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use thingdb_core::wire::{
    ResponsePart, StreamState, ThingMessage, TransactionRequest, TypeEncoding, TypeMessage,
    ValueMessage, WireValueType,
};
use thingdb_core::{ConceptError, ConceptResult, DecodeConfig};

use crate::transaction::{ResponseChannel, Transaction};

#[derive(Default)]
struct Script {
    closed: bool,
    streams: VecDeque<Vec<ConceptResult<ResponsePart>>>,
    next_stream_error: Option<ConceptError>,
    requests: Vec<TransactionRequest>,
    parts_taken: usize,
}

/// In-memory transaction that replays queued response streams
#[derive(Clone, Default)]
pub struct ScriptedTransaction {
    script: Arc<Mutex<Script>>,
    config: DecodeConfig,
}

impl ScriptedTransaction {
    /// An open transaction with nothing queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for concepts decoded through this transaction
    pub fn with_config(mut self, config: DecodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Queue the raw parts returned by the next `stream` call
    pub fn push_stream(&self, parts: Vec<ResponsePart>) {
        self.push_stream_results(parts.into_iter().map(Ok).collect());
    }

    /// Queue parts or transport errors returned by the next `stream` call
    pub fn push_stream_results(&self, parts: Vec<ConceptResult<ResponsePart>>) {
        self.script.lock().streams.push_back(parts);
    }

    /// Queue one owners page per entry, followed by a done part
    pub fn push_pages(&self, pages: Vec<Vec<ThingMessage>>) {
        let mut parts: Vec<ResponsePart> = pages
            .into_iter()
            .map(|things| ResponsePart::AttributeGetOwners { things })
            .collect();
        parts.push(ResponsePart::Stream(StreamState::Done));
        self.push_stream(parts);
    }

    /// Make the next `stream` call fail with `err`
    pub fn fail_next_stream(&self, err: ConceptError) {
        self.script.lock().next_stream_error = Some(err);
    }

    /// Close the transaction
    pub fn close(&self) {
        self.script.lock().closed = true;
    }

    /// Every request received so far, continue requests included
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.script.lock().requests.clone()
    }

    /// Number of parts pulled across all streams
    pub fn parts_taken(&self) -> usize {
        self.script.lock().parts_taken
    }
}

impl Transaction for ScriptedTransaction {
    fn is_open(&self) -> bool {
        !self.script.lock().closed
    }

    fn stream(&self, request: TransactionRequest) -> ConceptResult<Box<dyn ResponseChannel + '_>> {
        let mut script = self.script.lock();
        if script.closed {
            return Err(ConceptError::TransactionClosed);
        }
        if let Some(err) = script.next_stream_error.take() {
            return Err(err);
        }
        script.requests.push(request);
        let parts = script
            .streams
            .pop_front()
            .unwrap_or_else(|| vec![Ok(ResponsePart::Stream(StreamState::Done))]);
        Ok(Box::new(ScriptedChannel {
            script: Arc::clone(&self.script),
            parts: parts.into(),
        }))
    }

    fn decode_config(&self) -> DecodeConfig {
        self.config
    }
}

struct ScriptedChannel {
    script: Arc<Mutex<Script>>,
    parts: VecDeque<ConceptResult<ResponsePart>>,
}

impl ResponseChannel for ScriptedChannel {
    fn take(&mut self) -> ConceptResult<ResponsePart> {
        self.script.lock().parts_taken += 1;
        self.parts
            .pop_front()
            .unwrap_or_else(|| Err(ConceptError::transaction("stream ended without a done part")))
    }

    fn dispatch(&mut self, request: TransactionRequest) -> ConceptResult<()> {
        self.script.lock().requests.push(request);
        Ok(())
    }
}

/// Attribute thing message whose declared value type matches `value`
pub fn attribute_message(iid: &[u8], label: &str, value: ValueMessage) -> ThingMessage {
    let value_type = match &value {
        ValueMessage::Boolean(_) => WireValueType::Boolean,
        ValueMessage::Long(_) => WireValueType::Long,
        ValueMessage::Double(_) => WireValueType::Double,
        ValueMessage::String(_) => WireValueType::String,
        ValueMessage::DateTime(_) => WireValueType::DateTime,
    };
    ThingMessage {
        iid: iid.to_vec(),
        thing_type: TypeMessage {
            label: label.to_string(),
            encoding: TypeEncoding::AttributeType,
            value_type: Some(value_type),
        },
        value: Some(value),
        inferred: false,
    }
}

/// Entity thing message
pub fn entity_message(iid: &[u8], label: &str) -> ThingMessage {
    untyped_message(iid, label, TypeEncoding::EntityType)
}

/// Relation thing message
pub fn relation_message(iid: &[u8], label: &str) -> ThingMessage {
    untyped_message(iid, label, TypeEncoding::RelationType)
}

fn untyped_message(iid: &[u8], label: &str, encoding: TypeEncoding) -> ThingMessage {
    ThingMessage {
        iid: iid.to_vec(),
        thing_type: TypeMessage {
            label: label.to_string(),
            encoding,
            value_type: None,
        },
        value: None,
        inferred: false,
    }
}
