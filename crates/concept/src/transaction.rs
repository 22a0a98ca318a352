//! Transaction collaborator interface
//!
//! The transport owns the RPC machinery. This crate only needs to know
//! whether a transaction is still open and how to open a streamed request.
//! Remote concepts borrow the transaction; they never own or mutate it, so
//! one transaction may back any number of proxies at once.

use thingdb_core::wire::{ResponsePart, TransactionRequest};
use thingdb_core::{ConceptResult, DecodeConfig};

/// A live transaction able to run streamed requests
pub trait Transaction {
    /// Whether requests may still be issued
    fn is_open(&self) -> bool;

    /// Send a streamed request and return the channel its parts arrive on
    ///
    /// Transport failures are returned as-is and propagate unchanged to the
    /// caller of the concept operation.
    fn stream(&self, request: TransactionRequest) -> ConceptResult<Box<dyn ResponseChannel + '_>>;

    /// Options used to decode concepts received through this transaction
    fn decode_config(&self) -> DecodeConfig {
        DecodeConfig::default()
    }
}

/// Pull side of one streamed request
pub trait ResponseChannel {
    /// Block until the next response part arrives
    fn take(&mut self) -> ConceptResult<ResponsePart>;

    /// Send a follow-up request on the same stream (e.g. stream continue)
    fn dispatch(&mut self, request: TransactionRequest) -> ConceptResult<()>;
}
