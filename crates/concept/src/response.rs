//! Response part iterator
//!
//! Turns the raw part channel of a streamed request into an iterator of data
//! parts. Control parts are consumed here:
//! - `Stream(Continue)`: the server paused, send a continue request and keep pulling
//! - `Stream(Done)`: the stream ended
//! - `Unset`: the server sent an empty response, which is a protocol error
//!
//! Parts are pulled one at a time, only when the consumer asks for the next
//! one. After the stream ends or fails the iterator stays exhausted.

use std::fmt;
use std::iter::FusedIterator;

use thingdb_core::wire::{ResponsePart, StreamState, TransactionRequest};
use thingdb_core::{ConceptError, ConceptResult};
use uuid::Uuid;

use crate::transaction::ResponseChannel;
use crate::LOG_TARGET;

/// Iterator over the data parts of one streamed request
pub struct ResponseParts<'t> {
    request_id: Uuid,
    channel: Box<dyn ResponseChannel + 't>,
    done: bool,
}

impl<'t> ResponseParts<'t> {
    /// Wrap the channel opened for `request_id`
    pub fn new(request_id: Uuid, channel: Box<dyn ResponseChannel + 't>) -> Self {
        Self {
            request_id,
            channel,
            done: false,
        }
    }

    /// Id of the request these parts answer
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    fn fail(&mut self, err: ConceptError) -> Option<ConceptResult<ResponsePart>> {
        self.done = true;
        Some(Err(err))
    }
}

impl Iterator for ResponseParts<'_> {
    type Item = ConceptResult<ResponsePart>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let part = match self.channel.take() {
                Ok(part) => part,
                Err(e) => return self.fail(e),
            };

            match part {
                ResponsePart::Stream(StreamState::Done) => {
                    tracing::trace!(target: LOG_TARGET, request_id = %self.request_id, "Stream done");
                    self.done = true;
                }
                ResponsePart::Stream(StreamState::Continue) => {
                    tracing::trace!(target: LOG_TARGET, request_id = %self.request_id, "Stream paused, continuing");
                    let request = TransactionRequest::stream_continue(self.request_id);
                    if let Err(e) = self.channel.dispatch(request) {
                        return self.fail(e);
                    }
                }
                ResponsePart::Unset => {
                    return self.fail(ConceptError::malformed(format!(
                        "missing response for request {}",
                        self.request_id
                    )));
                }
                data => return Some(Ok(data)),
            }
        }
        None
    }
}

impl FusedIterator for ResponseParts<'_> {}

impl fmt::Debug for ResponseParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseParts")
            .field("request_id", &self.request_id)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
