//! Lazy owner stream
//!
//! Flattens the pages of an owners response into decoded [`Thing`]s. A page
//! is pulled from the transaction only once the previous one has been fully
//! consumed, so stopping early never fetches further pages.
//!
//! The first error (malformed entry, unexpected part, transport failure) is
//! yielded once and ends the stream; owners yielded before it stay valid.

use std::fmt;
use std::iter::FusedIterator;

use thingdb_core::wire::{ResponsePart, ThingMessage};
use thingdb_core::{ConceptError, ConceptResult, DecodeConfig};

use crate::decode;
use crate::response::ResponseParts;
use crate::thing::Thing;
use crate::LOG_TARGET;

/// Finite, non-restartable iterator over the owners of an attribute
pub struct Owners<'t> {
    parts: ResponseParts<'t>,
    page: std::vec::IntoIter<ThingMessage>,
    config: DecodeConfig,
    finished: bool,
}

impl<'t> Owners<'t> {
    pub(crate) fn new(parts: ResponseParts<'t>, config: DecodeConfig) -> Self {
        Self {
            parts,
            page: Vec::new().into_iter(),
            config,
            finished: false,
        }
    }

    fn fail(&mut self, err: ConceptError) -> Option<ConceptResult<Thing>> {
        tracing::warn!(
            target: LOG_TARGET,
            request_id = %self.parts.request_id(),
            error = %err,
            "Owner stream failed"
        );
        self.finished = true;
        Some(Err(err))
    }
}

impl Iterator for Owners<'_> {
    type Item = ConceptResult<Thing>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if let Some(msg) = self.page.next() {
                return match decode::decode_thing(&msg, self.config) {
                    Ok(thing) => Some(Ok(thing)),
                    Err(e) => self.fail(e),
                };
            }

            match self.parts.next() {
                None => self.finished = true,
                Some(Ok(ResponsePart::AttributeGetOwners { things })) => {
                    tracing::trace!(
                        target: LOG_TARGET,
                        request_id = %self.parts.request_id(),
                        owners = things.len(),
                        "Owner page received"
                    );
                    self.page = things.into_iter();
                }
                // consumed by ResponseParts; named so a new part kind must be handled here
                Some(Ok(part @ (ResponsePart::Stream(_) | ResponsePart::Unset))) => {
                    return self.fail(ConceptError::malformed(format!(
                        "control part leaked into owner stream: {:?}",
                        part
                    )));
                }
                Some(Err(e)) => return self.fail(e),
            }
        }
        None
    }
}

impl FusedIterator for Owners<'_> {}

impl fmt::Debug for Owners<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owners")
            .field("request_id", &self.parts.request_id())
            .field("buffered", &self.page.len())
            .field("finished", &self.finished)
            .finish()
    }
}
