//! Handler events — one record per `TripleHandler` call
//!
//! Used as the JSON-lines interchange format (one event per line) and by
//! the recording sink. Replaying a recorded stream against a handler
//! reproduces the original call sequence.

use super::traits::{HandlerError, HandlerResult, TripleHandler};
use crate::model::{DocumentId, ExtractionContext, Iri, Term};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A single handler call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HandlerEvent {
    StartDocument {
        document: DocumentId,
    },
    OpenContext {
        context: ExtractionContext,
    },
    ReceiveTriple {
        subject: Term,
        predicate: Iri,
        object: Term,
        context: ExtractionContext,
    },
    ReceiveNamespace {
        prefix: String,
        uri: String,
        context: ExtractionContext,
    },
    CloseContext {
        context: ExtractionContext,
    },
    EndDocument {
        document: DocumentId,
    },
    SetContentLength {
        length: u64,
    },
    Close,
}

impl HandlerEvent {
    /// Deliver this event to a handler.
    pub fn dispatch<H: TripleHandler + ?Sized>(self, handler: &mut H) -> HandlerResult<()> {
        match self {
            Self::StartDocument { document } => handler.start_document(&document),
            Self::OpenContext { context } => handler.open_context(&context),
            Self::ReceiveTriple {
                subject,
                predicate,
                object,
                context,
            } => handler.receive_triple(subject, predicate, object, &context),
            Self::ReceiveNamespace {
                prefix,
                uri,
                context,
            } => handler.receive_namespace(prefix, uri, &context),
            Self::CloseContext { context } => handler.close_context(&context),
            Self::EndDocument { document } => handler.end_document(&document),
            Self::SetContentLength { length } => handler.set_content_length(length),
            Self::Close => handler.close(),
        }
    }

    /// The context this event belongs to, if any
    pub fn context(&self) -> Option<&ExtractionContext> {
        match self {
            Self::OpenContext { context }
            | Self::ReceiveTriple { context, .. }
            | Self::ReceiveNamespace { context, .. }
            | Self::CloseContext { context } => Some(context),
            _ => None,
        }
    }
}

/// Dispatch events in order, stopping at the first error.
pub fn replay<H, I>(events: I, handler: &mut H) -> HandlerResult<()>
where
    H: TripleHandler + ?Sized,
    I: IntoIterator<Item = HandlerEvent>,
{
    for event in events {
        event.dispatch(handler)?;
    }
    Ok(())
}

/// Lazily parsed JSON-lines event stream.
///
/// Blank lines and lines starting with `#` are skipped.
pub struct EventLines<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Iterator for EventLines<R> {
    type Item = HandlerResult<HandlerEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(serde_json::from_str(trimmed).map_err(|e| {
                tracing::error!(line = self.line_no, error = %e, "malformed event");
                HandlerError::Serialization(e)
            }));
        }
    }
}

/// Iterate over the events of a JSON-lines stream as they are read.
pub fn event_lines<R: BufRead>(reader: R) -> EventLines<R> {
    EventLines {
        lines: reader.lines(),
        line_no: 0,
    }
}

/// Parse a whole JSON-lines event stream.
pub fn read_events<R: BufRead>(reader: R) -> HandlerResult<Vec<HandlerEvent>> {
    event_lines(reader).collect()
}

/// Dispatch each event of a JSON-lines stream as soon as it is parsed.
///
/// Returns the number of events dispatched; stops at the first parse or
/// handler error.
pub fn replay_lines<R, H>(reader: R, handler: &mut H) -> HandlerResult<usize>
where
    R: BufRead,
    H: TripleHandler + ?Sized,
{
    let mut dispatched = 0;
    for event in event_lines(reader) {
        event?.dispatch(handler)?;
        dispatched += 1;
    }
    Ok(dispatched)
}
