//! TripleHandler trait — the event contract every stage implements
//!
//! Extractors call a handler; filters are handlers that wrap another
//! handler; sinks are handlers at the end of the chain. All calls are
//! synchronous and happen in document order.

use crate::model::{ContextId, DocumentId, ExtractionContext, Iri, Term};
use thiserror::Error;

/// Errors surfaced by a handler call.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// An event arrived outside the required lifecycle ordering
    #[error("protocol violation: {0}")]
    Protocol(String),
    /// An event referenced a context that was never opened or is already closed
    #[error("unknown context: {0}")]
    UnknownContext(ContextId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    pub(crate) fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

/// Result type for handler calls
pub type HandlerResult<T> = Result<T, HandlerError>;

/// A consumer of extraction events.
///
/// Callers follow the order `start_document → {open_context →
/// {receive_namespace | receive_triple}* → close_context}* → end_document`,
/// repeated per document, then `close` once. Contexts may interleave.
pub trait TripleHandler {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()>;

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()>;

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        context: &ExtractionContext,
    ) -> HandlerResult<()>;

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()>;

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()>;

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()>;

    /// Size hint for the document being processed. Carries no contract.
    fn set_content_length(&mut self, _content_length: u64) -> HandlerResult<()> {
        Ok(())
    }

    /// Terminal shutdown. No further calls are valid afterwards.
    fn close(&mut self) -> HandlerResult<()>;
}

impl<H: TripleHandler + ?Sized> TripleHandler for Box<H> {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        (**self).start_document(document)
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        (**self).open_context(context)
    }

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        (**self).receive_triple(subject, predicate, object, context)
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        (**self).receive_namespace(prefix, uri, context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        (**self).close_context(context)
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        (**self).end_document(document)
    }

    fn set_content_length(&mut self, content_length: u64) -> HandlerResult<()> {
        (**self).set_content_length(content_length)
    }

    fn close(&mut self) -> HandlerResult<()> {
        (**self).close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        let err = HandlerError::UnknownContext(ContextId::from("ctx-9"));
        assert_eq!(err.to_string(), "unknown context: ctx-9");

        let err = HandlerError::protocol("document already open");
        assert_eq!(err.to_string(), "protocol violation: document already open");
    }
}
