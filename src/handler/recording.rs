//! RecordingHandler: keeps every call it receives as a `HandlerEvent`

use super::events::HandlerEvent;
use super::traits::{HandlerResult, TripleHandler};
use crate::model::{ContextId, DocumentId, ExtractionContext, Iri, Term};

/// A sink that records the calls it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingHandler {
    events: Vec<HandlerEvent>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HandlerEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<HandlerEvent> {
        self.events
    }

    /// Events recorded for one context, in order
    pub fn events_for(&self, id: &ContextId) -> Vec<&HandlerEvent> {
        self.events
            .iter()
            .filter(|e| e.context().map(|c| &c.id == id).unwrap_or(false))
            .collect()
    }

    /// True if any event for this context reached the sink
    pub fn saw_context(&self, id: &ContextId) -> bool {
        !self.events_for(id).is_empty()
    }
}

impl TripleHandler for RecordingHandler {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.events.push(HandlerEvent::StartDocument {
            document: document.clone(),
        });
        Ok(())
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.events.push(HandlerEvent::OpenContext {
            context: context.clone(),
        });
        Ok(())
    }

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.events.push(HandlerEvent::ReceiveTriple {
            subject,
            predicate,
            object,
            context: context.clone(),
        });
        Ok(())
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.events.push(HandlerEvent::ReceiveNamespace {
            prefix,
            uri,
            context: context.clone(),
        });
        Ok(())
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.events.push(HandlerEvent::CloseContext {
            context: context.clone(),
        });
        Ok(())
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.events.push(HandlerEvent::EndDocument {
            document: document.clone(),
        });
        Ok(())
    }

    fn set_content_length(&mut self, content_length: u64) -> HandlerResult<()> {
        self.events.push(HandlerEvent::SetContentLength {
            length: content_length,
        });
        Ok(())
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.events.push(HandlerEvent::Close);
        Ok(())
    }
}

/// Records like [`RecordingHandler`] but rejects every statement with an IO error.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingHandler {
    pub(crate) inner: RecordingHandler,
}

#[cfg(test)]
impl TripleHandler for FailingHandler {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.inner.start_document(document)
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.inner.open_context(context)
    }

    fn receive_triple(
        &mut self,
        _subject: Term,
        _predicate: Iri,
        _object: Term,
        _context: &ExtractionContext,
    ) -> HandlerResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink gone").into())
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.inner.receive_namespace(prefix, uri, context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.inner.close_context(context)
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.inner.end_document(document)
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.inner.close()
    }
}
