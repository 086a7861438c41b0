//! CountingHandler: pass-through wrapper that tallies what went by

use super::traits::{HandlerResult, TripleHandler};
use crate::model::{DocumentId, ExtractionContext, Iri, Term};

/// Totals observed by a [`CountingHandler`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerCounts {
    pub documents: usize,
    pub contexts: usize,
    pub triples: usize,
    pub namespaces: usize,
}

/// Forwards every call to the wrapped handler and counts them.
pub struct CountingHandler<H> {
    inner: H,
    counts: HandlerCounts,
}

impl<H: TripleHandler> CountingHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            counts: HandlerCounts::default(),
        }
    }

    pub fn counts(&self) -> HandlerCounts {
        self.counts
    }

    pub fn get_ref(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: TripleHandler> TripleHandler for CountingHandler<H> {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.counts.documents += 1;
        self.inner.start_document(document)
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.counts.contexts += 1;
        self.inner.open_context(context)
    }

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.counts.triples += 1;
        self.inner.receive_triple(subject, predicate, object, context)
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.counts.namespaces += 1;
        self.inner.receive_namespace(prefix, uri, context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.inner.close_context(context)
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.inner.end_document(document)
    }

    fn set_content_length(&mut self, content_length: u64) -> HandlerResult<()> {
        self.inner.set_content_length(content_length)
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.inner.close()
    }
}
