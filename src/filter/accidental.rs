//! IgnoreAccidentalRdfa — suppresses output of an extractor that only saw
//! "accidental" markup
//!
//! HTML pages use `rel`/`rev` for stylesheets, icons and feeds. An RDFa
//! extractor turns those into statements whose predicates all live in the
//! XHTML vocabulary. Such a context is held back from the moment it opens;
//! the first statement with a predicate outside the boilerplate namespace
//! releases it. A context that never sees one is discarded when it closes.

use super::config::PolicyConfig;
use super::router::ContextRouter;
use crate::handler::{HandlerResult, TripleHandler};
use crate::model::{DocumentId, ExtractionContext, Iri, Term};

/// A [`TripleHandler`] that drops the scrutinized extractor's contexts
/// unless they contain at least one non-boilerplate statement.
#[derive(Debug)]
pub struct IgnoreAccidentalRdfa<H> {
    router: ContextRouter<H>,
    config: PolicyConfig,
}

impl<H: TripleHandler> IgnoreAccidentalRdfa<H> {
    /// Wrap a downstream handler with the default configuration
    pub fn new(downstream: H) -> Self {
        Self::with_config(downstream, PolicyConfig::default())
    }

    pub fn with_config(downstream: H, config: PolicyConfig) -> Self {
        Self {
            router: ContextRouter::new(downstream),
            config,
        }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn router(&self) -> &ContextRouter<H> {
        &self.router
    }

    pub fn into_inner(self) -> H {
        self.router.into_inner()
    }

    fn is_scrutinized(&self, context: &ExtractionContext) -> bool {
        context.extractor_name == self.config.extractor_name
    }

    fn is_evidence(&self, predicate: &Iri) -> bool {
        !predicate.starts_with(&self.config.boilerplate_namespace)
    }
}

impl<H: TripleHandler> TripleHandler for IgnoreAccidentalRdfa<H> {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.router.start_document(document)
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.router.open_context(context)?;
        if self.is_scrutinized(context) {
            self.router.block_context(&context.id)?;
        }
        Ok(())
    }

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        if self.is_scrutinized(context) && self.is_evidence(&predicate) {
            self.router.unblock_context(&context.id)?;
        }
        self.router.receive_triple(subject, predicate, object, context)
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.router.receive_namespace(prefix, uri, context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.router.close_context(context)
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.router.end_document(document)
    }

    // Size hints are not forwarded.
    fn set_content_length(&mut self, _content_length: u64) -> HandlerResult<()> {
        Ok(())
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.router.close()
    }
}
