//! ContextRouter — per-context blocking, buffering and flushing
//!
//! Each open context is either Open (events forward immediately) or
//! Blocked (events queue in a FIFO owned by the router). Unblocking
//! flushes the queue downstream in arrival order; closing a Blocked
//! context throws the queue away.
//!
//! A context's downstream `open_context` is sent lazily, right before the
//! first event of that context that actually goes downstream (a live
//! event, a flushed buffer, or the close of an Open context). A context
//! that is Blocked whenever it has something to say never shows up.

use crate::handler::{HandlerError, HandlerResult, TripleHandler};
use crate::model::{ContextId, DocumentId, ExtractionContext, Iri, Term};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// Forwarding state of an open context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Events pass straight through
    Open,
    /// Events accumulate in the context's buffer
    Blocked,
}

/// An event held back while its context is blocked.
#[derive(Debug)]
enum Buffered {
    Triple {
        subject: Term,
        predicate: Iri,
        object: Term,
    },
    Namespace {
        prefix: String,
        uri: String,
    },
}

#[derive(Debug)]
struct ContextSlot {
    context: ExtractionContext,
    blocked: bool,
    /// Whether `open_context` has been forwarded downstream
    announced: bool,
    buffer: Vec<Buffered>,
}

impl ContextSlot {
    fn new(context: ExtractionContext, blocked: bool) -> Self {
        Self {
            context,
            blocked,
            announced: false,
            buffer: Vec::new(),
        }
    }

    fn announce<H: TripleHandler>(&mut self, downstream: &mut H) -> HandlerResult<()> {
        if !self.announced {
            self.announced = true;
            downstream.open_context(&self.context)?;
        }
        Ok(())
    }

    /// Blocked → Open, releasing the buffer in arrival order.
    fn flush<H: TripleHandler>(&mut self, downstream: &mut H) -> HandlerResult<()> {
        if !self.blocked {
            return Ok(());
        }
        self.blocked = false;
        let buffered = std::mem::take(&mut self.buffer);
        debug!(
            context = %self.context.id,
            buffered = buffered.len(),
            "unblocking context"
        );
        if !buffered.is_empty() {
            self.announce(downstream)?;
        }
        for item in buffered {
            match item {
                Buffered::Triple {
                    subject,
                    predicate,
                    object,
                } => downstream.receive_triple(subject, predicate, object, &self.context)?,
                Buffered::Namespace { prefix, uri } => {
                    downstream.receive_namespace(prefix, uri, &self.context)?
                }
            }
        }
        Ok(())
    }

    /// End of the context's lifetime: forward the close, or drop the buffer.
    fn finish<H: TripleHandler>(mut self, downstream: &mut H) -> HandlerResult<()> {
        if self.blocked {
            debug!(
                context = %self.context.id,
                extractor = %self.context.extractor_name,
                discarded = self.buffer.len(),
                "discarding blocked context"
            );
            // Data already went downstream before the block: keep open/close balanced.
            if self.announced {
                downstream.close_context(&self.context)?;
            }
            return Ok(());
        }
        self.announce(downstream)?;
        downstream.close_context(&self.context)
    }
}

/// Routes extraction events to a downstream handler, holding back the
/// events of blocked contexts.
///
/// The router exclusively owns its downstream handler. It is itself a
/// [`TripleHandler`], so it can sit anywhere in a handler chain; policies
/// wrap it and steer it through [`block_context`](Self::block_context) and
/// [`unblock_context`](Self::unblock_context).
#[derive(Debug)]
pub struct ContextRouter<H> {
    downstream: H,
    document: Option<DocumentId>,
    /// Open contexts in the order they were opened
    contexts: IndexMap<ContextId, ContextSlot>,
    document_blocked: bool,
    closed: bool,
}

impl<H: TripleHandler> ContextRouter<H> {
    pub fn new(downstream: H) -> Self {
        Self {
            downstream,
            document: None,
            contexts: IndexMap::new(),
            document_blocked: false,
            closed: false,
        }
    }

    /// Suspend forwarding for a context. Idempotent.
    pub fn block_context(&mut self, id: &ContextId) -> HandlerResult<()> {
        self.ensure_usable()?;
        let slot = self
            .contexts
            .get_mut(id)
            .ok_or_else(|| HandlerError::UnknownContext(id.clone()))?;
        if !slot.blocked {
            slot.blocked = true;
            debug!(context = %id, announced = slot.announced, "blocking context");
        }
        Ok(())
    }

    /// Resume forwarding for a context, flushing anything it buffered. Idempotent.
    pub fn unblock_context(&mut self, id: &ContextId) -> HandlerResult<()> {
        self.ensure_usable()?;
        let slot = self
            .contexts
            .get_mut(id)
            .ok_or_else(|| HandlerError::UnknownContext(id.clone()))?;
        slot.flush(&mut self.downstream)
    }

    /// Block every open context, and every context opened later in this document.
    pub fn block_document(&mut self) -> HandlerResult<()> {
        self.ensure_usable()?;
        self.require_document("block_document")?;
        self.document_blocked = true;
        for slot in self.contexts.values_mut() {
            slot.blocked = true;
        }
        debug!(contexts = self.contexts.len(), "blocking document");
        Ok(())
    }

    /// Lift a document-wide block and flush every open context, in open order.
    pub fn unblock_document(&mut self) -> HandlerResult<()> {
        self.ensure_usable()?;
        self.require_document("unblock_document")?;
        self.document_blocked = false;
        for slot in self.contexts.values_mut() {
            slot.flush(&mut self.downstream)?;
        }
        Ok(())
    }

    /// State of an open context, or `None` if it is not open
    pub fn context_state(&self, id: &ContextId) -> Option<ContextState> {
        self.contexts.get(id).map(|slot| {
            if slot.blocked {
                ContextState::Blocked
            } else {
                ContextState::Open
            }
        })
    }

    /// Number of events currently held back for a context
    pub fn buffered_len(&self, id: &ContextId) -> usize {
        self.contexts.get(id).map(|s| s.buffer.len()).unwrap_or(0)
    }

    pub fn open_contexts(&self) -> usize {
        self.contexts.len()
    }

    pub fn current_document(&self) -> Option<&DocumentId> {
        self.document.as_ref()
    }

    pub fn get_ref(&self) -> &H {
        &self.downstream
    }

    pub fn get_mut(&mut self) -> &mut H {
        &mut self.downstream
    }

    pub fn into_inner(self) -> H {
        self.downstream
    }

    fn ensure_usable(&self) -> HandlerResult<()> {
        if self.closed {
            return Err(HandlerError::protocol("router already closed"));
        }
        Ok(())
    }

    fn require_document(&self, op: &str) -> HandlerResult<&DocumentId> {
        self.document
            .as_ref()
            .ok_or_else(|| HandlerError::protocol(format!("{} called with no open document", op)))
    }

    /// Forward a live event, or queue it if its context is blocked.
    fn route(&mut self, context: &ExtractionContext, item: Buffered) -> HandlerResult<()> {
        self.ensure_usable()?;
        let slot = self
            .contexts
            .get_mut(&context.id)
            .ok_or_else(|| HandlerError::UnknownContext(context.id.clone()))?;
        if slot.blocked {
            trace!(context = %context.id, queued = slot.buffer.len() + 1, "buffering event");
            slot.buffer.push(item);
            return Ok(());
        }
        slot.announce(&mut self.downstream)?;
        match item {
            Buffered::Triple {
                subject,
                predicate,
                object,
            } => self
                .downstream
                .receive_triple(subject, predicate, object, &slot.context),
            Buffered::Namespace { prefix, uri } => {
                self.downstream.receive_namespace(prefix, uri, &slot.context)
            }
        }
    }
}

impl<H: TripleHandler> TripleHandler for ContextRouter<H> {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.ensure_usable()?;
        if let Some(open) = &self.document {
            return Err(HandlerError::protocol(format!(
                "start_document({}) while document {} is still open",
                document, open
            )));
        }
        self.contexts.clear();
        self.document_blocked = false;
        self.document = Some(document.clone());
        self.downstream.start_document(document)
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.ensure_usable()?;
        self.require_document("open_context")?;
        if self.contexts.contains_key(&context.id) {
            return Err(HandlerError::protocol(format!(
                "context {} opened twice",
                context.id
            )));
        }
        let blocked = self.document_blocked;
        self.contexts
            .insert(context.id.clone(), ContextSlot::new(context.clone(), blocked));
        if blocked {
            debug!(context = %context.id, "context opened under document block");
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
        self.route(
            context,
            Buffered::Triple {
                subject,
                predicate,
                object,
            },
        )
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.route(context, Buffered::Namespace { prefix, uri })
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.ensure_usable()?;
        let slot = self
            .contexts
            .shift_remove(&context.id)
            .ok_or_else(|| HandlerError::UnknownContext(context.id.clone()))?;
        slot.finish(&mut self.downstream)
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.ensure_usable()?;
        let open = self.require_document("end_document")?;
        if open != document {
            return Err(HandlerError::protocol(format!(
                "end_document({}) does not match open document {}",
                document, open
            )));
        }
        let remaining = std::mem::take(&mut self.contexts);
        if !remaining.is_empty() {
            warn!(
                document = %document,
                contexts = remaining.len(),
                "document ended with contexts still open"
            );
        }
        self.document = None;
        self.document_blocked = false;
        for (_, slot) in remaining {
            slot.finish(&mut self.downstream)?;
        }
        self.downstream.end_document(document)
    }

    fn set_content_length(&mut self, content_length: u64) -> HandlerResult<()> {
        self.ensure_usable()?;
        self.downstream.set_content_length(content_length)
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.ensure_usable()?;
        if let Some(open) = &self.document {
            return Err(HandlerError::protocol(format!(
                "close() while document {} is still open",
                open
            )));
        }
        self.closed = true;
        self.downstream.close()
    }
}
