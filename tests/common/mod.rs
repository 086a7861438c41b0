//! Common fixtures for triplesieve integration tests
//!
//! Builds handler event streams the way an extractor host would emit
//! them, and pulls the interesting parts back out of a recording.

#![allow(dead_code)]

use triplesieve::{
    ContextId, DocumentId, ExtractionContext, HandlerEvent, Iri, Term, RDFA_EXTRACTOR_NAME,
    XHTML_VOCAB_NS,
};

pub const DOC: &str = "http://example.org/page.html";

pub fn doc() -> DocumentId {
    DocumentId::from(DOC)
}

pub fn context(id: &str, extractor: &str) -> ExtractionContext {
    ExtractionContext::with_id(id, extractor, doc())
}

pub fn rdfa_context(id: &str) -> ExtractionContext {
    context(id, RDFA_EXTRACTOR_NAME)
}

/// Fluent builder for an upstream event stream.
#[derive(Debug, Default)]
pub struct Stream {
    events: Vec<HandlerEvent>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self) -> Self {
        self.events.push(HandlerEvent::StartDocument { document: doc() });
        self
    }

    pub fn open(mut self, ctx: &ExtractionContext) -> Self {
        self.events.push(HandlerEvent::OpenContext {
            context: ctx.clone(),
        });
        self
    }

    pub fn triple(mut self, ctx: &ExtractionContext, predicate: &str, object: &str) -> Self {
        self.events.push(HandlerEvent::ReceiveTriple {
            subject: Term::iri(DOC),
            predicate: Iri::new(predicate),
            object: Term::literal(object),
            context: ctx.clone(),
        });
        self
    }

    /// Statement with a predicate in the XHTML vocabulary
    pub fn boilerplate(self, ctx: &ExtractionContext, local: &str) -> Self {
        let predicate = format!("{}{}", XHTML_VOCAB_NS, local);
        self.triple(ctx, &predicate, local)
    }

    pub fn namespace(mut self, ctx: &ExtractionContext, prefix: &str, uri: &str) -> Self {
        self.events.push(HandlerEvent::ReceiveNamespace {
            prefix: prefix.to_string(),
            uri: uri.to_string(),
            context: ctx.clone(),
        });
        self
    }

    pub fn close(mut self, ctx: &ExtractionContext) -> Self {
        self.events.push(HandlerEvent::CloseContext {
            context: ctx.clone(),
        });
        self
    }

    pub fn end(mut self) -> Self {
        self.events.push(HandlerEvent::EndDocument { document: doc() });
        self
    }

    pub fn shutdown(mut self) -> Self {
        self.events.push(HandlerEvent::Close);
        self
    }

    pub fn build(self) -> Vec<HandlerEvent> {
        self.events
    }
}

/// Keep only the events belonging to one context
pub fn for_context(events: &[HandlerEvent], id: &ContextId) -> Vec<HandlerEvent> {
    events
        .iter()
        .filter(|e| e.context().map(|c| &c.id == id).unwrap_or(false))
        .cloned()
        .collect()
}

/// Compact labels ("open:a", "triple:a:<object>", ...) for order assertions
pub fn labels(events: &[HandlerEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| match e {
            HandlerEvent::StartDocument { .. } => "start".to_string(),
            HandlerEvent::OpenContext { context } => format!("open:{}", context.id),
            HandlerEvent::ReceiveTriple {
                object, context, ..
            } => match object {
                Term::Literal { value, .. } => format!("triple:{}:{}", context.id, value),
                other => format!("triple:{}:{}", context.id, other),
            },
            HandlerEvent::ReceiveNamespace {
                prefix, context, ..
            } => format!("ns:{}:{}", context.id, prefix),
            HandlerEvent::CloseContext { context } => format!("close:{}", context.id),
            HandlerEvent::EndDocument { .. } => "end".to_string(),
            HandlerEvent::SetContentLength { length } => format!("length:{}", length),
            HandlerEvent::Close => "shutdown".to_string(),
        })
        .collect()
}
