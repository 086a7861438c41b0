//! Writing sinks: N-Triples and JSON-lines

use super::events::HandlerEvent;
use super::traits::{HandlerResult, TripleHandler};
use crate::model::{DocumentId, ExtractionContext, Iri, Term};
use std::io::Write;

/// Writes each statement as one N-Triples line.
///
/// Namespace declarations and lifecycle events produce no output.
pub struct NTriplesWriter<W: Write> {
    out: W,
}

impl<W: Write> NTriplesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TripleHandler for NTriplesWriter<W> {
    fn start_document(&mut self, _document: &DocumentId) -> HandlerResult<()> {
        Ok(())
    }

    fn open_context(&mut self, _context: &ExtractionContext) -> HandlerResult<()> {
        Ok(())
    }

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        _context: &ExtractionContext,
    ) -> HandlerResult<()> {
        writeln!(self.out, "{} {} {} .", subject, predicate, object)?;
        Ok(())
    }

    fn receive_namespace(
        &mut self,
        _prefix: String,
        _uri: String,
        _context: &ExtractionContext,
    ) -> HandlerResult<()> {
        Ok(())
    }

    fn close_context(&mut self, _context: &ExtractionContext) -> HandlerResult<()> {
        Ok(())
    }

    fn end_document(&mut self, _document: &DocumentId) -> HandlerResult<()> {
        self.out.flush()?;
        Ok(())
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Writes every call as a `HandlerEvent` JSON line (the replay format).
pub struct JsonLinesWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &HandlerEvent) -> HandlerResult<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> TripleHandler for JsonLinesWriter<W> {
    fn start_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::StartDocument {
            document: document.clone(),
        })
    }

    fn open_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::OpenContext {
            context: context.clone(),
        })
    }

    fn receive_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::ReceiveTriple {
            subject,
            predicate,
            object,
            context: context.clone(),
        })
    }

    fn receive_namespace(
        &mut self,
        prefix: String,
        uri: String,
        context: &ExtractionContext,
    ) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::ReceiveNamespace {
            prefix,
            uri,
            context: context.clone(),
        })
    }

    fn close_context(&mut self, context: &ExtractionContext) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::CloseContext {
            context: context.clone(),
        })
    }

    fn end_document(&mut self, document: &DocumentId) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::EndDocument {
            document: document.clone(),
        })?;
        self.out.flush()?;
        Ok(())
    }

    fn set_content_length(&mut self, content_length: u64) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::SetContentLength {
            length: content_length,
        })
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.write_event(&HandlerEvent::Close)?;
        self.out.flush()?;
        Ok(())
    }
}
