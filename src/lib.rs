//! Triplesieve: context-scoped filtering of extraction output
//!
//! Extractors report what they find as a stream of handler calls
//! (documents, contexts, namespaces, triples). Triplesieve sits between
//! the extractors and the consumer of that stream and can hold back a
//! whole context until there is evidence its output was intended.
//!
//! # Core Concepts
//!
//! - **Handlers**: every stage implements [`TripleHandler`]
//! - **Router**: [`ContextRouter`] blocks, buffers, flushes or discards
//!   the events of individual contexts
//! - **Policies**: [`IgnoreAccidentalRdfa`] decides when to block and unblock
//!
//! # Example
//!
//! ```
//! use triplesieve::{DocumentId, ExtractionContext, IgnoreAccidentalRdfa, Iri, RecordingHandler, Term, TripleHandler};
//!
//! let doc = DocumentId::from("http://example.org/");
//! let ctx = ExtractionContext::with_id("c1", "html-rdfa", doc.clone());
//! let mut policy = IgnoreAccidentalRdfa::new(RecordingHandler::new());
//!
//! policy.start_document(&doc).unwrap();
//! policy.open_context(&ctx).unwrap();
//! policy
//!     .receive_triple(
//!         Term::iri("http://example.org/"),
//!         Iri::new("http://www.w3.org/1999/xhtml/vocab#stylesheet"),
//!         Term::iri("http://example.org/style.css"),
//!         &ctx,
//!     )
//!     .unwrap();
//! policy.close_context(&ctx).unwrap();
//! policy.end_document(&doc).unwrap();
//!
//! // Only the document boundaries made it through
//! assert_eq!(policy.into_inner().events().len(), 2);
//! ```

pub mod filter;
pub mod handler;
pub mod model;

pub use filter::{
    ConfigError, ContextRouter, ContextState, IgnoreAccidentalRdfa, PolicyConfig,
    RDFA_EXTRACTOR_NAME, XHTML_VOCAB_NS,
};
pub use handler::{
    event_lines, read_events, replay, replay_lines, CountingHandler, EventLines, HandlerCounts,
    HandlerError, HandlerEvent, HandlerResult, JsonLinesWriter, NTriplesWriter,
    RecordingHandler, TripleHandler,
};
pub use model::{ContextId, DocumentId, ExtractionContext, Iri, Term};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
