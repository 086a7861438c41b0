//! Statement data model shared by extractors, filters and sinks

mod context;
mod term;

pub use context::{ContextId, DocumentId, ExtractionContext};
pub use term::{Iri, Term};
