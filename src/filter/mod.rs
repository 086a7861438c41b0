//! Filtering layer: the context router and the policies that steer it

mod accidental;
mod config;
mod router;
mod vocab;

pub use accidental::IgnoreAccidentalRdfa;
pub use config::{ConfigError, PolicyConfig};
pub use router::{ContextRouter, ContextState};
pub use vocab::{RDFA_EXTRACTOR_NAME, XHTML_VOCAB_NS};
