//! Well-known names the default policy configuration refers to

/// XHTML vocabulary namespace. RDFa maps bare `rel`/`rev` values
/// (`stylesheet`, `alternate`, `icon`, ...) into it.
pub const XHTML_VOCAB_NS: &str = "http://www.w3.org/1999/xhtml/vocab#";

/// Extractor name of the HTML RDFa extractor
pub const RDFA_EXTRACTOR_NAME: &str = "html-rdfa";
