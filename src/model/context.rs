//! Documents and extraction contexts

use serde::{Deserialize, Serialize};

/// Extractor-chosen token naming one context; serializes as a plain string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(String);

impl ContextId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContextId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of the document an extraction run is working on (usually its URI)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One extractor's scope of output within a document.
///
/// Filters key their per-context state on `id`; `extractor_name` is what
/// policies match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionContext {
    /// Unique identifier
    pub id: ContextId,
    /// Name of the extractor producing this context's output (e.g. "html-rdfa")
    pub extractor_name: String,
    /// Document the extractor is running over
    pub document: DocumentId,
}

impl ExtractionContext {
    pub fn with_id(
        id: impl Into<ContextId>,
        extractor_name: impl Into<String>,
        document: DocumentId,
    ) -> Self {
        Self {
            id: id.into(),
            extractor_name: extractor_name.into(),
            document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_id_serializes_as_plain_string() {
        let id = ContextId::from("ctx:rdfa-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ctx:rdfa-1\"");
    }

    #[test]
    fn extraction_context_json_shape() {
        let ctx = ExtractionContext::with_id("c1", "html-rdfa", DocumentId::from("http://example.org/"));
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(value["extractor_name"], "html-rdfa");
        assert_eq!(value["document"], "http://example.org/");
    }
}
