//! Policy configuration
//!
//! Loaded from YAML; every field has a default so an empty file is valid.
//!
//! ```yaml
//! boilerplate_namespace: "http://www.w3.org/1999/xhtml/vocab#"
//! extractor_name: html-rdfa
//! ```

use super::vocab::{RDFA_EXTRACTOR_NAME, XHTML_VOCAB_NS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for [`IgnoreAccidentalRdfa`](super::IgnoreAccidentalRdfa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Predicates under this prefix do not count as evidence of intent
    #[serde(default = "default_boilerplate_namespace")]
    pub boilerplate_namespace: String,
    /// Extractor whose contexts are held back until evidence shows up
    #[serde(default = "default_extractor_name")]
    pub extractor_name: String,
}

fn default_boilerplate_namespace() -> String {
    XHTML_VOCAB_NS.to_string()
}

fn default_extractor_name() -> String {
    RDFA_EXTRACTOR_NAME.to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            boilerplate_namespace: default_boilerplate_namespace(),
            extractor_name: default_extractor_name(),
        }
    }
}

impl PolicyConfig {
    pub fn with_boilerplate_namespace(mut self, ns: impl Into<String>) -> Self {
        self.boilerplate_namespace = ns.into();
        self
    }

    pub fn with_extractor_name(mut self, name: impl Into<String>) -> Self {
        self.extractor_name = name.into();
        self
    }

    /// Parse a YAML document without validating it
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as all-defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file without validating it, for callers that
    /// still apply overrides
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::parse_yaml(&yaml)?;
        tracing::info!(path = %path.display(), "read policy config");
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boilerplate_namespace.is_empty() {
            // An empty prefix matches every predicate and would suppress everything
            return Err(ConfigError::Invalid(
                "boilerplate_namespace must not be empty".into(),
            ));
        }
        if self.extractor_name.is_empty() {
            return Err(ConfigError::Invalid("extractor_name must not be empty".into()));
        }
        Ok(())
    }
}
