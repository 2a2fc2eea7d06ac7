//! Mapping configuration
//!
//! A mapping is a named storage target that uploadable fields reference by
//! name. Hosts either build the table in code or deserialize it from their
//! own configuration files; the registry cross-checks every declared field
//! against this table when it is built.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AttachError, AttachResult};

/// A named storage mapping: where files for a family of fields are stored
/// and under which URI prefix they are served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Storage target the upload handler writes into; how the value is
    /// interpreted (directory, bucket prefix) is up to the handler.
    pub upload_destination: String,
    /// Public URI prefix for stored files.
    #[serde(default)]
    pub uri_prefix: String,
}

impl MappingConfig {
    pub fn new(upload_destination: impl Into<String>) -> Self {
        MappingConfig {
            upload_destination: upload_destination.into(),
            uri_prefix: String::new(),
        }
    }

    pub fn with_uri_prefix(mut self, uri_prefix: impl Into<String>) -> Self {
        self.uri_prefix = uri_prefix.into();
        self
    }

    fn validate(&self, name: &str) -> AttachResult<()> {
        if self.upload_destination.trim().is_empty() {
            return Err(AttachError::InvalidMapping {
                name: name.to_string(),
                reason: "upload_destination must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// The mapping table uploadable fields reference by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mappings {
    mappings: HashMap<String, MappingConfig>,
}

impl Mappings {
    pub fn new() -> Self {
        Mappings::default()
    }

    /// Add a mapping, builder-style. A repeated name replaces the earlier entry.
    pub fn mapping(mut self, name: impl Into<String>, config: MappingConfig) -> Self {
        self.mappings.insert(name.into(), config);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, config: MappingConfig) {
        self.mappings.insert(name.into(), config);
    }

    pub fn get(&self, name: &str) -> Option<&MappingConfig> {
        self.mappings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mappings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn validate(&self) -> AttachResult<()> {
        for (name, config) in &self.mappings {
            config.validate(name)?;
        }
        Ok(())
    }
}
