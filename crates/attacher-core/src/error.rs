//! Error types module
//!
//! All failures surfaced by the attachment machinery are unified under the
//! `AttachError` enum, covering metadata registration and lookup, mapping
//! configuration, and upload-handler failures.
//!
//! Handler failures cross this layer unchanged: the `Handler` variant is
//! transparent, so callers see the collaborator's own error, not a wrapper.

use thiserror::Error;

/// Result type for attachment operations
pub type AttachResult<T> = Result<T, AttachError>;

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no upload metadata registered for `{entity}`")]
    MetadataNotFound { entity: String },

    #[error("duplicate uploadable property `{property}` on `{entity}`")]
    DuplicateProperty { entity: String, property: String },

    #[error("field `{property}` on `{entity}` references unknown mapping `{mapping}`")]
    MappingNotFound {
        entity: String,
        property: String,
        mapping: String,
    },

    #[error("`{entity}` has no uploadable property `{property}`")]
    UnknownProperty { entity: String, property: String },

    #[error("invalid mapping `{name}`: {reason}")]
    InvalidMapping { name: String, reason: String },

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}
