//! Attacher Core Library
//!
//! This crate provides the metadata model, declarative descriptor surface,
//! metadata registry, mapping configuration, and the upload-handler contract
//! shared by all attacher components. Entity types declare which of their
//! properties carry uploaded files; the registry resolves those declarations
//! once at startup; the `attacher-orm` lifecycle listener then drives an
//! [`UploadHandler`] from persistence events.

pub mod config;
pub mod error;
pub mod file;
pub mod handler;
pub mod metadata;

// Re-export commonly used types
pub use config::{MappingConfig, Mappings};
pub use error::{AttachError, AttachResult};
pub use file::{FieldAttribute, PendingFile};
pub use handler::{UploadHandler, UploadTarget};
pub use metadata::{
    load_metadata, EntityDescriptor, EntityMetadata, FieldDescriptor, FieldMetadata,
    MetadataRegistry, MetadataRegistryBuilder, Uploadable,
};
