//! Upload handler contract
//!
//! The handler is the collaborator that actually stores files; this crate
//! only defines the seam. The lifecycle listener invokes `upload` once per
//! declared field, passing the entity through the narrow [`UploadTarget`]
//! view so handlers can extract staged content and write derived attributes
//! back without knowing the concrete entity type.

use async_trait::async_trait;

use crate::error::AttachResult;
use crate::file::{FieldAttribute, PendingFile};
use crate::metadata::FieldMetadata;

/// Property access the upload machinery needs from a mapped entity.
///
/// Properties are addressed by the root-relative dot-separated paths declared
/// in the entity's descriptor; an entity embedding value objects dispatches
/// into them itself.
pub trait UploadTarget: Send {
    /// Take the file staged on `property`, leaving the slot empty.
    ///
    /// `None` means nothing is staged, which handlers treat as "nothing to
    /// do" for this field.
    fn take_pending_file(&mut self, property: &str) -> Option<PendingFile>;

    /// Write a derived attribute onto a companion property.
    ///
    /// Fails with `UnknownProperty` when the entity does not recognize the
    /// path, which indicates a declaration/implementation mismatch.
    fn set_attribute(&mut self, property: &str, value: FieldAttribute) -> AttachResult<()>;
}

/// Stores staged files and populates companion properties.
///
/// Implementations read the field's mapping to locate the storage target,
/// extract the staged [`PendingFile`], store it, and write the derived
/// attributes back. Failures propagate to the caller unchanged and abort the
/// surrounding persistence operation; no retries happen at this layer.
#[async_trait]
pub trait UploadHandler: Send + Sync {
    async fn upload(
        &self,
        target: &mut dyn UploadTarget,
        field: &FieldMetadata,
    ) -> AttachResult<()>;
}
