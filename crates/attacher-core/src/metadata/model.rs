//! In-memory upload metadata, as produced by the driver.

use crate::error::{AttachError, AttachResult};

/// Metadata for one uploadable property of a mapped entity type.
///
/// All property values are root-relative dot-separated paths; fields
/// discovered inside embedded objects carry the embedding prefix on the
/// field path and every companion path alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Name of the storage mapping this field belongs to.
    pub mapping: String,
    /// Path of the property holding the staged upload.
    pub property: String,
    pub file_name_property: Option<String>,
    pub size_property: Option<String>,
    pub mime_type_property: Option<String>,
    pub original_name_property: Option<String>,
    pub dimensions_property: Option<String>,
}

/// Upload metadata for one mapped entity type.
///
/// Built once by the metadata driver during registry construction and
/// immutable afterward. Fields iterate in declaration order; property paths
/// are unique within an instance.
#[derive(Debug, Clone)]
pub struct EntityMetadata {
    entity: &'static str,
    resources: Vec<&'static str>,
    fields: Vec<FieldMetadata>,
}

impl EntityMetadata {
    pub(crate) fn new(entity: &'static str) -> Self {
        EntityMetadata {
            entity,
            resources: vec![entity],
            fields: Vec::new(),
        }
    }

    /// Name of the entity type this metadata belongs to. Never changes during
    /// embedded discovery; embedded types show up in [`resources`] instead.
    ///
    /// [`resources`]: EntityMetadata::resources
    pub fn name(&self) -> &'static str {
        self.entity
    }

    /// Names of the types whose declarations contributed to this metadata:
    /// the entity itself followed by every embedded type reached during
    /// discovery.
    pub fn resources(&self) -> &[&'static str] {
        &self.resources
    }

    /// Uploadable fields in declaration order.
    pub fn fields(&self) -> &[FieldMetadata] {
        &self.fields
    }

    /// Look up a field by its property path.
    pub fn field(&self, property: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.property == property)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn push_resource(&mut self, resource: &'static str) {
        self.resources.push(resource);
    }

    pub(crate) fn insert(&mut self, field: FieldMetadata) -> AttachResult<()> {
        if self.field(&field.property).is_some() {
            return Err(AttachError::DuplicateProperty {
                entity: self.entity.to_string(),
                property: field.property,
            });
        }
        self.fields.push(field);
        Ok(())
    }
}
