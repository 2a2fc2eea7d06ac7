//! Metadata driver: walks an entity's descriptor into [`EntityMetadata`].
//!
//! Fields declared on embedded value objects are discovered recursively and
//! addressed by root-relative paths (`photo.file` for a `file` field inside
//! an embedded `photo`). The entity's identity stays that of the root
//! descriptor throughout; embedded type names accumulate as resources.

use crate::error::AttachResult;

use super::descriptor::{EntityDescriptor, FieldDescriptor, PropertyDescriptor, Uploadable};
use super::model::{EntityMetadata, FieldMetadata};

/// Produce the full upload metadata for an `Uploadable` type.
///
/// A descriptor with no field declarations yields valid, empty metadata; the
/// marker alone is enough to participate. Fails with `DuplicateProperty`
/// when two declarations resolve to the same property path.
pub fn load_metadata<T: Uploadable>() -> AttachResult<EntityMetadata> {
    let descriptor = T::describe();
    let mut metadata = EntityMetadata::new(descriptor.name());
    collect_fields(&descriptor, &mut metadata, "")?;
    Ok(metadata)
}

fn collect_fields(
    descriptor: &EntityDescriptor,
    metadata: &mut EntityMetadata,
    prefix: &str,
) -> AttachResult<()> {
    for property in descriptor.properties() {
        match property {
            PropertyDescriptor::Field(field) => {
                metadata.insert(resolve_field(field, prefix))?;
            }
            PropertyDescriptor::Embedded { property, describe } => {
                let embedded = describe();
                metadata.push_resource(embedded.name());
                let nested = join_path(prefix, property);
                collect_fields(&embedded, metadata, &nested)?;
            }
        }
    }
    Ok(())
}

fn resolve_field(field: &FieldDescriptor, prefix: &str) -> FieldMetadata {
    let companion = |name: Option<&'static str>| name.map(|n| join_path(prefix, n));

    FieldMetadata {
        mapping: field.mapping.to_string(),
        property: join_path(prefix, field.property),
        file_name_property: companion(field.file_name_property),
        size_property: companion(field.size_property),
        mime_type_property: companion(field.mime_type_property),
        original_name_property: companion(field.original_name_property),
        dimensions_property: companion(field.dimensions_property),
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
