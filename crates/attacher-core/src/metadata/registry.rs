//! Metadata registry
//!
//! The registry maps entity types to their upload metadata. It is built once
//! at startup from explicit registrations, validated against the mapping
//! table, and read-only afterward; share it across threads with `Arc`.
//! Building runs the driver exactly once per registered type, which replaces
//! lazy per-class memoization with an up-front equivalent.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use tracing::debug;

use crate::config::{MappingConfig, Mappings};
use crate::error::{AttachError, AttachResult};

use super::descriptor::Uploadable;
use super::driver::load_metadata;
use super::model::EntityMetadata;

#[derive(Debug)]
pub struct MetadataRegistry {
    entities: HashMap<TypeId, EntityMetadata>,
    mappings: Mappings,
}

impl MetadataRegistry {
    pub fn builder() -> MetadataRegistryBuilder {
        MetadataRegistryBuilder {
            mappings: Mappings::new(),
            registrations: Vec::new(),
        }
    }

    /// Metadata for the given entity type, or `None` when the type was never
    /// registered (i.e. it is not uploadable).
    pub fn get(&self, entity_type: TypeId) -> Option<&EntityMetadata> {
        self.entities.get(&entity_type)
    }

    pub fn get_for<T: 'static>(&self) -> Option<&EntityMetadata> {
        self.get(TypeId::of::<T>())
    }

    /// Metadata for the given entity type, failing with `MetadataNotFound`
    /// for never-registered types. `entity` names the type in the error.
    pub fn require(&self, entity_type: TypeId, entity: &str) -> AttachResult<&EntityMetadata> {
        self.get(entity_type).ok_or_else(|| AttachError::MetadataNotFound {
            entity: entity.to_string(),
        })
    }

    pub fn require_for<T: 'static>(&self) -> AttachResult<&EntityMetadata> {
        self.require(TypeId::of::<T>(), type_name::<T>())
    }

    pub fn is_uploadable(&self, entity_type: TypeId) -> bool {
        self.entities.contains_key(&entity_type)
    }

    /// The mapping a field references by name.
    pub fn mapping(&self, name: &str) -> Option<&MappingConfig> {
        self.mappings.get(name)
    }

    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    /// Number of registered entity types.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

pub struct MetadataRegistryBuilder {
    mappings: Mappings,
    // Loading is deferred to build() so declaration mistakes surface there.
    registrations: Vec<(TypeId, fn() -> AttachResult<EntityMetadata>)>,
}

impl MetadataRegistryBuilder {
    pub fn mappings(mut self, mappings: Mappings) -> Self {
        self.mappings = mappings;
        self
    }

    pub fn register<T: Uploadable>(mut self) -> Self {
        self.registrations.push((TypeId::of::<T>(), load_metadata::<T>));
        self
    }

    /// Run the driver for every registration and cross-validate each field's
    /// mapping name against the mapping table.
    pub fn build(self) -> AttachResult<MetadataRegistry> {
        self.mappings.validate()?;

        let mut entities = HashMap::with_capacity(self.registrations.len());
        for (entity_type, load) in self.registrations {
            let metadata = load()?;
            for field in metadata.fields() {
                if !self.mappings.contains(&field.mapping) {
                    return Err(AttachError::MappingNotFound {
                        entity: metadata.name().to_string(),
                        property: field.property.clone(),
                        mapping: field.mapping.clone(),
                    });
                }
            }
            debug!(
                entity = metadata.name(),
                fields = metadata.len(),
                "registered uploadable entity"
            );
            entities.insert(entity_type, metadata);
        }

        Ok(MetadataRegistry {
            entities,
            mappings: self.mappings,
        })
    }
}
