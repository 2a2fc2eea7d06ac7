//! Upload metadata: declaration, discovery, and lookup.
//!
//! Hosts declare uploadable properties through the descriptor surface
//! ([`Uploadable`], [`EntityDescriptor`], [`FieldDescriptor`]), the driver
//! resolves declarations into [`EntityMetadata`], and the
//! [`MetadataRegistry`] holds the result for process-lifetime lookup.

mod descriptor;
mod driver;
mod model;
mod registry;

pub use descriptor::{EntityDescriptor, FieldDescriptor, Uploadable};
pub use driver::load_metadata;
pub use model::{EntityMetadata, FieldMetadata};
pub use registry::{MetadataRegistry, MetadataRegistryBuilder};
