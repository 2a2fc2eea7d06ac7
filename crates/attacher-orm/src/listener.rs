//! Upload listener
//!
//! Bridges persistence lifecycle events to the upload handler. Entities whose
//! type is not in the registry are skipped; for registered types every
//! declared field is delegated to the handler sequentially, in declaration
//! order, before the surrounding flush proceeds. Handler failures propagate
//! unchanged and are expected to abort the host transaction.

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use attacher_core::{AttachResult, EntityMetadata, MetadataRegistry, UploadHandler};

use crate::event::{LifecycleEvent, UpdateEvent};

pub struct UploadListener {
    registry: Arc<MetadataRegistry>,
    handler: Arc<dyn UploadHandler>,
}

impl UploadListener {
    pub fn new(registry: Arc<MetadataRegistry>, handler: Arc<dyn UploadHandler>) -> Self {
        UploadListener { registry, handler }
    }

    /// Handle an "entity about to be inserted" event.
    #[instrument(skip_all)]
    pub async fn before_create(&self, event: &mut dyn LifecycleEvent) -> AttachResult<()> {
        let Some(metadata) = self.registry.get(event.entity_type()) else {
            trace!(entity = event.entity_name(), "entity not uploadable, skipping");
            return Ok(());
        };

        self.upload_fields(metadata, event).await
    }

    /// Handle an "entity about to be updated" event.
    ///
    /// After all uploads complete, the persistence layer is told to recompute
    /// its change set for this entity, so attributes written by the handler
    /// make it into the pending update.
    #[instrument(skip_all)]
    pub async fn before_update(&self, event: &mut dyn UpdateEvent) -> AttachResult<()> {
        let Some(metadata) = self.registry.get(event.entity_type()) else {
            trace!(entity = event.entity_name(), "entity not uploadable, skipping");
            return Ok(());
        };

        self.upload_fields(metadata, event).await?;
        event.recompute_change_set();
        Ok(())
    }

    async fn upload_fields<E>(&self, metadata: &EntityMetadata, event: &mut E) -> AttachResult<()>
    where
        E: LifecycleEvent + ?Sized,
    {
        for field in metadata.fields() {
            debug!(
                entity = event.entity_name(),
                property = field.property.as_str(),
                mapping = field.mapping.as_str(),
                "dispatching upload"
            );
            self.handler.upload(event.entity(), field).await?;
        }
        Ok(())
    }
}
