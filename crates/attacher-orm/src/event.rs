//! Lifecycle event interface
//!
//! The listener does not subscribe to any concrete ORM's event bus; the host
//! transaction manager implements these two narrow traits over its own event
//! payloads and calls the listener directly from its flush path.

use std::any::TypeId;

use attacher_core::UploadTarget;

/// A notification that an entity is about to be inserted or updated.
pub trait LifecycleEvent: Send {
    /// Runtime type of the affected entity, used for metadata lookup.
    fn entity_type(&self) -> TypeId;

    /// Entity type name, for diagnostics.
    fn entity_name(&self) -> &str;

    /// The affected entity, as an upload target.
    fn entity(&mut self) -> &mut dyn UploadTarget;
}

/// A pre-update notification; adds the ability to retrigger the persistence
/// layer's change computation.
///
/// Upload handlers mutate companion properties after the persistence layer
/// captured its original change snapshot; recomputation makes those writes
/// part of the pending update.
pub trait UpdateEvent: LifecycleEvent {
    fn recompute_change_set(&mut self);
}
