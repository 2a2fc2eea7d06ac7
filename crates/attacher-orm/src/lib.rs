//! Attacher ORM Integration
//!
//! This crate bridges a host persistence layer to the upload machinery in
//! `attacher-core`. The host implements the narrow [`LifecycleEvent`] /
//! [`UpdateEvent`] traits over its own pre-insert and pre-update payloads and
//! calls [`UploadListener::before_create`] / [`UploadListener::before_update`]
//! from its flush path; the listener resolves upload metadata for the
//! affected entity and delegates each declared field to the configured
//! upload handler.

pub mod event;
pub mod listener;

pub use event::{LifecycleEvent, UpdateEvent};
pub use listener::UploadListener;
