//! # pantry-upload
//!
//! Compatibility-mode policy upload: reconcile a policy lock's cookbooks
//! against the remote inventory, upload only the missing ones, and publish
//! the lock as a legacy manifest record.
//!
//! Call [`Uploader::run`] to drive the whole pipeline, or use the pieces
//! ([`resolve`], [`reconcile`], [`manifest::publish`]) directly.

pub mod bulk;
pub mod error;
pub mod inventory;
pub mod manifest;
pub mod reconciler;
pub mod report;
pub mod resolver;
pub mod ui;
pub mod uploader;

pub use bulk::{BulkUpload, TransportUploader};
pub use error::UploadError;
pub use inventory::RemoteInventory;
pub use reconciler::{reconcile, ReconciliationResult};
pub use report::UploadReport;
pub use resolver::{resolve, LockedArtifact};
pub use ui::{MessageSink, NullSink};
pub use uploader::Uploader;

#[cfg(test)]
pub(crate) mod testing;
