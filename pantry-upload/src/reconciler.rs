//! The reconciliation engine — diff the resolved artifact set against the
//! remote inventory, upload what is missing, re-partition for reporting.

use crate::bulk::BulkUpload;
use crate::error::UploadError;
use crate::inventory::RemoteInventory;
use crate::resolver::LockedArtifact;

/// Outcome of one reconciliation: the full artifact set split into
/// artifacts the server already had and artifacts this run pushed. Both
/// keep the original resolution order; together they are exactly the
/// input set.
#[derive(Debug, Default)]
pub struct ReconciliationResult {
    pub reused: Vec<LockedArtifact>,
    pub uploaded: Vec<LockedArtifact>,
}

/// Reconcile `artifacts` against the remote inventory.
///
/// The missing subset is computed once, up front, and handed to the
/// bulk-upload capability in a single call — an empty subset is still one
/// (no-op) call. The final partition re-evaluates every artifact against
/// the inventory; the inventory's cache is the pre-upload snapshot, so a
/// cookbook the server failed to register stays classified as uploaded.
/// Any upload failure aborts the run before a result is produced.
pub fn reconcile(
    artifacts: Vec<LockedArtifact>,
    inventory: &mut RemoteInventory<'_>,
    bulk: &dyn BulkUpload,
) -> Result<ReconciliationResult, UploadError> {
    let mut to_upload = Vec::new();
    for artifact in &artifacts {
        if !inventory.has_version(&artifact.cookbook.name.0, &artifact.cookbook.version)? {
            to_upload.push(&artifact.cookbook);
        }
    }
    tracing::debug!(
        "{} of {} cookbook(s) need upload",
        to_upload.len(),
        artifacts.len()
    );

    bulk.upload_all(&to_upload)?;

    partition(artifacts, inventory)
}

/// Split `artifacts` into reused / uploaded per the inventory, preserving
/// order. Also the dry-run classification (no side effects).
pub fn partition(
    artifacts: Vec<LockedArtifact>,
    inventory: &mut RemoteInventory<'_>,
) -> Result<ReconciliationResult, UploadError> {
    let mut result = ReconciliationResult::default();
    for artifact in artifacts {
        if inventory.has_version(&artifact.cookbook.name.0, &artifact.cookbook.version)? {
            result.reused.push(artifact);
        } else {
            result.uploaded.push(artifact);
        }
    }
    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
