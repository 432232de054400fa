//! Top-level upload orchestration.

use std::path::Path;

use pantry_client::Transport;
use pantry_core::PolicyLock;

use crate::bulk::BulkUpload;
use crate::error::UploadError;
use crate::inventory::RemoteInventory;
use crate::manifest;
use crate::reconciler::{self, ReconciliationResult};
use crate::report::UploadReport;
use crate::resolver;
use crate::ui::{MessageSink, NullSink};

static NULL_SINK: NullSink = NullSink;

/// Drives one compatibility-mode upload run:
/// resolve → reconcile (inventory + bulk upload) → report → publish.
pub struct Uploader<'a> {
    lock: &'a PolicyLock,
    policy_group: String,
    client: &'a dyn Transport,
    bulk: &'a dyn BulkUpload,
    base_dir: &'a Path,
    sink: &'a dyn MessageSink,
}

impl<'a> Uploader<'a> {
    /// `base_dir` anchors the lock's relative cookbook paths (usually the
    /// lock file's directory). Output is discarded unless a sink is set
    /// with [`Uploader::with_sink`].
    pub fn new(
        lock: &'a PolicyLock,
        policy_group: impl Into<String>,
        client: &'a dyn Transport,
        bulk: &'a dyn BulkUpload,
        base_dir: &'a Path,
    ) -> Self {
        Self {
            lock,
            policy_group: policy_group.into(),
            client,
            bulk,
            base_dir,
            sink: &NULL_SINK,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn MessageSink) -> Self {
        self.sink = sink;
        self
    }

    /// Run the pipeline. With `dry_run` the artifact set is resolved and
    /// classified against the remote inventory, but nothing is uploaded
    /// and no manifest is written.
    pub fn run(&self, dry_run: bool) -> Result<ReconciliationResult, UploadError> {
        self.sink.warn(&format!(
            "Uploading policy to policy group {} in compatibility mode",
            self.policy_group
        ));

        let artifacts = resolver::resolve(self.lock, self.base_dir)?;
        let mut inventory = RemoteInventory::new(self.client);

        self.sink.warn("Uploading cookbooks using semver compat mode");
        let result = if dry_run {
            reconciler::partition(artifacts, &mut inventory)?
        } else {
            reconciler::reconcile(artifacts, &mut inventory, self.bulk)?
        };

        UploadReport::new(&result.reused, &result.uploaded).show(self.sink);

        if dry_run {
            self.sink.msg("Skipped manifest publish (dry run)");
            return Ok(result);
        }

        let address = manifest::publish(
            self.client,
            self.lock.name(),
            &self.policy_group,
            self.lock.document(),
        )?;
        self.sink
            .msg(&format!("Policy uploaded as data bag item {address}"));

        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
