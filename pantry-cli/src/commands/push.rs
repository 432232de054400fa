//! `pantry push` — reconcile and upload a policy lock.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pantry_client::HttpTransport;
use pantry_core::lockfile;
use pantry_upload::{TransportUploader, Uploader};

use crate::config;
use crate::sink::ConsoleSink;

/// Arguments for `pantry push`.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Policy group to publish into.
    pub policy_group: String,

    /// Path to the policy lock file.
    #[arg(long, default_value = "Policyfile.lock.json")]
    pub lock: PathBuf,

    /// Policy server base URL (overrides config file and environment).
    #[arg(long)]
    pub server: Option<String>,

    /// Bearer token for the policy server.
    #[arg(long)]
    pub token: Option<String>,

    /// Resolve and classify cookbooks without uploading anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl PushArgs {
    pub fn run(self) -> Result<()> {
        let settings = config::resolve(self.server.clone(), self.token.clone())?;
        let lock = lockfile::load(&self.lock)
            .with_context(|| format!("failed to load policy lock '{}'", self.lock.display()))?;
        // Relative cookbook sources are anchored at the lock file's directory.
        let base_dir = self
            .lock
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let client = HttpTransport::new(settings.server_url, settings.token);
        let bulk = TransportUploader::new(&client);
        let sink = ConsoleSink::new();

        if self.dry_run {
            println!("[dry-run] no changes will be sent");
        }
        let result = Uploader::new(&lock, self.policy_group.clone(), &client, &bulk, &base_dir)
            .with_sink(&sink)
            .run(self.dry_run)
            .with_context(|| {
                format!("upload failed for policy group '{}'", self.policy_group)
            })?;

        if self.dry_run {
            println!(
                "✓ '{}' — {} reused, {} to upload",
                lock.name(),
                result.reused.len(),
                result.uploaded.len()
            );
        } else {
            println!(
                "✓ '{}' — {} reused, {} uploaded",
                lock.name(),
                result.reused.len(),
                result.uploaded.len()
            );
        }
        Ok(())
    }
}
