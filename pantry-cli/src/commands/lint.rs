//! `pantry lint` — offline lock validation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pantry_core::lockfile;

/// Arguments for `pantry lint`.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Path to the policy lock file.
    #[arg(long, default_value = "Policyfile.lock.json")]
    pub lock: PathBuf,
}

impl LintArgs {
    pub fn run(self) -> Result<()> {
        let lock = lockfile::load(&self.lock)
            .with_context(|| format!("failed to load policy lock '{}'", self.lock.display()))?;
        lock.validate_cookbooks()
            .with_context(|| format!("policy lock '{}' is invalid", self.lock.display()))?;

        println!(
            "✓ '{}' — policy '{}', {} cookbook(s)",
            self.lock.display(),
            lock.name(),
            lock.cookbook_locks().len()
        );
        Ok(())
    }
}
