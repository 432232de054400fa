//! Resolve a policy lock into loadable cookbook artifacts.

use std::path::Path;

use pantry_core::{cookbook, Cookbook, CookbookLock, LockError, PolicyLock};

use crate::error::UploadError;

/// A lock entry paired with its loaded artifact. Created once per run;
/// plain data, no behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedArtifact {
    pub cookbook: Cookbook,
    pub lock: CookbookLock,
}

/// Build the authoritative artifact set for a run.
///
/// Validates the lock first (no artifact is touched if validation fails),
/// then loads every cookbook in the lock's declared order. Each artifact
/// carries the entry's dotted-decimal identifier as its hosted version.
/// Any load failure aborts — no partial resolution is returned.
pub fn resolve(lock: &PolicyLock, base_dir: &Path) -> Result<Vec<LockedArtifact>, UploadError> {
    lock.validate_cookbooks()?;

    let mut artifacts = Vec::with_capacity(lock.cookbook_locks().len());
    for entry in lock.cookbook_locks() {
        let relative = entry
            .cookbook_path()
            .ok_or_else(|| LockError::InvalidCookbook {
                name: entry.name.to_string(),
                reason: "no cookbook path (source or cache_path) is set".to_string(),
            })?;
        let path = base_dir.join(relative);
        let cookbook =
            cookbook::load_for_upload(&entry.name, &entry.dotted_decimal_identifier, &path)?;
        artifacts.push(LockedArtifact {
            cookbook,
            lock: entry.clone(),
        });
    }
    Ok(artifacts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
