//! Cookbook artifacts — the in-memory representation of a cookbook loaded
//! for compatibility-mode upload.
//!
//! In compat mode the cookbook is hosted under its dotted-decimal content
//! identifier rather than its declared semantic version, so the caller
//! passes the version the artifact should carry.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{cookbook_io_err, CookbookError};
use crate::types::CookbookName;

/// One file inside a cookbook, with its content checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookbookFile {
    /// Path relative to the cookbook root.
    pub path: PathBuf,
    /// SHA-256 hex digest of the file contents.
    pub checksum: String,
}

/// A cookbook loaded from disk and ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookbook {
    pub name: CookbookName,
    pub version: String,
    /// Absolute (or lock-relative) cookbook root on disk.
    pub path: PathBuf,
    /// All regular files under the root, sorted by relative path.
    pub files: Vec<CookbookFile>,
}

/// Load the cookbook at `path`, carrying `version` as its hosted version.
///
/// Walks the directory recursively, skipping dot-entries, and checksums
/// every regular file. Fails if `path` is missing or not a directory.
pub fn load_for_upload(
    name: &CookbookName,
    version: &str,
    path: &Path,
) -> Result<Cookbook, CookbookError> {
    if !path.is_dir() {
        return Err(CookbookError::NotADirectory {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_files(path, path, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(Cookbook {
        name: name.clone(),
        version: version.to_owned(),
        path: path.to_path_buf(),
        files,
    })
}

fn collect_files(
    root: &Path,
    dir: &Path,
    files: &mut Vec<CookbookFile>,
) -> Result<(), CookbookError> {
    for entry in std::fs::read_dir(dir).map_err(|e| cookbook_io_err(dir, e))? {
        let entry = entry.map_err(|e| cookbook_io_err(dir, e))?;
        let path = entry.path();
        if is_dot_entry(&path) {
            continue;
        }
        let file_type = entry.file_type().map_err(|e| cookbook_io_err(&path, e))?;
        if file_type.is_dir() {
            collect_files(root, &path, files)?;
        } else if file_type.is_file() {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            files.push(CookbookFile {
                checksum: hash_file(&path)?,
                path: relative,
            });
        }
    }
    Ok(())
}

fn is_dot_entry(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

fn hash_file(path: &Path) -> Result<String, CookbookError> {
    let contents = std::fs::read(path).map_err(|e| cookbook_io_err(path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Ok(hex::encode(hasher.finalize()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
