//! Domain types for the policy lock.
//!
//! Lock entries are produced by the lock parser and never mutated by the
//! upload pipeline. All path fields use `PathBuf`; never `&str` or `String`
//! for filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed cookbook name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct CookbookName(pub String);

impl fmt::Display for CookbookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CookbookName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CookbookName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Lock entries
// ---------------------------------------------------------------------------

/// One cookbook entry of a policy lock.
///
/// `identifier` is the content digest of the cookbook as computed upstream;
/// `dotted_decimal_identifier` is the same digest re-encoded as a three-part
/// version number, which is what the cookbook is hosted under in
/// compatibility mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CookbookLock {
    /// Filled in from the lock document's map key, not from the entry body.
    #[serde(skip)]
    pub name: CookbookName,

    pub version: String,
    pub identifier: String,
    pub dotted_decimal_identifier: String,

    /// Location of a cached copy of the cookbook, if the dependency solver
    /// fetched it from a remote source.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Location of the cookbook relative to the lock file.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl CookbookLock {
    /// The on-disk location to load the artifact from. A cached copy wins
    /// over the declared source.
    pub fn cookbook_path(&self) -> Option<&Path> {
        self.cache_path.as_deref().or(self.source.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
