//! Policy lock document — load, parse, validate.
//!
//! The lock is a frozen JSON document produced by the dependency solver.
//! Parsing keeps the raw document alongside the typed view: the manifest
//! publisher re-publishes the document verbatim as the record's `raw_data`,
//! and the cookbook entries must keep their declared order all the way
//! through the pipeline (serde_json's `preserve_order` feature carries it).

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::LockError;
use crate::types::{CookbookLock, CookbookName};

/// A parsed policy lock: the policy name, its cookbook entries in declared
/// order, and the raw document for re-publication.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyLock {
    name: String,
    cookbook_locks: Vec<CookbookLock>,
    document: Map<String, Value>,
}

impl PolicyLock {
    /// Build a lock from an already-parsed JSON document.
    pub fn from_document(document: Map<String, Value>) -> Result<Self, LockError> {
        let name = document
            .get("name")
            .and_then(Value::as_str)
            .ok_or(LockError::MissingField { field: "name" })?
            .to_owned();

        let cookbook_locks = match document.get("cookbook_locks") {
            None => Vec::new(),
            Some(Value::Object(entries)) => parse_entries(entries)?,
            Some(other) => {
                return Err(LockError::MalformedField {
                    field: "cookbook_locks",
                    reason: format!("expected an object, got {other}"),
                })
            }
        };

        Ok(Self {
            name,
            cookbook_locks,
            document,
        })
    }

    /// The policy name declared by the lock.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookbook entries in the lock's declared order.
    pub fn cookbook_locks(&self) -> &[CookbookLock] {
        &self.cookbook_locks
    }

    /// The full lock document as parsed, including fields the typed view
    /// does not model (`run_list`, `revision_id`, attributes, ...).
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Check every cookbook entry for internal consistency.
    ///
    /// Fails on the first entry with a missing version, an identifier
    /// shorter than 8 characters, a missing dotted-decimal identifier, or
    /// no usable on-disk location.
    pub fn validate_cookbooks(&self) -> Result<(), LockError> {
        for lock in &self.cookbook_locks {
            validate_entry(lock)?;
        }
        Ok(())
    }
}

fn parse_entries(entries: &Map<String, Value>) -> Result<Vec<CookbookLock>, LockError> {
    let mut locks = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        let mut lock: CookbookLock =
            serde_json::from_value(entry.clone()).map_err(|source| LockError::Entry {
                name: name.clone(),
                source,
            })?;
        lock.name = CookbookName::from(name.as_str());
        locks.push(lock);
    }
    Ok(locks)
}

fn validate_entry(lock: &CookbookLock) -> Result<(), LockError> {
    let invalid = |reason: String| LockError::InvalidCookbook {
        name: lock.name.to_string(),
        reason,
    };

    if lock.version.is_empty() {
        return Err(invalid("version is empty".to_string()));
    }
    if lock.identifier.chars().count() < 8 {
        return Err(invalid(format!(
            "identifier '{}' is shorter than 8 characters",
            lock.identifier
        )));
    }
    if lock.dotted_decimal_identifier.is_empty() {
        return Err(invalid("dotted decimal identifier is empty".to_string()));
    }
    if lock.cookbook_path().is_none() {
        return Err(invalid(
            "no cookbook path (source or cache_path) is set".to_string(),
        ));
    }
    Ok(())
}

/// Load and parse a policy lock from `path`.
///
/// Returns `LockError::Io` if the file cannot be read and
/// `LockError::Parse` (with the path) if it is not a JSON object.
pub fn load(path: &Path) -> Result<PolicyLock, LockError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LockError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Map<String, Value> =
        serde_json::from_str(&contents).map_err(|source| LockError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    PolicyLock::from_document(document)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
