//! Remote cookbook inventory — one fetch per run, cached for its lifetime.

use std::collections::BTreeMap;

use serde_json::Value;

use pantry_client::{Transport, TransportError};

const INVENTORY_PATH: &str = "cookbooks?num_versions=all";

/// The server's cookbook-version inventory, fetched on first use.
///
/// The cache is an explicit `Option` field: `None` until the single fetch,
/// `Some` for the rest of the run. It is never refreshed, so lookups after
/// an upload still see the pre-upload snapshot.
pub struct RemoteInventory<'a> {
    client: &'a dyn Transport,
    cached: Option<BTreeMap<String, Vec<String>>>,
}

impl<'a> RemoteInventory<'a> {
    pub fn new(client: &'a dyn Transport) -> Self {
        Self {
            client,
            cached: None,
        }
    }

    /// Does the server host `name` at exactly `version`?
    ///
    /// Unknown cookbook names are `false`; version comparison is exact
    /// string equality, no semver or prefix matching. A transport error
    /// from the underlying fetch is fatal — there is no safe default for
    /// "remote state unknown".
    pub fn has_version(&mut self, name: &str, version: &str) -> Result<bool, TransportError> {
        let hosted = self.fetch()?;
        Ok(hosted
            .get(name)
            .map(|versions| versions.iter().any(|v| v == version))
            .unwrap_or(false))
    }

    fn fetch(&mut self) -> Result<&BTreeMap<String, Vec<String>>, TransportError> {
        match self.cached {
            Some(ref hosted) => Ok(hosted),
            None => {
                let raw = self.client.get(INVENTORY_PATH)?;
                let hosted = parse_inventory(&raw);
                tracing::debug!("remote inventory lists {} cookbook(s)", hosted.len());
                Ok(self.cached.insert(hosted))
            }
        }
    }
}

/// Wire shape: `{ name: { "versions": [ { "version": v, ... }, ... ] } }`.
/// Entries that do not match that shape contribute no versions.
fn parse_inventory(raw: &Value) -> BTreeMap<String, Vec<String>> {
    let mut hosted = BTreeMap::new();
    let Some(entries) = raw.as_object() else {
        return hosted;
    };
    for (name, entry) in entries {
        let versions = entry
            .get("versions")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.get("version").and_then(Value::as_str))
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        hosted.insert(name.clone(), versions);
    }
    hosted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
