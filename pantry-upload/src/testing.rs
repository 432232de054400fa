//! Test doubles shared by the unit tests in this crate.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use serde_json::{json, Map, Value};

use pantry_client::{Transport, TransportError};
use pantry_core::{Cookbook, CookbookLock, CookbookName, PolicyLock};

use crate::resolver::LockedArtifact;

/// One scripted response for [`FakeTransport`].
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Value(Value),
    Conflict,
    NotFound,
    Status(u16),
}

/// In-memory transport: replies are scripted per `"METHOD path"` key and
/// consumed in order; unscripted calls answer JSON null. Every call is
/// recorded with its body.
pub(crate) struct FakeTransport {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    calls: RefCell<Vec<(String, Option<Value>)>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn reply(&self, method: &str, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(format!("{method} {path}"))
            .or_default()
            .push_back(reply);
    }

    /// All calls so far, as `"METHOD path"` strings in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(k, _)| k.clone()).collect()
    }

    pub(crate) fn call_count(&self, method: &str, path: &str) -> usize {
        let key = format!("{method} {path}");
        self.calls.borrow().iter().filter(|(k, _)| *k == key).count()
    }

    /// Body of the first recorded call to `"METHOD path"`, if any.
    pub(crate) fn body_of(&self, method: &str, path: &str) -> Option<Value> {
        let key = format!("{method} {path}");
        self.calls
            .borrow()
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, body)| body.clone())
    }

    fn dispatch(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        self.calls
            .borrow_mut()
            .push((format!("{method} {path}"), body.cloned()));
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&format!("{method} {path}"))
            .and_then(VecDeque::pop_front);
        match reply {
            None => Ok(Value::Null),
            Some(Reply::Value(value)) => Ok(value),
            Some(Reply::Conflict) => Err(TransportError::Conflict),
            Some(Reply::NotFound) => Err(TransportError::NotFound),
            Some(Reply::Status(code)) => Err(TransportError::Status {
                code,
                message: "stubbed failure".to_string(),
            }),
        }
    }
}

impl Transport for FakeTransport {
    fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.dispatch("GET", path, None)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.dispatch("POST", path, Some(body))
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.dispatch("PUT", path, Some(body))
    }
}

fn dotted(name: &str, version: &str) -> String {
    format!("{}.{}.{}", name.as_bytes()[0], name.len(), version.len())
}

fn lock_entry(name: &str, version: &str) -> Value {
    json!({
        "version": version,
        "identifier": format!("{name:0<16}"),
        "dotted_decimal_identifier": dotted(name, version),
        "cache_path": null,
        "source": format!("cookbooks/{name}"),
    })
}

/// A lock document for policy `app` with the given `(name, version)`
/// cookbooks, in that order.
pub(crate) fn lock_document(cookbooks: &[(&str, &str)]) -> Map<String, Value> {
    let mut locks = Map::new();
    for (name, version) in cookbooks {
        locks.insert(name.to_string(), lock_entry(name, version));
    }
    let mut document = Map::new();
    document.insert("revision_id".to_string(), json!("6fe753184c8946"));
    document.insert("name".to_string(), json!("app"));
    document.insert("run_list".to_string(), json!(["recipe[app::default]"]));
    document.insert("cookbook_locks".to_string(), Value::Object(locks));
    document
}

pub(crate) fn lock_with_cookbooks(cookbooks: &[(&str, &str)]) -> PolicyLock {
    PolicyLock::from_document(lock_document(cookbooks)).expect("test lock parses")
}

/// An already-resolved artifact, no disk involved.
pub(crate) fn locked_artifact(name: &str, version: &str, identifier: &str) -> LockedArtifact {
    let lock = CookbookLock {
        name: CookbookName::from(name),
        version: version.to_string(),
        identifier: identifier.to_string(),
        dotted_decimal_identifier: dotted(name, version),
        cache_path: None,
        source: Some(PathBuf::from(format!("cookbooks/{name}"))),
    };
    let cookbook = Cookbook {
        name: lock.name.clone(),
        version: lock.dotted_decimal_identifier.clone(),
        path: PathBuf::from(format!("cookbooks/{name}")),
        files: vec![],
    };
    LockedArtifact { cookbook, lock }
}

/// Inventory wire document hosting exactly the given artifacts.
pub(crate) fn hosted_inventory(artifacts: &[&LockedArtifact]) -> Value {
    let mut entries = Map::new();
    for artifact in artifacts {
        entries.insert(
            artifact.cookbook.name.to_string(),
            json!({ "versions": [{ "version": artifact.cookbook.version }] }),
        );
    }
    Value::Object(entries)
}
