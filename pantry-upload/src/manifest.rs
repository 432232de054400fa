//! Compatibility-mode manifest publication.
//!
//! The lock is stored as a data bag item so pre-policy tooling can find
//! it. The store has no upsert: the container create treats "already
//! exists" as success, and the record write goes update-first with a
//! create fallback on "not found" — the common case (record exists) is
//! the cheap one.

use serde_json::{json, Map, Value};

use pantry_client::{Transport, TransportError};

/// Name of the data bag that holds published policy locks.
pub const COMPAT_MODE_DATA_BAG: &str = "policyfiles";

/// Older clients locate the record by inflating this class name.
const LEGACY_RECORD_CLASS: &str = "Chef::DataBagItem";

/// `"{policy_name}-{policy_group}"` — the record key. Exactly one logical
/// record exists per pair.
pub fn policy_id(policy_name: &str, policy_group: &str) -> String {
    format!("{policy_name}-{policy_group}")
}

/// Build the manifest record for a lock document. The lock data is copied;
/// the caller's mapping is left untouched.
pub fn build_record(policy_id: &str, lock_data: &Map<String, Value>) -> Value {
    let mut raw_data = lock_data.clone();
    raw_data.insert("id".to_string(), Value::String(policy_id.to_string()));
    json!({
        "id": policy_id,
        "name": format!("data_bag_item_{COMPAT_MODE_DATA_BAG}_{policy_id}"),
        "data_bag": COMPAT_MODE_DATA_BAG,
        "raw_data": raw_data,
        "json_class": LEGACY_RECORD_CLASS,
    })
}

/// Idempotently publish the lock as the manifest record for
/// `(policy_name, policy_group)`. Returns the record address
/// (`"policyfiles/{policy_id}"`) for the confirmation message.
pub fn publish(
    client: &dyn Transport,
    policy_name: &str,
    policy_group: &str,
    lock_data: &Map<String, Value>,
) -> Result<String, TransportError> {
    let id = policy_id(policy_name, policy_group);
    let record = build_record(&id, lock_data);

    create_container(client)?;
    write_record(client, &id, &record)?;

    Ok(format!("{COMPAT_MODE_DATA_BAG}/{id}"))
}

/// Ensure the data bag exists. A conflict means someone already created
/// it; every other error propagates.
fn create_container(client: &dyn Transport) -> Result<(), TransportError> {
    match client.post("data", &json!({ "name": COMPAT_MODE_DATA_BAG })) {
        Ok(_) | Err(TransportError::Conflict) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Write the record: update in place, falling back to a create against
/// the container when the record does not exist yet. Any other error, on
/// either call, propagates without a second attempt.
fn write_record(
    client: &dyn Transport,
    policy_id: &str,
    record: &Value,
) -> Result<(), TransportError> {
    match client.put(&format!("data/{COMPAT_MODE_DATA_BAG}/{policy_id}"), record) {
        Ok(_) => Ok(()),
        Err(TransportError::NotFound) => {
            tracing::debug!("manifest record {policy_id} does not exist yet, creating");
            client
                .post(&format!("data/{COMPAT_MODE_DATA_BAG}"), record)
                .map(|_| ())
        }
        Err(err) => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
