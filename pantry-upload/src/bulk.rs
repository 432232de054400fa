//! Bulk cookbook upload capability.

use serde_json::{json, Value};

use pantry_client::{Transport, TransportError};
use pantry_core::Cookbook;

/// Pushes an ordered collection of cookbooks to the server.
///
/// Atomic per cookbook, not across the collection: a mid-batch failure
/// leaves earlier uploads in place. An empty collection is a legal no-op
/// call and must succeed without touching the network.
pub trait BulkUpload {
    fn upload_all(&self, cookbooks: &[&Cookbook]) -> Result<(), TransportError>;
}

/// [`BulkUpload`] over the transport: one `PUT cookbooks/{name}/{version}`
/// per artifact, in order, stopping at the first failure.
pub struct TransportUploader<'a> {
    client: &'a dyn Transport,
}

impl<'a> TransportUploader<'a> {
    pub fn new(client: &'a dyn Transport) -> Self {
        Self { client }
    }
}

impl BulkUpload for TransportUploader<'_> {
    fn upload_all(&self, cookbooks: &[&Cookbook]) -> Result<(), TransportError> {
        for cookbook in cookbooks {
            tracing::info!("uploading cookbook {} {}", cookbook.name, cookbook.version);
            let path = format!("cookbooks/{}/{}", cookbook.name, cookbook.version);
            self.client.put(&path, &cookbook_manifest(cookbook))?;
        }
        Ok(())
    }
}

fn cookbook_manifest(cookbook: &Cookbook) -> Value {
    let files: Vec<Value> = cookbook
        .files
        .iter()
        .map(|file| {
            json!({
                "path": file.path.to_string_lossy(),
                "checksum": file.checksum,
            })
        })
        .collect();
    json!({
        "name": format!("{}-{}", cookbook.name, cookbook.version),
        "cookbook_name": cookbook.name.to_string(),
        "version": cookbook.version,
        "frozen?": false,
        "all_files": files,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::testing::{locked_artifact, FakeTransport, Reply};

    use super::*;

    #[test]
    fn empty_collection_makes_no_requests() {
        let fake = FakeTransport::new();
        TransportUploader::new(&fake)
            .upload_all(&[])
            .expect("no-op upload");
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn puts_each_cookbook_under_its_hosted_version() {
        let fake = FakeTransport::new();
        let a = locked_artifact("apt", "2.0.0", "aaaa111122223333");
        let b = locked_artifact("nginx", "1.2.3", "bbbb444455556666");

        TransportUploader::new(&fake)
            .upload_all(&[&a.cookbook, &b.cookbook])
            .expect("upload");

        assert_eq!(
            fake.calls(),
            vec![
                format!("PUT cookbooks/apt/{}", a.cookbook.version),
                format!("PUT cookbooks/nginx/{}", b.cookbook.version),
            ]
        );
        let body = fake
            .body_of("PUT", &format!("cookbooks/apt/{}", a.cookbook.version))
            .expect("body");
        assert_eq!(body["cookbook_name"], json!("apt"));
        assert_eq!(body["version"], json!(a.cookbook.version));
        assert_eq!(body["frozen?"], json!(false));
    }

    #[test]
    fn first_failure_stops_the_batch() {
        let fake = FakeTransport::new();
        let a = locked_artifact("apt", "2.0.0", "aaaa111122223333");
        let b = locked_artifact("nginx", "1.2.3", "bbbb444455556666");
        fake.reply(
            "PUT",
            &format!("cookbooks/apt/{}", a.cookbook.version),
            Reply::Status(500),
        );

        let err = TransportUploader::new(&fake)
            .upload_all(&[&a.cookbook, &b.cookbook])
            .expect_err("should fail");
        assert!(matches!(err, TransportError::Status { code: 500, .. }));
        assert_eq!(fake.calls().len(), 1, "no request after the failure");
    }
}
