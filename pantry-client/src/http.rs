//! Blocking HTTP transport over ureq.

use serde_json::Value;

use crate::error::TransportError;
use crate::transport::Transport;

/// A [`Transport`] talking plain HTTP/HTTPS to the policy server.
///
/// Auth is a bearer token if one is configured; retries, timeouts beyond
/// the OS defaults, and request signing are out of scope here.
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn prepare(&self, request: ureq::Request) -> ureq::Request {
        match &self.token {
            Some(token) => request.set("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<Value, TransportError> {
        tracing::debug!("GET {path}");
        finish(self.prepare(self.agent.get(&self.url(path))).call())
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        tracing::debug!("POST {path}");
        finish(self.prepare(self.agent.post(&self.url(path))).send_json(body))
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        tracing::debug!("PUT {path}");
        finish(self.prepare(self.agent.put(&self.url(path))).send_json(body))
    }
}

/// Map a ureq result onto the tagged error variants. All status-code
/// inspection happens here and nowhere else.
fn finish(result: Result<ureq::Response, ureq::Error>) -> Result<Value, TransportError> {
    match result {
        Ok(response) => parse_body(response),
        Err(ureq::Error::Status(409, _)) => Err(TransportError::Conflict),
        Err(ureq::Error::Status(404, _)) => Err(TransportError::NotFound),
        Err(ureq::Error::Status(code, response)) => {
            let message = response.into_string().unwrap_or_default();
            Err(TransportError::Status { code, message })
        }
        Err(err) => Err(TransportError::Transport(err.to_string())),
    }
}

fn parse_body(response: ureq::Response) -> Result<Value, TransportError> {
    let text = response
        .into_string()
        .map_err(|e| TransportError::Transport(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_tolerates_slashes() {
        let transport = HttpTransport::new("https://chef.example/organizations/ops/", None);
        assert_eq!(
            transport.url("/cookbooks?num_versions=all"),
            "https://chef.example/organizations/ops/cookbooks?num_versions=all"
        );
        assert_eq!(
            transport.url("data"),
            "https://chef.example/organizations/ops/data"
        );
    }
}
