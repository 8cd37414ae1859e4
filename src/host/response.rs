use serde_json::Value;
use std::collections::HashMap;

/// Response produced by a route handler and returned to the host for writing.
#[derive(Debug, Clone)]
pub struct HostResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as JSON, if any
    pub body: Option<Value>,
}

impl HostResponse {
    /// Create an empty response with the given status code.
    pub fn new(status: u16) -> Self {
        HostResponse {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// A `200 OK` response carrying a JSON body.
    pub fn ok(body: impl Into<Value>) -> Self {
        HostResponse::new(200).body(body)
    }

    /// A `204 No Content` response.
    pub fn no_content() -> Self {
        HostResponse::new(204)
    }

    /// Set the response body.
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a response header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
