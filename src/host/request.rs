use http::Method;
use serde_json::Value;
use std::collections::HashMap;

/// Request context handed to authentication and validation callbacks.
///
/// Contains the request data a host has already extracted: resolved
/// path/query/body parameters keyed by name, plus raw headers and cookies.
#[derive(Debug, Clone, Default)]
pub struct HostRequest {
    /// HTTP method of the request
    pub method: Method,
    /// Request path as received by the host
    pub path: String,
    /// Resolved parameters (path, query and body merged by the host)
    pub params: HashMap<String, Value>,
    /// HTTP headers from the request
    pub headers: HashMap<String, String>,
    /// Cookies parsed from the `Cookie` header
    pub cookies: HashMap<String, String>,
    /// Request body parsed as JSON, if present
    pub body: Option<Value>,
}

impl HostRequest {
    /// Create a request context for the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        HostRequest {
            method,
            path: path.into(),
            ..HostRequest::default()
        }
    }

    /// Attach a resolved parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Attach a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach a cookie.
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Get a resolved parameter by name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Get a header value by name.
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Get a cookie value by name.
    #[must_use]
    pub fn get_cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}
