//! Function-reference types carried by arguments and routes.
//!
//! The core never invokes these itself: it stores them on arguments and
//! routes, composes them at registration time and hands them to the host,
//! which calls them per incoming request. All of them are cheap to clone
//! (`Arc`) and safe to share across the host's request threads.

use crate::host::{HostRequest, HostResponse};
use serde_json::Value;
use std::sync::Arc;

/// Validates a single parameter value: `(value, request, key) -> bool`.
pub type ValidateFn = Arc<dyn Fn(&Value, &HostRequest, &str) -> bool + Send + Sync>;

/// Sanitizes a parameter value before the handler sees it.
pub type SanitizeFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Authorizes a request: `(request) -> bool`.
pub type AuthFn = Arc<dyn Fn(&HostRequest) -> bool + Send + Sync>;

/// Handles a dispatched request and produces the response.
pub type HandlerFn = Arc<dyn Fn(&HostRequest) -> HostResponse + Send + Sync>;

/// An authorization callback that accepts every request.
///
/// Used as the permission callback for routes with no authentication stack.
pub fn always_true() -> AuthFn {
    Arc::new(|_request| true)
}

/// Compose many authorization callbacks into a single conjunction.
///
/// Callbacks are evaluated left to right and short-circuit on the first
/// `false`.
pub fn all_true(callbacks: Vec<AuthFn>) -> AuthFn {
    Arc::new(move |request| callbacks.iter().all(|callback| callback(request)))
}

/// Compose many authorization callbacks into a single disjunction.
///
/// Callbacks are evaluated left to right and short-circuit on the first
/// `true`; only all of them failing yields `false`.
pub fn any_true(callbacks: Vec<AuthFn>) -> AuthFn {
    Arc::new(move |request| callbacks.iter().any(|callback| callback(request)))
}

/// Pipe a value through many sanitizers, left to right.
pub fn pipe(callbacks: Vec<SanitizeFn>) -> SanitizeFn {
    Arc::new(move |value| {
        callbacks
            .iter()
            .fold(value, |value, callback| callback(value))
    })
}
