use super::core::{RouteBuilder, RouteCore};
use super::path::format_path;
use crate::callback::HandlerFn;
use crate::host::{HostRequest, HostResponse};
use http::Method;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// HTTP methods accepted at flattening/registration time.
pub static SUPPORTED_METHODS: Lazy<[Method; 5]> = Lazy::new(|| {
    [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ]
});

/// One concrete endpoint: method + normalized path + arguments +
/// authentication + handler.
///
/// The method and path are fixed at construction; the path is normalized
/// (leading slash, shorthand tokens rewritten to named capture groups) before
/// storage. Everything else accrues through the fluent surface.
#[derive(Clone)]
pub struct Route {
    core: RouteCore,
    method: Method,
    route: String,
    callback: Option<HandlerFn>,
}

impl Route {
    /// Create a route for the given method and path.
    pub fn new(method: Method, route: impl AsRef<str>) -> Self {
        Route {
            core: RouteCore::default(),
            method,
            route: format_path(route.as_ref()),
            callback: None,
        }
    }

    /// The HTTP method.
    #[must_use]
    pub fn get_method(&self) -> &Method {
        &self.method
    }

    /// The normalized route path.
    #[must_use]
    pub fn get_route(&self) -> &str {
        &self.route
    }

    /// Set the handler. A route without one fails flattening/registration.
    pub fn callback<F>(self, callback: F) -> Self
    where
        F: Fn(&HostRequest) -> HostResponse + Send + Sync + 'static,
    {
        self.callback_fn(Arc::new(callback))
    }

    /// Set an already-shared handler.
    pub fn callback_fn(mut self, callback: HandlerFn) -> Self {
        self.callback = Some(callback);
        self
    }

    /// The handler, if one was set.
    #[must_use]
    pub fn get_callback(&self) -> Option<&HandlerFn> {
        self.callback.as_ref()
    }

    /// Whether a handler has been set.
    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Clone this route under a different HTTP method, keeping path,
    /// namespace, arguments, authentication and handler.
    #[must_use]
    pub fn with_method(&self, method: Method) -> Route {
        Route {
            core: self.core.clone(),
            method,
            route: self.route.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl RouteBuilder for Route {
    fn core(&self) -> &RouteCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut RouteCore {
        &mut self.core
    }
}
