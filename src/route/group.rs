use super::core::{RouteBuilder, RouteCore};
use super::route::Route;
use crate::callback::HandlerFn;
use crate::host::{HostRequest, HostResponse};
use http::Method;
use std::collections::HashMap;
use std::sync::Arc;

/// A set of endpoints sharing a namespace, path, argument set and
/// authentication stack.
///
/// Each HTTP method helper creates one partially-built member [`Route`]; the
/// `*_with` forms additionally configure it with per-route arguments or
/// authentication. Shared settings live on the group itself and are merged
/// into every member when the group is flattened by the
/// [`RouteManager`](crate::registration::RouteManager): route-level arguments
/// override group-level ones by key, route-level authentication runs after the
/// group's.
#[derive(Clone)]
pub struct RouteGroup {
    core: RouteCore,
    route: String,
    routes: HashMap<Method, Route>,
}

impl RouteGroup {
    /// Create a group for the given namespace and shared path.
    pub fn new(namespace: impl Into<String>, route: impl Into<String>) -> Self {
        RouteGroup {
            core: RouteCore {
                namespace: namespace.into(),
                ..RouteCore::default()
            },
            route: route.into(),
            routes: HashMap::new(),
        }
    }

    /// The shared path this group's routes are registered under.
    #[must_use]
    pub fn get_route(&self) -> &str {
        &self.route
    }

    fn insert_route(
        mut self,
        method: Method,
        handler: HandlerFn,
        config: impl FnOnce(Route) -> Route,
    ) -> Self {
        let route = Route::new(method.clone(), &self.route)
            .namespace(self.core.namespace.clone())
            .callback_fn(handler);
        self.routes.insert(method, config(route));
        self
    }

    /// Insert a pre-built member route under its own method, replacing any
    /// earlier member for that method.
    ///
    /// Unlike the method helpers this accepts a route with no handler yet;
    /// flattening fails on such a member.
    pub fn add_route(mut self, route: Route) -> Self {
        self.routes.insert(route.get_method().clone(), route);
        self
    }

    /// Whether a member route exists for the given method name
    /// (case-insensitive).
    #[must_use]
    pub fn method_exists(&self, method: &str) -> bool {
        self.routes
            .keys()
            .any(|m| m.as_str().eq_ignore_ascii_case(method))
    }

    /// The member routes, keyed by method.
    #[must_use]
    pub fn get_routes(&self) -> &HashMap<Method, Route> {
        &self.routes
    }

    /// The member route for a method, if declared.
    #[must_use]
    pub fn route_for(&self, method: &Method) -> Option<&Route> {
        self.routes.get(method)
    }

    /// Whether any member routes have been declared.
    #[must_use]
    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }
}

macro_rules! group_method_helpers {
    ($(($method:ident, $method_with:ident, $http:expr, $label:literal)),* $(,)?) => {
        impl RouteGroup {
            $(
                #[doc = concat!("Declare the group's `", $label, "` route with the given handler.")]
                pub fn $method<F>(self, handler: F) -> Self
                where
                    F: Fn(&HostRequest) -> HostResponse + Send + Sync + 'static,
                {
                    self.$method_with(handler, |route| route)
                }

                #[doc = concat!("Declare the group's `", $label, "` route and configure it (per-route arguments, authentication).")]
                pub fn $method_with<F>(self, handler: F, config: impl FnOnce(Route) -> Route) -> Self
                where
                    F: Fn(&HostRequest) -> HostResponse + Send + Sync + 'static,
                {
                    self.insert_route($http, Arc::new(handler), config)
                }
            )*
        }
    };
}

group_method_helpers!(
    (get, get_with, Method::GET, "GET"),
    (post, post_with, Method::POST, "POST"),
    (put, put_with, Method::PUT, "PUT"),
    (patch, patch_with, Method::PATCH, "PATCH"),
    (delete, delete_with, Method::DELETE, "DELETE"),
);

impl RouteBuilder for RouteGroup {
    fn core(&self) -> &RouteCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut RouteCore {
        &mut self.core
    }
}
