use super::core::RouteBuilder;
use super::group::RouteGroup;
use super::route::Route;
use crate::host::{HostRequest, HostResponse};
use http::Method;

/// Creates routes and groups that all share one namespace.
///
/// Handed to [`RouteController`](crate::registration::RouteController)
/// implementations so every route a controller defines lands under the
/// controller's namespace.
#[derive(Clone)]
pub struct RouteFactory {
    namespace: String,
}

impl RouteFactory {
    /// Create a factory for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        RouteFactory {
            namespace: namespace.into(),
        }
    }

    /// The namespace every created route carries.
    #[must_use]
    pub fn get_namespace(&self) -> &str {
        &self.namespace
    }

    fn request<F>(&self, method: Method, route: &str, handler: F) -> Route
    where
        F: Fn(&HostRequest) -> HostResponse + Send + Sync + 'static,
    {
        Route::new(method, route)
            .namespace(self.namespace.clone())
            .callback(handler)
    }

    /// Build a group under this factory's namespace and configure it.
    pub fn group_builder(
        &self,
        route: &str,
        config: impl FnOnce(RouteGroup) -> RouteGroup,
    ) -> RouteGroup {
        config(RouteGroup::new(self.namespace.clone(), route))
    }
}

macro_rules! factory_method_helpers {
    ($(($method:ident, $http:expr, $label:literal)),* $(,)?) => {
        impl RouteFactory {
            $(
                #[doc = concat!("Create a `", $label, "` route with this factory's namespace.")]
                pub fn $method<F>(&self, route: &str, handler: F) -> Route
                where
                    F: Fn(&HostRequest) -> HostResponse + Send + Sync + 'static,
                {
                    self.request($http, route, handler)
                }
            )*
        }
    };
}

factory_method_helpers!(
    (get, Method::GET, "GET"),
    (post, Method::POST, "POST"),
    (put, Method::PUT, "PUT"),
    (patch, Method::PATCH, "PATCH"),
    (delete, Method::DELETE, "DELETE"),
);
