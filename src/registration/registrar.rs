use super::host_route::{HostRoute, RouteOptions};
use crate::argument::{ArgumentParser, AttributeMap};
use crate::callback::{all_true, always_true, AuthFn};
use crate::error::RouteError;
use crate::route::{Route, RouteBuilder, SUPPORTED_METHODS};

/// Maps a flattened [`Route`] onto the host registration model.
#[derive(Clone, Default)]
pub struct RouteRegistrar;

impl RouteRegistrar {
    /// Create a registrar.
    pub fn new() -> Self {
        RouteRegistrar
    }

    /// Build the host registration model for a route.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidHttpMethod`] for methods outside
    /// [`SUPPORTED_METHODS`], [`RouteError::CallbackNotDefined`] when the
    /// route has no handler.
    pub fn map_to_host(&self, route: &Route) -> Result<HostRoute, RouteError> {
        if !SUPPORTED_METHODS.contains(route.get_method()) {
            return Err(RouteError::InvalidHttpMethod(
                route.get_method().to_string(),
            ));
        }

        let callback = route
            .get_callback()
            .cloned()
            .ok_or_else(|| RouteError::CallbackNotDefined {
                method: route.get_method().to_string(),
                namespace: route.get_namespace().to_string(),
                route: route.get_route().to_string(),
            })?;

        Ok(HostRoute {
            namespace: route.get_namespace().to_string(),
            route: route.get_route().to_string(),
            options: RouteOptions {
                methods: route.get_method().to_string(),
                callback,
                permission_callback: self.compose_permission_callback(route),
                args: self.parse_args(route),
            },
            override_existing: false,
        })
    }

    /// Serialize a route's arguments into one map, keyed by argument key.
    #[must_use]
    pub fn parse_args(&self, route: &Route) -> AttributeMap {
        let mut args = AttributeMap::new();
        for argument in route.get_arguments().values() {
            args.extend(ArgumentParser::as_map(argument));
        }
        args
    }

    /// Compose a route's authentication stack into one permission callback.
    ///
    /// No callbacks: always allow. One: used as-is. Two or more: a
    /// conjunction evaluated left to right, short-circuiting on the first
    /// failure.
    #[must_use]
    pub fn compose_permission_callback(&self, route: &Route) -> AuthFn {
        let callbacks = route.get_authentication();
        match callbacks.len() {
            0 => always_true(),
            1 => callbacks[0].clone(),
            _ => all_true(callbacks.to_vec()),
        }
    }
}
