use super::controller::{RouteController, RouteEntry};
use super::host_route::RouteHost;
use super::registrar::RouteRegistrar;
use crate::error::RouteError;
use crate::route::{Route, RouteBuilder, RouteFactory, RouteGroup, SUPPORTED_METHODS};
use tracing::{debug, info};

/// Flattens groups into concrete routes and defers host registration until
/// [`execute`](RouteManager::execute).
///
/// A failure anywhere (a handler-less group member, an unsupported method)
/// is fatal to the call that raised it; nothing from the offending group or
/// queue is partially registered.
#[derive(Default)]
pub struct RouteManager {
    registrar: RouteRegistrar,
    pending: Vec<Route>,
}

impl std::fmt::Debug for RouteManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteManager")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl RouteManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        RouteManager::default()
    }

    /// Number of routes queued for registration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue a single route. Registration happens at
    /// [`execute`](RouteManager::execute).
    pub fn from_route(&mut self, route: Route) -> &mut Self {
        debug!(
            method = %route.get_method(),
            route = route.get_route(),
            "queued route for registration"
        );
        self.pending.push(route);
        self
    }

    /// Flatten a group and queue every resulting route.
    ///
    /// The group itself is left untouched; members are merged with the
    /// group's shared settings into fresh routes.
    ///
    /// # Errors
    ///
    /// [`RouteError::CallbackNotDefined`] if any member route has no handler;
    /// in that case nothing from the group is queued.
    pub fn from_group(&mut self, group: &RouteGroup) -> Result<&mut Self, RouteError> {
        for route in self.unpack_group(group)? {
            self.from_route(route);
        }
        Ok(self)
    }

    /// Queue everything a controller defines under its namespace.
    ///
    /// # Errors
    ///
    /// [`RouteError::NamespaceNotDefined`] when the controller declares no
    /// (or an empty) namespace; any error from the controller's groups.
    pub fn from_controller<C>(&mut self, controller: &C) -> Result<&mut Self, RouteError>
    where
        C: RouteController,
    {
        let namespace = controller
            .namespace()
            .filter(|namespace| !namespace.is_empty())
            .ok_or_else(|| {
                RouteError::NamespaceNotDefined(std::any::type_name::<C>().to_string())
            })?;

        let factory = RouteFactory::new(namespace);
        for entry in controller.define_routes(&factory) {
            match entry {
                RouteEntry::Route(route) => {
                    self.from_route(route);
                }
                RouteEntry::Group(group) => {
                    self.from_group(&group)?;
                }
            }
        }
        Ok(self)
    }

    /// Register every queued route with the host adapter.
    ///
    /// Drains the queue and returns the number of routes registered.
    ///
    /// # Errors
    ///
    /// Any [`RouteError`] from mapping a queued route to its host model;
    /// registration stops at the first failure.
    pub fn execute(&mut self, host: &mut dyn RouteHost) -> Result<usize, RouteError> {
        let routes = std::mem::take(&mut self.pending);
        let route_count = routes.len();
        for route in routes {
            let model = self.registrar.map_to_host(&route)?;
            host.register(model);
        }
        info!(route_count, "registered routes with host");
        Ok(route_count)
    }

    /// Merge a group's shared settings into each member route.
    ///
    /// Precedence: the group's authentication callbacks run first, then the
    /// member's; the group's arguments are inserted first, then overwritten by
    /// key with the member's own.
    fn unpack_group(&self, group: &RouteGroup) -> Result<Vec<Route>, RouteError> {
        let mut routes = Vec::new();
        for method in SUPPORTED_METHODS.iter() {
            let Some(member) = group.route_for(method) else {
                continue;
            };

            let mut route = self.base_route_from_group(group, member);
            route = match member.get_callback() {
                Some(callback) => route.callback_fn(callback.clone()),
                None => {
                    return Err(RouteError::CallbackNotDefined {
                        method: method.to_string(),
                        namespace: group.get_namespace().to_string(),
                        route: route.get_route().to_string(),
                    })
                }
            };
            routes.push(route);
        }
        Ok(routes)
    }

    /// Build one flattened route: group settings first, member overrides on
    /// top. The handler is attached by the caller.
    fn base_route_from_group(&self, group: &RouteGroup, member: &Route) -> Route {
        let mut route = Route::new(member.get_method().clone(), group.get_route())
            .namespace(group.get_namespace());

        for authentication in group.get_authentication() {
            route = route.authentication_fn(authentication.clone());
        }
        for argument in group.get_arguments().values() {
            route = route.argument(argument.clone());
        }

        for argument in member.get_arguments().values() {
            route = route.argument(argument.clone());
        }
        for authentication in member.get_authentication() {
            route = route.authentication_fn(authentication.clone());
        }

        route
    }
}
