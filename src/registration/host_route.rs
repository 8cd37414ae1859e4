use crate::argument::AttributeMap;
use crate::callback::{AuthFn, HandlerFn};

/// Everything the external host needs to bind one endpoint:
/// `{ namespace, route, args: { methods, callback, permission_callback,
/// args } }`.
#[derive(Clone)]
pub struct HostRoute {
    /// The namespace the route is registered under.
    pub namespace: String,
    /// The normalized route path.
    pub route: String,
    /// Method, callbacks and the serialized argument map.
    pub options: RouteOptions,
    /// Whether an existing registration under the same namespace/route should
    /// be replaced by the host.
    pub override_existing: bool,
}

/// The per-method options block of a [`HostRoute`].
#[derive(Clone)]
pub struct RouteOptions {
    /// The HTTP method, uppercase.
    pub methods: String,
    /// The route handler.
    pub callback: HandlerFn,
    /// The composed permission callback; all of a route's authentication
    /// callbacks must pass for a request to be dispatched.
    pub permission_callback: AuthFn,
    /// Serialized argument schemas, keyed by argument key. Hosts must
    /// tolerate any subset of the schema fields being present.
    pub args: AttributeMap,
}

/// Adapter to the external HTTP host.
///
/// [`RouteManager::execute`](super::RouteManager::execute) hands every
/// flattened route to this trait; what "registering" means (binding live
/// dispatch, writing a table, recording for tests) is entirely the host's
/// business.
pub trait RouteHost {
    /// Receive one registration-ready route.
    fn register(&mut self, route: HostRoute);
}
