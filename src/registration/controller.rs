use crate::route::{Route, RouteFactory, RouteGroup};

/// A route or a group, as returned by a controller.
pub enum RouteEntry {
    Route(Route),
    Group(RouteGroup),
}

impl From<Route> for RouteEntry {
    fn from(route: Route) -> Self {
        RouteEntry::Route(route)
    }
}

impl From<RouteGroup> for RouteEntry {
    fn from(group: RouteGroup) -> Self {
        RouteEntry::Group(group)
    }
}

/// A self-contained bundle of endpoint definitions under one namespace.
///
/// Implementors declare their namespace and define routes against the factory
/// the manager hands them; see
/// [`RouteManager::from_controller`](super::RouteManager::from_controller).
/// A controller returning `None` (or an empty string) as its namespace fails
/// registration with
/// [`RouteError::NamespaceNotDefined`](crate::error::RouteError).
pub trait RouteController {
    /// The namespace all of this controller's routes live under.
    fn namespace(&self) -> Option<String>;

    /// Define the controller's routes and groups using the provided factory.
    fn define_routes(&self, factory: &RouteFactory) -> Vec<RouteEntry>;
}
