//! # Registration Module
//!
//! Group flattening and the host registration pipeline.
//!
//! ## Overview
//!
//! [`RouteManager`] collects routes (directly, from flattened
//! [`RouteGroup`](crate::route::RouteGroup)s, or from
//! [`RouteController`] bundles) and defers registration until
//! [`execute`](RouteManager::execute), which maps every queued route through
//! [`RouteRegistrar`] and hands the resulting [`HostRoute`] models to a
//! [`RouteHost`] adapter.
//!
//! Flattening merges a group's shared settings into each member: group
//! authentication runs before the member's own, group arguments are inserted
//! first and member arguments overwrite them by key. A member without a
//! handler fails the whole group; there is no partial registration.

mod controller;
mod host_route;
mod manager;
mod registrar;

pub use controller::{RouteController, RouteEntry};
pub use host_route::{HostRoute, RouteHost, RouteOptions};
pub use manager::RouteManager;
pub use registrar::RouteRegistrar;
