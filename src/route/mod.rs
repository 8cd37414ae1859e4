//! # Route Module
//!
//! Endpoint definitions and the group model they aggregate into.
//!
//! ## Overview
//!
//! A [`Route`] is one method + path + argument schema + authentication stack +
//! handler. A [`RouteGroup`] declares several methods over one shared path,
//! with shared arguments and authentication that members inherit and
//! selectively override when the group is flattened (see
//! [`registration`](crate::registration)). A [`RouteFactory`] stamps routes
//! and groups with a fixed namespace.
//!
//! Paths are normalized at construction: a leading `/` is ensured and the
//! shorthand tokens `:name` / `{name}` are rewritten to named capture groups.
//! Paths containing characters outside the shorthand set pass through
//! untouched, on the assumption they are already full patterns.

mod core;
mod factory;
mod group;
mod path;
mod route;

#[cfg(test)]
mod tests;

pub use core::{RouteBuilder, RouteCore};
pub use factory::RouteFactory;
pub use group::RouteGroup;
pub use route::{Route, SUPPORTED_METHODS};
