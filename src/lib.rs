//! # restroute
//!
//! **restroute** is a declarative builder for HTTP endpoint argument schemas
//! and a route-aggregation model that composes endpoint definitions from
//! reusable groups. The output per endpoint is a plain nested map (a
//! JSON-Schema-like argument descriptor plus composed callbacks) ready to
//! hand to an external HTTP host's route-registration call.
//!
//! ## Architecture
//!
//! - **[`argument`]** - the seven typed argument builders, union/enum/format
//!   constraints, and the recursive serializer ([`argument::ArgumentParser`])
//!   with precise only-if-set field emission
//! - **[`route`]** - [`route::Route`] (method + normalized path + arguments +
//!   authentication + handler), [`route::RouteGroup`] (shared settings over
//!   several methods) and [`route::RouteFactory`] (namespace stamping)
//! - **[`registration`]** - group flattening with defined override precedence,
//!   deferred registration through [`registration::RouteManager`], and the
//!   [`registration::RouteHost`] adapter boundary
//! - **[`callback`]** - the function-reference types carried on arguments and
//!   routes, and their combinators
//! - **[`host`]** - the minimal request/response view shared with the host
//! - **[`error`]** - the branchable [`RouteError`] kinds
//!
//! Everything is synchronous and in-memory: trees are built once at
//! registration time and treated as read-only afterwards. The crate stores and
//! composes validation/authentication callbacks but never invokes them; that
//! happens in the host, per incoming request.
//!
//! ## Quick Start
//!
//! ```rust
//! use restroute::argument::{ArgumentBuilder, IntegerType, StringType};
//! use restroute::host::HostResponse;
//! use restroute::registration::{HostRoute, RouteHost, RouteManager};
//! use restroute::route::{RouteBuilder, RouteGroup};
//! use serde_json::json;
//!
//! struct Table(Vec<HostRoute>);
//!
//! impl RouteHost for Table {
//!     fn register(&mut self, route: HostRoute) {
//!         self.0.push(route);
//!     }
//! }
//!
//! let group = RouteGroup::new("acme/v1", "items/{id}")
//!     .argument(IntegerType::on("id", |id| id.minimum(1).required(true)))
//!     .authentication(|request| request.get_header("x-api-key").is_some())
//!     .get(|_request| HostResponse::ok(json!({"item": "…"})))
//!     .delete_with(
//!         |_request| HostResponse::no_content(),
//!         |route| route.argument(StringType::on("reason", |r| r.max_length(120))),
//!     );
//!
//! let mut manager = RouteManager::new();
//! manager.from_group(&group)?;
//!
//! let mut table = Table(Vec::new());
//! let registered = manager.execute(&mut table)?;
//! assert_eq!(registered, 2);
//! # Ok::<(), restroute::RouteError>(())
//! ```
//!
//! ## Registration Flow
//!
//! Callers build argument trees, attach them to routes or groups, and queue
//! them on a [`registration::RouteManager`]. Flattening expands each group
//! into one concrete route per declared method: group-level authentication and
//! arguments are applied first, then the member route's own authentication is
//! appended and its arguments override the group's by key. `execute` maps
//! every queued route through [`registration::RouteRegistrar`], composing the
//! permission callback and serializing the argument map, and hands the result
//! to the [`registration::RouteHost`] adapter. A route without a handler, or
//! with an unsupported method, fails the call; nothing is registered
//! partially.

pub mod argument;
pub mod callback;
pub mod error;
pub mod host;
pub mod registration;
pub mod route;

pub use argument::{
    Argument, ArgumentBuilder, ArgumentParser, ArgumentType, ArrayType, AttributeMap,
    AttributeValue, BooleanType, Format, IntegerType, NullType, NumberType, ObjectType,
    Relationship, StringType,
};
pub use error::RouteError;
pub use registration::{RouteHost, RouteManager};
pub use route::{Route, RouteBuilder, RouteFactory, RouteGroup};
