//! Error kinds raised while building, flattening and registering routes.
//!
//! Every failure in this crate is synchronous and local; nothing is transient,
//! nothing is retried. Each kind is a distinct variant so callers can branch on
//! it; all of them abort the flattening/registration call that raised them.

use thiserror::Error;

/// Failures raised by the argument builders, group flattening and host
/// registration.
#[derive(Debug, Error)]
pub enum RouteError {
    /// An unknown type name was handed to the string-facing child factory or
    /// [`ArgumentType::from_str`](crate::argument::ArgumentType).
    #[error("`{0}` is not a valid argument type")]
    InvalidArgumentType(String),

    /// A route controller was asked for its factory before a namespace was
    /// defined. Carries the controller's type name.
    #[error("namespace not defined in {0}")]
    NamespaceNotDefined(String),

    /// A route reached flattening or registration without a handler.
    #[error("callback not defined for [{method}] {namespace}{route}")]
    CallbackNotDefined {
        /// The HTTP method of the offending route.
        method: String,
        /// The namespace the route was registered under, empty if unset.
        namespace: String,
        /// The normalized route path.
        route: String,
    },

    /// A route used an HTTP method outside
    /// [`SUPPORTED_METHODS`](crate::route::SUPPORTED_METHODS).
    #[error("{0} is not a supported HTTP method")]
    InvalidHttpMethod(String),
}
