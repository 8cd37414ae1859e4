use crate::argument::Argument;
use crate::callback::AuthFn;
use crate::host::HostRequest;
use std::collections::BTreeMap;
use std::sync::Arc;

/// State shared between a [`Route`](super::Route) and a
/// [`RouteGroup`](super::RouteGroup): a namespace, an argument map and an
/// authentication stack.
///
/// Arguments are keyed by their argument key; inserting the same key again
/// replaces the earlier entry, which is the override mechanism group
/// flattening relies on. Authentication callbacks only ever append, preserving
/// the left-to-right evaluation order.
#[derive(Clone, Default)]
pub struct RouteCore {
    pub(crate) namespace: String,
    pub(crate) arguments: BTreeMap<String, Argument>,
    pub(crate) authentication: Vec<AuthFn>,
}

/// Fluent surface over [`RouteCore`], shared by routes and groups.
pub trait RouteBuilder: Sized {
    /// Shared route state.
    fn core(&self) -> &RouteCore;
    /// Mutable shared route state.
    fn core_mut(&mut self) -> &mut RouteCore;

    /// Set the namespace.
    fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.core_mut().namespace = namespace.into();
        self
    }

    /// The namespace, empty until set.
    fn get_namespace(&self) -> &str {
        &self.core().namespace
    }

    /// Insert an argument, replacing any earlier argument with the same key.
    fn argument(mut self, argument: impl Into<Argument>) -> Self {
        let argument = argument.into();
        self.core_mut()
            .arguments
            .insert(argument.get_key().to_string(), argument);
        self
    }

    /// The arguments, keyed by argument key.
    fn get_arguments(&self) -> &BTreeMap<String, Argument> {
        &self.core().arguments
    }

    /// Append an authentication callback to the stack.
    fn authentication<F>(self, authentication: F) -> Self
    where
        F: Fn(&HostRequest) -> bool + Send + Sync + 'static,
    {
        self.authentication_fn(Arc::new(authentication))
    }

    /// Append an already-shared authentication callback. Used when merging
    /// group stacks into member routes without re-wrapping.
    fn authentication_fn(mut self, authentication: AuthFn) -> Self {
        self.core_mut().authentication.push(authentication);
        self
    }

    /// The authentication stack, in append order.
    fn get_authentication(&self) -> &[AuthFn] {
        &self.core().authentication
    }
}
