//! Routing abstraction layer.
//!
//! This module provides a trait-based routing abstraction so that code which
//! consumes matched routes does not depend on how the table is stored.
//!
//! A lookup either matches, yielding the stored value together with the
//! parameters captured along the way, or finds nothing. Not finding a route
//! is an ordinary outcome and is reported as [`RouteResult::NotFound`],
//! never as an error.

use crate::{error::RadixError, params::Params};

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
    /// The value registered for the matching pattern.
    pub value: &'a V,
    /// Values captured for parameter segments.
    pub params: Params<'a>,
    /// The matching pattern as it was registered.
    pub pattern: &'a str,
}

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched.
    Matched(RouteMatch<'a, V>),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(m) => Some(m.value),
            RouteResult::NotFound => None,
        }
    }

    /// Converts into the full match, if any.
    pub fn into_match(self) -> Option<RouteMatch<'a, V>> {
        match self {
            RouteResult::Matched(m) => Some(m),
            RouteResult::NotFound => None,
        }
    }
}

impl<'a, V> From<Option<RouteMatch<'a, V>>> for RouteResult<'a, V> {
    fn from(found: Option<RouteMatch<'a, V>>) -> Self {
        match found {
            Some(m) => RouteResult::Matched(m),
            None => RouteResult::NotFound,
        }
    }
}

/// A router that maps concrete paths to registered values.
///
/// Routers are read-only once built, so a single instance can serve lookups
/// from many threads.
pub trait Router<V>: Send + Sync {
    /// Look up the best matching route for `path`.
    fn route<'a>(&'a self, path: &'a str) -> RouteResult<'a, V>;

    /// Check if any route matches `path`.
    fn contains(&self, path: &str) -> bool {
        self.route(path).is_matched()
    }
}

/// Builder for constructing routers.
///
/// Registration problems are configuration errors; callers are expected to
/// stop building the route table on the first one.
pub trait RouterBuilder<V>: Default + Send {
    /// The router type this builder produces.
    type Router: Router<V>;

    /// Register a pattern.
    fn insert(&mut self, pattern: &str, value: V) -> Result<(), RadixError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RadixError>;
}
