//! # radix - Radix Trie Path Router
//!
//! `radix` maps path patterns to values with a compressed prefix tree.
//! Patterns are registered once at startup; lookups are read-only and can run
//! from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use radix::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("/", "index").unwrap();
//! tree.insert("/users/:id", "user").unwrap();
//! tree.insert("/users/:id/posts/:post", "post").unwrap();
//!
//! let m = tree.find("/users/42/posts/7").unwrap();
//! assert_eq!(*m.value, "post");
//! assert_eq!(m.params.get(":id"), Some("42"));
//! assert_eq!(m.params.get(":post"), Some("7"));
//! ```
//!
//! ## Matching rules
//!
//! - A segment containing the parameter marker (`:` by default) captures a
//!   non-empty run of bytes up to the next separator (`/` by default).
//! - Static edges win over parameter edges: with `/foo/bar` and `/foo/:x`
//!   registered, `/foo/bar` matches the former.
//! - Lookups never backtrack. Once a literal edge has been taken the
//!   parameter alternative at that node is not revisited.
//!
//! ## Registration errors
//!
//! Registering the same pattern twice, or two differently named parameters at
//! the same position, fails with an [`InsertError`]. These are configuration
//! errors and the tree is left unchanged by a failed insert.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use radix_core::{
    ConfigError,
    EdgeError,
    InsertError,
    Params,
    RadixError,
    RouteMatch,
    RouteResult,
    Router,
    RouterBuilder,
    TreeConfig,
};

pub use radix_std::{RadixTree, RadixTreeBuilder, Routes};

/// Prelude module - common imports for radix.
///
/// # Usage
///
/// ```rust
/// use radix::prelude::*;
///
/// let router = RadixTreeBuilder::new().route("/ping", 1).build().unwrap();
/// assert!(router.contains("/ping"));
/// ```
pub mod prelude {
    pub use crate::{
        InsertError, Params, RadixError, RadixTree, RadixTreeBuilder, RouteMatch, RouteResult,
        Router, RouterBuilder, TreeConfig,
    };
}
