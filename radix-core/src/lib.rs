//! # radix-core
//!
//! Core traits and types for the radix path router.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that consumes routes without caring how the route table is stored.
//!
//! - [`Router`] / [`RouterBuilder`] - the lookup and construction interfaces
//! - [`RouteResult`] / [`RouteMatch`] - the outcome of a lookup
//! - [`Params`] - per-lookup parameter bindings
//! - [`TreeConfig`] - the parameter marker and segment separator
//!
//! # Error Types
//!
//! - [`RadixError`] - Top-level error type
//! - [`InsertError`] - Pattern registration errors
//! - [`ConfigError`] - Invalid configuration

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod config;
mod error;
mod params;
mod router;

// Re-exports
pub use config::TreeConfig;
pub use error::{ConfigError, EdgeError, InsertError, RadixError};
pub use params::Params;
pub use router::{RouteMatch, RouteResult, Router, RouterBuilder};
