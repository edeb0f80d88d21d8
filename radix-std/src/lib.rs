//! # radix-std
//!
//! Standard implementations for the radix path router.
//!
//! This crate provides:
//! - **Radix trie**: [`RadixTree`], a compressed prefix tree over path patterns
//!   with named single-segment parameters
//! - **Builder**: [`RadixTreeBuilder`], implementing
//!   [`RouterBuilder`](radix_core::RouterBuilder)
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events for edge splits, rejected
//!   registrations and lookup misses.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use radix_core;

mod builder;
mod tree;

pub use builder::RadixTreeBuilder;
pub use tree::{RadixTree, Routes};
