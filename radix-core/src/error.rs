//! Error types for radix.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RadixError`] - Top-level error type for all radix operations
//! - [`InsertError`] - Errors raised while registering a pattern
//! - [`ConfigError`] - Invalid tree configuration
//! - [`EdgeError`] - Edge-table invariant violations
//!
//! Every error here is a configuration-time problem. A lookup that finds
//! nothing is not an error and never produces one of these values.

use thiserror::Error;

/// Top-level error type for all radix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// A pattern could not be registered.
    #[error("insert error: {0}")]
    Insert(#[from] InsertError),

    /// The tree configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur while inserting a pattern into a tree.
///
/// A failed insert leaves the tree exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// The exact same pattern was registered twice.
    #[error("duplicate path registration: {key}")]
    DuplicateKey {
        /// The rejected pattern.
        key: String,
    },

    /// Two differently named parameters were registered at the same position.
    #[error("conflicting path parameter: {key} collides with {existing}")]
    ConflictingParameter {
        /// The rejected pattern.
        key: String,
        /// A registered pattern sharing the conflicting position.
        existing: String,
    },

    /// Patterns must not be empty.
    #[error("cannot register an empty path")]
    EmptyKey,

    /// A parameter marker is not followed by a name.
    #[error("unnamed path parameter in {key}")]
    UnnamedParameter {
        /// The rejected pattern.
        key: String,
    },

    /// The edge table was found in an inconsistent state.
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

/// Invalid [`TreeConfig`](crate::TreeConfig) values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The parameter marker and the separator are the same byte.
    #[error("parameter marker and separator are both {:?}", byte_char(.0))]
    MarkerIsSeparator(u8),

    /// Markers and separators must be ASCII so that splits stay on char boundaries.
    #[error("non-ASCII control byte: {0:#04x}")]
    NonAscii(u8),

    /// The configuration was changed after routes were inserted with the old one.
    #[error("configuration changed after routes were registered")]
    ChangedAfterInsert,
}

/// Edge-table invariant violations.
///
/// Insertion always checks for an edge before adding or replacing one, so
/// these are not reachable through the public tree API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeError {
    /// An edge with this label already exists.
    #[error("edge {:?} already exists", byte_char(.0))]
    Occupied(u8),

    /// No edge with this label exists.
    #[error("replacing missing edge {:?}", byte_char(.0))]
    Missing(u8),
}

fn byte_char(byte: &u8) -> char {
    char::from(*byte)
}
