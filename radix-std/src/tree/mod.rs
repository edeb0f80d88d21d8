//! Radix trie for path routing.
//!
//! This module provides a compressed prefix tree that maps path patterns to
//! values. Patterns are byte strings in which a segment starting with the
//! parameter marker (`:` by default) matches any non-empty run of bytes up
//! to the next separator (`/` by default).
//!
//! # Overview
//!
//! - Each edge carries a byte string, so chains of single-child nodes
//!   collapse into one edge.
//! - Edges are kept in a sorted vector per node and found by binary search.
//! - Lookups take a single top-down pass. At each node a literal edge is
//!   preferred over a parameter edge, and a choice once made is never
//!   revisited.
//!
//! # Example
//!
//! ```rust
//! use radix_std::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("/users", "list").unwrap();
//! tree.insert("/users/:id", "show").unwrap();
//! tree.insert("/users/me", "profile").unwrap();
//!
//! let m = tree.find("/users/42").unwrap();
//! assert_eq!(*m.value, "show");
//! assert_eq!(m.params.get(":id"), Some("42"));
//!
//! // Static segments win over parameters.
//! assert_eq!(*tree.find("/users/me").unwrap().value, "profile");
//! assert!(tree.find("/posts").is_none());
//! ```
//!
//! # Limitations
//!
//! Lookups never backtrack. With `/a/b/c`, `/a/b/e` and `/a/:x/d` registered,
//! `/a/b/d` is not found: the literal edge `b/` is taken and the parameter
//! alternative is never tried.

mod insert;
mod lookup;
mod node;

use radix_core::{ConfigError, TreeConfig};

use self::node::Node;

/// A radix trie mapping path patterns to values.
///
/// Built once through [`insert`](Self::insert), then queried through
/// [`find`](Self::find) from any number of threads.
#[derive(Debug)]
pub struct RadixTree<V> {
    root: Node<V>,
    config: TreeConfig,
    size: usize,
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTree<V> {
    /// Create an empty tree with the default `:` marker and `/` separator.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            config: TreeConfig::default(),
            size: 0,
        }
    }

    /// Create an empty tree with a custom marker and separator.
    pub fn with_config(config: TreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: Node::default(),
            config,
            size: 0,
        })
    }

    /// The marker and separator this tree interprets.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Look up a pattern by its exact text.
    ///
    /// Markers in `key` are compared as plain bytes and nothing is captured,
    /// so `get("/users/:id")` returns the value registered for that pattern.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = &self.root;
        let mut rest = key.as_bytes();

        while let Some(&label) = rest.first() {
            node = node.get_edge(label)?;
            rest = rest.strip_prefix(node.prefix.as_slice())?;
        }

        node.leaf.as_ref().map(|leaf| &leaf.value)
    }

    /// Find the longest registered pattern that is a literal prefix of `key`.
    ///
    /// Returns the pattern together with its value.
    pub fn longest_prefix(&self, key: &str) -> Option<(&str, &V)> {
        let mut node = &self.root;
        let mut rest = key.as_bytes();
        let mut last = None;

        loop {
            if let Some(leaf) = &node.leaf {
                last = Some((leaf.key.as_str(), &leaf.value));
            }
            let Some(&label) = rest.first() else {
                break;
            };
            let Some(child) = node.get_edge(label) else {
                break;
            };
            match rest.strip_prefix(child.prefix.as_slice()) {
                Some(tail) => {
                    node = child;
                    rest = tail;
                }
                None => break,
            }
        }

        last
    }

    /// Iterate over every registered pattern and its value in byte order.
    pub fn routes(&self) -> Routes<'_, V> {
        Routes {
            stack: vec![&self.root],
        }
    }
}

/// Iterator over the patterns of a [`RadixTree`], in ascending byte order.
///
/// Created by [`RadixTree::routes`].
pub struct Routes<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> Iterator for Routes<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack
                .extend(node.edges.iter().rev().map(|edge| &edge.node));
            if let Some(leaf) = &node.leaf {
                return Some((leaf.key.as_str(), &leaf.value));
            }
        }
        None
    }
}
