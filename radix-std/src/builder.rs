//! Builder and [`Router`] integration for [`RadixTree`].

use radix_core::{ConfigError, RadixError, RouteResult, Router, RouterBuilder, TreeConfig};

use crate::tree::RadixTree;

impl<V: Send + Sync> Router<V> for RadixTree<V> {
    fn route<'a>(&'a self, path: &'a str) -> RouteResult<'a, V> {
        self.find(path).into()
    }
}

/// Builder for [`RadixTree`].
///
/// Routes are inserted as they are registered, so duplicates and conflicting
/// parameters are reported by [`RouterBuilder::insert`] straight away. The
/// chained [`route`](Self::route) keeps the first error and returns it from
/// [`build`](Self::build). Configuration must be set before the first route.
///
/// # Example
///
/// ```rust
/// use radix_core::{Router, RouterBuilder};
/// use radix_std::RadixTreeBuilder;
///
/// let router = RadixTreeBuilder::new()
///     .param_marker(b'@')
///     .route("/users/@id", "show")
///     .route("/users/me", "profile")
///     .build()
///     .unwrap();
///
/// assert_eq!(router.route("/users/me").matched(), Some(&"profile"));
/// assert_eq!(router.route("/users/7").matched(), Some(&"show"));
/// ```
pub struct RadixTreeBuilder<V> {
    config: TreeConfig,
    tree: Option<RadixTree<V>>,
    error: Option<RadixError>,
}

impl<V> Default for RadixTreeBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTreeBuilder<V> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: TreeConfig::default(),
            tree: None,
            error: None,
        }
    }

    /// Use a full configuration.
    pub fn config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the byte that starts a parameter segment.
    pub fn param_marker(mut self, marker: u8) -> Self {
        self.config.param_marker = marker;
        self
    }

    /// Set the byte that separates segments.
    pub fn separator(mut self, separator: u8) -> Self {
        self.config.separator = separator;
        self
    }

    /// Register a route. The first failure is returned by [`build`](Self::build).
    pub fn route(mut self, pattern: impl AsRef<str>, value: V) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.insert_route(pattern.as_ref(), value) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Build the tree, consuming the builder.
    pub fn build(mut self) -> Result<RadixTree<V>, RadixError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.tree_mut()?;
        let tree = match self.tree {
            Some(tree) => tree,
            None => RadixTree::with_config(self.config)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(routes = tree.len(), "built radix tree");

        Ok(tree)
    }

    fn insert_route(&mut self, pattern: &str, value: V) -> Result<(), RadixError> {
        self.tree_mut()?.insert(pattern, value)?;
        Ok(())
    }

    /// The tree under construction, created from the configuration on first use.
    fn tree_mut(&mut self) -> Result<&mut RadixTree<V>, RadixError> {
        let tree = match self.tree.take() {
            Some(tree) if *tree.config() != self.config => {
                self.tree = Some(tree);
                return Err(ConfigError::ChangedAfterInsert.into());
            }
            Some(tree) => tree,
            None => RadixTree::with_config(self.config)?,
        };
        Ok(self.tree.insert(tree))
    }
}

impl<V: Send + Sync> RouterBuilder<V> for RadixTreeBuilder<V> {
    type Router = RadixTree<V>;

    fn insert(&mut self, pattern: &str, value: V) -> Result<(), RadixError> {
        self.insert_route(pattern, value)
    }

    fn build(self) -> Result<Self::Router, RadixError> {
        RadixTreeBuilder::build(self)
    }
}
