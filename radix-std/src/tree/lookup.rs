//! Matching concrete keys against registered patterns.

use radix_core::{Params, RouteMatch};

use super::RadixTree;
use super::node::Node;

/// A parameter value captured during descent.
///
/// The name is recovered from the matching leaf's pattern once the descent
/// succeeds: every pattern below a node shares its bytes up to that node, so
/// `offset..offset + len` addresses the same token in all of them.
struct Capture<'a> {
    offset: usize,
    len: usize,
    value: &'a str,
}

impl<V> RadixTree<V> {
    /// Find the best matching pattern for a concrete `key`.
    ///
    /// Literal edges are preferred over parameter edges at every node, so a
    /// static route always beats a parameterized one for the same input.
    /// Returns `None` if no pattern matches; this is an ordinary outcome, not
    /// an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use radix_std::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("/foo/:bar/:baz", "v").unwrap();
    ///
    /// let m = tree.find("/foo/1/2").unwrap();
    /// assert_eq!(*m.value, "v");
    /// assert_eq!(m.pattern, "/foo/:bar/:baz");
    /// assert_eq!(m.params.get(":bar"), Some("1"));
    /// assert_eq!(m.params.get(":baz"), Some("2"));
    /// ```
    pub fn find<'a>(&'a self, key: &'a str) -> Option<RouteMatch<'a, V>> {
        let found = self.descend(key).and_then(|(node, captures)| {
            let leaf = node.leaf.as_ref()?;
            let mut params = Params::new();
            for capture in captures {
                let name = leaf.key.get(capture.offset..capture.offset + capture.len);
                debug_assert!(name.is_some(), "capture outside pattern {}", leaf.key);
                params.push(name?, capture.value);
            }
            Some(RouteMatch {
                value: &leaf.value,
                params,
                pattern: leaf.key.as_str(),
            })
        });

        #[cfg(feature = "tracing")]
        {
            if found.is_none() {
                tracing::trace!(key, "no route matched");
            }
        }

        found
    }

    /// Returns true if some pattern matches `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Walk down the tree consuming `key`, ending at the node where it runs
    /// out.
    fn descend<'a>(&'a self, key: &'a str) -> Option<(&'a Node<V>, Vec<Capture<'a>>)> {
        let bytes = key.as_bytes();
        let marker = self.config.param_marker;
        let mut node = &self.root;
        let mut pos = 0;
        let mut depth = 0;
        let mut captures = Vec::new();

        while let Some(&next) = bytes.get(pos) {
            let mut step = None;
            if next != marker {
                if let Some(child) = node.get_edge(next) {
                    step = self
                        .match_edge(child, key, pos, depth, &mut captures)
                        .map(|end| (child, end));
                }
            }
            if step.is_none() {
                if let Some(child) = node.get_edge(marker) {
                    step = self
                        .match_edge(child, key, pos, depth, &mut captures)
                        .map(|end| (child, end));
                }
            }

            let (child, end) = step?;
            depth += child.prefix.len();
            pos = end;
            node = child;
        }

        Some((node, captures))
    }

    /// Match `child`'s prefix against `key` at `pos`, returning the position
    /// after it. Captures recorded by a failed attempt are discarded.
    fn match_edge<'a>(
        &self,
        child: &Node<V>,
        key: &'a str,
        pos: usize,
        depth: usize,
        captures: &mut Vec<Capture<'a>>,
    ) -> Option<usize> {
        let mark = captures.len();
        let end = self.match_prefix(&child.prefix, key, pos, depth, captures);
        if end.is_none() {
            captures.truncate(mark);
        }
        end
    }

    fn match_prefix<'a>(
        &self,
        prefix: &[u8],
        key: &'a str,
        mut pos: usize,
        depth: usize,
        captures: &mut Vec<Capture<'a>>,
    ) -> Option<usize> {
        let bytes = key.as_bytes();
        let mut i = 0;

        while i < prefix.len() {
            if prefix[i] == self.config.param_marker {
                let len = self.config.segment_len(&prefix[i..]);
                let captured = self.config.segment_len(&bytes[pos..]);
                if captured == 0 {
                    return None;
                }
                captures.push(Capture {
                    offset: depth + i,
                    len,
                    value: key.get(pos..pos + captured)?,
                });
                i += len;
                pos += captured;
            } else if bytes.get(pos) == Some(&prefix[i]) {
                i += 1;
                pos += 1;
            } else {
                return None;
            }
        }

        Some(pos)
    }
}
