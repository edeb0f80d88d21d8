//! Pattern registration: edge splitting and conflict detection.

use radix_core::{EdgeError, InsertError, TreeConfig};

use super::RadixTree;
use super::node::{Leaf, Node};

impl<V> RadixTree<V> {
    /// Register `key` with `value`.
    ///
    /// Fails with [`InsertError::DuplicateKey`] if `key` is already
    /// registered and with [`InsertError::ConflictingParameter`] if it names a
    /// different parameter at a position where one is already registered.
    /// On failure the tree is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use radix_core::InsertError;
    /// use radix_std::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("/foo/:bar", 1).unwrap();
    ///
    /// assert!(matches!(
    ///     tree.insert("/foo/:baz", 2),
    ///     Err(InsertError::ConflictingParameter { .. })
    /// ));
    /// assert!(matches!(
    ///     tree.insert("/foo/:bar", 3),
    ///     Err(InsertError::DuplicateKey { .. })
    /// ));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        let bytes = key.as_bytes();
        if bytes.is_empty() {
            return Err(InsertError::EmptyKey);
        }
        check_param_names(&self.config, key)?;

        let config = self.config;
        let mut node = &mut self.root;
        let mut offset = 0;

        loop {
            let remaining = &bytes[offset..];
            let Some(&label) = remaining.first() else {
                if node.leaf.is_some() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(key, "rejected duplicate registration");
                    return Err(InsertError::DuplicateKey {
                        key: key.to_owned(),
                    });
                }
                node.leaf = Some(Leaf {
                    key: key.to_owned(),
                    value,
                });
                break;
            };

            let Some(child) = node.get_edge(label) else {
                if splits_param(&config, bytes, offset, None) {
                    return Err(conflict(key, node));
                }
                #[cfg(feature = "tracing")]
                tracing::trace!(key, offset, "adding edge");
                let leaf = Leaf {
                    key: key.to_owned(),
                    value,
                };
                node.add_edge(label, Node::with_leaf(remaining, leaf))?;
                break;
            };

            let common = longest_prefix(remaining, &child.prefix);
            if common == child.prefix.len() {
                offset += common;
                node = node.get_edge_mut(label).ok_or(EdgeError::Missing(label))?;
                continue;
            }

            if splits_param(&config, bytes, offset + common, Some(child.prefix[common])) {
                return Err(conflict(key, child));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(key, offset, common, "splitting edge");

            let mut old = node.replace_edge(label, Node::branch(&remaining[..common]))?;
            old.prefix.drain(..common);
            let branch = node.get_edge_mut(label).ok_or(EdgeError::Missing(label))?;
            branch.add_edge(old.prefix[0], old)?;

            let leaf = Leaf {
                key: key.to_owned(),
                value,
            };
            let rest = &remaining[common..];
            match rest.first() {
                None => branch.leaf = Some(leaf),
                Some(&next) => branch.add_edge(next, Node::with_leaf(rest, leaf))?,
            }
            break;
        }

        self.size += 1;
        Ok(())
    }
}

/// Length of the longest common prefix of two byte strings.
fn longest_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Every marker must be followed by a name.
fn check_param_names(config: &TreeConfig, key: &str) -> Result<(), InsertError> {
    let bytes = key.as_bytes();
    let unnamed = bytes.iter().enumerate().any(|(i, &b)| {
        b == config.param_marker
            && bytes
                .get(i + 1)
                .is_none_or(|&next| next == config.separator)
    });
    if unnamed {
        return Err(InsertError::UnnamedParameter {
            key: key.to_owned(),
        });
    }
    Ok(())
}

/// Would a node boundary at `pos` cut through a parameter name?
///
/// `existing_next` is the byte the existing edge continues with at `pos`, if
/// the boundary falls inside that edge. A boundary exactly at the end of a
/// token is fine; anywhere else inside a token it means two patterns name
/// different parameters at the same position.
fn splits_param(config: &TreeConfig, key: &[u8], pos: usize, existing_next: Option<u8>) -> bool {
    if !config.in_param_token(key, pos) {
        return false;
    }
    let continues = |byte: Option<u8>| byte.is_some_and(|b| b != config.separator);
    continues(key.get(pos).copied()) || continues(existing_next)
}

fn conflict<V>(key: &str, existing: &Node<V>) -> InsertError {
    let existing = existing.first_key().unwrap_or_default().to_owned();
    #[cfg(feature = "tracing")]
    tracing::debug!(key, existing = %existing, "rejected conflicting parameter");
    InsertError::ConflictingParameter {
        key: key.to_owned(),
        existing,
    }
}
