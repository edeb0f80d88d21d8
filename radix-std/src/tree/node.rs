//! Trie nodes and the per-node edge table.
//!
//! Each node keeps its outgoing edges in a small vector sorted by label (the
//! first byte of the child's prefix). Fan-out is sparse, so binary search
//! over the vector beats hashing and keeps iteration order deterministic.

use radix_core::EdgeError;

/// Terminal payload of a node that ends a registered pattern.
#[derive(Debug)]
pub(crate) struct Leaf<V> {
    /// The full pattern as registered.
    pub(crate) key: String,
    pub(crate) value: V,
}

/// An outgoing edge: the first byte of the child's prefix and the child.
#[derive(Debug)]
pub(crate) struct Edge<V> {
    pub(crate) label: u8,
    pub(crate) node: Node<V>,
}

/// A node in the radix trie.
#[derive(Debug)]
pub(crate) struct Node<V> {
    /// Bytes this node consumes relative to its parent.
    pub(crate) prefix: Vec<u8>,
    pub(crate) leaf: Option<Leaf<V>>,
    /// Sorted by `label`, no duplicate labels.
    pub(crate) edges: Vec<Edge<V>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            prefix: Vec::new(),
            leaf: None,
            edges: Vec::new(),
        }
    }
}

impl<V> Node<V> {
    /// A purely structural node.
    pub(crate) fn branch(prefix: &[u8]) -> Self {
        Self {
            prefix: prefix.to_vec(),
            ..Self::default()
        }
    }

    /// A node that ends a pattern.
    pub(crate) fn with_leaf(prefix: &[u8], leaf: Leaf<V>) -> Self {
        Self {
            prefix: prefix.to_vec(),
            leaf: Some(leaf),
            edges: Vec::new(),
        }
    }

    fn search(&self, label: u8) -> Result<usize, usize> {
        self.edges.binary_search_by_key(&label, |edge| edge.label)
    }

    /// Insert an edge, keeping the table sorted.
    pub(crate) fn add_edge(&mut self, label: u8, node: Node<V>) -> Result<(), EdgeError> {
        match self.search(label) {
            Ok(_) => Err(EdgeError::Occupied(label)),
            Err(idx) => {
                self.edges.insert(idx, Edge { label, node });
                Ok(())
            }
        }
    }

    pub(crate) fn get_edge(&self, label: u8) -> Option<&Node<V>> {
        self.search(label).ok().map(|idx| &self.edges[idx].node)
    }

    pub(crate) fn get_edge_mut(&mut self, label: u8) -> Option<&mut Node<V>> {
        self.search(label).ok().map(|idx| &mut self.edges[idx].node)
    }

    /// Point an existing edge at a new child, returning the old one.
    pub(crate) fn replace_edge(&mut self, label: u8, node: Node<V>) -> Result<Node<V>, EdgeError> {
        match self.search(label) {
            Ok(idx) => Ok(std::mem::replace(&mut self.edges[idx].node, node)),
            Err(_) => Err(EdgeError::Missing(label)),
        }
    }

    /// Key of the first leaf reachable from this node, in byte order.
    pub(crate) fn first_key(&self) -> Option<&str> {
        match &self.leaf {
            Some(leaf) => Some(&leaf.key),
            None => self.edges.iter().find_map(|edge| edge.node.first_key()),
        }
    }
}
