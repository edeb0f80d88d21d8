//! # Parameter Bindings
//!
//! [`Params`] holds the values captured for parameter segments during a
//! single lookup. Every successful lookup produces its own `Params`; nothing
//! is shared between calls.
//!
//! Names are the parameter tokens exactly as registered, marker included
//! (`":id"` for a pattern `/users/:id`). Values borrow from the queried key.

use std::collections::HashMap;

/// Ordered name → value bindings produced by one lookup.
///
/// # Example
///
/// ```rust
/// use radix_core::Params;
///
/// let params = Params::from_iter([(":bar", "1"), (":baz", "2")]);
/// assert_eq!(params.get(":bar"), Some("1"));
/// assert_eq!(params.get(":qux"), None);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Params<'a> {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a binding.
    pub fn push(&mut self, name: &'a str, value: &'a str) {
        self.entries.push((name, value));
    }

    /// Look up the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, value)| value)
    }

    /// Iterate bindings in the order their segments appear in the key.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy the bindings into an owned map.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|&(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for Params<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
