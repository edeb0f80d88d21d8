#![allow(dead_code)]

use radix::RadixTree;

// ============================================================================
// Route Tables
// ============================================================================

/// An API-shaped table with static and parameterized routes side by side.
pub const API_ROUTES: &[(&str, &str)] = &[
    ("/", "index"),
    ("/health", "health"),
    ("/users", "users.list"),
    ("/users/me", "users.me"),
    ("/users/:id", "users.show"),
    ("/users/:id/posts", "posts.list"),
    ("/users/:id/posts/:post", "posts.show"),
    ("/static/about", "about"),
    ("/assets/:file", "asset"),
];

/// Build a tree from `(pattern, value)` pairs, panicking on registration errors.
pub fn build(routes: &[(&str, &'static str)]) -> RadixTree<&'static str> {
    let mut tree = RadixTree::new();
    for (pattern, value) in routes {
        tree.insert(pattern, *value)
            .unwrap_or_else(|e| panic!("failed to register {pattern}: {e}"));
    }
    tree
}

/// The value matched for `key`, if any.
pub fn value_of(tree: &RadixTree<&'static str>, key: &str) -> Option<&'static str> {
    tree.find(key).map(|m| *m.value)
}
