//! Builds a small route table and resolves a few paths against it.
//!
//! Run with `RUST_LOG=radix_std=trace` to also see lookup misses.

use radix::{RadixError, RadixTree};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), RadixError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paths=info,radix_std=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut tree = RadixTree::new();
    for (pattern, value) in [
        ("/", "v-/"),
        ("/foo", "v-foo"),
        ("/fo", "v-fo"),
        ("/bar", "v-bar"),
        ("/foo/bar", "v-foo/bar"),
        ("/foobar", "v-foobar"),
        ("/users/:id", "v-user"),
    ] {
        tree.insert(pattern, value)?;
    }

    for path in ["/foobar", "/foo/bar", "/users/42", "/f"] {
        match tree.find(path) {
            Some(m) => tracing::info!(path, value = *m.value, params = ?m.params, "matched"),
            None => tracing::info!(path, longest_prefix = ?tree.longest_prefix(path), "not found"),
        }
    }

    Ok(())
}
