use radix::{InsertError, RadixTree, RadixTreeBuilder, RouteResult, Router, RouterBuilder};

mod common;
use common::{API_ROUTES, build, value_of};

#[test]
fn test_root_and_nested_static_routes() {
    let tree = build(&[("/", "root"), ("/foo", "s1"), ("/foo/bar", "s2")]);

    for (key, expected) in [("/", "root"), ("/foo", "s1"), ("/foo/bar", "s2")] {
        let m = tree.find(key).expect("registered key should match");
        assert_eq!(*m.value, expected);
        assert!(m.params.is_empty());
    }
    assert!(tree.find("/foo/baz").is_none());
}

#[test]
fn test_words_sharing_prefixes() {
    let words = ["root", "slow", "slower", "waste", "water", "watch", "watcher"];
    let mut tree = RadixTree::new();
    for (i, word) in words.iter().enumerate() {
        tree.insert(word, i).unwrap();
    }

    for (i, word) in words.iter().enumerate() {
        assert_eq!(tree.find(word).map(|m| *m.value), Some(i));
    }
    assert_eq!(tree.len(), words.len());
    assert!(tree.find("wat").is_none());
    assert!(tree.find("slowest").is_none());
}

#[test]
fn test_static_over_parameter_precedence() {
    let tree = build(&[("/foo/:x", "param"), ("/foo/bar", "static")]);
    assert_eq!(value_of(&tree, "/foo/bar"), Some("static"));
    assert_eq!(value_of(&tree, "/foo/baz"), Some("param"));

    // Registration order does not change precedence.
    let tree = build(&[("/foo/bar", "static"), ("/foo/:x", "param")]);
    assert_eq!(value_of(&tree, "/foo/bar"), Some("static"));
    assert_eq!(value_of(&tree, "/foo/baz"), Some("param"));
}

#[test]
fn test_parameter_capture() {
    let tree = build(&[("/foo/:bar/:baz", "V")]);

    let m = tree.find("/foo/1/2").unwrap();
    assert_eq!(*m.value, "V");

    let map = m.params.to_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map[":bar"], "1");
    assert_eq!(map[":baz"], "2");
}

#[test]
fn test_duplicate_rejection_keeps_tree() {
    let mut tree = build(&[("/a", "first"), ("/a/b", "second")]);

    let err = tree.insert("/a", "again").unwrap_err();
    assert_eq!(
        err,
        InsertError::DuplicateKey {
            key: "/a".to_string()
        }
    );
    assert_eq!(value_of(&tree, "/a"), Some("first"));
    assert_eq!(value_of(&tree, "/a/b"), Some("second"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_conflicting_parameter_rejection() {
    let mut tree = build(&[("/foo/:bar", "bar")]);

    let err = tree.insert("/foo/:baz", "baz").unwrap_err();
    assert!(matches!(err, InsertError::ConflictingParameter { .. }));
    assert_eq!(
        err.to_string(),
        "conflicting path parameter: /foo/:baz collides with /foo/:bar"
    );

    let m = tree.find("/foo/1").unwrap();
    assert_eq!(*m.value, "bar");
    assert_eq!(m.params.get(":bar"), Some("1"));
}

#[test]
fn test_not_found_boundaries() {
    let empty: RadixTree<&str> = RadixTree::new();
    assert!(empty.find("").is_none());
    assert!(empty.find("/").is_none());

    let tree = build(API_ROUTES);
    assert!(tree.find("").is_none());
    assert!(tree.find("nothing/shared").is_none());
    assert!(tree.find("/users/42/comments").is_none());
    assert!(tree.find("/users/").is_none());
}

#[test]
fn test_api_table() {
    let tree = build(API_ROUTES);

    let cases = [
        ("/", Some("index")),
        ("/health", Some("health")),
        ("/users", Some("users.list")),
        ("/users/me", Some("users.me")),
        ("/users/42", Some("users.show")),
        ("/users/42/posts", Some("posts.list")),
        ("/users/42/posts/7", Some("posts.show")),
        ("/static/about", Some("about")),
        ("/assets/app.js", Some("asset")),
        ("/assets/js/app.js", None),
        ("/healthz", None),
    ];

    for (key, expected) in cases {
        assert_eq!(value_of(&tree, key), expected, "lookup of {key}");
    }
}

#[test]
fn test_routes_lists_every_pattern() {
    let tree = build(API_ROUTES);

    let mut expected: Vec<&str> = API_ROUTES.iter().map(|(pattern, _)| *pattern).collect();
    expected.sort_unstable();

    let listed: Vec<&str> = tree.routes().map(|(pattern, _)| pattern).collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_router_trait_object() {
    let mut builder = RadixTreeBuilder::default();
    for (pattern, value) in API_ROUTES {
        builder.insert(pattern, *value).unwrap();
    }
    let router: Box<dyn Router<&str>> = Box::new(builder.build().unwrap());

    match router.route("/users/9/posts/3") {
        RouteResult::Matched(m) => {
            assert_eq!(*m.value, "posts.show");
            assert_eq!(m.params.get(":id"), Some("9"));
            assert_eq!(m.params.get(":post"), Some("3"));
        }
        RouteResult::NotFound => panic!("Should match /users/9/posts/3"),
    }

    assert_eq!(router.route("/missing"), RouteResult::NotFound);
}

#[test]
fn test_longest_prefix_and_get() {
    let tree = build(&[
        ("/", "v-/"),
        ("/foo", "v-foo"),
        ("/fo", "v-fo"),
        ("/bar", "v-bar"),
        ("/foo/bar", "v-foo/bar"),
        ("/foobar", "v-foobar"),
    ]);

    assert_eq!(tree.get("/foobar"), Some(&"v-foobar"));
    assert_eq!(tree.longest_prefix("/f"), Some(("/", &"v-/")));
    assert_eq!(tree.longest_prefix("/foo/barbaz"), Some(("/foo/bar", &"v-foo/bar")));
}

#[test]
fn test_no_backtracking_is_a_known_limitation() {
    let tree = build(&[("/a/b/c", "abc"), ("/a/b/e", "abe"), ("/a/:x/d", "xd")]);

    assert_eq!(value_of(&tree, "/a/q/d"), Some("xd"));
    assert_eq!(value_of(&tree, "/a/b/d"), None);
}
