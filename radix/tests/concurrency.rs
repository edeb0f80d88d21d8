use lazy_static::lazy_static;
use radix::{RadixTree, Router};
use std::sync::Arc;

mod common;
use common::{API_ROUTES, build};

lazy_static! {
    static ref ROUTES: RadixTree<&'static str> = build(API_ROUTES);
}

#[test]
fn test_static_tree_from_threads() {
    std::thread::scope(|scope| {
        for id in 0..8 {
            scope.spawn(move || {
                for post in 0..100 {
                    let key = format!("/users/{id}/posts/{post}");
                    let m = ROUTES.find(&key).expect("should match");
                    let (id, post) = (id.to_string(), post.to_string());
                    assert_eq!(*m.value, "posts.show");
                    assert_eq!(m.params.get(":id"), Some(id.as_str()));
                    assert_eq!(m.params.get(":post"), Some(post.as_str()));
                }
            });
        }
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_tree_from_tasks() {
    let tree = Arc::new(build(API_ROUTES));

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let tree = Arc::clone(&tree);
            tokio::spawn(async move {
                let key = format!("/assets/file-{n}.css");
                let m = tree.route(&key).into_match().expect("should match");
                assert_eq!(*m.value, "asset");
                m.params.get(":file").map(str::to_owned)
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let captured = handle.await.expect("task should not panic");
        assert_eq!(captured, Some(format!("file-{n}.css")));
    }
}
