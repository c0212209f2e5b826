//! Concurrent dispatch and registration.

mod common;

use common::building_router;
use keyroute::{Router, testing::CountingHandler};
use std::{sync::Arc, thread};

const CASES: [(&str, &str); 4] = [
    ("building", "LIST_ALL_BUILDING"),
    ("building.onestory", "ONE_STORY_BUILDING"),
    ("building.twostory", "TWO_STORY_BUILDING"),
    (
        "building.onestory.unit7",
        "don't think you want 'building.onestory.unit7'",
    ),
];

#[test]
fn test_parallel_dispatch_on_static_tree() {
    let router = building_router();

    thread::scope(|scope| {
        for worker in 0..8 {
            let router = &router;
            scope.spawn(move || {
                for i in 0..500 {
                    let (path, expected) = CASES[(worker + i) % CASES.len()];
                    assert_eq!(router.exec_path(path, ()).unwrap(), expected);
                    assert!(router.exec_path("building.nowhere", ()).is_err());
                }
            });
        }
    });
}

#[test]
fn test_registration_during_dispatch() {
    let router: Router<(), usize> = Router::new();
    let counter = CountingHandler::new();
    router.prefix_route("hot.").handler(counter.clone());
    let cold = router.prefix_route("cold.");

    thread::scope(|scope| {
        let router = &router;
        for _ in 0..4 {
            scope.spawn(move || {
                for _ in 0..250 {
                    router.exec_path("hot.path", ()).unwrap();
                }
            });
        }

        let cold = &cold;
        scope.spawn(move || {
            for i in 0..100 {
                cold.simple_sub_route(format!("leaf{i}"))
                    .handler_fn(move |_, _| Ok(i));
            }
        });

        scope.spawn(move || {
            for i in 0..50 {
                router.simple_route(format!("top{i}")).handler_fn(move |_, _| Ok(i));
            }
        });
    });

    assert_eq!(counter.count(), 1000);
    assert_eq!(cold.children_len(), 100);
    assert_eq!(router.len(), 52);
    assert_eq!(router.exec_path("cold.leaf42", ()).unwrap(), 42);
    assert_eq!(router.exec_path("top7", ()).unwrap(), 7);
}

#[test]
fn test_children_added_to_node_under_dispatch() {
    const LEAVES: usize = 100;
    const PARENT: usize = usize::MAX;

    let router: Router<(), usize> = Router::new();
    let hot = router.prefix_route("hot.");
    hot.handler_fn(|_, _| Ok(PARENT));

    thread::scope(|scope| {
        let router = &router;
        for worker in 0..4 {
            scope.spawn(move || {
                for i in 0..500 {
                    let leaf = (worker * 7 + i) % LEAVES;
                    let got = router.exec_path(&format!("hot.leaf{leaf}"), ()).unwrap();
                    // Either the leaf is not registered yet and the parent
                    // catches it, or the leaf answers.
                    assert!(got == leaf || got == PARENT, "leaf{leaf} gave {got}");
                }
            });
        }

        let hot = &hot;
        scope.spawn(move || {
            for i in 0..LEAVES {
                hot.simple_sub_route(format!("leaf{i}"))
                    .handler_fn(move |_, _| Ok(i));
            }
        });
    });

    assert_eq!(hot.children_len(), LEAVES);
    for i in 0..LEAVES {
        assert_eq!(router.exec_path(&format!("hot.leaf{i}"), ()).unwrap(), i);
    }
    assert_eq!(router.exec_path("hot.other", ()).unwrap(), PARENT);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_dispatch_from_many_tasks() {
    let router = Arc::new(building_router());

    let tasks: Vec<_> = (0..32)
        .map(|n| {
            let router = Arc::clone(&router);
            tokio::task::spawn_blocking(move || {
                let (path, expected) = CASES[n % CASES.len()];
                (router.exec_path(path, ()).unwrap(), expected)
            })
        })
        .collect();

    for task in tasks {
        let (got, expected) = task.await.unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn test_independent_routers_do_not_interfere() {
    let a: Router<(), &'static str> = Router::new();
    let b: Router<(), &'static str> = Router::new();
    a.simple_route("key").handler_fn(|_, _| Ok("a"));
    b.simple_route("key").handler_fn(|_, _| Ok("b"));

    a.clear();
    assert!(a.exec_path("key", ()).is_err());
    assert_eq!(b.exec_path("key", ()).unwrap(), "b");
}
