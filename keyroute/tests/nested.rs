//! Nested routes, sibling priority and the parent fallback.

mod common;

use common::building_router;
use keyroute::{Router, testing::RecordingObserver};

#[test]
fn test_building_directory() {
    let router = building_router();

    assert_eq!(router.exec_path("building", ()).unwrap(), "LIST_ALL_BUILDING");
    assert_eq!(
        router.exec_path("building.onestory", ()).unwrap(),
        "ONE_STORY_BUILDING"
    );
    assert_eq!(
        router.exec_path("building.twostory", ()).unwrap(),
        "TWO_STORY_BUILDING"
    );
    assert_eq!(
        router.exec_path("building.onestory.unit42", ()).unwrap(),
        "don't think you want 'building.onestory.unit42'"
    );
}

#[test]
fn test_routing_node_without_handler_is_not_found() {
    let router = building_router();

    // "building." has no handler of its own, so a remainder nobody claims
    // is not found.
    assert!(router.exec_path("building.unknownthing", ()).unwrap_err().is_not_found());
    assert!(router.exec_path("building.twostory.east", ()).unwrap_err().is_not_found());
    assert!(router.exec_path("building.", ()).unwrap_err().is_not_found());
}

#[test]
fn test_parent_handler_catches_unclaimed_remainder() {
    let router: Router<(), String> = Router::new();
    let building = router.prefix_route("building.");
    building
        .named("building")
        .handler_fn(|ctx, _| Ok(format!("parent:{}", ctx.remainder())));
    building
        .simple_sub_route("twostory")
        .handler_fn(|_, _| Ok("child".to_string()));

    assert_eq!(router.exec_path("building.twostory", ()).unwrap(), "child");
    assert_eq!(
        router.exec_path("building.unknownthing", ()).unwrap(),
        "parent:unknownthing"
    );
    // Extra trailing segments below a literal child also land on the parent.
    assert_eq!(
        router.exec_path("building.twostory.extra", ()).unwrap(),
        "parent:twostory.extra"
    );
    // A prefix consumed to the end is still a match.
    assert_eq!(router.exec_path("building.", ()).unwrap(), "parent:");
}

#[test]
fn test_deep_descent() {
    let router: Router<(), String> = Router::builder().root_prefix("root.").build();
    let level1 = router.prefix_route("a.");
    let level2 = level1.prefix_sub_route("b.");
    let level3 = level2.regex_sub_route(r"[0-9]+[.]").unwrap();
    level3
        .simple_sub_route("leaf")
        .named("leaf")
        .handler_fn(|ctx, _| Ok(ctx.route_name().to_string()));
    level2
        .named("b")
        .handler_fn(|ctx, _| Ok(format!("b:{}", ctx.remainder())));

    assert_eq!(router.exec_path("root.a.b.42.leaf", ()).unwrap(), "leaf");
    assert_eq!(router.exec_path("root.a.b.42.trunk", ()).unwrap(), "b:42.trunk");
    assert_eq!(router.exec_path("root.a.b.x", ()).unwrap(), "b:x");
    assert!(router.exec_path("root.a.x", ()).unwrap_err().is_not_found());
}

#[test]
fn test_top_level_registration_order_wins() {
    let first_wins: Router<(), &'static str> = Router::new();
    first_wins.prefix_route("service.").handler_fn(|_, _| Ok("prefix"));
    first_wins
        .regex_route("service[.]users")
        .unwrap()
        .handler_fn(|_, _| Ok("regex"));

    let second_wins: Router<(), &'static str> = Router::new();
    second_wins
        .regex_route("service[.]users")
        .unwrap()
        .handler_fn(|_, _| Ok("regex"));
    second_wins.prefix_route("service.").handler_fn(|_, _| Ok("prefix"));

    assert_eq!(first_wins.exec_path("service.users", ()).unwrap(), "prefix");
    assert_eq!(second_wins.exec_path("service.users", ()).unwrap(), "regex");
}

#[test]
fn test_sibling_order_wins() {
    let router: Router<(), &'static str> = Router::new();
    let root = router.prefix_route("a.");
    root.prefix_sub_route("b").handler_fn(|_, _| Ok("b*"));
    root.simple_sub_route("bc").handler_fn(|_, _| Ok("bc"));

    // The more specific literal is registered second and never gets a chance.
    assert_eq!(router.exec_path("a.bc", ()).unwrap(), "b*");
}

#[test]
fn test_first_matching_top_level_route_without_terminus_falls_through() {
    let router: Router<(), &'static str> = Router::new();
    router.prefix_route("a.");
    router.prefix_route("a.").handler_fn(|_, _| Ok("second"));

    assert_eq!(router.exec_path("a.b", ()).unwrap(), "second");
}

#[test]
fn test_repeated_dispatch_is_stable() {
    let recorder = RecordingObserver::new();
    let router: Router<(), String> = Router::builder().observer(recorder.clone()).build();
    router
        .prefix_route("x.")
        .named("x")
        .handler_fn(|ctx, _| Ok(ctx.remainder().to_string()));

    for _ in 0..100 {
        assert_eq!(router.exec_path("x.y", ()).unwrap(), "y");
    }
    assert_eq!(recorder.count(), 100);
    assert!(recorder.matches().iter().all(|(path, name)| path == "x.y" && name == "x"));
}

#[test]
fn test_routes_added_after_dispatch_are_seen() {
    let router: Router<(), &'static str> = Router::new();
    let parent = router.prefix_route("p.");
    assert!(router.exec_path("p.q", ()).is_err());

    parent.simple_sub_route("q").handler_fn(|_, _| Ok("q"));
    assert_eq!(router.exec_path("p.q", ()).unwrap(), "q");
}
