#![allow(dead_code)]

use keyroute::{BoxError, RouteError, Router};

// ============================================================================
// Table-driven route cases
// ============================================================================

#[derive(Clone, Copy, Debug)]
pub enum MatchType {
    Simple,
    Prefix,
    Regex,
}

pub struct RouteCase {
    pub match_type: MatchType,
    pub route: &'static str,
    pub root_prefix: &'static str,
    pub path: &'static str,
    pub expect: Option<&'static str>,
}

impl RouteCase {
    pub fn run(&self) {
        let router: Router<(), &'static str> =
            Router::builder().root_prefix(self.root_prefix).build();

        let route = match self.match_type {
            MatchType::Simple => router.simple_route(self.route),
            MatchType::Prefix => router.prefix_route(self.route),
            MatchType::Regex => router
                .regex_route(self.route)
                .expect("bad test case: pattern does not compile"),
        };
        route.handler_fn(|_, _| Ok("User Profile"));

        let result = router.exec_path(self.path, ());
        match (self.expect, result) {
            (Some(expected), Ok(value)) => assert_eq!(value, expected, "path {:?}", self.path),
            (None, Err(RouteError::NotFound)) => {}
            (expected, got) => panic!(
                "{:?} route {:?} on path {:?}: expected {:?}, got {:?}",
                self.match_type, self.route, self.path, expected, got
            ),
        }
    }
}

// ============================================================================
// The building directory
// ============================================================================

pub fn list_all(_: &keyroute::RoutedContext<'_>, _: ()) -> Result<String, BoxError> {
    Ok("LIST_ALL_BUILDING".to_string())
}

/// Route table of the building directory demo.
///
/// ```text
/// "building"            literal        → LIST_ALL_BUILDING
/// "building.onestory"   literal        → ONE_STORY_BUILDING
/// "building."           prefix         (routing only)
///     "onestory."       prefix         → "don't think you want '<path>'"
///     "twostory"        literal        → TWO_STORY_BUILDING
/// ```
pub fn building_router() -> Router<(), String> {
    let router = Router::new();

    router
        .simple_route("building")
        .named("all")
        .handler_fn(list_all);
    router
        .simple_route("building.onestory")
        .named("onestory")
        .handler_fn(|_, _| Ok("ONE_STORY_BUILDING".to_string()));

    let building = router.prefix_route("building.");
    building.named("building");
    building
        .prefix_sub_route("onestory.")
        .named("onestory.any")
        .handler_fn(|ctx, _| Ok(format!("don't think you want '{}'", ctx.path())));
    building
        .simple_sub_route("twostory")
        .named("twostory")
        .handler_fn(|_, _| Ok("TWO_STORY_BUILDING".to_string()));

    router
}
