//! Building directory demo.
//!
//! Registers a small route table and dispatches every path given on the
//! command line, or every line of stdin when no path is given.
//!
//! ```text
//! $ building-demo building building.twostory building.onestory.unit42 garage
//! building                  => LIST_ALL_BUILDING
//! building.twostory         => TWO_STORY_BUILDING
//! building.onestory.unit42  => don't think you want 'building.onestory.unit42'
//! garage                    => Path Not Found: route not found
//! ```
//!
//! Set `RUST_LOG=keyroute_std=debug` to see every match logged.

use clap::Parser;
use keyroute::{BoxError, RoutedContext, Router, handlers::Traced, observers::LoggingObserver};
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "building-demo", about = "Dispatch dotted building paths")]
struct Args {
    /// Prefix every path must carry; stripped before matching.
    #[arg(long, default_value = "")]
    root_prefix: String,

    /// Paths to dispatch. Reads stdin when empty.
    paths: Vec<String>,
}

fn handle_any_other_request(ctx: &RoutedContext<'_>, _: ()) -> Result<String, BoxError> {
    Ok(format!("don't think you want '{}'", ctx.path()))
}

fn handle_two_story(_: &RoutedContext<'_>, _: ()) -> Result<String, BoxError> {
    Ok("TWO_STORY_BUILDING".to_string())
}

fn handle_one_story(_: &RoutedContext<'_>, _: ()) -> Result<String, BoxError> {
    Ok("ONE_STORY_BUILDING".to_string())
}

fn handle_no_building(_: &RoutedContext<'_>, _: ()) -> Result<String, BoxError> {
    Ok("LIST_ALL_BUILDING".to_string())
}

fn build_router(root_prefix: &str) -> Router<(), String> {
    let router = Router::builder()
        .root_prefix(root_prefix)
        .observer(LoggingObserver::named("building"))
        .build();

    router
        .simple_route("building")
        .named("building")
        .handler_fn(handle_no_building);
    router
        .simple_route("building.onestory")
        .named("building.onestory")
        .handler_fn(handle_one_story);

    let route = router.prefix_route("building.");
    route.named("building.*");
    route
        .prefix_sub_route("onestory.")
        .named("building.onestory.*")
        .handler(Traced::new(
            keyroute::HandlerFn::new(handle_any_other_request),
            "any_other_request",
        ));
    route
        .simple_sub_route("twostory")
        .named("building.twostory")
        .handler_fn(handle_two_story);

    router
}

fn dispatch(router: &Router<(), String>, path: &str) {
    match router.exec_path(path, ()) {
        Ok(result) => println!("{path:<25} => {result}"),
        Err(err) => println!("{path:<25} => Path Not Found: {err}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "building_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let router = build_router(&args.root_prefix);
    tracing::info!(
        root_prefix = %router.root_prefix(),
        routes = router.len(),
        "route table ready"
    );

    if args.paths.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let path = line.trim();
            if !path.is_empty() {
                dispatch(&router, path);
            }
        }
    } else {
        for path in &args.paths {
            dispatch(&router, path);
        }
    }

    Ok(())
}
