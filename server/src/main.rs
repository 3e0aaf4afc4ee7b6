#![recursion_limit = "256"]

use anyhow::Context as _;
use leptos::prelude::*;
use std::path::PathBuf;

use app::store;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/api/{*fn_name}";
const ABOUT_PATH_ENV_VAR: &str = "FOLIO_ABOUT_PATH";
const DEFAULT_ABOUT_PATH: &str = "content/about.md";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not load the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let about_path = std::env::var_os(ABOUT_PATH_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ABOUT_PATH));
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        store: store::Store::open(about_path),
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.store.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler)
            .post(leptos_server_fn_axum_handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        // We could also pass the context to file_and_error_handler
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx.clone());

    log::info!(
        "listening in {:?} on http://{}, serving {:?}",
        &leptos_options.env,
        &addr,
        ctx.store.path(),
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("The server stopped")?;

    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || { provide_context(ctx.store.clone()); };
    leptos_axum::handle_server_fns_with_context(additional_context, request)
        .await
}
