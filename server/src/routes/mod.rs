//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is a Leptos SSR route. The compiled client bundle is served
//! from the site root under `/pkg`, and anything that is not a page falls
//! through to the public assets directory (images, videos, the CV PDF).
//! Paths that match neither render the app's not-found page with a 404.

pub mod cache;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use cache::CacheSettings;

/// Full site router: Leptos pages, `/pkg` bundle, `/healthz`, static assets.
pub fn app(config: &Config, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let not_found = any(render_not_found).with_state(leptos_options.clone());
    let assets_service = ServeDir::new(&config.assets_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);
    let cache = CacheSettings {
        max_age_secs: config.static_max_age_secs,
        hashed_bundle: leptos_options.hash_files,
    };

    leptos_router
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(assets_service)
        .layer(axum::middleware::from_fn_with_state(cache, cache::cache_control))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Render the app shell for a path no route or asset matched. The client
/// router falls back to the not-found page; the status is forced to 404.
async fn render_not_found(State(options): State<LeptosOptions>, request: Request) -> Response {
    let render = render_app_to_stream(move || client::app::shell(options.clone()));
    let mut response = render(request).await.into_response();
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
