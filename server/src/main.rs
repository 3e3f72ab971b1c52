mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER, log_filter};
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logging comes up on the default filter even when RUST_LOG is bad, so
    // the error below is still reported.
    let (filter, filter_error) = match log_filter(std::env::var("RUST_LOG").ok().as_deref()) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match filter_error {
        Some(e) => Err(ServerError::from(e)),
        None => run().await,
    };
    if let Err(e) = result {
        tracing::error!(error = %e, "portfolio server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    tracing::info!(
        assets_dir = %config.assets_dir.display(),
        static_max_age_secs = config.static_max_age_secs,
        hashed_bundle = leptos_options.hash_files,
        "config loaded"
    );

    let app = routes::app(&config, leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
