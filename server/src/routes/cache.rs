//! `Cache-Control` for static responses.
//!
//! Media files change only on deploy, so they get a public `max-age`. The
//! client bundle gets one only when its file names carry a content hash;
//! plain `portfolio.js`/`portfolio.wasm` must revalidate or a browser can
//! pair a stale bundle with fresh markup. Pages get `no-cache`.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::CACHE_CONTROL;
use axum::middleware::Next;
use axum::response::Response;

const CACHEABLE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "avif", "svg", "ico", "mp4", "webm", "mov", "woff", "woff2", "ttf", "otf",
    "pdf",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    Cacheable,
    NoCache,
}

impl CachePolicy {
    pub fn header_value(self, max_age_secs: u64) -> String {
        match self {
            Self::Cacheable => format!("public, max-age={max_age_secs}"),
            Self::NoCache => "no-cache".to_owned(),
        }
    }
}

/// Middleware state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheSettings {
    pub max_age_secs: u64,
    /// cargo-leptos `hash-files`: bundle names change on every build.
    pub hashed_bundle: bool,
}

/// Policy for a request path. Query strings are not part of `path`.
pub fn cache_policy(path: &str, hashed_bundle: bool) -> CachePolicy {
    if path.starts_with("/pkg/") {
        return if hashed_bundle { CachePolicy::Cacheable } else { CachePolicy::NoCache };
    }
    let file = path.rsplit('/').next().unwrap_or(path);
    let cacheable = file
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && CACHEABLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if cacheable { CachePolicy::Cacheable } else { CachePolicy::NoCache }
}

/// Middleware: tag successful responses that carry no `Cache-Control` yet.
pub async fn cache_control(State(settings): State<CacheSettings>, request: Request, next: Next) -> Response {
    let policy = cache_policy(request.uri().path(), settings.hashed_bundle);
    let mut response = next.run(request).await;
    if !response.status().is_success() || response.headers().contains_key(CACHE_CONTROL) {
        return response;
    }
    if let Ok(value) = HeaderValue::from_str(&policy.header_value(settings.max_age_secs)) {
        response.headers_mut().insert(CACHE_CONTROL, value);
    }
    response
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
