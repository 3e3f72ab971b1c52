use super::*;

use axum::body::Body;
use axum::http::header::CACHE_CONTROL;
use tempfile::TempDir;
use tower::ServiceExt;

const MAX_AGE_SECS: u64 = 600;

/// Router over a temp site: `public/` assets and a `site/pkg` bundle.
fn site() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("public");
    let pkg = dir.path().join("site").join("pkg");
    std::fs::create_dir_all(assets.join("images")).unwrap();
    std::fs::create_dir_all(&pkg).unwrap();
    std::fs::write(assets.join("images").join("hero.png"), b"\x89PNG\r\n\x1a\n").unwrap();
    std::fs::write(pkg.join("portfolio.js"), "export default function init() {}").unwrap();

    let config = Config { assets_dir: assets, static_max_age_secs: MAX_AGE_SECS };
    let options = LeptosOptions::builder()
        .output_name("portfolio")
        .site_root(dir.path().join("site").to_string_lossy().into_owned())
        .build();
    let router = app(&config, options);
    (dir, router)
}

async fn send(router: Router, path: &str) -> Response {
    let request = axum::http::Request::builder().uri(path).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

fn cache_header(response: &Response) -> Option<&str> {
    response.headers().get(CACHE_CONTROL).and_then(|v| v.to_str().ok())
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

// =============================================================================
// health and assets
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let (_dir, router) = site();
    let response = send(router, "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn media_asset_is_cacheable() {
    let (_dir, router) = site();
    let response = send(router, "/images/hero.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_header(&response), Some("public, max-age=600"));
}

#[tokio::test]
async fn unhashed_bundle_revalidates() {
    let (_dir, router) = site();
    let response = send(router, "/pkg/portfolio.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_header(&response), Some("no-cache"));
}

// =============================================================================
// pages
// =============================================================================

#[tokio::test]
async fn rendered_page_is_not_cached() {
    let (_dir, router) = site();
    let response = send(router, "/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_header(&response), Some("no-cache"));
    assert!(body_text(response).await.contains("About Me"));
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let (_dir, router) = site();
    let response = send(router, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(cache_header(&response).is_none());
    assert!(body_text(response).await.contains("Page not found"));
}

#[tokio::test]
async fn missing_asset_renders_not_found_page() {
    let (_dir, router) = site();
    let response = send(router, "/images/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}
