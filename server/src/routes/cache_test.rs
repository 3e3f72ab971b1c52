use super::*;

// =============================================================================
// cache_policy
// =============================================================================

#[test]
fn unhashed_client_bundle_revalidates() {
    assert_eq!(cache_policy("/pkg/portfolio.wasm", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/pkg/portfolio.js", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/pkg/portfolio.css", false), CachePolicy::NoCache);
}

#[test]
fn hashed_client_bundle_is_cacheable() {
    assert_eq!(cache_policy("/pkg/portfolio.3f9a2c.wasm", true), CachePolicy::Cacheable);
    assert_eq!(cache_policy("/pkg/portfolio.3f9a2c.js", true), CachePolicy::Cacheable);
}

#[test]
fn media_is_cacheable() {
    assert_eq!(cache_policy("/images/ashby/hero.png", false), CachePolicy::Cacheable);
    assert_eq!(cache_policy("/videos/demo.MP4", false), CachePolicy::Cacheable);
    assert_eq!(cache_policy("/E-logo-diamond.svg", false), CachePolicy::Cacheable);
    assert_eq!(cache_policy("/Eric-Dunbar-CV.pdf", false), CachePolicy::Cacheable);
}

#[test]
fn pages_are_not_cached() {
    assert_eq!(cache_policy("/", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/about", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/case-studies/ashby", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/healthz", false), CachePolicy::NoCache);
}

#[test]
fn dotfiles_and_unknown_extensions_are_not_cached() {
    assert_eq!(cache_policy("/.png", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/notes.txt", false), CachePolicy::NoCache);
    assert_eq!(cache_policy("/images.png/readme", false), CachePolicy::NoCache);
}

// =============================================================================
// header_value
// =============================================================================

#[test]
fn header_values() {
    assert_eq!(CachePolicy::Cacheable.header_value(86_400), "public, max-age=86400");
    assert_eq!(CachePolicy::NoCache.header_value(86_400), "no-cache");
}
