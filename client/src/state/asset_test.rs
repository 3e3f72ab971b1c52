use super::*;

#[test]
fn asset_starts_loading_with_spinner() {
    let state = AssetState::default();
    assert!(state.shows_spinner());
    assert!(!state.is_settled());
}

#[test]
fn load_event_settles_asset() {
    let mut state = AssetState::default();
    state.on_load();
    assert_eq!(state, AssetState::Loaded);
    assert!(state.is_settled());
}

#[test]
fn error_falls_back_to_placeholder() {
    let mut state = AssetState::default();
    state.on_error();
    assert_eq!(state, AssetState::Failed);
    assert!(!state.shows_spinner());
    assert_eq!(resolve_src("/Africa/Logo.png", state), PLACEHOLDER_SRC);
}

#[test]
fn late_load_after_failure_is_ignored() {
    let mut state = AssetState::default();
    state.on_error();
    state.on_load();
    assert_eq!(state, AssetState::Failed);
}

#[test]
fn error_after_load_is_ignored() {
    let mut state = AssetState::default();
    state.on_load();
    state.on_error();
    assert_eq!(state, AssetState::Loaded);
}

#[test]
fn empty_source_resolves_to_placeholder() {
    assert_eq!(resolve_src("", AssetState::Loading), PLACEHOLDER_SRC);
    assert_eq!(resolve_src("   ", AssetState::Loaded), PLACEHOLDER_SRC);
    assert_eq!(resolve_src("/a.png", AssetState::Loading), "/a.png");
}

#[test]
fn fixed_layout_defaults_dimensions() {
    assert_eq!(AssetLayout::fixed(None, None).dimensions(), Some((800, 600)));
    assert_eq!(AssetLayout::fixed(Some(1200), None).dimensions(), Some((1200, 600)));
}

#[test]
fn fill_layout_has_no_dimensions() {
    let layout = AssetLayout::from_props(true, Some(10), Some(10));
    assert_eq!(layout, AssetLayout::Fill);
    assert_eq!(layout.dimensions(), None);
}

#[test]
fn from_props_without_fill_is_fixed() {
    assert_eq!(
        AssetLayout::from_props(false, Some(1200), Some(900)),
        AssetLayout::Fixed { width: 1200, height: 900 }
    );
}

#[test]
fn media_with_current_frame_settles_loaded() {
    let mut state = AssetState::default();
    state.on_media_status(HAVE_CURRENT_DATA, 1);
    assert_eq!(state, AssetState::Loaded);
}

#[test]
fn media_without_source_stops_spinner() {
    let mut state = AssetState::default();
    state.on_media_status(0, NETWORK_NO_SOURCE);
    assert_eq!(state, AssetState::Failed);
    assert!(!state.shows_spinner());
}

#[test]
fn media_still_fetching_keeps_spinner() {
    let mut state = AssetState::default();
    state.on_media_status(1, 2);
    assert!(state.shows_spinner());
}
