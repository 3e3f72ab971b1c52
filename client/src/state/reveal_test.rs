use super::*;

#[test]
fn reveal_starts_loading() {
    let phase = RevealPhase::default();
    assert!(phase.is_loading());
    assert!(!phase.is_visible());
}

#[test]
fn reveal_advances_in_order_and_stops_at_visible() {
    let mut phase = RevealPhase::default();
    assert_eq!(phase.advance(), RevealPhase::Loaded);
    assert_eq!(phase.advance(), RevealPhase::Visible);
    assert_eq!(phase.advance(), RevealPhase::Visible);
}

#[test]
fn reveal_phases_are_ordered() {
    assert!(RevealPhase::Loading < RevealPhase::Loaded);
    assert!(RevealPhase::Loaded < RevealPhase::Visible);
}

#[test]
fn fade_class_only_shown_when_visible() {
    assert_eq!(RevealPhase::Loading.fade_class(), "reveal");
    assert_eq!(RevealPhase::Loaded.fade_class(), "reveal");
    assert_eq!(RevealPhase::Visible.fade_class(), "reveal reveal--shown");
}

#[test]
fn case_study_delays_match_page_timing() {
    assert_eq!(CASE_STUDY_LOAD_DELAY.as_millis(), 800);
    assert_eq!(CASE_STUDY_VISIBLE_DELAY.as_millis(), 100);
    assert_eq!(PAGE_LOADER_DELAY.as_millis(), 1500);
}

#[test]
fn stagger_delay_steps_per_index() {
    assert_eq!(stagger_delay_ms(200, 0, 100), 200);
    assert_eq!(stagger_delay_ms(200, 2, 100), 400);
    assert_eq!(stagger_delay_ms(0, usize::MAX, u64::MAX), u64::MAX);
}
