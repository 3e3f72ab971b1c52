use super::*;

static ITEMS: [MediaItem; 5] = [
    MediaItem::image("/a.png", "a").in_phase("Research", "Interviews"),
    MediaItem::image("/b.png", "b").in_phase("Research", "Personas").with_details("**notes**"),
    MediaItem::image("/c.png", "c").in_phase("Design", "Wireframes"),
    MediaItem::video("/d.mp4", "d").in_phase("Testing", "Usability"),
    MediaItem::image("/e.png", "e").in_phase("Design", "Hi-fi"),
];

static EMPTY: [MediaItem; 0] = [];

// =============================================================
// phases
// =============================================================

#[test]
fn phases_are_distinct_in_first_appearance_order() {
    let g = PhaseGallery::new(&ITEMS);
    assert_eq!(g.phases(), vec!["Research", "Design", "Testing"]);
}

#[test]
fn active_phase_follows_navigation() {
    let mut g = PhaseGallery::new(&ITEMS);
    assert_eq!(g.active_phase(), Some("Research"));
    g.next();
    g.next();
    assert_eq!(g.active_phase(), Some("Design"));
    g.prev();
    g.prev();
    g.prev();
    assert_eq!(g.index(), 4);
    assert_eq!(g.active_phase(), Some("Design"));
}

#[test]
fn go_to_phase_jumps_to_first_item_of_phase() {
    let mut g = PhaseGallery::new(&ITEMS);
    assert_eq!(g.go_to_phase("Design"), 2);
    assert_eq!(g.go_to_phase("Testing"), 3);
    assert_eq!(g.go_to_phase("Research"), 0);
}

#[test]
fn go_to_unknown_phase_is_ignored() {
    let mut g = PhaseGallery::new(&ITEMS);
    g.next();
    assert_eq!(g.go_to_phase("Launch"), 1);
}

// =============================================================
// details panel
// =============================================================

#[test]
fn details_only_open_when_item_has_details() {
    let mut g = PhaseGallery::new(&ITEMS);
    assert!(!g.toggle_details());
    g.next();
    assert!(g.toggle_details());
    assert!(!g.toggle_details());
}

#[test]
fn navigation_closes_details() {
    let mut g = PhaseGallery::new(&ITEMS);
    g.jump_to(1);
    assert!(g.toggle_details());
    g.next();
    assert!(!g.details_open());

    g.jump_to(1);
    g.toggle_details();
    g.go_to_phase("Testing");
    assert!(!g.details_open());
}

#[test]
fn out_of_range_jump_keeps_details_open() {
    let mut g = PhaseGallery::new(&ITEMS);
    g.jump_to(1);
    g.toggle_details();
    assert_eq!(g.jump_to(99), 1);
    assert!(g.details_open());
}

// =============================================================
// slide offsets
// =============================================================

#[test]
fn slide_offsets_are_relative_to_current() {
    let mut g = PhaseGallery::new(&ITEMS);
    g.jump_to(2);
    assert_eq!(g.slide_offset(0), SlideOffset::Before);
    assert_eq!(g.slide_offset(2), SlideOffset::Current);
    assert_eq!(g.slide_offset(4), SlideOffset::After);
}

#[test]
fn empty_gallery_is_inert() {
    let mut g = PhaseGallery::new(&EMPTY);
    assert!(g.phases().is_empty());
    assert_eq!(g.current(), None);
    assert_eq!(g.next(), 0);
    assert_eq!(g.go_to_phase("Research"), 0);
    assert!(!g.toggle_details());
    assert!(!g.has_controls());
}
