use super::*;

fn container() -> Bounds {
    Bounds::from_edges(100.0, 500.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// position_from_pointer
// =============================================================

#[test]
fn pointer_left_of_container_clamps_to_zero() {
    assert_eq!(position_from_pointer(50.0, container()), Some(0.0));
}

#[test]
fn pointer_right_of_container_clamps_to_hundred() {
    assert_eq!(position_from_pointer(700.0, container()), Some(100.0));
}

#[test]
fn pointer_at_center_is_fifty() {
    let pos = position_from_pointer(300.0, container()).unwrap();
    assert!(approx(pos, 50.0));
}

#[test]
fn pointer_on_edges_maps_to_bounds() {
    assert_eq!(position_from_pointer(100.0, container()), Some(0.0));
    assert_eq!(position_from_pointer(500.0, container()), Some(100.0));
}

#[test]
fn any_pointer_stays_within_range() {
    let samples = [-1.0e9, -10.0, 0.0, 99.9, 123.4, 250.0, 499.99, 501.0, 1.0e9];
    for x in samples {
        let pos = position_from_pointer(x, container()).unwrap();
        assert!((0.0..=100.0).contains(&pos), "x={x} gave {pos}");
    }
}

#[test]
fn zero_width_container_yields_none() {
    assert_eq!(position_from_pointer(10.0, Bounds::new(0.0, 0.0)), None);
    assert_eq!(position_from_pointer(10.0, Bounds::new(0.0, -5.0)), None);
    assert_eq!(position_from_pointer(10.0, Bounds::new(0.0, f64::NAN)), None);
}

#[test]
fn non_finite_pointer_yields_none() {
    assert_eq!(position_from_pointer(f64::NAN, container()), None);
    assert_eq!(position_from_pointer(f64::INFINITY, container()), None);
}

// =============================================================
// ComparisonSlider
// =============================================================

#[test]
fn slider_starts_centered_and_idle() {
    let s = ComparisonSlider::default();
    assert!(approx(s.position(), INITIAL_POSITION));
    assert!(!s.is_dragging());
}

#[test]
fn move_without_drag_is_ignored() {
    let mut s = ComparisonSlider::default();
    assert!(approx(s.pointer_move(120.0, container()), 50.0));
}

#[test]
fn drag_tracks_pointer_and_keeps_value_after_release() {
    let mut s = ComparisonSlider::default();
    s.begin_drag();
    assert!(s.is_dragging());
    assert!(approx(s.pointer_move(200.0, container()), 25.0));
    assert!(approx(s.pointer_move(50.0, container()), 0.0));
    assert!(approx(s.pointer_move(450.0, container()), 87.5));
    s.end_drag();
    assert!(!s.is_dragging());
    assert!(approx(s.pointer_move(100.0, container()), 87.5));
    assert!(approx(s.position(), 87.5));
}

#[test]
fn drag_over_unlaid_container_keeps_last_position() {
    let mut s = ComparisonSlider::default();
    s.begin_drag();
    s.pointer_move(400.0, container());
    assert!(approx(s.pointer_move(10.0, Bounds::new(0.0, 0.0)), 75.0));
}

#[test]
fn overlay_inner_width_compensates_for_clip() {
    let mut s = ComparisonSlider::default();
    assert!(approx(s.overlay_inner_width(), 200.0));
    s.set_from_pointer(500.0, container());
    assert!(approx(s.overlay_inner_width(), 100.0));
    s.set_from_pointer(200.0, container());
    assert!(approx(s.overlay_inner_width(), 400.0));
}

#[test]
fn overlay_inner_width_at_zero_avoids_division() {
    let mut s = ComparisonSlider::default();
    s.set_from_pointer(0.0, container());
    assert!(approx(s.position(), 0.0));
    assert!(approx(s.overlay_inner_width(), 100.0));
}
