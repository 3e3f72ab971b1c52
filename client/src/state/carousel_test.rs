use super::*;

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_starts_at_first_item() {
    let c = Carousel::new(3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.current(), Some(0));
    assert_eq!(c.len(), 3);
}

#[test]
fn carousel_next_wraps_after_last_item() {
    let mut c = Carousel::new(3);
    assert_eq!(c.next(), 1);
    assert_eq!(c.next(), 2);
    assert_eq!(c.next(), 0);
}

#[test]
fn carousel_prev_from_first_goes_to_last() {
    let mut c = Carousel::new(5);
    assert_eq!(c.prev(), 4);
    assert_eq!(c.prev(), 3);
}

#[test]
fn carousel_n_next_calls_return_to_start() {
    for len in 1..=7 {
        let mut c = Carousel::new(len);
        c.jump_to(len / 2);
        let start = c.index();
        for _ in 0..len {
            c.next();
        }
        assert_eq!(c.index(), start, "len {len}");
    }
}

#[test]
fn carousel_prev_undoes_next() {
    let mut c = Carousel::new(4);
    c.jump_to(3);
    c.next();
    c.prev();
    assert_eq!(c.index(), 3);
}

#[test]
fn carousel_jump_to_is_idempotent() {
    let mut c = Carousel::new(6);
    assert_eq!(c.jump_to(4), 4);
    let after_first = c;
    assert_eq!(c.jump_to(4), 4);
    assert_eq!(c, after_first);
}

#[test]
fn carousel_jump_out_of_range_is_ignored() {
    let mut c = Carousel::new(3);
    c.jump_to(1);
    assert_eq!(c.jump_to(3), 1);
    assert_eq!(c.jump_to(usize::MAX), 1);
}

#[test]
fn carousel_single_item_stays_put_and_hides_controls() {
    let mut c = Carousel::new(1);
    assert!(!c.has_controls());
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
}

#[test]
fn carousel_empty_is_inert() {
    let mut c = Carousel::new(0);
    assert!(c.is_empty());
    assert_eq!(c.current(), None);
    assert!(!c.has_controls());
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    assert_eq!(c.jump_to(0), 0);
    assert_eq!(c.current(), None);
}

// =============================================================
// Paginator
// =============================================================

#[test]
fn paginator_total_pages_rounds_up() {
    assert_eq!(Paginator::new(3, 3).total_pages(), 1);
    assert_eq!(Paginator::new(4, 3).total_pages(), 2);
    assert_eq!(Paginator::new(6, 3).total_pages(), 2);
    assert_eq!(Paginator::new(7, 3).total_pages(), 3);
}

#[test]
fn paginator_empty_list_has_zero_pages() {
    let mut p = Paginator::new(0, 3);
    assert_eq!(p.total_pages(), 0);
    assert!(p.page_range().is_empty());
    assert_eq!(p.next_page(), 0);
    assert_eq!(p.prev_page(), 0);
    assert_eq!(p.go_to_page(0), 0);
}

#[test]
fn paginator_last_page_can_be_short() {
    let mut p = Paginator::new(4, 3);
    assert_eq!(p.page_range(), 0..3);
    p.next_page();
    assert_eq!(p.page_range(), 3..4);
}

#[test]
fn paginator_wraps_both_directions() {
    let mut p = Paginator::new(7, 3);
    assert_eq!(p.prev_page(), 2);
    assert_eq!(p.next_page(), 0);
    assert_eq!(p.next_page(), 1);
}

#[test]
fn paginator_go_to_page_ignores_out_of_range() {
    let mut p = Paginator::new(5, 2);
    assert_eq!(p.go_to_page(2), 2);
    assert_eq!(p.go_to_page(3), 2);
}

#[test]
fn paginator_zero_page_size_falls_back_to_one() {
    let p = Paginator::new(4, 0);
    assert_eq!(p.page_size(), 1);
    assert_eq!(p.total_pages(), 4);
}

#[test]
fn paginator_single_page_next_stays_on_first() {
    let mut p = Paginator::new(3, 3);
    assert_eq!(p.next_page(), 0);
    assert_eq!(p.page_range(), 0..3);
}
