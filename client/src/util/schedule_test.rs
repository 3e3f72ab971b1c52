use super::*;
use crate::state::carousel::Carousel;

#[test]
fn new_lifeline_is_alive() {
    assert!(Lifeline::new().is_alive());
    assert!(Lifeline::default().is_alive());
}

#[test]
fn cut_is_visible_through_clones() {
    let owner = Lifeline::new();
    let task = owner.clone();
    owner.cut();
    assert!(!task.is_alive());
    owner.cut();
    assert!(!owner.is_alive());
}

#[test]
fn run_executes_only_while_alive() {
    let lifeline = Lifeline::new();
    let mut calls = 0;
    assert!(lifeline.run(|| calls += 1));
    lifeline.cut();
    assert!(!lifeline.run(|| calls += 1));
    assert_eq!(calls, 1);
}

#[test]
fn tick_after_teardown_leaves_index_unchanged() {
    let component = Lifeline::new();
    let timer = component.clone();
    let mut carousel = Carousel::new(3);

    timer.run(|| {
        carousel.next();
    });
    assert_eq!(carousel.index(), 1);

    component.cut();
    for _ in 0..5 {
        timer.run(|| {
            carousel.next();
        });
    }
    assert_eq!(carousel.index(), 1);
}
