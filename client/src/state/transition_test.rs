use super::*;
use crate::state::carousel::Paginator;

#[test]
fn gate_starts_idle() {
    let gate = TransitionGate::<PageNav>::default();
    assert!(!gate.is_animating());
    assert_eq!(gate, TransitionGate::Idle);
}

#[test]
fn gate_accepts_request_when_idle() {
    let mut gate = TransitionGate::default();
    assert!(gate.begin(PageNav::Next));
    assert!(gate.is_animating());
}

#[test]
fn gate_drops_requests_while_transitioning() {
    let mut gate = TransitionGate::default();
    assert!(gate.begin(PageNav::Next));
    assert!(!gate.begin(PageNav::Prev));
    assert!(!gate.begin(PageNav::To(0)));
    assert_eq!(gate.commit(), Some(PageNav::Next));
}

#[test]
fn gate_commit_hands_out_target_once() {
    let mut gate = TransitionGate::default();
    gate.begin(PageNav::To(2));
    assert_eq!(gate.commit(), Some(PageNav::To(2)));
    assert_eq!(gate.commit(), None);
    assert!(gate.is_animating(), "still settling after commit");
}

#[test]
fn gate_stays_closed_between_commit_and_settle() {
    let mut gate = TransitionGate::default();
    gate.begin(PageNav::Next);
    gate.commit();
    assert!(!gate.begin(PageNav::Next));
    gate.settle();
    assert!(gate.begin(PageNav::Next));
}

#[test]
fn gate_commit_when_idle_is_none() {
    let mut gate = TransitionGate::<PageNav>::default();
    assert_eq!(gate.commit(), None);
}

#[test]
fn fade_out_is_longer_than_settle() {
    assert!(FADE_OUT > SETTLE);
}

// =============================================================
// PageNav
// =============================================================

#[test]
fn page_nav_applies_to_paginator() {
    let mut pages = Paginator::new(9, 3);
    assert_eq!(PageNav::Next.apply(&mut pages), 1);
    assert_eq!(PageNav::Prev.apply(&mut pages), 0);
    assert_eq!(PageNav::Prev.apply(&mut pages), 2);
    assert_eq!(PageNav::To(1).apply(&mut pages), 1);
    assert_eq!(PageNav::To(7).apply(&mut pages), 1);
}

#[test]
fn full_cycle_moves_one_page() {
    let mut gate = TransitionGate::default();
    let mut pages = Paginator::new(6, 3);
    assert!(gate.begin(PageNav::Next));
    assert!(!gate.begin(PageNav::Next));
    if let Some(nav) = gate.commit() {
        nav.apply(&mut pages);
    }
    gate.settle();
    assert_eq!(pages.page(), 1);
    assert!(!gate.is_animating());
}
