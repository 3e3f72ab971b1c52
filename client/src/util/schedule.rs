//! Component-scoped timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets run one-shot delays (deferred reveal, transition beats) and
//! periodic ticks (testimonial auto-rotation) on the browser event loop. A
//! timer must never touch state after its component is torn down.
//!
//! DESIGN
//! ======
//! Each task is a `spawn_local` future that sleeps and then checks a shared
//! [`Lifeline`] before running its callback. The owning component cuts the
//! lifeline from `on_cleanup`; pending sleeps still wake, see the cut line
//! and exit without running anything.
//!
//! TRADE-OFFS
//! ==========
//! A cut task stays parked until its sleep elapses instead of clearing the
//! browser timer. Periods here are seconds at most, so the leftover wakeup
//! is harmless.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Liveness token shared between a component and its timers.
#[derive(Clone, Debug)]
pub struct Lifeline(Arc<AtomicBool>);

impl Default for Lifeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifeline {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Lifeline cut automatically when the current reactive owner is cleaned up.
    #[must_use]
    pub fn scoped() -> Self {
        let lifeline = Self::new();
        let on_drop = lifeline.clone();
        leptos::prelude::on_cleanup(move || on_drop.cut());
        lifeline
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Stop every task holding a clone of this lifeline. Idempotent.
    pub fn cut(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `f` if still alive. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_alive() {
            f();
            true
        } else {
            false
        }
    }
}

/// Run `f` once after `delay`, unless `lifeline` is cut first.
#[cfg(feature = "hydrate")]
pub fn after<F>(delay: Duration, lifeline: Lifeline, f: F)
where
    F: FnOnce() + 'static,
{
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        lifeline.run(f);
    });
}

/// Run `f` every `period` until `lifeline` is cut.
#[cfg(feature = "hydrate")]
pub fn every<F>(period: Duration, lifeline: Lifeline, mut f: F)
where
    F: FnMut() + 'static,
{
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(period).await;
            if !lifeline.run(&mut f) {
                break;
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn after<F>(_delay: Duration, _lifeline: Lifeline, _f: F)
where
    F: FnOnce() + 'static,
{
}

#[cfg(not(feature = "hydrate"))]
pub fn every<F>(_period: Duration, _lifeline: Lifeline, _f: F)
where
    F: FnMut() + 'static,
{
}
