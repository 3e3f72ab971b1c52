//! Fade gate for animated page changes.
//!
//! A page change runs in three beats: fade the current batch out, swap to
//! the target page, then let the new batch settle before accepting input
//! again. Requests that arrive mid-transition are dropped, not queued, so
//! auto-rotation ticks and rapid clicks never stack up.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::time::Duration;

/// Time between accepting a request and swapping the page.
pub const FADE_OUT: Duration = Duration::from_millis(300);
/// Time between the swap and accepting the next request.
pub const SETTLE: Duration = Duration::from_millis(50);

/// Gate state. `pending` is `Some` until the swap has been handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionGate<T> {
    Idle,
    Transitioning {
        pending: Option<T>,
    },
}

impl<T> Default for TransitionGate<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Copy> TransitionGate<T> {
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    /// Accept `target` if idle. Returns whether the request was accepted.
    pub fn begin(&mut self, target: T) -> bool {
        if self.is_animating() {
            return false;
        }
        *self = Self::Transitioning { pending: Some(target) };
        true
    }

    /// Hand out the pending target once the fade-out has finished.
    pub fn commit(&mut self) -> Option<T> {
        match self {
            Self::Transitioning { pending } => pending.take(),
            Self::Idle => None,
        }
    }

    /// Return to idle after the settle delay.
    pub fn settle(&mut self) {
        *self = Self::Idle;
    }
}

/// Navigation intent applied to a paged list when a transition commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageNav {
    Next,
    Prev,
    To(usize),
}

impl PageNav {
    pub fn apply(self, pages: &mut crate::state::carousel::Paginator) -> usize {
        match self {
            Self::Next => pages.next_page(),
            Self::Prev => pages.prev_page(),
            Self::To(page) => pages.go_to_page(page),
        }
    }
}
