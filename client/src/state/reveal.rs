//! Deferred content reveal phases.
//!
//! Pages show a spinner, drop it once "loaded", and a beat later flip the
//! content into view so the fade/slide-in transition has something to
//! animate from. Phases only move forward.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

/// Case-study spinner duration before content is considered loaded.
pub const CASE_STUDY_LOAD_DELAY: Duration = Duration::from_millis(800);
/// Gap between dropping the spinner and starting the fade-in.
pub const CASE_STUDY_VISIBLE_DELAY: Duration = Duration::from_millis(100);
/// Home-page splash screen duration.
pub const PAGE_LOADER_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealPhase {
    #[default]
    Loading,
    Loaded,
    Visible,
}

impl RevealPhase {
    /// Step one phase forward. `Visible` is terminal.
    pub fn advance(&mut self) -> Self {
        *self = match self {
            Self::Loading => Self::Loaded,
            Self::Loaded | Self::Visible => Self::Visible,
        };
        *self
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Transition classes for content that fades and slides in.
    #[must_use]
    pub fn fade_class(self) -> &'static str {
        if self.is_visible() { "reveal reveal--shown" } else { "reveal" }
    }
}

/// Per-item stagger for grids that reveal in sequence, in milliseconds.
#[must_use]
pub fn stagger_delay_ms(base_ms: u64, index: usize, step_ms: u64) -> u64 {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}
