//! Phase-grouped media gallery.
//!
//! DESIGN
//! ======
//! Wraps a [`Carousel`] over media items that carry a phase label
//! ("Research", "Design", ...). Pill buttons jump to the first item of a
//! phase and the active pill follows the current slide. A details panel
//! shows the current item's long-form notes and closes on any navigation.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::content::MediaItem;

use super::carousel::Carousel;

/// Position of a slide relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideOffset {
    Current,
    Before,
    After,
}

impl SlideOffset {
    /// Transform class for the slide animation.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Current => "slide slide--current",
            Self::Before => "slide slide--before",
            Self::After => "slide slide--after",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseGallery {
    items: &'static [MediaItem],
    carousel: Carousel,
    details_open: bool,
}

impl PhaseGallery {
    #[must_use]
    pub fn new(items: &'static [MediaItem]) -> Self {
        Self { items, carousel: Carousel::new(items.len()), details_open: false }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.carousel.has_controls()
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static MediaItem> {
        self.carousel.current().and_then(|i| self.items.get(i))
    }

    /// Distinct phase names in order of first appearance.
    #[must_use]
    pub fn phases(&self) -> Vec<&'static str> {
        let mut phases: Vec<&'static str> = Vec::new();
        for phase in self.items.iter().filter_map(|item| item.phase) {
            if !phases.contains(&phase) {
                phases.push(phase);
            }
        }
        phases
    }

    #[must_use]
    pub fn active_phase(&self) -> Option<&'static str> {
        self.current().and_then(|item| item.phase)
    }

    pub fn next(&mut self) -> usize {
        self.details_open = false;
        self.carousel.next()
    }

    pub fn prev(&mut self) -> usize {
        self.details_open = false;
        self.carousel.prev()
    }

    pub fn jump_to(&mut self, index: usize) -> usize {
        if index < self.items.len() {
            self.details_open = false;
        }
        self.carousel.jump_to(index)
    }

    /// Jump to the first item of `phase`. Unknown phases change nothing.
    pub fn go_to_phase(&mut self, phase: &str) -> usize {
        match self.items.iter().position(|item| item.phase == Some(phase)) {
            Some(first) => self.jump_to(first),
            None => self.index(),
        }
    }

    #[must_use]
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    /// Flip the details panel. Stays closed when the slide has no details.
    pub fn toggle_details(&mut self) -> bool {
        let has_details = self.current().is_some_and(|item| item.details.is_some());
        self.details_open = has_details && !self.details_open;
        self.details_open
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
    }

    #[must_use]
    pub fn slide_offset(&self, index: usize) -> SlideOffset {
        match index.cmp(&self.index()) {
            std::cmp::Ordering::Equal => SlideOffset::Current,
            std::cmp::Ordering::Less => SlideOffset::Before,
            std::cmp::Ordering::Greater => SlideOffset::After,
        }
    }
}
