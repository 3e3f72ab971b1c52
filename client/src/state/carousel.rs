//! Looping index models for carousels and paged lists.
//!
//! DESIGN
//! ======
//! Both models are plain values so components can keep them inside a single
//! `RwSignal` and tests can drive them without a reactive runtime. Every
//! operation keeps the index inside `[0, len - 1]`; empty lists turn all
//! navigation into no-ops instead of dividing by zero.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::ops::Range;

/// Position within a fixed, ordered list of items with wraparound navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the visible item, or `None` for an empty list.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Arrows and dots are only useful with more than one item.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Advance one item, wrapping from the last item to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Step back one item, wrapping from the first item to the last.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump directly to `index`. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

/// Page cursor over a list shown in fixed-size batches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    item_count: usize,
    page_size: usize,
    page: usize,
}

impl Paginator {
    /// A `page_size` of zero is treated as one item per page.
    #[must_use]
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self { item_count, page_size: page_size.max(1), page: 0 }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    /// Item indices shown on the current page. Empty when there are no items.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    pub fn next_page(&mut self) -> usize {
        let total = self.total_pages();
        if total > 0 {
            self.page = (self.page + 1) % total;
        }
        self.page
    }

    pub fn prev_page(&mut self) -> usize {
        let total = self.total_pages();
        if total > 0 {
            self.page = (self.page + total - 1) % total;
        }
        self.page
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        if page < self.total_pages() {
            self.page = page;
        }
        self.page
    }
}
