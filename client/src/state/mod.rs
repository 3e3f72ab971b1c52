//! Per-view widget state.
//!
//! Each model is a plain value owned by one component instance and stored in
//! an `RwSignal`. None of them touch the DOM, so they are exercised directly
//! by unit tests.

pub mod asset;
pub mod carousel;
pub mod gallery;
pub mod reveal;
pub mod slider;
pub mod transition;
