//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser concerns (timers, pointer geometry) and rendering helpers out
//! of components so the logic underneath can be tested natively.

pub mod markdown;
#[cfg(feature = "hydrate")]
pub mod pointer;
pub mod schedule;
