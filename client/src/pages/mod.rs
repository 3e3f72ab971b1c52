//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page resolves its content from `content` and delegates rendering
//! details to `components`.

pub mod about;
pub mod blog;
pub mod case_study;
pub mod cv;
pub mod home;
pub mod not_found;
