//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are thin views over the widget models in `state`: each owns
//! its model in a local signal and never shares it through context.

pub mod captioned_carousel;
pub mod case_study_sections;
pub mod comparison_slider;
pub mod footer;
pub mod header;
pub mod icons;
pub mod markdown;
pub mod media;
pub mod page_loader;
pub mod phase_gallery;
pub mod project_card;
pub mod testimonials;
