//! Paged testimonial cards with auto-rotation.
//!
//! DESIGN
//! ======
//! Every page change, manual or automatic, goes through one
//! [`TransitionGate`]: cards fade out, the page swaps after [`FADE_OUT`],
//! and input is accepted again after [`SETTLE`]. A rotation tick that lands
//! mid-transition is dropped by the gate.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::Testimonial;
use crate::state::carousel::Paginator;
use crate::state::reveal::stagger_delay_ms;
use crate::state::transition::{FADE_OUT, PageNav, SETTLE, TransitionGate};
use crate::util::schedule::{self, Lifeline};

pub const PER_PAGE: usize = 3;
pub const AUTO_ROTATE: Duration = Duration::from_secs(5);
const CARD_STAGGER_MS: u64 = 100;

#[derive(Clone)]
struct Rotation {
    pages: RwSignal<Paginator>,
    gate: RwSignal<TransitionGate<PageNav>>,
    lifeline: Lifeline,
}

impl Rotation {
    fn request(&self, nav: PageNav) {
        if !self.gate.try_update(|gate| gate.begin(nav)).unwrap_or(false) {
            return;
        }
        let (pages, gate) = (self.pages, self.gate);
        let settle_lifeline = self.lifeline.clone();
        schedule::after(FADE_OUT, self.lifeline.clone(), move || {
            if let Some(nav) = gate.try_update(TransitionGate::commit).flatten() {
                pages.update(|p| {
                    nav.apply(p);
                });
            }
            schedule::after(SETTLE, settle_lifeline, move || gate.update(TransitionGate::settle));
        });
    }
}

#[component]
pub fn AnimatedTestimonials(testimonials: &'static [Testimonial]) -> impl IntoView {
    if testimonials.is_empty() {
        return ().into_any();
    }
    let rotation = Rotation {
        pages: RwSignal::new(Paginator::new(testimonials.len(), PER_PAGE)),
        gate: RwSignal::new(TransitionGate::default()),
        lifeline: Lifeline::scoped(),
    };
    let Rotation { pages, gate, .. } = rotation.clone();
    let total_pages = pages.get_untracked().total_pages();

    if total_pages > 1 {
        let ticker = rotation.clone();
        schedule::every(AUTO_ROTATE, rotation.lifeline.clone(), move || ticker.request(PageNav::Next));
    }

    let cards = move || {
        let range = pages.get().page_range();
        testimonials
            .get(range)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, testimonial)| {
                let delay = stagger_delay_ms(0, index, CARD_STAGGER_MS);
                view! {
                    <figure
                        class="testimonial"
                        class:testimonial--hidden=move || gate.get().is_animating()
                        style=format!("transition-delay: {delay}ms;")
                    >
                        <Icon kind=IconKind::Quote class="testimonial__mark"/>
                        <blockquote class="testimonial__quote">{testimonial.quote}</blockquote>
                        <figcaption class="testimonial__byline">
                            <span class="testimonial__author">{testimonial.author}</span>
                            <span class="testimonial__role">{testimonial.role}</span>
                        </figcaption>
                    </figure>
                }
            })
            .collect_view()
    };

    let dots = (0..total_pages)
        .map(|page| {
            let rotation = rotation.clone();
            view! {
                <button
                    class="testimonials__dot"
                    class:testimonials__dot--active=move || pages.get().page() == page
                    aria-label=format!("Go to testimonial page {}", page + 1)
                    on:click=move |_| rotation.request(PageNav::To(page))
                ></button>
            }
        })
        .collect_view();

    let prev = rotation.clone();
    let next = rotation;
    let nav = (total_pages > 1).then(|| {
        view! {
            <div class="testimonials__nav">
                <div class="testimonials__dots">{dots}</div>
                <div class="testimonials__arrows">
                    <button
                        class="testimonials__arrow"
                        aria-label="Previous testimonials"
                        disabled=move || gate.get().is_animating()
                        on:click=move |_| prev.request(PageNav::Prev)
                    >
                        <Icon kind=IconKind::ChevronLeft size=16/>
                    </button>
                    <button
                        class="testimonials__arrow"
                        aria-label="Next testimonials"
                        disabled=move || gate.get().is_animating()
                        on:click=move |_| next.request(PageNav::Next)
                    >
                        <Icon kind=IconKind::ChevronRight size=16/>
                    </button>
                </div>
            </div>
        }
    });

    view! {
        <div class="testimonials">
            <div class="testimonials__grid">{cards}</div>
            {nav}
        </div>
    }
    .into_any()
}
