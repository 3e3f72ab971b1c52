//! Full-screen splash shown while the home page settles.

use leptos::prelude::*;

use crate::state::reveal::PAGE_LOADER_DELAY;
use crate::util::schedule::{self, Lifeline};

/// Monogram pulse with a progress bar, removed after [`PAGE_LOADER_DELAY`].
///
/// Server-rendered HTML includes the splash; it is only dismissed once the
/// page has hydrated.
#[component]
pub fn PageLoader() -> impl IntoView {
    let shown = RwSignal::new(true);
    schedule::after(PAGE_LOADER_DELAY, Lifeline::scoped(), move || shown.set(false));

    view! {
        <Show when=move || shown.get()>
            <div class="page-loader" role="status" aria-label="Loading">
                <div class="page-loader__mark">"ED"</div>
                <div class="page-loader__track">
                    <div class="page-loader__bar"></div>
                </div>
            </div>
        </Show>
    }
}
