use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::{Icon, IconKind};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found"/>
        <section class="page container not-found">
            <h1 class="page__title">"Page not found"</h1>
            <p>"The page you are looking for does not exist or has moved."</p>
            <a class="back-link" href="/">
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to home"
            </a>
        </section>
    }
}
