//! Home-page card linking to a case study.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::Project;
use crate::state::asset::{AssetState, resolve_src};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let logo = resolve_src(project.logo, AssetState::Loading);

    view! {
        <a
            class="project-card"
            href=project.href()
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="project-card__logo">
                <img class="project-card__logo-image" src=logo alt=project.title/>
            </div>
            <div class="project-card__body">
                <div>
                    <h3 class="project-card__title">{project.title}</h3>
                    <p class="project-card__description">{project.description}</p>
                </div>
                <span class="project-card__arrow" class:project-card__arrow--shown=move || hovered.get()>
                    <Icon kind=IconKind::ArrowUpRight/>
                </span>
            </div>
        </a>
    }
}
