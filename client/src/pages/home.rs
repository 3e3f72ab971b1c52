//! Landing page: splash, hero, testimonials and the project grid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_loader::PageLoader;
use crate::components::project_card::ProjectCard;
use crate::components::testimonials::AnimatedTestimonials;
use crate::content::{home_projects, home_testimonials, profile};
use crate::state::reveal::{RevealPhase, stagger_delay_ms};

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = profile();
    let reveal = RwSignal::new(RevealPhase::Loading);
    // The hero has nothing to wait for; it fades in as soon as it mounts.
    Effect::new(move || reveal.set(RevealPhase::Visible));

    let tagline = format!("{} based in {}", profile.title, profile.location).to_uppercase();
    let hero = [profile.name.to_owned(), tagline, profile.summary.to_owned()]
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let style = format!("transition-delay: {}ms;", stagger_delay_ms(0, index, 100));
            let base = if index == 0 { "home-hero__name" } else { "home-hero__lead" };
            let class = move || format!("{base} {}", reveal.get().fade_class());
            if index == 0 {
                view! { <h1 class=class style=style>{text}</h1> }.into_any()
            } else {
                view! { <p class=class style=style>{text}</p> }.into_any()
            }
        })
        .collect_view();

    view! {
        <Title text=format!("{} | {}", profile.name, profile.title)/>
        <PageLoader/>
        <section class="home-hero container">{hero}</section>
        <section class="home-section container">
            <AnimatedTestimonials testimonials=home_testimonials()/>
        </section>
        <section class="home-section container">
            <div class="project-grid">
                {home_projects()
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project/> })
                    .collect_view()}
            </div>
        </section>
    }
}
