//! About page: portrait, story, experience, skills and contact.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::{Icon, IconKind};
use crate::components::media::ImageWithLoader;
use crate::content::{cv, profile};

#[component]
pub fn AboutPage() -> impl IntoView {
    let profile = profile();
    let cv = cv();

    view! {
        <Title text=format!("About | {}", profile.name)/>
        <article class="page container container--narrow">
            <a class="back-link" href="/">
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to home"
            </a>
            <h1 class="page__title">"About Me"</h1>
            <div class="about__portrait">
                <ImageWithLoader
                    src=profile.portrait
                    alt=format!("{} portrait", profile.name)
                    width=1200
                    height=600
                    priority=true
                />
            </div>
            <div class="prose">
                {cv.about_paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                <h2>"My Approach"</h2>
                {cv.approach_paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                <h2>"Experience"</h2>
                <div class="about__experience">
                    {cv
                        .about_experience
                        .iter()
                        .map(|note| {
                            view! {
                                <div class="about__role">
                                    <h3>{note.role}</h3>
                                    <p class="about__period">{note.period}</p>
                                    <p>{note.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h2>"Skills & Tools"</h2>
                <div class="about__skills">
                    {cv
                        .about_skills
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="about__skill-group">
                                    <h3>{group.title}</h3>
                                    <ul>{group.skills.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}</ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <section class="connect">
                <h2>"Let's Connect"</h2>
                <p>"I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."</p>
                <p class="connect__row">
                    <Icon kind=IconKind::Mail size=16/>
                    "Email: "
                    <a href=profile.mailto()>{profile.email}</a>
                </p>
                <p class="connect__row">
                    <Icon kind=IconKind::Calendar size=16/>
                    "Schedule a chat: "
                    <a href=profile.scheduling.href target="_blank" rel="noopener noreferrer">
                        {profile.scheduling.label}
                        <Icon kind=IconKind::ExternalLink size=16 class="connect__external"/>
                    </a>
                </p>
            </section>
        </article>
    }
}
