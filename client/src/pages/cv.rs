//! Printable CV with a link to the PDF version.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::{Icon, IconKind};
use crate::content::{ExternalLink, cv, profile};

fn contact_link(icon: IconKind, link: ExternalLink) -> impl IntoView {
    view! {
        <li class="cv__contact">
            <Icon kind=icon size=16/>
            <a href=link.href target="_blank" rel="noopener noreferrer">{link.label}</a>
        </li>
    }
}

#[component]
pub fn CvPage() -> impl IntoView {
    let profile = profile();
    let cv = cv();

    view! {
        <Title text=format!("CV | {}", profile.name)/>
        <article class="page container container--narrow">
            <div class="cv__toolbar">
                <a class="back-link" href="/">
                    <Icon kind=IconKind::ArrowLeft size=16/>
                    "Back to home"
                </a>
                <a class="button" href=profile.cv_pdf download="">
                    <Icon kind=IconKind::Download size=16/>
                    "Download PDF"
                </a>
            </div>
            <div class="cv">
                <header class="cv__header">
                    <h1 class="cv__name">{profile.name}</h1>
                    <p class="cv__title">{profile.title}</p>
                    <p class="cv__summary">{cv.summary}</p>
                    <ul class="cv__contacts">
                        <li class="cv__contact">
                            <Icon kind=IconKind::Mail size=16/>
                            <a href=profile.mailto()>{profile.email}</a>
                        </li>
                        <li class="cv__contact">
                            <Icon kind=IconKind::MapPin size=16/>
                            <span>{profile.location}</span>
                        </li>
                        {contact_link(IconKind::Link, profile.linkedin)}
                        {contact_link(IconKind::Globe, profile.website)}
                    </ul>
                </header>

                <section class="cv__section">
                    <h2>"Skills"</h2>
                    <div class="cv__skills">
                        {cv
                            .skills
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class="cv__skill-group">
                                        <h3>{group.title}</h3>
                                        <ul class="tags">
                                            {group.skills.iter().map(|skill| view! { <li class="tag">{*skill}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="cv__section">
                    <h2>"Experience"</h2>
                    {cv
                        .experience
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="cv__entry">
                                    <div class="cv__entry-head">
                                        <h3>{entry.role}</h3>
                                        <span class="cv__period">{entry.period}</span>
                                    </div>
                                    <p class="cv__setting">{entry.setting}</p>
                                    <p>{entry.summary}</p>
                                    <ul class="cv__highlights">
                                        {entry.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="cv__section">
                    <h2>"Education"</h2>
                    {cv
                        .education
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="cv__entry">
                                    <div class="cv__entry-head">
                                        <h3>{entry.school}</h3>
                                        <span class="cv__period">{entry.period}</span>
                                    </div>
                                    <p>{entry.degree}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="cv__section">
                    <h2>"Projects"</h2>
                    {cv
                        .projects
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="cv__entry">
                                    <h3>{project.title}</h3>
                                    <p>{project.summary}</p>
                                    <ul class="cv__highlights">
                                        {project.outcomes.iter().map(|o| view! { <li>{*o}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </div>
        </article>
    }
}
