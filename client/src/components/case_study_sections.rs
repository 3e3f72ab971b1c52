//! Building blocks of a case-study page.
//!
//! Sections render straight from [`CaseStudy`](crate::content::CaseStudy)
//! fields. Only the hero and metric strip animate; they take the page's
//! [`RevealPhase`] and fade in once it turns visible.

use leptos::prelude::*;

use crate::components::captioned_carousel::CaptionedCarousel;
use crate::components::comparison_slider::ComparisonSlider;
use crate::components::icons::{Icon, IconKind};
use crate::components::media::{ImageWithLoader, PhoneMockup, SvgLoader, VideoPlayer};
use crate::components::phase_gallery::PhaseGallery;
use crate::content::{
    CaseStudy, DesignProcess, ExternalLink, Iteration, Metric, NextProject, PhaseMedia, Problem, ProcessPhase,
    ProductShowcase, Research, ResultMetric, Solutions, case_study_href,
};
use crate::state::reveal::{RevealPhase, stagger_delay_ms};

const HERO_STAGGER_MS: u64 = 100;
const METRIC_BASE_MS: u64 = 200;
const METRIC_STAGGER_MS: u64 = 100;

fn bullet_list(items: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <ul class=class>
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

fn deliverable_grid(deliverables: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="deliverables">
            {deliverables
                .iter()
                .map(|deliverable| {
                    view! {
                        <div class="deliverables__item">
                            <Icon kind=IconKind::CheckCircle size=16 class="deliverables__check"/>
                            <span>{*deliverable}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

// =============================================================================
// HERO
// =============================================================================

#[component]
pub fn CaseStudyHero(study: &'static CaseStudy, #[prop(into)] reveal: Signal<RevealPhase>) -> impl IntoView {
    let lines = [
        ("case-hero__title", study.title),
        ("case-hero__subtitle", study.subtitle),
        ("case-hero__description", study.description),
    ];
    let heading = lines
        .into_iter()
        .enumerate()
        .map(|(index, (base, text))| {
            let delay = stagger_delay_ms(0, index, HERO_STAGGER_MS);
            let style = format!("transition-delay: {delay}ms;");
            let class = move || format!("{base} {}", reveal.get().fade_class());
            if index == 0 {
                view! { <h1 class=class style=style>{text}</h1> }.into_any()
            } else {
                view! { <p class=class style=style>{text}</p> }.into_any()
            }
        })
        .collect_view();

    view! {
        <header class="case-hero">
            {heading}
            {study
                .hero
                .map(|hero| {
                    view! {
                        <div class="case-hero__image">
                            <ImageWithLoader src=hero.src alt=hero.alt fill=true priority=true/>
                        </div>
                    }
                })}
        </header>
    }
}

#[component]
pub fn MetricStrip(metrics: &'static [Metric], #[prop(into)] reveal: Signal<RevealPhase>) -> impl IntoView {
    view! {
        <div class="metrics">
            {metrics
                .iter()
                .enumerate()
                .map(|(index, metric)| {
                    let delay = stagger_delay_ms(METRIC_BASE_MS, index, METRIC_STAGGER_MS);
                    view! {
                        <div
                            class=move || format!("metrics__card {}", reveal.get().fade_class())
                            style=format!("transition-delay: {delay}ms;")
                        >
                            <p class="metrics__value">{metric.value}</p>
                            <p class="metrics__label">{metric.label}</p>
                            <p class="metrics__description">{metric.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

#[component]
pub fn ProductShowcaseSection(showcase: ProductShowcase) -> impl IntoView {
    view! {
        <section class="case-section showcase">
            <h2 class="case-section__title">{showcase.title}</h2>
            <p class="case-section__lead">{showcase.description}</p>
            <div class="showcase__screens">
                {showcase
                    .screens
                    .iter()
                    .map(|screen| view! { <PhoneMockup src=screen.src alt=screen.alt/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn OrganizationLinks(links: &'static [ExternalLink]) -> impl IntoView {
    view! {
        <section class="case-section org-links">
            <h3 class="org-links__title">"Organization Links"</h3>
            <div class="org-links__list">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="org-links__link" href=link.href target="_blank" rel="noopener noreferrer">
                                <Icon kind=IconKind::Link size=20/>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectOverview(entries: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Project Overview"</h2>
            <dl class="overview">
                {entries
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="overview__entry">
                                <dt class="overview__label">{*label}</dt>
                                <dd class="overview__value">{*value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

#[component]
pub fn ProblemSection(problem: Problem) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Problem & Goals"</h2>
            <div class="case-card">
                <p class="case-section__lead">{problem.statement}</p>
                <h3 class="case-card__heading">"Project Goals"</h3>
                {bullet_list(problem.goals, "case-list")}
            </div>
        </section>
    }
}

#[component]
pub fn ResearchSection(research: Research) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Research & Discovery"</h2>
            <div class="research">
                {research
                    .methods
                    .iter()
                    .map(|method| {
                        view! {
                            <div class="research__method">
                                <h3 class="research__title">{method.title}</h3>
                                <p class="research__count">{method.count}</p>
                                <p class="research__insights">{method.insights}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="case-card">
                <h3 class="case-card__heading">"Key Findings"</h3>
                {bullet_list(research.key_findings, "case-list")}
            </div>
        </section>
    }
}

// =============================================================================
// PROCESS
// =============================================================================

/// Single gallery covering every phase, used instead of per-phase media.
#[component]
pub fn DesignProcessGallery(process: DesignProcess) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Design Process"</h2>
            <p class="case-section__lead">{process.description}</p>
            <PhaseGallery items=process.media/>
            <h3 class="case-card__heading">"Key Deliverables"</h3>
            {deliverable_grid(process.deliverables)}
        </section>
    }
}

#[component]
pub fn ProcessPhases(phases: &'static [ProcessPhase]) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Design Process"</h2>
            <div class="phases">
                {phases
                    .iter()
                    .enumerate()
                    .map(|(index, phase)| {
                        view! {
                            <div class="phase">
                                <h3 class="phase__title">{format!("{}. {}", index + 1, phase.title)}</h3>
                                <p class="phase__description">{phase.description}</p>
                                {deliverable_grid(phase.deliverables)}
                                <PhaseMediaView media=phase.media title=phase.title/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PhaseMediaView(media: PhaseMedia, title: &'static str) -> impl IntoView {
    match media {
        PhaseMedia::None => ().into_any(),
        PhaseMedia::Image(item) => view! {
            <div class="phase__media">
                <ImageWithLoader src=item.src alt=item.alt width=1200 height=800/>
            </div>
        }
        .into_any(),
        PhaseMedia::SvgFile(item) => view! {
            <div class="phase__media phase__media--svg">
                <SvgLoader src=item.src alt=item.alt/>
            </div>
        }
        .into_any(),
        PhaseMedia::Videos(items) => view! {
            <div class="phase__videos">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <figure class="phase__video">
                                <VideoPlayer src=item.src/>
                                {item.caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        PhaseMedia::Carousel(items) => view! { <CaptionedCarousel items=items/> }.into_any(),
        PhaseMedia::Comparison(comparison) => view! { <ComparisonSlider comparison=comparison/> }.into_any(),
        PhaseMedia::Iterations { hint, rows } => view! {
            <div class="iterations" aria-label=title>
                <p class="iterations__hint">{hint}</p>
                {rows.iter().copied().map(iteration_row).collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn iteration_row(row: &'static [Iteration]) -> impl IntoView {
    view! {
        <div class="iterations__row" style=format!("--columns: {};", row.len())>
            {row
                .iter()
                .map(|iteration| {
                    view! {
                        <figure class="iterations__item">
                            <div class="iterations__frame">
                                <ImageWithLoader src=iteration.src alt=iteration.alt width=1200 height=900/>
                            </div>
                            <figcaption>
                                <span class="iterations__label">{iteration.label}</span>
                                <span class="iterations__note">{iteration.note}</span>
                            </figcaption>
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

#[component]
pub fn SolutionsSection(solutions: Solutions) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Key Solutions"</h2>
            <p class="case-section__lead">{solutions.description}</p>
            <div class="solutions">
                {solutions
                    .features
                    .iter()
                    .map(|feature| {
                        let media = if feature.media.is_video() {
                            view! { <VideoPlayer src=feature.media.src/> }.into_any()
                        } else {
                            view! { <ImageWithLoader src=feature.media.src alt=feature.media.alt fill=true/> }.into_any()
                        };
                        view! {
                            <article class="solutions__feature">
                                <div class="solutions__copy">
                                    <h3 class="solutions__title">{feature.title}</h3>
                                    <p class="solutions__description">{feature.description}</p>
                                </div>
                                <div class="solutions__media">{media}</div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ResultsSection(results: &'static [ResultMetric]) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Results & Impact"</h2>
            <div class="results">
                {results
                    .iter()
                    .map(|result| {
                        view! {
                            <div class="results__card">
                                <h3 class="results__label">{result.label}</h3>
                                <dl class="results__rows">
                                    <dt>"Before"</dt>
                                    <dd>{result.before}</dd>
                                    <dt>"After"</dt>
                                    <dd>{result.after}</dd>
                                    <dt>"Improvement"</dt>
                                    <dd class="results__improvement">{result.improvement}</dd>
                                </dl>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn LearningsSection(learnings: &'static [&'static str], personal_growth: &'static [&'static str]) -> impl IntoView {
    view! {
        <section class="case-section">
            <h2 class="case-section__title">"Key Learnings"</h2>
            <div class="learnings" class:learnings--split=!personal_growth.is_empty()>
                <div class="case-card">
                    <h3 class="case-card__heading">"Project Insights"</h3>
                    {bullet_list(learnings, "case-list")}
                </div>
                {(!personal_growth.is_empty())
                    .then(|| {
                        view! {
                            <div class="case-card">
                                <h3 class="case-card__heading">"Personal Growth"</h3>
                                {bullet_list(personal_growth, "case-list")}
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
pub fn NextCaseStudy(next: NextProject) -> impl IntoView {
    view! {
        <nav class="next-case" aria-label="Next case study">
            <p class="next-case__label">"Next Case Study"</p>
            <a class="next-case__link" href=case_study_href(next.slug)>
                {next.title}
                <Icon kind=IconKind::ArrowRight size=16/>
            </a>
        </nav>
    }
}
