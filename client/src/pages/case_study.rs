//! Case-study route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/case-studies/:slug` resolves the slug against the content catalog and
//! renders the study, or the not-found page for unknown slugs. Navigating
//! between studies swaps the whole view, so each study gets a fresh reveal
//! sequence and its pending timers die with the previous view.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::case_study_sections::{
    CaseStudyHero, DesignProcessGallery, LearningsSection, MetricStrip, NextCaseStudy, OrganizationLinks,
    ProblemSection, ProcessPhases, ProductShowcaseSection, ProjectOverview, ResearchSection, ResultsSection,
    SolutionsSection,
};
use crate::components::icons::{Icon, IconKind};
use crate::components::testimonials::AnimatedTestimonials;
use crate::content::{CaseStudy, find_case_study, profile};
use crate::pages::not_found::NotFoundPage;
use crate::state::reveal::{CASE_STUDY_LOAD_DELAY, CASE_STUDY_VISIBLE_DELAY, RevealPhase};
use crate::util::schedule::{self, Lifeline};

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match find_case_study(&slug()) {
        Some(study) => view! { <CaseStudyView study=study/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn CaseStudyView(study: &'static CaseStudy) -> impl IntoView {
    let reveal = RwSignal::new(RevealPhase::Loading);
    let lifeline = Lifeline::scoped();
    let visible_lifeline = lifeline.clone();
    schedule::after(CASE_STUDY_LOAD_DELAY, lifeline, move || {
        reveal.update(|phase| {
            phase.advance();
        });
        schedule::after(CASE_STUDY_VISIBLE_DELAY, visible_lifeline, move || {
            reveal.update(|phase| {
                phase.advance();
            });
        });
    });

    let process = match study.design_process {
        Some(process) => view! { <DesignProcessGallery process=process/> }.into_any(),
        None if study.process.is_empty() => ().into_any(),
        None => view! { <ProcessPhases phases=study.process/> }.into_any(),
    };

    view! {
        <Title text=format!("{} | {}", study.title, profile().name)/>
        <Show when=move || reveal.get().is_loading()>
            <div class="case-loader" role="status">
                <div class="case-loader__spinner"></div>
                <p class="case-loader__text">"Loading case study..."</p>
            </div>
        </Show>
        <article class="page container case-study">
            <a class="back-link" href="/">
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to projects"
            </a>
            <CaseStudyHero study=study reveal=reveal/>
            {study.showcase.map(|showcase| view! { <ProductShowcaseSection showcase=showcase/> })}
            {(!study.links.is_empty()).then(|| view! { <OrganizationLinks links=study.links/> })}
            <MetricStrip metrics=study.metrics reveal=reveal/>
            <ProjectOverview entries=study.overview/>
            <ProblemSection problem=study.problem/>
            <ResearchSection research=study.research/>
            {process}
            {study.solutions.map(|solutions| view! { <SolutionsSection solutions=solutions/> })}
            {(!study.results.is_empty()).then(|| view! { <ResultsSection results=study.results/> })}
            {(!study.testimonials.is_empty())
                .then(|| {
                    view! {
                        <section class="case-section">
                            <h2 class="case-section__title">"What People Say"</h2>
                            <AnimatedTestimonials testimonials=study.testimonials/>
                        </section>
                    }
                })}
            <LearningsSection learnings=study.learnings personal_growth=study.personal_growth/>
            <NextCaseStudy next=study.next/>
        </article>
    }
}
