//! Root application component with routing and the site chrome.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::content::profile;
use crate::pages::{
    about::AboutPage,
    blog::{BlogIndexPage, BlogPostPage},
    case_study::CaseStudyPage,
    cv::CvPage,
    home::HomePage,
    not_found::NotFoundPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route renders between the fixed header and the footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let profile = profile();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{} | {}", profile.name, profile.title)/>
        <Meta
            name="description"
            content=format!("{} based in {} | Creating user-centric digital experiences", profile.title, profile.location)
        />
        <Link rel="icon" href="/E-logo-diamond.svg"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("cv") view=CvPage/>
                    <Route path=StaticSegment("blog") view=BlogIndexPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=(StaticSegment("case-studies"), ParamSegment("slug")) view=CaseStudyPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
