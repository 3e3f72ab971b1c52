//! Fixed site header with the wordmark and primary navigation.

use leptos::prelude::*;

use crate::content::profile;

const NAV: [(&str, &str); 4] = [("HOME", "/"), ("ABOUT", "/about"), ("BLOG", "/blog"), ("CV", "/cv")];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let name = profile().name.to_uppercase();
    view! {
        <header class="site-header">
            <div class="site-header__inner container">
                <a href="/" class="site-header__brand">{name}</a>
                <nav class="site-header__nav" aria-label="Primary">
                    {NAV
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="site-header__link">{*label}</a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
