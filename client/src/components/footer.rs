//! Site footer: copyright line and social icons.

use leptos::prelude::*;

use crate::components::icons::{Icon, social_icon};
use crate::content::profile;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let profile = profile();
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner container">
                <div class="site-footer__copyright">{profile.copyright}</div>
                <div class="site-footer__socials">
                    {profile
                        .socials
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="site-footer__social"
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Icon kind=social_icon(link.label) size=18/>
                                    <span class="sr-only">{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
