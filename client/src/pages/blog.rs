//! Blog index and post pages.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::icons::{Icon, IconKind};
use crate::components::markdown::Markdown;
use crate::components::media::ImageWithLoader;
use crate::content::{blog_posts, find_blog_post, profile};
use crate::pages::not_found::NotFoundPage;

const INTRO: &str = "Thoughts, insights, and perspectives on design, user experience, and product development.";

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    view! {
        <Title text=format!("Blog | {}", profile().name)/>
        <section class="page container">
            <a class="back-link" href="/">
                <Icon kind=IconKind::ArrowLeft size=16/>
                "Back to home"
            </a>
            <h1 class="page__title">"Blog"</h1>
            <p class="page__intro">{INTRO}</p>
            <div class="blog-list">
                {blog_posts()
                    .iter()
                    .map(|post| {
                        view! {
                            <article class="blog-card">
                                <a class="blog-card__image" href=post.href()>
                                    <ImageWithLoader src=post.image alt=post.title fill=true/>
                                </a>
                                <div class="blog-card__body">
                                    <h2 class="blog-card__title">
                                        <a href=post.href()>{post.title}</a>
                                    </h2>
                                    <p class="blog-card__date">
                                        <Icon kind=IconKind::Calendar size=16/>
                                        <time datetime=post.date>{post.display_date}</time>
                                    </p>
                                    <p class="blog-card__excerpt">{post.excerpt}</p>
                                    <a class="blog-card__more" href=post.href()>
                                        "Read more"
                                        <Icon kind=IconKind::ArrowRight size=16/>
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Single post. Unknown slugs render the not-found page.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match find_blog_post(&slug()) {
        Some(post) => {
            let blog = profile().blog;
            view! {
                <Title text=format!("{} | {}", post.title, profile().name)/>
                <article class="page container container--narrow">
                    <a class="back-link" href="/blog">
                        <Icon kind=IconKind::ArrowLeft size=16/>
                        "Back to blog"
                    </a>
                    <h1 class="page__title">{post.title}</h1>
                    <p class="blog-card__date">
                        <Icon kind=IconKind::Calendar size=16/>
                        <time datetime=post.date>{post.display_date}</time>
                    </p>
                    <div class="blog-post__image">
                        <ImageWithLoader src=post.image alt=post.title fill=true priority=true/>
                    </div>
                    <Markdown source=post.body class="prose"/>
                    <p class="blog-post__more">
                        <a href=blog.href target="_blank" rel="noopener noreferrer">
                            "More writing on Medium"
                            <Icon kind=IconKind::ExternalLink size=16/>
                        </a>
                    </p>
                </article>
            }
            .into_any()
        }
        None => view! { <NotFoundPage/> }.into_any(),
    }
}
