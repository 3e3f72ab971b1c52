//! Looping media carousel with a caption panel.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::markdown::Markdown;
use crate::components::media::ImageWithLoader;
use crate::content::MediaItem;
use crate::state::carousel::Carousel;

/// Images and videos in a fixed-height frame. Arrows and dots appear only
/// when there is more than one item; an empty list renders nothing.
#[component]
pub fn CaptionedCarousel(
    items: &'static [MediaItem],
    #[prop(default = 400)] height: u32,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }
    let carousel = RwSignal::new(Carousel::new(items.len()));
    let current = move || carousel.get().current().and_then(|i| items.get(i));
    let has_controls = carousel.get_untracked().has_controls();

    let slides = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let media = if item.is_video() {
                view! {
                    <video class="carousel__video" src=item.src controls=true preload="metadata" aria-label=item.alt></video>
                }
                .into_any()
            } else {
                view! {
                    <ImageWithLoader
                        src=item.src
                        alt=item.alt
                        width=height
                        height=height
                        class="carousel__image"
                        priority={priority && index == 0}
                    />
                }
                .into_any()
            };
            view! {
                <div
                    class="carousel__slide"
                    class:carousel__slide--current=move || carousel.get().index() == index
                    aria-hidden=move || (carousel.get().index() != index).to_string()
                >
                    {media}
                </div>
            }
        })
        .collect_view();

    let dots = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let kind = if item.is_video() { "video" } else { "image" };
            view! {
                <button
                    class="carousel__dot"
                    class:carousel__dot--active=move || carousel.get().index() == index
                    aria-label=format!("Go to {kind} {}", index + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.jump_to(index);
                        });
                    }
                >
                    {item.is_video().then(|| view! { <span class="carousel__dot-ring"></span> })}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            <div class="carousel__frame" style=format!("height: {height}px;")>
                {slides}
                <Show when=move || has_controls>
                    <button
                        class="carousel__arrow carousel__arrow--prev"
                        aria-label="Previous item"
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.prev();
                            });
                        }
                    >
                        <Icon kind=IconKind::ChevronLeft/>
                    </button>
                    <button
                        class="carousel__arrow carousel__arrow--next"
                        aria-label="Next item"
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.next();
                            });
                        }
                    >
                        <Icon kind=IconKind::ChevronRight/>
                    </button>
                </Show>
                {has_controls.then(|| view! { <div class="carousel__dots">{dots}</div> })}
            </div>
            {move || {
                current()
                    .filter(|item| item.caption.is_some() || item.details.is_some())
                    .map(|item| {
                        view! {
                            <div class="carousel__caption">
                                {item.caption.map(|caption| view! { <p class="carousel__caption-title">{caption}</p> })}
                                {item
                                    .description
                                    .map(|description| view! { <p class="carousel__caption-text">{description}</p> })}
                                {item.details.map(|details| view! { <Markdown source=details class="carousel__details"/> })}
                            </div>
                        }
                    })
            }}
        </div>
    }
    .into_any()
}
