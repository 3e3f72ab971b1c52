//! Process gallery grouped by design phase.
//!
//! Phase pills jump to the first slide of a phase and highlight whichever
//! phase the current slide belongs to. Slides sit left or right of the
//! current one so the CSS transition slides in the direction of travel.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::markdown::Markdown;
use crate::components::media::ImageWithLoader;
use crate::content::MediaItem;
use crate::state::gallery::PhaseGallery as GalleryModel;

#[component]
pub fn PhaseGallery(items: &'static [MediaItem]) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }
    let gallery = RwSignal::new(GalleryModel::new(items));
    let current = move || gallery.get().current();
    let initial = gallery.get_untracked();

    let pills = initial
        .phases()
        .into_iter()
        .map(|phase| {
            view! {
                <button
                    class="gallery__phase"
                    class:gallery__phase--active=move || gallery.get().active_phase() == Some(phase)
                    on:click=move |_| {
                        gallery.update(|g| {
                            g.go_to_phase(phase);
                        });
                    }
                >
                    {phase}
                </button>
            }
        })
        .collect_view();

    let slides = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let media = if item.is_video() {
                view! {
                    <video
                        class="gallery__video"
                        src=item.src
                        controls=true
                        muted=true
                        loop=true
                        playsinline=true
                        preload="metadata"
                        aria-label=item.alt
                    ></video>
                }
                .into_any()
            } else {
                view! { <ImageWithLoader src=item.src alt=item.alt fill=true priority={index == 0}/> }.into_any()
            };
            view! {
                <div
                    class=move || format!("gallery__slide {}", gallery.get().slide_offset(index).class())
                    aria-hidden=move || (gallery.get().index() != index).to_string()
                >
                    {media}
                </div>
            }
        })
        .collect_view();

    let thumbnails = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let preview = if item.is_video() {
                view! {
                    <video class="gallery__thumb-media" src=item.src muted=true preload="metadata"></video>
                    <span class="gallery__thumb-play">
                        <Icon kind=IconKind::Play size=14/>
                    </span>
                }
                .into_any()
            } else {
                view! { <img class="gallery__thumb-media" src=item.src alt="" loading="lazy"/> }.into_any()
            };
            view! {
                <button
                    class="gallery__thumb"
                    class:gallery__thumb--active=move || gallery.get().index() == index
                    aria-label=format!("Show {}", item.alt)
                    on:click=move |_| {
                        gallery.update(|g| {
                            g.jump_to(index);
                        });
                    }
                >
                    {preview}
                </button>
            }
        })
        .collect_view();

    let arrows = initial.has_controls().then(|| {
        view! {
            <button
                class="gallery__arrow gallery__arrow--prev"
                aria-label="Previous item"
                on:click=move |_| {
                    gallery.update(|g| {
                        g.prev();
                    });
                }
            >
                <Icon kind=IconKind::ChevronLeft/>
            </button>
            <button
                class="gallery__arrow gallery__arrow--next"
                aria-label="Next item"
                on:click=move |_| {
                    gallery.update(|g| {
                        g.next();
                    });
                }
            >
                <Icon kind=IconKind::ChevronRight/>
            </button>
        }
    });

    let info = move || {
        current().map(|item| {
            view! {
                <div class="gallery__info">
                    {item.section.map(|section| view! { <span class="gallery__section">{section}</span> })}
                    {item.caption.map(|caption| view! { <h4 class="gallery__caption">{caption}</h4> })}
                    {item.description.map(|description| view! { <p class="gallery__description">{description}</p> })}
                    {item
                        .details
                        .is_some()
                        .then(|| {
                            view! {
                                <button
                                    class="gallery__info-toggle"
                                    aria-label="Show details"
                                    on:click=move |_| {
                                        gallery.update(|g| {
                                            g.toggle_details();
                                        });
                                    }
                                >
                                    <Icon kind=IconKind::Info size=18/>
                                </button>
                            }
                        })}
                </div>
            }
        })
    };

    let details = move || {
        let state = gallery.get();
        let source = state.current().and_then(|item| item.details).filter(|_| state.details_open())?;
        Some(view! {
            <div class="gallery__details" role="dialog" aria-label="Details">
                <button class="gallery__details-close" aria-label="Close details" on:click=move |_| gallery.update(GalleryModel::close_details)>
                    "×"
                </button>
                <Markdown source=source/>
            </div>
        })
    };

    view! {
        <div class="gallery">
            <div class="gallery__phases">{pills}</div>
            <div class="gallery__stage">
                {slides}
                {arrows}
                {info}
                {details}
            </div>
            <div class="gallery__thumbs">{thumbnails}</div>
        </div>
    }
    .into_any()
}
