//! Media elements that hold a placeholder until their asset arrives.
//!
//! DESIGN
//! ======
//! Each wrapper keeps an [`AssetState`] in a signal, flips it from the
//! element's load/error events and fades the element in once settled.
//! Server-rendered assets can finish loading before hydration attaches
//! the handlers, so on mount each wrapper also inspects the element and
//! settles immediately when the browser already has the data.

use leptos::prelude::*;

use crate::state::asset::{AssetLayout, AssetState, resolve_src};

/// Image behind a pulsing placeholder.
///
/// `fill` stretches to the parent box; otherwise the image renders at
/// `width`×`height` (800×600 when omitted). An empty or failing `src`
/// shows the generic placeholder image.
#[component]
pub fn ImageWithLoader(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(optional)] fill: bool,
    #[prop(optional)] priority: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let state = RwSignal::new(AssetState::default());
    let layout = AssetLayout::from_props(fill, width, height);
    let img_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        if img.complete() {
            if img.natural_width() > 0 {
                state.update(AssetState::on_load);
            } else {
                state.update(AssetState::on_error);
            }
        }
    });

    let (img_width, img_height) = match layout.dimensions() {
        Some((w, h)) => (Some(w.to_string()), Some(h.to_string())),
        None => (None, None),
    };
    let media_class = if class.is_empty() { "asset__media".to_owned() } else { format!("asset__media {class}") };

    view! {
        <div class="asset" class:asset--fill=fill>
            <Show when=move || state.get().shows_spinner()>
                <div class="asset__placeholder" aria-hidden="true">
                    <div class="asset__pulse"></div>
                </div>
            </Show>
            <img
                node_ref=img_ref
                class=media_class
                class:asset__media--shown=move || state.get().is_settled()
                src=move || resolve_src(&src, state.get()).to_owned()
                alt=alt
                width=img_width
                height=img_height
                loading=if priority { "eager" } else { "lazy" }
                on:load=move |_| state.update(AssetState::on_load)
                on:error=move |_| state.update(AssetState::on_error)
            />
        </div>
    }
}

/// SVG file embedded through `<object>` so its own styles and scripts apply.
#[component]
pub fn SvgLoader(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let state = RwSignal::new(AssetState::default());
    let object_ref = NodeRef::<leptos::html::Object>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(object) = object_ref.get() else {
            return;
        };
        if object.content_document().is_some() {
            state.update(AssetState::on_load);
        }
    });

    view! {
        <div class="asset asset--svg">
            <Show when=move || state.get().shows_spinner()>
                <div class="asset__placeholder" aria-hidden="true">
                    <div class="asset__pulse"></div>
                </div>
            </Show>
            <object
                node_ref=object_ref
                class="asset__media"
                class:asset__media--shown=move || state.get().is_settled()
                type="image/svg+xml"
                data=src
                aria-label=alt
                on:load=move |_| state.update(AssetState::on_load)
                on:error=move |_| state.update(AssetState::on_error)
            ></object>
        </div>
    }
}

/// Muted looping MP4 with native controls.
#[component]
pub fn VideoPlayer(#[prop(into)] src: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let state = RwSignal::new(AssetState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(video) = video_ref.get() else {
            return;
        };
        let (ready, network) = (video.ready_state(), video.network_state());
        state.update(|s| s.on_media_status(ready, network));
    });

    let wrapper_class = if class.is_empty() { "video".to_owned() } else { format!("video {class}") };

    view! {
        <div class=wrapper_class>
            <Show when=move || state.get().shows_spinner()>
                <div class="video__placeholder" aria-hidden="true">
                    <div class="asset__pulse"></div>
                </div>
            </Show>
            <video
                node_ref=video_ref
                class="video__media"
                class:video__media--shown=move || state.get().is_settled()
                autoplay=true
                loop=true
                muted=true
                controls=true
                playsinline=true
                on:loadeddata=move |_| state.update(AssetState::on_load)
            >
                // A failing <source> reports on itself; the <video> never sees it.
                <source src=src type="video/mp4" on:error=move |_| state.update(AssetState::on_error)/>
                "Your browser does not support the video tag."
            </video>
        </div>
    }
}

/// Phone frame with a notch around a top-aligned screenshot.
#[component]
pub fn PhoneMockup(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    view! {
        <div class="phone">
            <div class="phone__frame">
                <div class="phone__bezel">
                    <div class="phone__notch"></div>
                    <div class="phone__screen">
                        <img class="phone__image" src=src alt=alt loading="lazy"/>
                    </div>
                </div>
            </div>
        </div>
    }
}
