//! Draggable before/after image comparison.
//!
//! SYSTEM CONTEXT
//! ==============
//! The base image fills the frame; the overlay image sits in a clip box
//! whose width is the divider position. The overlay's inner box is widened
//! by the inverse ratio so the image keeps the frame's width instead of
//! squashing as the clip narrows.
//!
//! DESIGN
//! ======
//! Pointer-down on the frame starts a drag and registers window-level
//! move/release listeners, so the drag keeps tracking when the pointer
//! leaves the frame. All four listeners are removed together on release
//! and again on cleanup if the component unmounts mid-drag.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::media::ImageWithLoader;
use crate::content::Comparison;
use crate::state::slider::ComparisonSlider as SliderModel;

#[component]
pub fn ComparisonSlider(comparison: Comparison) -> impl IntoView {
    let slider = RwSignal::new(SliderModel::default());
    let frame_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let handles = StoredValue::new_local(Vec::<WindowListenerHandle>::new());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || drag::release(handles));

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        drag::begin(slider, frame_ref, handles, Some(crate::util::pointer::mouse_client_x(&ev)));
    };
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        drag::begin(slider, frame_ref, handles, crate::util::pointer::touch_client_x(&ev));
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let position = move || slider.get().position();

    view! {
        <div class="comparison">
            <p class="comparison__hint">{comparison.hint}</p>
            <div
                class="comparison__frame"
                class:comparison__frame--dragging=move || slider.get().is_dragging()
                node_ref=frame_ref
                on:mousedown=on_mouse_down
                on:touchstart=on_touch_start
            >
                <div class="comparison__base">
                    <ImageWithLoader src=comparison.base.src alt=comparison.base.alt fill=true priority=true/>
                </div>
                <div class="comparison__clip" style=move || format!("width: {:.3}%;", position())>
                    <div
                        class="comparison__clip-inner"
                        style=move || format!("width: {:.3}%;", slider.get().overlay_inner_width())
                    >
                        <ImageWithLoader
                            src=comparison.overlay.src
                            alt=comparison.overlay.alt
                            fill=true
                            priority=true
                        />
                    </div>
                </div>
                <div class="comparison__divider" style=move || format!("left: {:.3}%;", position()) aria-hidden="true">
                    <div class="comparison__handle">
                        <Icon kind=IconKind::ChevronLeft size=16/>
                        <Icon kind=IconKind::ChevronRight size=16/>
                    </div>
                </div>
                <span class="comparison__label comparison__label--overlay">{comparison.overlay_label}</span>
                <span class="comparison__label comparison__label--base">{comparison.base_label}</span>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod drag {
    use leptos::ev;
    use leptos::prelude::*;

    use crate::state::slider::ComparisonSlider as SliderModel;
    use crate::util::pointer;

    pub(super) type Handles = StoredValue<Vec<WindowListenerHandle>, LocalStorage>;

    /// Start tracking a drag from `client_x`. Listeners are registered once
    /// per drag even if both a touch and a mouse-down fire.
    pub(super) fn begin(
        slider: RwSignal<SliderModel>,
        frame_ref: NodeRef<leptos::html::Div>,
        handles: Handles,
        client_x: Option<f64>,
    ) {
        let Some(frame) = frame_ref.get_untracked() else {
            return;
        };
        slider.update(|s| {
            s.begin_drag();
            if let Some(x) = client_x {
                s.pointer_move(x, pointer::element_bounds(&frame));
            }
        });

        let track = move |x: f64| {
            if let Some(frame) = frame_ref.get_untracked() {
                slider.update(|s| {
                    s.pointer_move(x, pointer::element_bounds(&frame));
                });
            }
        };
        handles.update_value(|active| {
            if !active.is_empty() {
                return;
            }
            active.push(window_event_listener(ev::mousemove, move |e| track(pointer::mouse_client_x(&e))));
            active.push(window_event_listener(ev::touchmove, move |e| {
                if let Some(x) = pointer::touch_client_x(&e) {
                    track(x);
                }
            }));
            active.push(window_event_listener(ev::mouseup, move |_| end(slider, handles)));
            active.push(window_event_listener(ev::touchend, move |_| end(slider, handles)));
        });
    }

    fn end(slider: RwSignal<SliderModel>, handles: Handles) {
        slider.update(SliderModel::end_drag);
        release(handles);
    }

    /// Remove every registered window listener.
    pub(super) fn release(handles: Handles) {
        let active = handles.try_update_value(std::mem::take).unwrap_or_default();
        for handle in active {
            handle.remove();
        }
    }
}
