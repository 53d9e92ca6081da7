use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use crate::icons::close_icon;

/// Single-video modal overlay. Opens when `video_id` is Some; closes on
/// backdrop click, the close button, or Escape.
#[component]
pub fn VideoLightbox(
    video_id: ReadSignal<Option<String>>,
    set_video_id: WriteSignal<Option<String>>,
) -> impl IntoView {
    let _ = use_event_listener(use_window(), ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_video_id.set(None);
        }
    });

    view! {
        {move || {
            video_id.get().map(|id| {
                view! {
                    <div
                        class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/80"
                        on:click=move |_| set_video_id.set(None)
                    >
                        <div
                            class="relative w-full max-w-3xl aspect-video"
                            on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                        >
                            <button
                                class="absolute right-0 -top-12 text-white btn btn-ghost btn-sm"
                                on:click=move |_| set_video_id.set(None)
                            >
                                {close_icon()}
                            </button>
                            <iframe
                                class="w-full h-full rounded-lg shadow-2xl"
                                src=format!("https://www.youtube-nocookie.com/embed/{id}?autoplay=1&rel=0")
                                title="Video player"
                                allow="autoplay; encrypted-media; picture-in-picture"
                                allowfullscreen="true"
                            ></iframe>
                        </div>
                    </div>
                }
            })
        }}
    }
}
