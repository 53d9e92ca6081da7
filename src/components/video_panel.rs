use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::SITE;
use crate::icons::{live_icon, play_icon};
use crate::models::video::{featured_video, FeaturedVideo, SpotlightFile, VideoItem};
use crate::storage;

fn video_card(video: VideoItem, set_lightbox: WriteSignal<Option<String>>) -> AnyView {
    let video_id = video.video_id.clone();
    let published = video
        .published_at
        .map(|dt| dt.format("%e %B %Y").to_string());
    view! {
        <div
            class="transition-shadow shadow-md cursor-pointer card bg-base-100 hover:shadow-xl"
            on:click=move |_| set_lightbox.set(Some(video_id.clone()))
        >
            <figure class="relative aspect-video bg-gray-200">
                <img src=video.thumbnail_url alt=video.title.clone() class="object-cover w-full h-full" loading="lazy" />
                <span class="absolute text-white rounded-full bg-black/60 p-3">{play_icon()}</span>
            </figure>
            <div class="p-4 card-body">
                <h4 class="text-base card-title line-clamp-2">{video.title}</h4>
                {published.map(|p| view! { <p class="text-sm text-gray-500">{p}</p> })}
            </div>
        </div>
    }
    .into_any()
}

/// Recent uploads and live-stream panel. Fills `set_featured` with the
/// spotlighted video (or the latest upload) for the hero slide; the
/// slide stays hidden until that happens.
#[component]
pub fn VideoSection(
    set_featured: WriteSignal<Option<FeaturedVideo>>,
    set_lightbox: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (live, set_live) = signal(None::<VideoItem>);
    let (videos, set_videos) = signal(Vec::<VideoItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            // Spotlight config is optional; a missing file just means
            // "feature the latest upload".
            let spotlight = match api::fetch_json::<SpotlightFile>(SITE.spotlight_url).await {
                Ok(file) => file.video_spotlight,
                Err(e) => {
                    leptos::logging::warn!("No video spotlight config: {e}");
                    None
                }
            };

            // Live status is checked fresh on every load so it can
            // never be served stale from the cache.
            match api::fetch_live_stream().await {
                Ok(live_video) => set_live.set(live_video),
                Err(e) => {
                    leptos::logging::error!("Live-stream check failed: {e}");
                    set_live.set(None);
                }
            }

            let list = match storage::get_cached_videos() {
                Some(cached) => cached,
                None => match api::fetch_recent_videos().await {
                    Ok(fetched) => {
                        let _ = storage::store_video_cache(&fetched);
                        fetched
                    }
                    Err(e) => {
                        leptos::logging::error!("Failed to load videos: {e}");
                        Vec::new()
                    }
                },
            };

            set_featured.set(featured_video(spotlight.as_ref(), &list));
            set_videos.set(list);
            set_loading.set(false);
        });
    });

    view! {
        <section id="videos" class="container p-4 mx-auto max-w-6xl">
            <h3 class="pb-2 mb-6 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                "Watch"
            </h3>

            {/* Live broadcast, when one is running */}
            {move || {
                live.get().map(|video| {
                    let video_id = video.video_id.clone();
                    view! {
                        <div
                            class="flex items-center gap-4 p-4 mb-6 text-white rounded-lg cursor-pointer bg-red-700 hover:bg-red-600"
                            on:click=move |_| set_lightbox.set(Some(video_id.clone()))
                        >
                            <span class="flex items-center gap-2 px-3 py-1 font-bold bg-white rounded-full text-red-700">
                                {live_icon()}
                                "LIVE NOW"
                            </span>
                            <span class="text-lg font-semibold">{video.title}</span>
                        </div>
                    }
                })
            }}

            {move || {
                if loading.get() {
                    view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    }
                    .into_any()
                } else {
                    let list = videos.get();
                    if list.is_empty() {
                        view! {
                            <div class="shadow-lg alert alert-warning">
                                <span>"Unable to load videos right now. Please visit our channel directly."</span>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                {list
                                    .into_iter()
                                    .map(|video| video_card(video, set_lightbox))
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}
