use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_interval_fn, use_window, utils::Pausable};

use crate::icons::{chevron_left_icon, chevron_right_icon, play_icon};
use crate::models::video::FeaturedVideo;

/// Autoplay delay; any manual navigation restarts the countdown.
const AUTOPLAY_MS: u64 = 10_000;
/// Horizontal travel that counts as a swipe.
const SWIPE_THRESHOLD_PX: i32 = 50;

pub fn wrap_next(index: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (index + 1) % count
    }
}

pub fn wrap_prev(index: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (index + count - 1) % count
    }
}

struct HeroSlide {
    image: &'static str,
    heading: &'static str,
    text: &'static str,
}

static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        image: "assets/hero-masjid.svg",
        heading: "Welcome to Masjid An-Noor",
        text: "Serving the community with daily prayers, education and support since 1987.",
    },
    HeroSlide {
        image: "assets/hero-madrasah.svg",
        heading: "Madrasah Enrolment Open",
        text: "Qur'an and Islamic studies classes for children aged 5 to 16, weekday evenings.",
    },
    HeroSlide {
        image: "assets/hero-community.svg",
        heading: "Friday Jumu'ah",
        text: "Two congregations every Friday. Arrive early for the English khutbah.",
    },
];

/// Hero carousel. The last slide is the featured-video slide: it stays
/// out of the rotation until the video panel has filled it.
#[component]
pub fn HeroCarousel(
    featured: ReadSignal<Option<FeaturedVideo>>,
    set_lightbox: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (index, set_index) = signal(0usize);
    let touch_start_x = StoredValue::new(None::<i32>);
    let carousel_ref = NodeRef::<leptos::html::Section>::new();

    let slide_count = move || HERO_SLIDES.len() + featured.get().map_or(0, |_| 1);
    let slide_count_untracked =
        move || HERO_SLIDES.len() + featured.get_untracked().map_or(0, |_| 1);

    let Pausable { pause, resume, .. } = use_interval_fn(
        move || set_index.update(|i| *i = wrap_next(*i, slide_count_untracked())),
        AUTOPLAY_MS,
    );

    // Restarting the interval makes the next automatic step a full
    // AUTOPLAY_MS away from the manual one.
    let restart_autoplay = {
        let pause = pause.clone();
        let resume = resume.clone();
        move || {
            pause();
            resume();
        }
    };

    let go_next = {
        let restart_autoplay = restart_autoplay.clone();
        move || {
            set_index.update(|i| *i = wrap_next(*i, slide_count_untracked()));
            restart_autoplay();
        }
    };
    let go_prev = {
        let restart_autoplay = restart_autoplay.clone();
        move || {
            set_index.update(|i| *i = wrap_prev(*i, slide_count_untracked()));
            restart_autoplay();
        }
    };
    let go_to = {
        let restart_autoplay = restart_autoplay.clone();
        move |i: usize| {
            set_index.set(i);
            restart_autoplay();
        }
    };

    // Arrow keys navigate while the carousel is on screen.
    let _ = use_event_listener(use_window(), ev::keydown, {
        let go_next = go_next.clone();
        let go_prev = go_prev.clone();
        move |ev: web_sys::KeyboardEvent| {
            let Some(el) = carousel_ref.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let viewport_h = window()
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            if rect.bottom() <= 0.0 || rect.top() >= viewport_h {
                return;
            }
            match ev.key().as_str() {
                "ArrowRight" => go_next(),
                "ArrowLeft" => go_prev(),
                _ => {}
            }
        }
    });

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().item(0) {
            touch_start_x.set_value(Some(touch.client_x()));
        }
    };
    let on_touch_end = {
        let go_next = go_next.clone();
        let go_prev = go_prev.clone();
        move |ev: web_sys::TouchEvent| {
            let Some(start_x) = touch_start_x.get_value() else {
                return;
            };
            touch_start_x.set_value(None);
            if let Some(touch) = ev.changed_touches().item(0) {
                let delta = touch.client_x() - start_x;
                if delta > SWIPE_THRESHOLD_PX {
                    go_prev();
                } else if delta < -SWIPE_THRESHOLD_PX {
                    go_next();
                }
            }
        }
    };

    view! {
        <section
            node_ref=carousel_ref
            class="relative w-full overflow-hidden bg-gray-900"
            style="min-height: 24rem;"
            on:mouseenter={let pause = pause.clone(); move |_| pause()}
            on:mouseleave={let resume = resume.clone(); move |_| resume()}
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
        >
            {HERO_SLIDES
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    view! {
                        <div
                            class="absolute inset-0 flex items-center justify-center bg-center bg-cover transition-opacity duration-700"
                            class:opacity-100=move || index.get() == i
                            class:opacity-0=move || index.get() != i
                            class:pointer-events-none=move || index.get() != i
                            style=format!("background-image: linear-gradient(rgba(6, 40, 30, 0.6), rgba(6, 40, 30, 0.6)), url('{}');", slide.image)
                        >
                            <div class="max-w-2xl px-6 text-center text-white">
                                <h2 class="mb-4 text-4xl font-bold">{slide.heading}</h2>
                                <p class="text-lg">{slide.text}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}

            {/* Featured video slide, revealed only once filled */}
            {move || {
                featured.get().map(|video| {
                    let slide_index = HERO_SLIDES.len();
                    let video_id = video.video_id.clone();
                    view! {
                        <div
                            class="absolute inset-0 flex items-center justify-center bg-gray-900 transition-opacity duration-700"
                            class:opacity-100=move || index.get() == slide_index
                            class:opacity-0=move || index.get() != slide_index
                            class:pointer-events-none=move || index.get() != slide_index
                        >
                            <div class="max-w-2xl px-6 text-center text-white">
                                <h2 class="mb-4 text-3xl font-bold">{video.title.clone()}</h2>
                                <button
                                    class="gap-2 text-white btn btn-accent btn-lg"
                                    on:click=move |_| set_lightbox.set(Some(video_id.clone()))
                                >
                                    {play_icon()}
                                    "Watch now"
                                </button>
                            </div>
                        </div>
                    }
                })
            }}

            <button
                class="absolute left-2 top-1/2 -translate-y-1/2 text-white btn btn-circle btn-ghost"
                on:click={let go_prev = go_prev.clone(); move |_| go_prev()}
            >
                {chevron_left_icon()}
            </button>
            <button
                class="absolute right-2 top-1/2 -translate-y-1/2 text-white btn btn-circle btn-ghost"
                on:click={let go_next = go_next.clone(); move |_| go_next()}
            >
                {chevron_right_icon()}
            </button>

            {/* Dots */}
            <div class="absolute bottom-3 left-1/2 flex -translate-x-1/2 gap-2">
                {move || {
                    (0..slide_count())
                        .map(|i| {
                            let go_to = go_to.clone();
                            view! {
                                <button
                                    class="w-3 h-3 rounded-full"
                                    class:bg-white=move || index.get() == i
                                    class:bg-gray-500=move || index.get() != i
                                    on:click=move |_| go_to(i)
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_indices_and_wraps() {
        let count = 4;
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..count {
            seen.push(index);
            index = wrap_next(index, count);
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(index, 0);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        assert_eq!(wrap_prev(0, 5), 4);
        assert_eq!(wrap_prev(3, 5), 2);
    }

    #[test]
    fn single_slide_always_stays_at_zero() {
        assert_eq!(wrap_next(0, 1), 0);
        assert_eq!(wrap_prev(0, 1), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }
}
