use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::accordion::FaqAccordion;
use crate::components::carousel::HeroCarousel;
use crate::components::contact_form::ContactForm;
use crate::components::event_banner::{EventSpotlightView, NotificationBarView};
use crate::components::lightbox::VideoLightbox;
use crate::components::main_top_nav::{scroll_to_fragment, MainTopNav};
use crate::components::prayer_widget::PrayerTimesToday;
use crate::components::video_panel::VideoSection;
use crate::config::SITE;
use crate::models::events::EventsConfig;
use crate::models::video::FeaturedVideo;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
    let (featured, set_featured) = signal(None::<FeaturedVideo>);
    let (lightbox, set_lightbox) = signal(None::<String>);
    let (events, set_events) = signal(None::<EventsConfig>);

    // Events document; any failure leaves the signal at None, which
    // keeps both banner sections hidden.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_json::<EventsConfig>(SITE.events_url).await {
                Ok(config) => set_events.set(Some(config)),
                Err(e) => leptos::logging::warn!("Failed to load events config: {e}"),
            }
        });
    });

    view! {
        <MainTopNav />
        <NotificationBarView config=events />

        <HeroCarousel featured=featured set_lightbox=set_lightbox />

        <PrayerTimesToday />
        <EventSpotlightView config=events />
        <VideoSection set_featured=set_featured set_lightbox=set_lightbox />

        {/* Services */}
        <section id="services" class="container p-4 mx-auto max-w-6xl">
            <h3 class="pb-2 mb-6 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                "Our Services"
            </h3>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h4 class="text-2xl card-title">"Daily Prayers"</h4>
                        <p>"All five daily prayers in congregation, with the timetable updated through the year."</p>
                    </div>
                </div>
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h4 class="text-2xl card-title">"Madrasah"</h4>
                        <p>"Weekday evening classes in Qur'an reading, hifz and Islamic studies for ages 5 to 16."</p>
                    </div>
                </div>
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h4 class="text-2xl card-title">"Jumu'ah"</h4>
                        <p>"Two Friday congregations with an English khutbah before the first."</p>
                    </div>
                </div>
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h4 class="text-2xl card-title">"Nikah Services"</h4>
                        <p>"Marriage ceremonies performed by the imam, by appointment through the office."</p>
                    </div>
                </div>
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h4 class="text-2xl card-title">"Funeral Support"</h4>
                        <p>"Ghusl facilities and janazah arrangements in cooperation with local funeral directors."</p>
                    </div>
                </div>
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h4 class="text-2xl card-title">"Community Hall"</h4>
                        <p>"A hall for community gatherings, available to hire for halal events."</p>
                    </div>
                </div>
            </div>
        </section>

        <FaqAccordion />
        <ContactForm />

        {/* ==== FOOTER ==== */}
        <footer class="px-4 py-8 mt-8 text-white bg-emerald-900">
            <div class="grid grid-cols-1 gap-8 mx-auto max-w-6xl md:grid-cols-3">
                <div>
                    <h5 class="mb-2 text-lg font-bold">"Masjid An-Noor Islamic Centre"</h5>
                    <p>"12 Hartley Street"</p>
                    <p>"Bradford, BD4 7QW"</p>
                    <p>"01274 555 012"</p>
                </div>
                <div>
                    <h5 class="mb-2 text-lg font-bold">"Quick Links"</h5>
                    <ul class="space-y-1">
                        <li>
                            <a href="#videos" class="hover:text-emerald-200" on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                scroll_to_fragment("#videos");
                            }>"Watch"</a>
                        </li>
                        <li>
                            <a href="#faq" class="hover:text-emerald-200" on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                scroll_to_fragment("#faq");
                            }>"FAQ"</a>
                        </li>
                        <li>
                            <a href="#contact" class="hover:text-emerald-200" on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                scroll_to_fragment("#contact");
                            }>"Contact"</a>
                        </li>
                    </ul>
                </div>
                <div>
                    <h5 class="mb-2 text-lg font-bold">"Charity"</h5>
                    <p>"Registered charity no. 1098765."</p>
                    <p>"Donations are collected after Jumu'ah and by standing order."</p>
                </div>
            </div>
        </footer>

        <VideoLightbox video_id=lightbox set_video_id=set_lightbox />
    }
}
