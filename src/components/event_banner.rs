use leptos::prelude::*;

use crate::icons::{calendar_icon, clock_icon, location_icon};
use crate::models::events::{split_emphasis, EventsConfig};

/// Top-of-page announcement strip. Hidden unless the section is
/// explicitly enabled; an em-dash in the text emphasizes the lead.
#[component]
pub fn NotificationBarView(config: ReadSignal<Option<EventsConfig>>) -> impl IntoView {
    view! {
        {move || {
            let cfg = config.get()?;
            if !cfg.notification_visible() {
                return None;
            }
            let bar = cfg.notification_bar?;
            let text = bar.link_text.unwrap_or_default();
            let inner = match split_emphasis(&text) {
                Some((lead, rest)) => {
                    view! { <span><strong>{lead}</strong>" — "{rest}</span> }.into_any()
                }
                None => view! { <span>{text}</span> }.into_any(),
            };
            let content = match bar.link_url {
                Some(url) => view! { <a href=url class="underline hover:no-underline">{inner}</a> }.into_any(),
                None => inner,
            };
            Some(view! {
                <div class="w-full px-4 py-2 text-center text-white bg-amber-600">
                    {content}
                </div>
            })
        }}
    }
}

/// Featured event card. Every field renders only when present; the
/// whole section is hidden unless explicitly enabled.
#[component]
pub fn EventSpotlightView(config: ReadSignal<Option<EventsConfig>>) -> impl IntoView {
    view! {
        {move || {
            let cfg = config.get()?;
            if !cfg.spotlight_visible() {
                return None;
            }
            let spotlight = cfg.spotlight?;
            Some(view! {
                <section id="events" class="container p-4 mx-auto max-w-4xl">
                    <h3 class="pb-2 mb-6 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                        "Upcoming Event"
                    </h3>
                    <div class="shadow-xl card md:card-side bg-base-100">
                        {spotlight.poster.map(|poster| view! {
                            <figure class="md:w-1/3">
                                <img src=poster alt="Event poster" class="object-cover w-full h-full" />
                            </figure>
                        })}
                        <div class="card-body">
                            {spotlight.title.map(|title| view! { <h4 class="text-2xl card-title">{title}</h4> })}
                            {spotlight.date.map(|date| view! {
                                <p class="flex items-center gap-2 text-gray-600">{calendar_icon()}{date}</p>
                            })}
                            {spotlight.time.map(|time| view! {
                                <p class="flex items-center gap-2 text-gray-600">{clock_icon()}{time}</p>
                            })}
                            {spotlight.location.map(|location| view! {
                                <p class="flex items-center gap-2 text-gray-600">{location_icon()}{location}</p>
                            })}
                            {spotlight.description.map(|description| view! { <p>{description}</p> })}
                            {spotlight.link.map(|link| {
                                let label = spotlight.link_text.unwrap_or_else(|| "More details".to_string());
                                view! {
                                    <div class="justify-end card-actions">
                                        <a href=link class="text-white btn btn-success" target="_blank" rel="noopener">
                                            {label}
                                        </a>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </section>
            })
        }}
    }
}
