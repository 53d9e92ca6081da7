use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::SITE;
use crate::models::hijri::{hijri_label, HijriCalendar, HijriLabel};
use crate::models::prayer::{PrayerDay, Timetable};

/// Display rows for the five daily prayers. Fajr's begin time is the
/// sehri end, and Fajr/Maghrib jama'at mirror their begin times: the
/// timetable document carries no separate values for them.
fn prayer_rows(day: &PrayerDay) -> [(&'static str, String, String); 5] {
    [
        ("Fajr", day.sehri_end.clone(), day.sehri_end.clone()),
        ("Dhuhr", day.dhuhr_begins.clone(), day.dhuhr_jamaat.clone()),
        ("Asr", day.asr_begins.clone(), day.asr_jamaat.clone()),
        ("Maghrib", day.maghrib.clone(), day.maghrib.clone()),
        ("Isha", day.isha_begins.clone(), day.isha_jamaat.clone()),
    ]
}

/// Today's prayer times card with the lunar date in the header.
#[component]
pub fn PrayerTimesToday() -> impl IntoView {
    let (today_times, set_today_times) = signal(None::<PrayerDay>);
    let (hijri, set_hijri) = signal(None::<HijriLabel>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let today = Local::now().date_naive();

            match api::fetch_json::<Timetable>(SITE.prayer_times_url).await {
                Ok(timetable) => set_today_times.set(timetable.times_for_date(today).cloned()),
                Err(e) => leptos::logging::error!("Failed to load prayer timetable: {e}"),
            }

            let calendar = match api::fetch_json::<HijriCalendar>(SITE.hijri_calendar_url).await {
                Ok(calendar) => Some(calendar),
                Err(e) => {
                    leptos::logging::warn!("Failed to load hijri calendar: {e}");
                    None
                }
            };
            set_hijri.set(hijri_label(today, calendar.as_ref(), SITE.hijri_strategy));
            set_loading.set(false);
        });
    });

    let today = Local::now().date_naive();

    view! {
        <section id="prayer-times" class="container p-4 mx-auto max-w-4xl">
            <div class="flex flex-wrap items-baseline justify-between mb-6">
                <h3 class="pb-2 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                    "Today's Prayer Times"
                </h3>
                <div class="text-gray-600">
                    <span>{today.format("%A %e %B %Y").to_string()}</span>
                    {move || hijri.get().map(|label| view! {
                        <span class="ml-2 font-medium text-emerald-700">{label.formatted()}</span>
                    })}
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    }
                    .into_any()
                } else if let Some(day) = today_times.get() {
                    view! {
                        <div class="overflow-x-auto">
                            <table class="table w-full table-zebra">
                                <thead>
                                    <tr class="text-white bg-emerald-800">
                                        <th>"Prayer"</th>
                                        <th>"Begins"</th>
                                        <th>"Jama'at"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {prayer_rows(&day)
                                        .into_iter()
                                        .map(|(name, begins, jamaat)| view! {
                                            <tr>
                                                <td class="font-semibold">{name}</td>
                                                <td>{begins}</td>
                                                <td>{jamaat}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                    <tr>
                                        <td class="font-semibold text-gray-500">"Sunrise"</td>
                                        <td class="text-gray-500">{day.sunrise.clone()}</td>
                                        <td></td>
                                    </tr>
                                </tbody>
                            </table>
                            <p class="mt-2 text-sm text-gray-500">
                                "Sehri ends at " {day.sehri_end.clone()} "."
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="shadow-lg alert alert-warning">
                            <span>"Prayer times could not be loaded for today."</span>
                        </div>
                    }
                    .into_any()
                }
            }}

            <div class="mt-4">
                <A href="/prayer-times" attr:class="btn btn-outline btn-success btn-sm">
                    "Full monthly timetable"
                </A>
            </div>
        </section>
    }
}
