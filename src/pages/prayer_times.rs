use chrono::{Datelike, Local};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::main_top_nav::MainTopNav;
use crate::config::SITE;
use crate::models::prayer::{PrayerDay, Timetable};

fn day_row(day: &PrayerDay, is_today: bool) -> AnyView {
    view! {
        <tr class:bg-amber-100=is_today class:font-semibold=is_today>
            <td>{day.date}</td>
            <td>{day.sehri_end.clone()}</td>
            <td>{day.sunrise.clone()}</td>
            <td>{day.dhuhr_begins.clone()}</td>
            <td>{day.dhuhr_jamaat.clone()}</td>
            <td>{day.asr_begins.clone()}</td>
            <td>{day.asr_jamaat.clone()}</td>
            <td>{day.maghrib.clone()}</td>
            <td>{day.isha_begins.clone()}</td>
            <td>{day.isha_jamaat.clone()}</td>
        </tr>
    }
    .into_any()
}

/// Full timetable for the current month, with today's row marked.
#[component]
pub fn PrayerTimesPage() -> impl IntoView {
    let (timetable, set_timetable) = signal(None::<Timetable>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_json::<Timetable>(SITE.prayer_times_url).await {
                Ok(tt) => set_timetable.set(Some(tt)),
                Err(e) => leptos::logging::error!("Failed to load prayer timetable: {e}"),
            }
            set_loading.set(false);
        });
    });

    let today = Local::now().date_naive();

    view! {
        <MainTopNav />

        <div class="container p-4 mx-auto max-w-6xl">
            <h3 class="pb-2 mb-6 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                {format!("Prayer Timetable for {}", today.format("%B %Y"))}
            </h3>

            {move || {
                if loading.get() {
                    view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    }
                    .into_any()
                } else {
                    let month = timetable
                        .get()
                        .and_then(|tt| tt.month_for_date(today).map(|month| month.to_vec()));
                    match month {
                        Some(days) if !days.is_empty() => view! {
                            <div class="overflow-x-auto">
                                <table class="table w-full table-zebra table-sm">
                                    <thead class="text-white bg-emerald-800">
                                        <tr>
                                            <th rowspan="2">"Date"</th>
                                            <th rowspan="2">"Sehri Ends"</th>
                                            <th rowspan="2">"Sunrise"</th>
                                            <th colspan="2" class="text-center">"Dhuhr"</th>
                                            <th colspan="2" class="text-center">"Asr"</th>
                                            <th rowspan="2">"Maghrib"</th>
                                            <th colspan="2" class="text-center">"Isha"</th>
                                        </tr>
                                        <tr>
                                            <th>"Begins"</th>
                                            <th>"Jama'at"</th>
                                            <th>"Begins"</th>
                                            <th>"Jama'at"</th>
                                            <th>"Begins"</th>
                                            <th>"Jama'at"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {days
                                            .iter()
                                            .map(|day| day_row(day, day.date == today.day()))
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any(),
                        _ => view! {
                            <div class="shadow-lg alert alert-warning">
                                <span>
                                    {format!(
                                        "The timetable for {} could not be loaded.",
                                        today.format("%B %Y")
                                    )}
                                </span>
                            </div>
                        }
                        .into_any(),
                    }
                }
            }}
        </div>
    }
}
