use leptos::prelude::*;

/// Exclusive-open transition: opening an item closes its siblings by
/// construction, clicking the open item closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

static FAQ_ITEMS: [(&str, &str); 6] = [
    (
        "What time is Jumu'ah salah?",
        "There are two congregations every Friday: 13:00 and 13:45. The English khutbah precedes the first congregation. Please arrive ten minutes early and use the rear car park.",
    ),
    (
        "Is the masjid open for all five daily prayers?",
        "Yes. Doors open thirty minutes before each jama'at time and close shortly after. The daily jama'at times are shown on the prayer timetable page and update through the year.",
    ),
    (
        "How do I enrol my child in the madrasah?",
        "Enrolment forms are available from the office after Maghrib, Monday to Thursday. Classes run weekday evenings for children aged 5 to 16 and cover Qur'an reading, hifz and Islamic studies.",
    ),
    (
        "Do you perform nikah ceremonies?",
        "Yes, the imam performs nikah ceremonies at the masjid by appointment. Contact the office with both parties' details at least two weeks in advance.",
    ),
    (
        "How can I donate?",
        "Standing orders are the most helpful way to support the masjid. Bank details are on the donations poster in the foyer, or speak to any committee member after salah.",
    ),
    (
        "Is there a sisters' prayer area?",
        "Yes, the first floor is reserved for sisters, with a separate entrance on Hartley Street and live audio from the main hall.",
    ),
];

#[component]
pub fn FaqAccordion() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section id="faq" class="container p-4 mx-auto max-w-3xl">
            <h3 class="pb-2 mb-6 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                "Frequently Asked Questions"
            </h3>
            <div class="space-y-2">
                {FAQ_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(i, &(question, answer))| {
                        view! {
                            <div
                                class="border border-gray-200 rounded-lg collapse collapse-arrow bg-base-100"
                                class:collapse-open=move || open.get() == Some(i)
                            >
                                <div
                                    class="text-lg font-medium cursor-pointer collapse-title"
                                    on:click=move |_| set_open.update(|o| *o = toggle(*o, i))
                                >
                                    {question}
                                </div>
                                <div class="collapse-content text-gray-600">
                                    <p>{answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        let open = toggle(None, 0);
        assert_eq!(open, Some(0));
        let open = toggle(open, 2);
        assert_eq!(open, Some(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let open = toggle(Some(3), 3);
        assert_eq!(open, None);
    }
}
