use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::icons::{close_icon, menu_icon};

/// In-page sections linked from the nav; ids live on the Home page.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#videos", "Watch"),
    ("#events", "Events"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

/// Smooth-scroll to a same-document fragment target. A bare "#" or a
/// missing target element falls through silently.
pub fn scroll_to_fragment(href: &str) {
    let Some(id) = href.strip_prefix('#') else {
        return;
    };
    if id.is_empty() {
        return;
    }
    if let Some(el) = gloo::utils::document().get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
pub fn MainTopNav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let nav_ref = NodeRef::<leptos::html::Div>::new();

    // Clicking anywhere outside the bar closes the mobile menu.
    let _ = use_event_listener(use_document(), ev::click, move |ev: web_sys::MouseEvent| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(nav) = nav_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if let Some(node) = target {
            if !nav.contains(Some(&node)) {
                set_menu_open.set(false);
            }
        }
    });

    let fragment_link = move |href: &'static str, label: &'static str| {
        view! {
            <a
                href=href
                class="text-white cursor-pointer hover:text-emerald-200"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    scroll_to_fragment(href);
                    set_menu_open.set(false);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        {/* ==== TOP BAR ==== */}
        <div node_ref=nav_ref class="sticky top-0 z-50 px-4 py-2 text-white shadow bg-emerald-800 top-bar">
            <div class="flex items-center justify-between mx-auto max-w-6xl">
                <h1 class="text-xl font-bold"><A href="/">"Masjid An-Noor"</A></h1>

                <nav class="hidden items-center space-x-6 md:flex">
                    <A href="/prayer-times" attr:class="text-white hover:text-emerald-200">"Prayer Times"</A>
                    {NAV_LINKS.into_iter().map(|(href, label)| fragment_link(href, label)).collect_view()}
                </nav>

                {/* Mobile Menu Button */}
                <button
                    class="text-white border-white btn btn-outline btn-sm md:hidden"
                    on:click=move |ev: web_sys::MouseEvent| {
                        // Keep the document-level listener from seeing this
                        // click as "outside" and re-closing immediately.
                        ev.stop_propagation();
                        set_menu_open.update(|open| *open = !*open);
                    }
                >
                    {move || if menu_open.get() { close_icon().into_any() } else { menu_icon().into_any() }}
                </button>
            </div>

            {/* Mobile Menu */}
            <nav
                class="flex-col pt-2 pb-1 space-y-2 md:hidden"
                class:flex=move || menu_open.get()
                class:hidden=move || !menu_open.get()
            >
                <A href="/prayer-times" attr:class="text-white hover:text-emerald-200" on:click=move |_| set_menu_open.set(false)>
                    "Prayer Times"
                </A>
                {NAV_LINKS.into_iter().map(|(href, label)| fragment_link(href, label)).collect_view()}
            </nav>
        </div>
    }
}
