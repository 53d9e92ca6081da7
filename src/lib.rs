use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use serde_json;

// Modules
mod api;
mod components;
mod config;
mod icons;
mod models;
mod pages;
mod storage;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::prayer_times::PrayerTimesPage;

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
    let git_sha = match option_env!("VERGEN_GIT_SHA") { Some(s) => s, None => "unknown" };
    let git_describe = match option_env!("VERGEN_GIT_DESCRIBE") { Some(s) => s, None => "unknown" };
    let git_commit_timestamp = match option_env!("VERGEN_GIT_COMMIT_TIMESTAMP") { Some(s) => s, None => "unknown" };

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

        // sets the document title
        <Title text=config::SITE.org_name />

        // injects metadata in the <head> of the page
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=Home />
                <Route path=path!("/prayer-times") view=PrayerTimesPage />
            </Routes>
        </Router>
        <script>
            window.buildInfo={serde_json::to_string_pretty(&serde_json::json!({
                "SHA": git_sha,
                "DESCRIBE": git_describe,
                "COMMIT_TIMESTAMP": git_commit_timestamp
            })).unwrap()}
        </script>
    }
}
