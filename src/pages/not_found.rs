use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::main_top_nav::MainTopNav;

/// 404 fallback route.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <MainTopNav />
        <div class="container p-4 mx-auto text-center">
            <h2 class="mt-16 mb-4 text-5xl font-bold text-gray-800">"Page not found"</h2>
            <p class="mb-8 text-gray-600">"The page you are looking for does not exist."</p>
            <A href="/" attr:class="text-white btn btn-success">"Back to the homepage"</A>
        </div>
    }
}
