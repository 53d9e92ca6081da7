use masjid_webui::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(App);
}
