// Anchor navigation is handled by the browser, hydration only attaches the
// page to the server-rendered markup.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed, which keeps logging working.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating {}", content::PROFILE.brand_title);
    leptos::mount::hydrate_body(App);
}
