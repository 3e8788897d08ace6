use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    // Logging is best-effort; a second init (hot reload) is harmless.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
