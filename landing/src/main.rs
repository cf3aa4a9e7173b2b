// Dash-Dev Landing Page — Leptos 0.8 Edition
// Developed by the Dash-Dev team (c)2025

use dashdev_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
