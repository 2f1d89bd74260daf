//! Todo Widget Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;
mod surface;
mod view;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    let config = WidgetConfig::load().unwrap_or_else(|err| {
        tracing::error!(%err, "falling back to the default widget config");
        WidgetConfig::default()
    });
    tracing::info!(seed = config.seed.len(), "mounting todo widget");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
