//! # taskflow-client
//!
//! Leptos + WASM dashboard for the `TaskFlow` project tracker: users, projects,
//! and a task board fetched from the `TaskFlow` REST API (or a built-in demo
//! dataset), with a login/logout flow and transient status notices.
//!
//! Browser-only code sits behind the `csr` feature; everything else builds
//! and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::ClientConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::ClientConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("invalid configuration, using defaults: {e}");
    }
    log::info!(
        "taskflow client starting (source={:?}, api={})",
        config.data_source,
        config.api_base
    );

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
