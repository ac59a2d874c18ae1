//! DeckNotes Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use deck_core::DeckConfig;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(LoggerConfig { level, ..LoggerConfig::default() }) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    mount_to_body(|| view! { <App config=DeckConfig::default() /> });
}
