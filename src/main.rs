//! Favorite Toggle Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod count;
mod error;
mod models;
mod render;
mod state;

use config::FavoriteConfig;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        log::error!("no document; favorite controller not started");
        return;
    };

    let config = FavoriteConfig::from_document(&doc);

    if let Err(err) = controller::install(config.clone()) {
        log::error!("favorite controller not installed: {err:?}");
    }
    if let Err(err) = app::mount_listings(&doc, config) {
        log::error!("favorite listings not mounted: {err:?}");
    }
}
