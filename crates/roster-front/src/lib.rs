pub mod actions;
pub mod api;
mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
mod utils;

pub use app::{App, AppProps};

use config::ApiConfig;

pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = ApiConfig::load();
    log::info!("Roster client starting against {}", config.base_url());

    yew::Renderer::<App>::with_props(AppProps {
        config,
        initial_players: None,
    })
    .render();
}
