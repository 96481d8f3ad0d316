#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

fn main() {
    dioxus::logger::initialize_default();

    tracing::info!("Starting Folio");

    dioxus::LaunchBuilder::web().launch(app::App);
}
