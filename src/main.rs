//! Pinboard Frontend Entry Point

mod app;
mod components;
mod context;
mod hooks;
mod http;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("pinboard client starting");
    mount_to_body(App);
}
