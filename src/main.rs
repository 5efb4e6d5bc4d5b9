mod app;
mod components;
mod hooks;
mod models;
mod scan;
mod services;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Treasure Hunt PWA starting...");

    yew::Renderer::<App>::new().render();
}
