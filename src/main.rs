mod app;
mod bridge;
mod components;
mod controller;
mod format;
mod model;
mod pages;
mod settings;
mod state;
mod uploader;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
