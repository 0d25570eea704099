mod app;
mod components;
mod forms;
mod hooks;
mod services;
mod state;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
