mod audio;
mod components;
mod model;
mod settings;
mod state;
mod ui;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
