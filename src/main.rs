use yew::prelude::*;
use log::info;

mod config;
mod dashboard;
mod focus;
mod form;
mod motion;
mod submissions;

mod components {
    pub mod dashboard;
    pub mod signup_modal;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <main>
            <Landing />
        </main>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let stored = submissions::load();
    gloo_console::log!("Stored signups:", stored.len());

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
