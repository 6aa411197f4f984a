use yew::prelude::*;
use log::info;

mod config;
mod behavior {
    pub mod anchor;
    pub mod contact;
    pub mod debounce;
    pub mod element;
    pub mod header;
    pub mod menu;
    pub mod modal;
    pub mod reveal;
    pub mod sections;
    #[cfg(test)]
    pub mod testing;
}
mod dom;
mod pages {
    pub mod landing;
    pub mod legal;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
