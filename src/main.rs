use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod messages;
mod registration;
mod components {
    pub mod dialog;
    pub mod image;
    pub mod pre_registration;
    pub mod toast;
}
mod pages {
    pub mod content;
    pub mod landing;
    pub mod not_found;
    pub mod sections;
}

use components::toast::Toaster;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Toaster>
                <Switch<Route> render={switch} />
            </Toaster>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting BemLidos landing page");
    yew::Renderer::<App>::new().render();
}
