use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod utils;
mod components {
    pub mod backdrop;
    pub mod notification;
    pub mod primitives;
}
mod forms {
    pub mod validation;
    pub mod inquiry;
    pub mod lead;
}
mod auth {
    pub mod split;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use auth::split::SplitSignIn;
use components::{notification::ToastProvider, primitives::ThemeStyles};
use pages::{landing::Landing, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
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
        Route::SignIn => {
            info!("Rendering Sign in page");
            html! { <SplitSignIn /> }
        },
        Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ThemeStyles />
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // A missing logger only costs us console output
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
