use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod catalog;
mod gallery;
mod enrollment;
mod tickets;
mod motion;

mod chat {
    pub mod message;
    pub mod state;
    pub mod gemini;
    pub mod persona;
    pub mod session;
}

mod components {
    pub mod fade_in;
    pub mod site_nav;
    pub mod hero;
    pub mod catalog_cards;
    pub mod detail_modal;
    pub mod pricing;
    pub mod ticket_grid;
    pub mod chat_widget;
}

mod pages {
    pub mod academy;
    pub mod festival;
}

use pages::{
    academy::Academy,
    festival::Festival,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Academy,
    #[at("/festival")]
    Festival,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Academy => {
            info!("Rendering Academy page");
            html! { <Academy /> }
        },
        Route::Festival => {
            info!("Rendering Festival page");
            html! { <Festival /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page drifted out of orbit."}</p>
                    <Link<Route> to={Route::Academy} classes="nav-link">
                        {"Back to the academy"}
                    </Link<Route>>
                    <Link<Route> to={Route::Festival} classes="nav-link">
                        {"Go to the festival"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::LOG_LEVEL).expect("error initializing log");

    if config::gemini_api_key().is_none() {
        info!("GEMINI_API_KEY not set at build time, chat runs without a key");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
