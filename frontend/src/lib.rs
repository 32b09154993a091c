use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

pub mod config;
pub mod content;
pub mod edition;
pub mod theme;
pub mod components {
    pub mod cta;
    pub mod footer;
    pub mod header;
    pub mod heading;
    pub mod hero;
    pub mod overlay;
    pub mod process;
    pub mod services;
    pub mod tech_stack;
    pub mod use_cases;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use edition::Edition;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    German,
    #[at("/en")]
    English,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match Edition::from_route(&routes) {
        Some(edition) => {
            info!("Rendering {} landing page", edition.lang());
            html! { <Landing edition={edition} /> }
        },
        None => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
