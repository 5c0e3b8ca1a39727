#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use store::config::load_config;

mod common;
use common::{context::AppContext, theme::use_theme_provider};

mod components;
use components::navigation::NavBar;

mod home;
use home::{Footer, Home};

mod project;
use project::ProjectDetail;

mod studio;
use studio::Studio;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/projects/:slug")]
        ProjectDetail { slug: String },
        #[route("/studio")]
        Studio {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { class: "section-title", "Nothing at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
        Footer {}
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);

    use_context_provider(|| AppContext::new(config.clone()));
    use_theme_provider(&config);

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Router::<Route> {}
    }
}
