use dioxus::prelude::*;
use tracing::{info, warn};

use api::Backend;
use store::samples::resolve_home;

use crate::common::context::AppContext;

mod about;
mod blog;
mod footer;
mod hero;
mod projects;
mod tech_stack;
mod timeline;

pub use footer::Footer;

use about::About;
use blog::Blog;
use hero::Hero;
use projects::Projects;
use tech_stack::TechStack;
use timeline::Timeline;

// the landing page
//
// /home is fetched exactly once when the page mounts.  until it answers (or if it never
// does) every section renders from the built-in samples, and a failed fetch is only
// logged -- there is no error state on this page
#[component]
pub fn Home() -> Element {
    let backend = use_context::<AppContext>().backend;

    let home_future = use_resource(move || {
        let backend = backend.clone();

        async move {
            match backend.home().await {
                Ok(payload) => {
                    info!("fetched home payload");
                    Some(payload)
                }
                Err(err) => {
                    warn!("failed to fetch home payload, using samples: {err}");
                    None
                }
            }
        }
    });

    let payload = match &*home_future.read() {
        Some(Some(payload)) => Some(payload.clone()),
        _ => None,
    };
    let content = resolve_home(payload.as_ref());

    rsx! {
        div { class: "home-container",
            Hero {}
            About {}
            TechStack { items: content.tech }
            Projects { projects: content.projects }
            Timeline {}
            Blog { posts: content.posts }
            Footer {}
        }
    }
}
