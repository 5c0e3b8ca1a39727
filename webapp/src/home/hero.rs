use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero reveal",
            div { class: "container",
                p { class: "hero-eyebrow", "Software engineer" }
                h1 { class: "hero-title",
                    "I build "
                    span { class: "highlight", "fast, careful software" }
                    " for the web."
                }
                p { class: "hero-subtitle",
                    "Full-stack engineer working across Rust, TypeScript and the cloud. "
                    "This is where I keep my projects, notes and the occasional experiment."
                }
                div { class: "hero-actions",
                    a { class: "btn btn-primary btn-lg", href: "#projects", "See projects" }
                    a { class: "btn btn-secondary btn-lg", href: "#blog", "Read the blog" }
                    Link { to: Route::Studio {}, class: "btn btn-ghost btn-lg", "Studio" }
                }
            }
        }
    }
}
