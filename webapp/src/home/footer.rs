use dioxus::prelude::*;

use crate::common::current_year;

const LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
    ("Email", "mailto:hello@example.dev"),
];

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "home-footer",
            div { class: "container",
                div { class: "footer-links",
                    for (name , href) in LINKS {
                        a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "{name}" }
                    }
                }
                p { "© {year} · Built with Rust and Dioxus" }
            }
        }
    }
}
