use dioxus::prelude::*;

use api::tech::TechItem;

#[component]
pub fn TechStack(items: Vec<TechItem>) -> Element {
    rsx! {
        section { id: "stack", class: "reveal",
            div { class: "container",
                h2 { class: "section-title", "Tech stack" }
                div { class: "grid",
                    for item in items {
                        div { class: "card tech-card",
                            span { class: "tech-name", "{item.name}" }
                            span { class: "tech-meta", "{item.category} · {item.level}" }
                        }
                    }
                }
            }
        }
    }
}
