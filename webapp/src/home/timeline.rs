use dioxus::prelude::*;

use store::samples::timeline;

#[component]
pub fn Timeline() -> Element {
    rsx! {
        section { id: "timeline", class: "reveal",
            div { class: "container",
                h2 { class: "section-title", "Timeline" }
                ol { class: "timeline",
                    for entry in timeline() {
                        li { class: "timeline-item",
                            span { class: "timeline-period", "{entry.period}" }
                            h3 { "{entry.title}" }
                            p { class: "timeline-place", "{entry.place}" }
                            p { "{entry.detail}" }
                        }
                    }
                }
            }
        }
    }
}
