use dioxus::prelude::*;

const FACTS: [&str; 4] = [
    "8+ years shipping production web software",
    "Comfortable from the database up to the pixels",
    "Strong opinions about error messages",
    "Open to interesting collaborations",
];

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "reveal",
            div { class: "container",
                h2 { class: "section-title", "About" }
                div { class: "about-grid",
                    div { class: "about-text",
                        p {
                            "I started out building marketing sites and slowly worked my way down the "
                            "stack: APIs, data pipelines, deployment, and eventually systems code."
                        }
                        p {
                            "These days I split my time between product engineering and tooling, "
                            "with a soft spot for anything that makes a team faster without making it fragile."
                        }
                    }
                    ul { class: "about-facts",
                        for fact in FACTS {
                            li { "{fact}" }
                        }
                    }
                }
            }
        }
    }
}
