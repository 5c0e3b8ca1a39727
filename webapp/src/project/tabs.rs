use dioxus::prelude::*;

use api::project::Project;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectTab {
    #[default]
    Overview,
    Process,
    Demo,
    Learnings,
}

impl ProjectTab {
    pub fn all() -> [ProjectTab; 4] {
        [
            ProjectTab::Overview,
            ProjectTab::Process,
            ProjectTab::Demo,
            ProjectTab::Learnings,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectTab::Overview => "Overview",
            ProjectTab::Process => "Process",
            ProjectTab::Demo => "Demo",
            ProjectTab::Learnings => "Learnings",
        }
    }
}

// the only tab that needs the fetched project; the page does not render it until then
#[derive(Clone, PartialEq, Props)]
pub struct OverviewTabProps {
    project: Project,
}

#[component]
pub fn OverviewTab(props: OverviewTabProps) -> Element {
    let project = props.project;

    rsx! {
        dl { class: "project-facts",
            if let Some(role) = &project.role {
                div {
                    dt { "Role" }
                    dd { "{role}" }
                }
            }
            if let Some(timeline) = &project.timeline {
                div {
                    dt { "Timeline" }
                    dd { "{timeline}" }
                }
            }
        }

        ul { class: "tag-list",
            for tech in project.tech.iter() {
                li { class: "tag", "{tech}" }
            }
        }

        div { class: "project-links",
            if let Some(url) = &project.demo_url {
                a { class: "btn btn-primary", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Live demo" }
            }
            if let Some(url) = &project.repo_url {
                a { class: "btn btn-secondary", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Source" }
            }
        }
    }
}

#[component]
pub fn ProcessTab() -> Element {
    rsx! {
        div { class: "about-text",
            p {
                "Every project starts with a short written brief: who it is for, what done looks like, "
                "and what is explicitly out of scope."
            }
            p {
                "From there it is small vertical slices, each deployed and used before the next one starts. "
                "Design, data model and infrastructure evolve together instead of in separate phases."
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct DemoTabProps {
    #[props(!optional)]
    demo_url: Option<String>,
}

#[component]
pub fn DemoTab(props: DemoTabProps) -> Element {
    let demo_url = props.demo_url;

    rsx! {
        div { class: "about-text",
            match demo_url {
                Some(url) => rsx! {
                    p { "A live version is available to try." }
                    a { class: "btn btn-primary", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Open demo" }
                },
                None => rsx! {
                    p { "There is no public demo for this project yet. Screenshots and a walkthrough are on the way." }
                },
            }
        }
    }
}

#[component]
pub fn LearningsTab() -> Element {
    rsx! {
        div { class: "about-text",
            p { "Ship the boring version first; the interesting problems show up in production anyway." }
            p { "Instrument early. Most of the hard questions later were answered by logs written on day one." }
        }
    }
}
