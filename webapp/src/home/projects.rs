use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::project::Project;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        Link {
            to: Route::ProjectDetail {
                slug: project.slug.clone(),
            },
            class: "card project-card",
            h3 { "{project.title}" }
            p { "{project.summary}" }
            ul { class: "tag-list",
                for tech in project.tech.iter() {
                    li { class: "tag", "{tech}" }
                }
            }
        }
    }
}

#[component]
pub fn Projects(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: "projects", class: "reveal",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "grid",
                    for project in projects {
                        ProjectCard { key: "{project.slug}", project: project.clone() }
                    }
                }
            }
        }
    }
}
