use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{info, warn};

use api::Backend;
use store::Keyed;

use crate::{Route, common::context::AppContext};

mod tabs;
use tabs::{DemoTab, LearningsTab, OverviewTab, ProcessTab, ProjectTab};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectDetailProps {
    // the final path segment, handed over by the Router
    slug: String,
}

// ProjectDetail
//
// one fetch per slug.  use_reactive restarts the resource whenever the router hands us
// a new slug, which drops the previous future; the Keyed wrapper covers the remaining
// case of a completion for the old slug being read after the switch
#[component]
pub fn ProjectDetail(props: ProjectDetailProps) -> Element {
    let backend = use_context::<AppContext>().backend;
    let mut tab_signal = use_signal(ProjectTab::default);

    let slug = use_memo(use_reactive(&props.slug, |slug| slug));
    let project_future = use_resource(move || {
        let backend = backend.clone();

        async move {
            let slug = slug();

            match backend.project(&slug).await {
                Ok(project) => {
                    info!({ slug = %slug }, "fetched project");
                    Some(Keyed::new(slug, project))
                }
                Err(err) => {
                    warn!({ slug = %slug }, "failed to fetch project: {err}");
                    None
                }
            }
        }
    });

    let project = match &*project_future.read() {
        Some(Some(keyed)) => keyed.for_key(&slug()).cloned(),
        _ => None,
    };

    let title = match &project {
        Some(project) => project.title.clone(),
        None => slug(),
    };

    rsx! {
        div { class: "container project-detail",
            Link { to: Route::Home {}, class: "btn btn-ghost btn-sm", "← Back" }

            div { class: "project-header",
                h1 { "{title}" }
                if let Some(project) = &project {
                    p { class: "hero-subtitle", style: "margin: 0;", "{project.summary}" }
                }
            }

            div { class: "tabs", role: "tablist",
                for tab in ProjectTab::all() {
                    button {
                        class: if tab_signal() == tab { "tab active" } else { "tab" },
                        role: "tab",
                        onclick: move |_| tab_signal.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            div { class: "reveal", key: "{tab_signal().label()}",
                match tab_signal() {
                    ProjectTab::Overview => rsx! {
                        if let Some(project) = project.clone() {
                            OverviewTab { project }
                        }
                    },
                    ProjectTab::Process => rsx! {
                        ProcessTab {}
                    },
                    ProjectTab::Demo => rsx! {
                        DemoTab { demo_url: project.as_ref().and_then(|p| p.demo_url.clone()) }
                    },
                    ProjectTab::Learnings => rsx! {
                        LearningsTab {}
                    },
                }
            }
        }
    }
}
