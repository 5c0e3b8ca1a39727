use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use api::content::ContentKind;
use store::studio::{ContentDraft, SubmitOutcome, draft_labels, submit};

use crate::{common::context::AppContext, studio::StudioSession};

// how long a submit result stays on screen
const STATUS_CLEAR_MS: u32 = 4000;

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Project => "Project",
        ContentKind::Blog => "Blog post",
        ContentKind::Tech => "Tech item",
    }
}

#[component]
pub fn DraftForm() -> Element {
    let context = use_context::<AppContext>();
    let backend = context.backend;
    let read_time = context.config.blog_read_time;
    let session = use_context::<StudioSession>();

    let mut draft = use_signal(ContentDraft::default);

    // each submit bumps the sequence; a timer only clears the status it was started for
    let mut status_signal = use_signal(|| None::<(u32, SubmitOutcome)>);
    let mut status_seq = use_signal(|| 0u32);

    let labels = draft_labels(draft.read().kind);

    let status = match &*status_signal.read() {
        Some((_, outcome)) => {
            let class = match outcome {
                SubmitOutcome::Submitted(_) => "status-message",
                _ => "status-message error",
            };
            Some((class, outcome.message()))
        }
        None => None,
    };

    rsx! {
        form {
            class: "card studio-panel",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();

                let backend = backend.clone();
                let session = session.clone();

                async move {
                    let snapshot = draft();
                    let outcome = submit(&backend, &session.0, &snapshot, read_time).await;

                    if let SubmitOutcome::Submitted(_) = outcome {
                        draft.write().clear();
                    }

                    let seq = status_seq() + 1;
                    status_seq.set(seq);
                    status_signal.set(Some((seq, outcome)));

                    TimeoutFuture::new(STATUS_CLEAR_MS).await;
                    if status_seq() == seq {
                        status_signal.set(None);
                    }
                }
            },

            div { class: "form-group",
                label { class: "form-label", r#for: "draft-kind", "Kind" }
                select {
                    id: "draft-kind",
                    class: "form-select",
                    value: "{draft.read().kind}",
                    onchange: move |evt| match evt.value().parse::<ContentKind>() {
                        Ok(kind) => draft.write().kind = kind,
                        Err(err) => warn!("ignoring kind selection: {err}"),
                    },
                    for kind in ContentKind::all() {
                        option { value: "{kind}", selected: draft.read().kind == kind, "{kind_label(kind)}" }
                    }
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "draft-title", "{labels.title}" }
                input {
                    id: "draft-title",
                    class: "form-input",
                    r#type: "text",
                    value: "{draft.read().title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "draft-slug", "{labels.slug}" }
                input {
                    id: "draft-slug",
                    class: "form-input",
                    r#type: "text",
                    value: "{draft.read().slug}",
                    oninput: move |evt| draft.write().slug = evt.value(),
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "draft-summary", "{labels.summary}" }
                textarea {
                    id: "draft-summary",
                    class: "form-textarea",
                    rows: 3,
                    value: "{draft.read().summary}",
                    oninput: move |evt| draft.write().summary = evt.value(),
                }
            }

            if let Some(tags_label) = labels.tags {
                div { class: "form-group",
                    label { class: "form-label", r#for: "draft-tags", "{tags_label}" }
                    input {
                        id: "draft-tags",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "rust, wasm, dioxus",
                        value: "{draft.read().tags_raw}",
                        oninput: move |evt| draft.write().tags_raw = evt.value(),
                    }
                }
            }

            div { class: "form-actions",
                if let Some((class, message)) = status {
                    span { class: "{class}", "{message}" }
                } else {
                    span {}
                }
                button { class: "btn btn-primary", r#type: "submit", "Create {kind_label(draft.read().kind)}" }
            }
        }
    }
}
