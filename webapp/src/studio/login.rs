use dioxus::prelude::*;

use store::{
    session::AuthState,
    studio::{LoginOutcome, login},
};

use crate::{common::context::AppContext, studio::StudioSession};

#[derive(Clone, PartialEq, Props)]
pub struct LoginFormProps {
    auth_signal: Signal<AuthState>,
}

// a rejected password only produces a message; the user retries by hand
#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut auth_signal = props.auth_signal;

    let backend = use_context::<AppContext>().backend;
    let session = use_context::<StudioSession>();

    let mut password = use_signal(String::new);
    let mut status_signal = use_signal(String::new);
    let mut pending_signal = use_signal(|| false);

    rsx! {
        form {
            class: "card studio-panel",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();

                let backend = backend.clone();
                let session = session.clone();

                async move {
                    pending_signal.set(true);
                    let outcome = login(&backend, &session.0, &password()).await;
                    pending_signal.set(false);

                    match outcome {
                        LoginOutcome::Authenticated => {
                            password.set(String::new());
                            status_signal.set(String::new());
                            auth_signal.set(session.0.state());
                        }
                        LoginOutcome::Rejected(message) => status_signal.set(message),
                    }
                }
            },

            div { class: "form-group",
                label { class: "form-label", r#for: "studio-password", "Password" }
                input {
                    id: "studio-password",
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            div { class: "form-actions",
                span { class: "status-message error", "{status_signal}" }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: pending_signal(),
                    "Log in"
                }
            }
        }
    }
}
