use std::rc::Rc;

use dioxus::prelude::*;

use store::{session::SessionStore, storage::BrowserStorage};

use crate::common::context::AppContext;

mod draft;
mod login;

use draft::DraftForm;
use login::LoginForm;

// the studio session, shared by the login and draft forms
#[derive(Clone)]
pub struct StudioSession(pub Rc<SessionStore<BrowserStorage>>);

// Studio
//
// two states: without a token only the password form is shown, with one only the
// content form.  a token left in local storage by an earlier visit skips the login
#[component]
pub fn Studio() -> Element {
    let config = use_context::<AppContext>().config;

    let session = use_context_provider(|| {
        StudioSession(Rc::new(SessionStore::restore(
            BrowserStorage::local(),
            config.token_storage_key(),
        )))
    });
    let mut auth_signal = use_signal(|| session.0.state());

    let authenticated = auth_signal().is_authenticated();

    rsx! {
        div { class: "studio reveal",
            div { class: "studio-header",
                h1 { class: "section-title", style: "margin: 0;", "Studio" }
                if authenticated {
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| {
                            session.0.logout();
                            auth_signal.set(session.0.state());
                        },
                        "Log out"
                    }
                }
            }

            if authenticated {
                DraftForm {}
            } else {
                LoginForm { auth_signal }
            }
        }
    }
}
