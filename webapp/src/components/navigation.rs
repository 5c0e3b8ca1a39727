use dioxus::prelude::*;
use dioxus_router::prelude::*;

use store::theme::Theme;

use crate::{
    Route,
    common::{scroll::use_scroll_direction, theme::use_theme},
};

// in-page anchors on the landing page
const SECTIONS: [(&str, &str); 5] = [
    ("About", "/#about"),
    ("Stack", "/#stack"),
    ("Projects", "/#projects"),
    ("Timeline", "/#timeline"),
    ("Blog", "/#blog"),
];

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
    menu_open_signal: Signal<bool>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;
    let mut menu_open_signal = props.menu_open_signal;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            onclick: move |_| menu_open_signal.set(false),
            "{name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavLinksProps {
    menu_open_signal: Signal<bool>,
}

#[component]
fn NavLinks(props: NavLinksProps) -> Element {
    let mut menu_open_signal = props.menu_open_signal;

    rsx! {
        for (name , href) in SECTIONS {
            a {
                class: "nav-link",
                href: "{href}",
                onclick: move |_| menu_open_signal.set(false),
                "{name}"
            }
        }
        NavBarButton {
            name: "Studio".to_owned(),
            target: Route::Studio {},
            menu_open_signal,
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let theme = use_theme();

    let (icon, label) = match theme.theme() {
        Theme::Light => ("☾", "Switch to dark theme"),
        Theme::Dark => ("☀", "Switch to light theme"),
    };

    rsx! {
        button {
            class: "btn btn-ghost btn-sm",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| theme.toggle(),
            "{icon}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let direction = use_scroll_direction();
    let mut menu_open_signal = use_signal(|| false);

    let hidden = direction().hides_nav(menu_open_signal());

    rsx! {
        header { class: if hidden { "app-header hidden" } else { "app-header" },
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, "Portfolio" }
                }

                nav { class: "nav-links",
                    NavLinks { menu_open_signal }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: "btn btn-ghost btn-sm menu-toggle",
                        aria_label: "Toggle navigation menu",
                        aria_expanded: "{menu_open_signal()}",
                        onclick: move |_| menu_open_signal.toggle(),
                        if menu_open_signal() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            nav { class: if menu_open_signal() { "mobile-menu open" } else { "mobile-menu" },
                NavLinks { menu_open_signal }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
