use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::AddEventListenerOptions;

use store::scroll::{ScrollDirection, ScrollTracker};

// a window scroll listener that detaches itself when the owning component goes away
struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(callback: Closure<dyn FnMut()>) -> Self {
        if let Some(window) = web_sys::window() {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);

            if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                warn!("failed to attach scroll listener: {err:?}");
            }
        }

        ScrollListener { callback }
    }

    fn detach(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
            {
                warn!("failed to detach scroll listener: {err:?}");
            }
        }
    }
}

// the signal only changes when the direction flips, so a long scroll in one direction
// does not rerender the navigation bar on every event
pub fn use_scroll_direction() -> Signal<ScrollDirection> {
    let mut direction = use_signal(ScrollDirection::default);

    let listener = use_hook(move || {
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));

        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(offset) = web_sys::window().and_then(|window| window.scroll_y().ok()) else {
                return;
            };

            let next = tracker.borrow_mut().observe(offset);
            if *direction.peek() != next {
                direction.set(next);
            }
        });

        Rc::new(ScrollListener::attach(callback))
    });

    use_drop(move || listener.detach());

    direction
}
