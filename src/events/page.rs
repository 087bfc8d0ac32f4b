use crate::constants::{WELCOME_DELAY_MS, WELCOME_TIP_DELAY_MS};
use crate::controls::Controls;
use crate::core::Notice;
use crate::{dom, particles, toast};
use web_sys as web;

/// Ducks playing sounds while the tab is in the background.
pub fn wire_visibility(controls: Controls) {
    let target: web::EventTarget = controls.document.clone().into();
    dom::listen(&target, "visibilitychange", move |_: web::Event| {
        let hidden = controls.document.hidden();
        let mut mixer = controls.mixer.borrow_mut();
        mixer.set_page_hidden(hidden);
        log::info!(
            "[visibility] hidden={} level={:.2}",
            hidden,
            mixer.effective_volume()
        );
    });
}

pub fn wire_resize(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let target: &web::EventTarget = window.as_ref();
    dom::listen(target, "resize", move |_: web::Event| {
        particles::reposition_after_resize(&doc);
    });
}

/// Greets the user shortly after the page finished loading.
pub fn wire_welcome() {
    let Some(window) = web::window() else {
        return;
    };
    let show_welcome = || {
        dom::set_timeout(WELCOME_DELAY_MS, || {
            toast::notify(&Notice::welcome());
            dom::set_timeout(WELCOME_TIP_DELAY_MS, || toast::notify(&Notice::welcome_tip()));
        });
    };
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        show_welcome();
    } else {
        let target: &web::EventTarget = window.as_ref();
        dom::listen(target, "load", move |_: web::Event| show_welcome());
    }
}
