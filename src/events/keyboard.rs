use crate::controls::Controls;
use crate::core::{shortcut_for, KonamiTracker, Shortcut};
use crate::{dom, effects};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tag name of the element a key event was aimed at, e.g. `INPUT`.
fn target_tag(ev: &web::KeyboardEvent) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.tag_name())
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    controls: &Controls,
    konami: &Rc<RefCell<KonamiTracker>>,
) {
    let code = ev.code();
    if let Some(shortcut) = shortcut_for(&code, target_tag(ev).as_deref()) {
        if shortcut.prevents_default(&code) {
            ev.prevent_default();
        }
        match shortcut {
            Shortcut::StopAll => {
                log::info!("[keys] stop all ({})", code);
                controls.stop_all();
            }
            Shortcut::VolumeUp | Shortcut::VolumeDown => controls.step_volume(shortcut),
        }
    }
    if konami.borrow_mut().push(&code) {
        effects::easter_egg(&controls.document);
    }
}

pub fn wire_global_keydown(controls: Controls) {
    let konami = Rc::new(RefCell::new(KonamiTracker::default()));
    let target: web::EventTarget = controls.document.clone().into();
    dom::listen(&target, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &controls, &konami);
    });
}
