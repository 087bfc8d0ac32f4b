use crate::{dom, effects};
use web_sys as web;

/// Cursor glow that follows the mouse across the page.
pub fn wire_pointer_trail(document: &web::Document) {
    effects::install_cursor_trail(document);
    let doc = document.clone();
    let target: &web::EventTarget = document.as_ref();
    dom::listen(target, "mousemove", move |ev: web::MouseEvent| {
        effects::move_cursor_trail(&doc, ev.client_x(), ev.client_y());
    });
}
