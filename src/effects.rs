use crate::constants::RAINBOW_DURATION_MS;
use crate::core::Notice;
use crate::{dom, particles, toast};
use wasm_bindgen::JsCast;
use web_sys as web;

const RAINBOW_KEYFRAMES: &str = "@keyframes rainbow { \
    0% { filter: hue-rotate(0deg); } \
    25% { filter: hue-rotate(90deg); } \
    50% { filter: hue-rotate(180deg); } \
    75% { filter: hue-rotate(270deg); } \
    100% { filter: hue-rotate(360deg); } }";

const CURSOR_CSS: &str = "body::before { \
    left: var(--cursor-x, 0px); \
    top: var(--cursor-y, 0px); }";

/// Konami reward: a short hue sweep over the page plus a particle burst.
pub fn easter_egg(document: &web::Document) {
    log::info!("[fx] easter egg");
    toast::show(document, &Notice::easter_egg());
    if let Some(body) = document.body() {
        dom::set_style(&body, "animation", "rainbow 2s ease-in-out");
        let sheet = dom::inject_style(document, RAINBOW_KEYFRAMES);
        dom::set_timeout(RAINBOW_DURATION_MS, move || {
            dom::set_style(&body, "animation", "");
            if let Some(sheet) = sheet {
                sheet.remove();
            }
        });
    }
    particles::special_burst(document);
}

/// Glow that follows the pointer, driven by two CSS custom properties.
pub fn install_cursor_trail(document: &web::Document) {
    _ = dom::inject_style(document, CURSOR_CSS);
}

pub fn move_cursor_trail(document: &web::Document, x: i32, y: i32) {
    if let Some(root) = document.document_element() {
        if let Some(root) = root.dyn_ref::<web::HtmlElement>() {
            dom::set_style(root, "--cursor-x", &format!("{x}px"));
            dom::set_style(root, "--cursor-y", &format!("{y}px"));
        }
    }
}
