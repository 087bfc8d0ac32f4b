use crate::constants::{TOAST_ENTER_DELAY_MS, TOAST_EXIT_MS, TOAST_SELECTOR, TOAST_VISIBLE_MS};
use crate::core::Notice;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toast_css(accent: &str) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; \
         background: rgba(0, 0, 0, 0.8); backdrop-filter: blur(10px); \
         border: 2px solid {accent}; border-radius: 10px; padding: 1rem 1.5rem; \
         color: white; font-family: 'Orbitron', monospace; font-size: 0.9rem; \
         z-index: 10000; box-shadow: 0 0 20px {accent}40; \
         transform: translateX(100%); transition: transform 0.3s ease;"
    )
}

/// Shows `notice` as the only toast on the page; it slides out on its own.
pub fn show(document: &web::Document, notice: &Notice) {
    if let Ok(Some(existing)) = document.query_selector(TOAST_SELECTOR) {
        existing.remove();
    }
    let Some(body) = document.body() else {
        return;
    };
    let Some(toast) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    toast.set_class_name(&format!("notification notification-{}", notice.kind.as_str()));
    _ = toast.set_attribute("style", &toast_css(notice.kind.accent()));
    toast.set_text_content(Some(notice.text.as_str()));
    if body.append_child(&toast).is_err() {
        return;
    }

    let entering = toast.clone();
    dom::set_timeout(TOAST_ENTER_DELAY_MS, move || {
        dom::set_style(&entering, "transform", "translateX(0)");
    });
    dom::set_timeout(TOAST_VISIBLE_MS, move || {
        dom::set_style(&toast, "transform", "translateX(100%)");
        dom::set_timeout(TOAST_EXIT_MS, move || dom::detach(&toast));
    });
}

/// Convenience for handlers that only hold the window.
pub fn notify(notice: &Notice) {
    log::debug!("[notice] {}: {}", notice.kind.as_str(), notice.text);
    if let Some(document) = dom::window_document() {
        show(&document, notice);
    }
}
