use crate::constants::{
    PARTICLES_ID, PARTICLE_COUNT, PARTICLE_LIFETIME_MS, PARTICLE_RESPAWN_INTERVAL_MS,
    SPECIAL_PARTICLE_COUNT, SPECIAL_PARTICLE_LIFETIME_MS, SPECIAL_PARTICLE_STAGGER_MS,
};
use crate::core::particle::{needs_reposition, random_left, special_color, ParticleSpec};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const SPECIAL_FLOAT_KEYFRAMES: &str = "@keyframes specialFloat { \
    0% { transform: translateY(0) scale(1) rotate(0deg); opacity: 1; } \
    50% { transform: translateY(-50vh) scale(2) rotate(180deg); opacity: 1; } \
    100% { transform: translateY(-100vh) scale(0) rotate(360deg); opacity: 0; } }";

fn new_div(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn spawn(document: &web::Document, container: &web::Element) {
    let Some(particle) = new_div(document) else {
        return;
    };
    let spec = ParticleSpec::random(&mut rand::thread_rng(), dom::viewport_width());
    particle.set_class_name("particle");
    dom::set_style(&particle, "left", &format!("{}px", spec.left_px));
    dom::set_style(&particle, "width", &format!("{}px", spec.size_px));
    dom::set_style(&particle, "height", &format!("{}px", spec.size_px));
    dom::set_style(&particle, "animation-delay", &format!("{}s", spec.delay_sec));
    if container.append_child(&particle).is_ok() {
        dom::set_timeout(PARTICLE_LIFETIME_MS, move || dom::detach(&particle));
    }
}

/// Fills `#particles` and keeps it topped up for the session.
pub fn start(document: &web::Document) {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        log::warn!("[particles] missing #{}", PARTICLES_ID);
        return;
    };
    for _ in 0..PARTICLE_COUNT {
        spawn(document, &container);
    }
    let doc = document.clone();
    dom::set_interval(PARTICLE_RESPAWN_INTERVAL_MS, move || {
        if container.child_element_count() < PARTICLE_COUNT {
            spawn(&doc, &container);
        }
    });
}

/// Pulls particles that ended up off-screen back into the viewport.
pub fn reposition_after_resize(document: &web::Document) {
    let width = dom::viewport_width();
    for particle in dom::query_all_html(document, ".particle") {
        let left = particle
            .style()
            .get_property_value("left")
            .ok()
            .and_then(|v| v.trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(0.0);
        if needs_reposition(left, width) {
            let x = random_left(&mut rand::thread_rng(), width);
            dom::set_style(&particle, "left", &format!("{x}px"));
        }
    }
}

/// Burst of colored particles rising from the bottom edge.
pub fn special_burst(document: &web::Document) {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        return;
    };
    for i in 0..SPECIAL_PARTICLE_COUNT {
        let doc = document.clone();
        let container = container.clone();
        dom::set_timeout(i as i32 * SPECIAL_PARTICLE_STAGGER_MS, move || {
            let Some(particle) = new_div(&doc) else {
                return;
            };
            let mut rng = rand::thread_rng();
            let css = format!(
                "position: absolute; width: 6px; height: 6px; background: {}; \
                 border-radius: 50%; left: {}px; top: 100vh; \
                 box-shadow: 0 0 15px currentColor; \
                 animation: specialFloat 3s ease-out forwards;",
                special_color(&mut rng),
                random_left(&mut rng, dom::viewport_width())
            );
            _ = particle.set_attribute("style", &css);
            let sheet = dom::inject_style(&doc, SPECIAL_FLOAT_KEYFRAMES);
            _ = container.append_child(&particle);
            dom::set_timeout(SPECIAL_PARTICLE_LIFETIME_MS, move || {
                dom::detach(&particle);
                if let Some(sheet) = sheet {
                    dom::detach(&sheet);
                }
            });
        });
    }
}
