use crate::constants::{
    BUTTON_ACTIVE_TRANSFORM, BUTTON_HOVER_TRANSFORM, BUTTON_IDLE_TRANSFORM, SLIDER_FILL,
    SLIDER_TRACK, SOUND_BUTTON_SELECTOR, STOP_ALL_ID, STOP_PRESS_MS, SUBTITLE_SELECTOR,
    VOLUME_SLIDER_ID, VOLUME_VALUE_ID,
};
use crate::core::{
    parse_volume_percent, status_line, stepped_volume_percent, Mixer, Notice, Shortcut, Toggle,
};
use crate::media::{self, AudioHandle};
use crate::{dom, toast};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedMixer = Rc<RefCell<Mixer<AudioHandle>>>;

/// Page controls bound to the shared mixer. Cheap to clone into closures.
#[derive(Clone)]
pub struct Controls {
    pub document: web::Document,
    pub mixer: SharedMixer,
}

impl Controls {
    pub fn new(document: web::Document, mixer: SharedMixer) -> Self {
        Self { document, mixer }
    }

    pub fn toggle(&self, id: &str) {
        // Bind first so the mixer borrow ends before any DOM work.
        let result = self.mixer.borrow_mut().toggle(id);
        match result {
            Err(e) => {
                log::warn!("[mixer] {}", e);
                toast::show(&self.document, &Notice::for_error(&e));
            }
            Ok(Toggle::Activating { ticket, request }) => {
                let this = self.clone();
                spawn_local(async move {
                    let outcome = media::resolve_play(request).await;
                    let completion = this.mixer.borrow_mut().complete_activation(ticket, outcome);
                    match completion {
                        Ok(c) => {
                            if let Some(notice) = Notice::for_completion(&c) {
                                toast::show(&this.document, &notice);
                            }
                        }
                        Err(e) => toast::show(&this.document, &Notice::for_error(&e)),
                    }
                    this.refresh();
                });
            }
            Ok(done) => {
                if let Some(notice) = Notice::for_toggle(&done) {
                    toast::show(&self.document, &notice);
                }
            }
        }
        self.refresh();
    }

    pub fn stop_all(&self) {
        let report = self.mixer.borrow_mut().stop_all();
        self.refresh();
        toast::show(&self.document, &Notice::for_stop(&report));
    }

    fn slider(&self) -> Option<web::HtmlInputElement> {
        self.document
            .get_element_by_id(VOLUME_SLIDER_ID)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    }

    /// Reads the slider and pushes its value through the mixer.
    pub fn apply_slider(&self) {
        let Some(slider) = self.slider() else {
            return;
        };
        let pct = {
            let mut mixer = self.mixer.borrow_mut();
            mixer.set_volume(parse_volume_percent(&slider.value()) as f64 / 100.0);
            mixer.volume_percent()
        };
        log::debug!("[volume] {}%", pct);

        if let Some(label) = self.document.get_element_by_id(VOLUME_VALUE_ID) {
            label.set_text_content(Some(format!("{pct}%").as_str()));
        }
        let gradient = format!(
            "linear-gradient(to right, {SLIDER_FILL} 0%, {SLIDER_FILL} {pct}%, {SLIDER_TRACK} {pct}%, {SLIDER_TRACK} 100%)"
        );
        dom::set_style(&slider, "background", &gradient);
    }

    pub fn step_volume(&self, shortcut: Shortcut) {
        let Some(slider) = self.slider() else {
            return;
        };
        let next = stepped_volume_percent(parse_volume_percent(&slider.value()), shortcut);
        slider.set_value(&next.to_string());
        self.apply_slider();
    }

    /// Re-derives button highlights and the subtitle from the mixer.
    pub fn refresh(&self) {
        let mixer = self.mixer.borrow();
        let state = mixer.state();
        for sound in mixer.registry().iter() {
            let selector = format!("{SOUND_BUTTON_SELECTOR}[data-sound=\"{}\"]", sound.id);
            let Some(button) = dom::query_html(&self.document, &selector) else {
                continue;
            };
            let active = state.is_active(sound.id);
            let starting = if state.is_pending(sound.id) { "true" } else { "false" };
            _ = button.set_attribute("aria-busy", starting);
            let classes = button.class_list();
            if active {
                _ = classes.add_1("active");
                dom::set_style(&button, "transform", BUTTON_ACTIVE_TRANSFORM);
            } else if classes.contains("active") {
                _ = classes.remove_1("active");
                dom::set_style(&button, "transform", BUTTON_IDLE_TRANSFORM);
            }
        }
        if let Some(subtitle) = dom::query_html(&self.document, SUBTITLE_SELECTOR) {
            let status = status_line(state.active_count());
            subtitle.set_text_content(Some(status.text.as_str()));
            dom::set_style(&subtitle, "color", status.color);
        }
    }

    pub fn wire(&self) {
        self.wire_sound_buttons();
        self.wire_stop_button();
        self.wire_volume_slider();
    }

    fn wire_sound_buttons(&self) {
        for button in dom::query_all_html(&self.document, SOUND_BUTTON_SELECTOR) {
            let target: &web::EventTarget = button.as_ref();

            let this = self.clone();
            let clicked = button.clone();
            dom::listen(target, "click", move |_: web::MouseEvent| {
                match clicked.get_attribute("data-sound") {
                    Some(id) => this.toggle(&id),
                    None => log::warn!("[controls] sound button without data-sound"),
                }
            });

            let hovered = button.clone();
            dom::listen(target, "mouseenter", move |_: web::MouseEvent| {
                dom::set_style(&hovered, "transform", BUTTON_HOVER_TRANSFORM);
            });

            let left = button.clone();
            dom::listen(target, "mouseleave", move |_: web::MouseEvent| {
                if !left.class_list().contains("active") {
                    dom::set_style(&left, "transform", BUTTON_IDLE_TRANSFORM);
                }
            });
        }
    }

    fn wire_stop_button(&self) {
        let Some(button) = dom::query_html(&self.document, &format!("#{STOP_ALL_ID}")) else {
            log::warn!("[controls] missing #{}", STOP_ALL_ID);
            return;
        };
        let this = self.clone();
        dom::add_click_listener(&self.document, STOP_ALL_ID, move || {
            this.stop_all();
            dom::set_style(&button, "transform", "scale(0.95)");
            let pressed = button.clone();
            dom::set_timeout(STOP_PRESS_MS, move || {
                dom::set_style(&pressed, "transform", "scale(1)");
            });
        });
    }

    fn wire_volume_slider(&self) {
        let Some(slider) = self.slider() else {
            log::warn!("[controls] missing #{}", VOLUME_SLIDER_ID);
            return;
        };
        let this = self.clone();
        let target: &web::EventTarget = slider.as_ref();
        dom::listen(target, "input", move |_: web::Event| this.apply_slider());
        self.apply_slider();
    }
}
