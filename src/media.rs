use crate::core::{audio_element_id, media_path, MediaHandle, SoundSpec};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `MediaHandle` over an `<audio>` element.
#[derive(Clone)]
pub struct AudioHandle {
    el: web::HtmlAudioElement,
}

impl AudioHandle {
    /// Uses the page's `<audio id="audio-<id>">` when present, otherwise a
    /// detached element pointing at the conventional media path. A missing
    /// file is only reported once playback is attempted.
    pub fn for_sound(document: &web::Document, spec: &SoundSpec) -> anyhow::Result<Self> {
        let from_page = document
            .get_element_by_id(&audio_element_id(spec.id))
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        let el = match from_page {
            Some(el) => el,
            None => {
                let path = media_path(spec.id);
                log::info!("[audio] no <audio> for {}, using {}", spec.id, path);
                web::HtmlAudioElement::new_with_src(&path)
                    .map_err(|e| anyhow::anyhow!("audio element for {}: {:?}", spec.id, e))?
            }
        };
        el.set_loop(true);
        watch_loading(&el, spec.id);
        Ok(Self { el })
    }
}

fn watch_loading(el: &web::HtmlAudioElement, id: &'static str) {
    let target: &web::EventTarget = el.as_ref();
    dom::listen(target, "error", move |_: web::Event| {
        log::warn!("[audio] audio file not found: {}", media_path(id));
    });
    dom::listen(target, "loadstart", move |_: web::Event| {
        log::info!("[audio] loading {}", id);
    });
}

impl MediaHandle for AudioHandle {
    type Request = Result<js_sys::Promise, JsValue>;

    fn play(&self) -> Self::Request {
        self.el.play()
    }

    fn pause(&self) {
        _ = self.el.pause();
    }

    fn rewind(&self) {
        self.el.set_current_time(0.0);
    }

    fn set_volume(&self, level: f64) {
        self.el.set_volume(level);
    }

    fn is_paused(&self) -> bool {
        self.el.paused()
    }
}

/// Waits for a play request to settle.
pub async fn resolve_play(request: Result<js_sys::Promise, JsValue>) -> Result<(), String> {
    let promise = request.map_err(|e| format!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
