#![cfg(target_arch = "wasm32")]
use crate::controls::Controls;
use crate::core::{constants::DEFAULT_VOLUME, Mixer, SoundRegistry};
use crate::media::AudioHandle;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod core;
mod dom;
mod effects;
mod events;
mod media;
mod particles;
mod toast;

const BANNER: &str = "
🎵 NeuroFocus - Cyberpunk Focus App
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
✨ Controls:
   • Space / Escape: stop all sounds
   • ↑/↓: volume
   • Konami code: secret easter egg!
";

fn build_mixer(document: &web::Document) -> anyhow::Result<Mixer<AudioHandle>> {
    let registry =
        SoundRegistry::try_from_catalog(|spec| AudioHandle::for_sound(document, spec))?;
    log::info!("[audio] {} sounds registered", registry.len());
    Ok(Mixer::new(registry, DEFAULT_VOLUME))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neurofocus starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mixer = Rc::new(RefCell::new(build_mixer(&document)?));
    let controls = Controls::new(document.clone(), mixer);

    particles::start(&document);
    controls.wire();
    controls.refresh();

    events::wire_global_keydown(controls.clone());
    events::wire_visibility(controls);
    events::wire_resize(&document);
    events::wire_pointer_trail(&document);
    events::wire_welcome();

    log::info!("🎵 NeuroFocus initialized - ready for immersive focus!");
    log::info!("{}", BANNER);
    Ok(())
}
