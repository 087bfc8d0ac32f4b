// Shared host-side harness. The main crate is wasm-only, so the pure core
// modules are included directly, with a recording stand-in for <audio>.

#![allow(dead_code)]

pub mod core {
    pub mod catalog {
        include!("../../src/core/catalog.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod keys {
        include!("../../src/core/keys.rs");
    }
    pub mod mixer {
        include!("../../src/core/mixer.rs");
    }
    pub mod notice {
        include!("../../src/core/notice.rs");
    }
    pub mod particle {
        include!("../../src/core/particle.rs");
    }
    pub mod playback {
        include!("../../src/core/playback.rs");
    }
    pub mod registry {
        include!("../../src/core/registry.rs");
    }
    pub mod stop {
        include!("../../src/core/stop.rs");
    }
    pub mod volume {
        include!("../../src/core/volume.rs");
    }
}

use self::core::mixer::Mixer;
use self::core::registry::{MediaHandle, SoundRegistry};
use std::cell::Cell;
use std::convert::Infallible;

/// Behaves like a media element: `play` flips `paused` immediately and the
/// test decides later whether the request succeeded.
#[derive(Debug)]
pub struct FakeHandle {
    pub paused: Cell<bool>,
    pub position: Cell<f64>,
    pub volume: Cell<f64>,
    pub play_calls: Cell<u32>,
}

impl Default for FakeHandle {
    fn default() -> Self {
        Self {
            paused: Cell::new(true),
            position: Cell::new(0.0),
            volume: Cell::new(1.0),
            play_calls: Cell::new(0),
        }
    }
}

impl FakeHandle {
    /// Pretend some of the track has been heard.
    pub fn advance(&self, secs: f64) {
        if !self.paused.get() {
            self.position.set(self.position.get() + secs);
        }
    }
}

impl MediaHandle for FakeHandle {
    type Request = ();

    fn play(&self) -> Self::Request {
        self.play_calls.set(self.play_calls.get() + 1);
        self.paused.set(false);
    }

    fn pause(&self) {
        self.paused.set(true);
    }

    fn rewind(&self) {
        self.position.set(0.0);
    }

    fn set_volume(&self, level: f64) {
        self.volume.set(level);
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }
}

pub fn make_mixer() -> Mixer<FakeHandle> {
    let registry = SoundRegistry::try_from_catalog(|_| Ok::<_, Infallible>(FakeHandle::default()));
    match registry {
        Ok(registry) => Mixer::new(registry, 0.5),
        Err(never) => match never {},
    }
}

pub fn handle<'a>(mixer: &'a Mixer<FakeHandle>, id: &str) -> &'a FakeHandle {
    &mixer.registry().lookup(id).expect("known sound").handle
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
