use super::catalog::{SoundSpec, CATALOG};
use fnv::FnvHashMap;

/// Playback resource behind one sound.
///
/// `play` only issues the request: the outcome arrives later and is handed
/// back to [`Mixer::complete_activation`](super::mixer::Mixer::complete_activation)
/// by whoever resolves `Request`. Everything else is synchronous and
/// infallible.
pub trait MediaHandle {
    type Request;

    fn play(&self) -> Self::Request;
    fn pause(&self);
    /// Seek back to the start of the track.
    fn rewind(&self);
    fn set_volume(&self, level: f64);
    fn is_paused(&self) -> bool;
}

#[derive(Debug)]
pub struct Sound<H> {
    pub id: &'static str,
    pub display_name: &'static str,
    pub handle: H,
}

/// Immutable id -> sound mapping, built once per page session.
pub struct SoundRegistry<H> {
    sounds: Vec<Sound<H>>,
    index: FnvHashMap<&'static str, usize>,
}

impl<H> SoundRegistry<H> {
    /// Builds one entry per catalog sound. A missing media file is not a
    /// failure here; it only shows up once the handle is played.
    pub fn try_from_catalog<E>(
        make_handle: impl FnMut(&SoundSpec) -> Result<H, E>,
    ) -> Result<Self, E> {
        Self::try_from_specs(&CATALOG, make_handle)
    }

    /// Duplicate ids keep their first entry.
    pub fn try_from_specs<E>(
        specs: &[SoundSpec],
        mut make_handle: impl FnMut(&SoundSpec) -> Result<H, E>,
    ) -> Result<Self, E> {
        let mut sounds = Vec::with_capacity(specs.len());
        let mut index = FnvHashMap::default();
        for spec in specs {
            if index.contains_key(spec.id) {
                continue;
            }
            index.insert(spec.id, sounds.len());
            sounds.push(Sound {
                id: spec.id,
                display_name: spec.display_name,
                handle: make_handle(spec)?,
            });
        }
        Ok(Self { sounds, index })
    }

    #[inline]
    pub fn lookup(&self, id: &str) -> Option<&Sound<H>> {
        self.index.get(id).map(|&i| &self.sounds[i])
    }

    /// Sounds in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Sound<H>> {
        self.sounds.iter()
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }
}
