use super::constants::DEFAULT_VOLUME;
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Identifies one in-flight play request for a sound.
///
/// Only the most recent ticket per sound is honoured; anything older is
/// stale once the sound was cancelled, stopped or re-requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActivationTicket {
    pub id: &'static str,
    generation: u64,
}

/// Which sounds are playing, which are waiting on a play request, and the
/// user's volume. Owned by the mixer; nothing else mutates it.
#[derive(Clone, Debug)]
pub struct PlaybackState {
    active: FnvHashSet<&'static str>,
    pending: FnvHashMap<&'static str, u64>,
    global_volume: f64,
    next_generation: u64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl PlaybackState {
    pub fn new(global_volume: f64) -> Self {
        Self {
            active: FnvHashSet::default(),
            pending: FnvHashMap::default(),
            global_volume: global_volume.clamp(0.0, 1.0),
            next_generation: 0,
        }
    }

    #[inline]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    #[inline]
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn global_volume(&self) -> f64 {
        self.global_volume
    }

    pub(super) fn set_global_volume(&mut self, level: f64) {
        self.global_volume = level;
    }

    /// Starts a new pending request, superseding any older one for `id`.
    pub(super) fn begin_activation(&mut self, id: &'static str) -> ActivationTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.pending.insert(id, generation);
        ActivationTicket { id, generation }
    }

    /// Consumes `ticket` if it is still the current request for its sound.
    pub(super) fn take_pending(&mut self, ticket: ActivationTicket) -> bool {
        match self.pending.get(ticket.id) {
            Some(&g) if g == ticket.generation => {
                self.pending.remove(ticket.id);
                true
            }
            _ => false,
        }
    }

    pub(super) fn cancel_pending(&mut self, id: &str) -> bool {
        self.pending.remove(id).is_some()
    }

    pub(super) fn drain_pending(&mut self) -> SmallVec<[&'static str; 8]> {
        self.pending.drain().map(|(id, _)| id).collect()
    }

    pub(super) fn activate(&mut self, id: &'static str) {
        self.active.insert(id);
    }

    pub(super) fn deactivate(&mut self, id: &str) -> bool {
        self.active.remove(id)
    }

    pub(super) fn drain_active(&mut self) -> SmallVec<[&'static str; 8]> {
        self.active.drain().collect()
    }
}
