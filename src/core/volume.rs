use super::constants::{HIDDEN_ATTENUATION, VOLUME_PERCENT_MAX};
use super::mixer::Mixer;
use super::registry::MediaHandle;

impl<H: MediaHandle> Mixer<H> {
    /// Playing or starting: the handle is (about to be) audible.
    #[inline]
    fn is_audible(&self, id: &str) -> bool {
        self.state.is_active(id) || self.state.is_pending(id)
    }

    /// Level a playing handle should have right now.
    pub fn effective_volume(&self) -> f64 {
        let level = self.state.global_volume();
        if self.page_hidden {
            level * HIDDEN_ATTENUATION
        } else {
            level
        }
    }

    /// Stores `level` (clamped to [0, 1]) and pushes it to every handle,
    /// including idle ones so a later activation starts at the right level.
    pub fn set_volume(&mut self, level: f64) {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.state.set_global_volume(level);
        let playing = self.effective_volume();
        for sound in self.registry.iter() {
            if self.is_audible(sound.id) {
                sound.handle.set_volume(playing);
            } else {
                sound.handle.set_volume(level);
            }
        }
    }

    /// Slider value (0..=100) for the current global volume.
    pub fn volume_percent(&self) -> u32 {
        let pct = (self.state.global_volume() * VOLUME_PERCENT_MAX as f64).round();
        (pct as u32).min(VOLUME_PERCENT_MAX)
    }

    /// Ducks playing and starting sounds while the page is in the background and restores
    /// them when it comes back. The stored global volume is left alone.
    pub fn set_page_hidden(&mut self, hidden: bool) {
        self.page_hidden = hidden;
        let level = self.effective_volume();
        for sound in self.registry.iter().filter(|s| self.is_audible(s.id)) {
            sound.handle.set_volume(level);
        }
    }
}
