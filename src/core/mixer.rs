use super::error::MixerError;
use super::playback::{ActivationTicket, PlaybackState};
use super::registry::{MediaHandle, SoundRegistry};

/// Owns the sound registry and the playback state; every user action on
/// the page goes through one of its operations.
///
/// Toggling lives here. Bulk stop and volume handling are in `stop.rs` and
/// `volume.rs`.
pub struct Mixer<H> {
    pub(super) registry: SoundRegistry<H>,
    pub(super) state: PlaybackState,
    pub(super) page_hidden: bool,
}

/// What a `toggle` did synchronously.
#[derive(Debug)]
pub enum Toggle<R> {
    /// A play request was issued; resolve `request` and report back with
    /// `complete_activation(ticket, ..)`.
    Activating { ticket: ActivationTicket, request: R },
    /// The sound was playing and is now paused at its start.
    Deactivated { id: &'static str, display_name: &'static str },
    /// A play request was still in flight; it has been abandoned.
    Cancelled { id: &'static str, display_name: &'static str },
}

/// Result of applying a play request's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Activated { id: &'static str, display_name: &'static str },
    /// The request was cancelled or superseded before it resolved.
    Stale { id: &'static str },
}

impl<H: MediaHandle> Mixer<H> {
    pub fn new(registry: SoundRegistry<H>, global_volume: f64) -> Self {
        let mixer = Self {
            registry,
            state: PlaybackState::new(global_volume),
            page_hidden: false,
        };
        let level = mixer.state.global_volume();
        for sound in mixer.registry.iter() {
            sound.handle.set_volume(level);
        }
        mixer
    }

    #[inline]
    pub fn registry(&self) -> &SoundRegistry<H> {
        &self.registry
    }

    #[inline]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn toggle(&mut self, id: &str) -> Result<Toggle<H::Request>, MixerError> {
        let sound = self
            .registry
            .lookup(id)
            .ok_or_else(|| MixerError::UnknownSound(id.to_string()))?;
        let (id, display_name) = (sound.id, sound.display_name);

        if self.state.deactivate(id) {
            sound.handle.pause();
            sound.handle.rewind();
            log::info!("[mixer] {} stopped", id);
            return Ok(Toggle::Deactivated { id, display_name });
        }

        if self.state.cancel_pending(id) {
            sound.handle.pause();
            sound.handle.rewind();
            log::info!("[mixer] {} cancelled while starting", id);
            return Ok(Toggle::Cancelled { id, display_name });
        }

        sound.handle.set_volume(self.effective_volume());
        let request = sound.handle.play();
        let ticket = self.state.begin_activation(id);
        Ok(Toggle::Activating { ticket, request })
    }

    /// Applies the outcome of the play request identified by `ticket`.
    ///
    /// Outcomes for tickets that are no longer current never change state;
    /// a stale success only gets its handle silenced again.
    pub fn complete_activation(
        &mut self,
        ticket: ActivationTicket,
        outcome: Result<(), String>,
    ) -> Result<Completion, MixerError> {
        let id = ticket.id;
        let Some(sound) = self.registry.lookup(id) else {
            return Ok(Completion::Stale { id });
        };

        if !self.state.take_pending(ticket) {
            let wanted = self.state.is_active(id) || self.state.is_pending(id);
            if !wanted && !sound.handle.is_paused() {
                sound.handle.pause();
                sound.handle.rewind();
            }
            log::debug!("[mixer] ignoring stale completion for {}", id);
            return Ok(Completion::Stale { id });
        }

        match outcome {
            Ok(()) => {
                sound.handle.set_volume(self.effective_volume());
                self.state.activate(id);
                log::info!("[mixer] {} playing", id);
                Ok(Completion::Activated {
                    id,
                    display_name: sound.display_name,
                })
            }
            Err(reason) => {
                if !sound.handle.is_paused() {
                    sound.handle.pause();
                }
                sound.handle.rewind();
                log::error!("[mixer] playback error for {}: {}", id, reason);
                Err(MixerError::PlaybackFailed { id, reason })
            }
        }
    }
}
