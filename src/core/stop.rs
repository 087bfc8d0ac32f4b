use super::mixer::Mixer;
use super::registry::MediaHandle;
use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopReport {
    /// Sounds that were playing.
    pub stopped: SmallVec<[&'static str; 8]>,
    /// Sounds whose play request was still in flight.
    pub cancelled: SmallVec<[&'static str; 8]>,
}

impl StopReport {
    #[inline]
    pub fn count(&self) -> usize {
        self.stopped.len()
    }
}

impl<H: MediaHandle> Mixer<H> {
    /// Silences every playing sound and abandons every in-flight request.
    /// Calling it again immediately reports nothing stopped.
    pub fn stop_all(&mut self) -> StopReport {
        let stopped = self.state.drain_active();
        let cancelled = self.state.drain_pending();
        for id in stopped.iter().chain(cancelled.iter()) {
            if let Some(sound) = self.registry.lookup(id) {
                sound.handle.pause();
                sound.handle.rewind();
            }
        }
        log::info!(
            "[mixer] stop all: {} stopped, {} cancelled",
            stopped.len(),
            cancelled.len()
        );
        StopReport { stopped, cancelled }
    }
}
