use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixerError {
    #[error("sound \"{0}\" is not available")]
    UnknownSound(String),
    #[error("playback of {id} failed: {reason}")]
    PlaybackFailed { id: &'static str, reason: String },
}
