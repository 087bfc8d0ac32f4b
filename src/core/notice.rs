use super::error::MixerError;
use super::mixer::{Completion, Toggle};
use super::stop::StopReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    /// Suffix of the `notification-*` CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }

    /// Border / glow color of the toast.
    pub fn accent(self) -> &'static str {
        match self {
            NoticeKind::Success => "#00f5d4",
            NoticeKind::Error => "#f15bb5",
            NoticeKind::Warning => "#ffaa44",
            NoticeKind::Info => "#9b5de5",
        }
    }
}

/// A short message for the toast area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn for_error(err: &MixerError) -> Self {
        match err {
            MixerError::UnknownSound(id) => {
                Self::new(NoticeKind::Error, format!("Sound \"{id}\" not available"))
            }
            MixerError::PlaybackFailed { id, .. } => {
                Self::new(NoticeKind::Error, format!("Error while playing {id}"))
            }
        }
    }

    /// Notice for the synchronous half of a toggle; activation requests
    /// report later through [`Notice::for_completion`].
    pub fn for_toggle<R>(toggle: &Toggle<R>) -> Option<Self> {
        match toggle {
            Toggle::Activating { .. } => None,
            Toggle::Deactivated { display_name, .. } | Toggle::Cancelled { display_name, .. } => {
                Some(Self::new(NoticeKind::Info, format!("{display_name} stopped")))
            }
        }
    }

    pub fn for_completion(completion: &Completion) -> Option<Self> {
        match completion {
            Completion::Activated { display_name, .. } => {
                Some(Self::new(NoticeKind::Success, format!("{display_name} activated")))
            }
            Completion::Stale { .. } => None,
        }
    }

    pub fn for_stop(report: &StopReport) -> Self {
        match report.count() {
            0 => Self::new(NoticeKind::Warning, "No sounds to stop"),
            n => Self::new(NoticeKind::Info, format!("{n} sound(s) stopped")),
        }
    }

    pub fn easter_egg() -> Self {
        Self::new(NoticeKind::Success, "🎊 Ultra Cyberpunk Mode activated!")
    }

    pub fn welcome() -> Self {
        Self::new(NoticeKind::Success, "🎵 Welcome to NeuroFocus!")
    }

    pub fn welcome_tip() -> Self {
        Self::new(
            NoticeKind::Info,
            "💡 Tip: press Space or Escape to stop everything",
        )
    }
}

pub const IDLE_TAGLINE: &str = "Immersive Focus • Relaxing Sounds • Cyberpunk Experience";
pub const STATUS_ACTIVE_COLOR: &str = "#00f5d4";
pub const STATUS_IDLE_COLOR: &str = "#b0b0b0";

/// Subtitle text and color derived from the number of playing sounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub color: &'static str,
}

pub fn status_line(active_count: usize) -> StatusLine {
    if active_count > 0 {
        StatusLine {
            text: format!("{active_count} active ambience(s) • Focus in progress"),
            color: STATUS_ACTIVE_COLOR,
        }
    } else {
        StatusLine {
            text: IDLE_TAGLINE.to_string(),
            color: STATUS_IDLE_COLOR,
        }
    }
}
