use super::constants::{KONAMI_CODE, VOLUME_PERCENT_MAX, VOLUME_STEP_PERCENT};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    StopAll,
    VolumeUp,
    VolumeDown,
}

impl Shortcut {
    /// Whether the browser's default action (scrolling) should be suppressed.
    pub fn prevents_default(self, code: &str) -> bool {
        match self {
            Shortcut::StopAll => code == "Space",
            Shortcut::VolumeUp | Shortcut::VolumeDown => true,
        }
    }
}

/// Maps a `KeyboardEvent.code` to a page shortcut. Space is left alone while
/// typing in an `<input>`.
#[inline]
pub fn shortcut_for(code: &str, target_tag: Option<&str>) -> Option<Shortcut> {
    match code {
        "Space" if !matches!(target_tag, Some(t) if t.eq_ignore_ascii_case("input")) => {
            Some(Shortcut::StopAll)
        }
        "Escape" => Some(Shortcut::StopAll),
        "ArrowUp" => Some(Shortcut::VolumeUp),
        "ArrowDown" => Some(Shortcut::VolumeDown),
        _ => None,
    }
}

/// Next slider value after a volume shortcut, kept within 0..=100.
#[inline]
pub fn stepped_volume_percent(current: u32, shortcut: Shortcut) -> u32 {
    let current = current.min(VOLUME_PERCENT_MAX);
    match shortcut {
        Shortcut::VolumeUp => (current + VOLUME_STEP_PERCENT).min(VOLUME_PERCENT_MAX),
        Shortcut::VolumeDown => current.saturating_sub(VOLUME_STEP_PERCENT),
        Shortcut::StopAll => current,
    }
}

/// Parses a slider's string value; garbage reads as silence.
pub fn parse_volume_percent(raw: &str) -> u32 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, VOLUME_PERCENT_MAX as f64) as u32)
        .unwrap_or(0)
}

/// Sliding window over the last key codes, matching the Konami sequence.
#[derive(Clone, Debug, Default)]
pub struct KonamiTracker {
    recent: VecDeque<String>,
}

impl KonamiTracker {
    /// Records `code`; returns true when it completes the sequence, after
    /// which the window starts over.
    pub fn push(&mut self, code: &str) -> bool {
        self.recent.push_back(code.to_string());
        if self.recent.len() > KONAMI_CODE.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.len() == KONAMI_CODE.len()
            && self.recent.iter().zip(KONAMI_CODE.iter()).all(|(a, b)| a == b);
        if matched {
            self.recent.clear();
        }
        matched
    }
}
