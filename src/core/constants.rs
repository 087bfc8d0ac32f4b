// Playback tuning shared by the mixer and the keyboard shortcuts.
//
// Values mirror what the page exposes to the user (slider percent, arrow
// key step) so the web layer can stay a thin adapter.

// Global volume before the slider reports its own value
pub const DEFAULT_VOLUME: f64 = 0.5;

// Multiplier applied to playing sounds while the tab is hidden
pub const HIDDEN_ATTENUATION: f64 = 0.3;

// Slider range and arrow-key step (percent)
pub const VOLUME_PERCENT_MAX: u32 = 100;
pub const VOLUME_STEP_PERCENT: u32 = 5;

// Conventional media location; `{}` is replaced by the sound id
pub const MEDIA_PATH_PATTERN: &str = "sounds/{}.mp3";

// KeyboardEvent.code values of the easter egg sequence
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];
