// Page timing and layout constants for the web front-end.
//
// Durations are in milliseconds unless the name says otherwise; they match
// the CSS transitions shipped with the page.

// Toast lifecycle
pub const TOAST_ENTER_DELAY_MS: i32 = 10;
pub const TOAST_VISIBLE_MS: i32 = 3000;
pub const TOAST_EXIT_MS: i32 = 300;

// Ambient particle field
pub const PARTICLE_COUNT: u32 = 25;
pub const PARTICLE_RESPAWN_INTERVAL_MS: i32 = 2000;
pub const PARTICLE_LIFETIME_MS: i32 = 25_000;

// Easter egg
pub const RAINBOW_DURATION_MS: i32 = 2000;
pub const SPECIAL_PARTICLE_COUNT: u32 = 10;
pub const SPECIAL_PARTICLE_STAGGER_MS: i32 = 200;
pub const SPECIAL_PARTICLE_LIFETIME_MS: i32 = 3000;

// Button feedback
pub const STOP_PRESS_MS: i32 = 150;

// Welcome toasts, relative to `load` and to each other
pub const WELCOME_DELAY_MS: i32 = 1000;
pub const WELCOME_TIP_DELAY_MS: i32 = 3500;

// Slider track colors
pub const SLIDER_FILL: &str = "#9b5de5";
pub const SLIDER_TRACK: &str = "rgba(155, 93, 229, 0.3)";

// DOM contract
pub const PARTICLES_ID: &str = "particles";
pub const STOP_ALL_ID: &str = "stopAllBtn";
pub const VOLUME_SLIDER_ID: &str = "volumeSlider";
pub const VOLUME_VALUE_ID: &str = "volumeValue";
pub const SOUND_BUTTON_SELECTOR: &str = ".sound-btn";
pub const SUBTITLE_SELECTOR: &str = ".subtitle";
pub const TOAST_SELECTOR: &str = ".notification";

// Button transforms
pub const BUTTON_ACTIVE_TRANSFORM: &str = "translateY(-2px) scale(1.05)";
pub const BUTTON_HOVER_TRANSFORM: &str = "translateY(-3px) scale(1.02)";
pub const BUTTON_IDLE_TRANSFORM: &str = "translateY(0) scale(1)";
