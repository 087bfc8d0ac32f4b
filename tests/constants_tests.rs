// Host-side tests for constants and their relationships.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn playback_constants_are_within_bounds() {
    assert!((0.0..=1.0).contains(&DEFAULT_VOLUME));
    assert!(HIDDEN_ATTENUATION > 0.0 && HIDDEN_ATTENUATION < 1.0);
    assert!(VOLUME_STEP_PERCENT > 0 && VOLUME_STEP_PERCENT < VOLUME_PERCENT_MAX);
    assert_eq!(VOLUME_PERCENT_MAX % VOLUME_STEP_PERCENT, 0);
    assert!(MEDIA_PATH_PATTERN.contains("{}"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn toast_timings_are_ordered() {
    assert!(TOAST_ENTER_DELAY_MS > 0);
    assert!(TOAST_VISIBLE_MS > TOAST_ENTER_DELAY_MS + TOAST_EXIT_MS);
    // the tip must not replace the welcome toast before it finished
    assert!(WELCOME_TIP_DELAY_MS >= TOAST_VISIBLE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_field_is_replenished_before_lifetime_ends() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_RESPAWN_INTERVAL_MS < PARTICLE_LIFETIME_MS);
    assert!(SPECIAL_PARTICLE_COUNT > 0);
    assert!(
        SPECIAL_PARTICLE_STAGGER_MS * SPECIAL_PARTICLE_COUNT as i32 <= RAINBOW_DURATION_MS * 2
    );
}

#[test]
fn konami_code_has_expected_shape() {
    assert_eq!(KONAMI_CODE.len(), 10);
    assert_eq!(KONAMI_CODE[0], "ArrowUp");
    assert_eq!(KONAMI_CODE[9], "KeyA");
}
