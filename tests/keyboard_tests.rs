// Host-side tests for pure keyboard functions.

mod common;

use common::core::constants::KONAMI_CODE;
use common::core::keys::*;

#[test]
fn stop_all_keys() {
    assert_eq!(shortcut_for("Space", None), Some(Shortcut::StopAll));
    assert_eq!(shortcut_for("Space", Some("BUTTON")), Some(Shortcut::StopAll));
    assert_eq!(shortcut_for("Escape", None), Some(Shortcut::StopAll));
    // Escape still works while typing
    assert_eq!(shortcut_for("Escape", Some("INPUT")), Some(Shortcut::StopAll));
}

#[test]
fn space_is_ignored_inside_inputs() {
    assert_eq!(shortcut_for("Space", Some("INPUT")), None);
    assert_eq!(shortcut_for("Space", Some("input")), None);
}

#[test]
fn arrow_keys_map_to_volume() {
    assert_eq!(shortcut_for("ArrowUp", None), Some(Shortcut::VolumeUp));
    assert_eq!(shortcut_for("ArrowDown", Some("INPUT")), Some(Shortcut::VolumeDown));
    assert_eq!(shortcut_for("ArrowLeft", None), None);
    assert_eq!(shortcut_for("KeyA", None), None);
    assert_eq!(shortcut_for("", None), None);
}

#[test]
fn default_action_suppression() {
    assert!(Shortcut::StopAll.prevents_default("Space"));
    assert!(!Shortcut::StopAll.prevents_default("Escape"));
    assert!(Shortcut::VolumeUp.prevents_default("ArrowUp"));
    assert!(Shortcut::VolumeDown.prevents_default("ArrowDown"));
}

#[test]
fn volume_steps_are_clamped() {
    assert_eq!(stepped_volume_percent(50, Shortcut::VolumeUp), 55);
    assert_eq!(stepped_volume_percent(50, Shortcut::VolumeDown), 45);
    assert_eq!(stepped_volume_percent(98, Shortcut::VolumeUp), 100);
    assert_eq!(stepped_volume_percent(100, Shortcut::VolumeUp), 100);
    assert_eq!(stepped_volume_percent(3, Shortcut::VolumeDown), 0);
    assert_eq!(stepped_volume_percent(0, Shortcut::VolumeDown), 0);
    assert_eq!(stepped_volume_percent(40, Shortcut::StopAll), 40);
}

#[test]
fn slider_values_parse_leniently() {
    assert_eq!(parse_volume_percent("50"), 50);
    assert_eq!(parse_volume_percent(" 75 "), 75);
    assert_eq!(parse_volume_percent("33.6"), 34);
    assert_eq!(parse_volume_percent("250"), 100);
    assert_eq!(parse_volume_percent("-4"), 0);
    assert_eq!(parse_volume_percent("loud"), 0);
    assert_eq!(parse_volume_percent(""), 0);
}

#[test]
fn konami_fires_on_last_key_only() {
    let mut tracker = KonamiTracker::default();
    for (i, code) in KONAMI_CODE.iter().enumerate() {
        let fired = tracker.push(code);
        assert_eq!(fired, i == KONAMI_CODE.len() - 1, "at key {i}");
    }
}

#[test]
fn konami_tolerates_leading_noise_and_resets() {
    let mut tracker = KonamiTracker::default();
    for code in ["KeyX", "Space", "ArrowUp"] {
        assert!(!tracker.push(code));
    }
    let fired: Vec<bool> = KONAMI_CODE.iter().map(|c| tracker.push(c)).collect();
    assert_eq!(fired.iter().filter(|f| **f).count(), 1);
    assert!(fired[9]);
    // window was cleared, a lone final key does nothing
    assert!(!tracker.push("KeyA"));
}

#[test]
fn konami_broken_sequence_does_not_fire() {
    let mut tracker = KonamiTracker::default();
    let mut broken = KONAMI_CODE;
    broken[4] = "ArrowRight";
    assert!(!broken.iter().any(|c| tracker.push(c)));
}
