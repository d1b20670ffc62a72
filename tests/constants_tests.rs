// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(SPHERE_WAKE_MS > 0.0 && SPHERE_SLEEP_MS > 0.0);
    assert!(SPHERE_INACTIVITY_MS > SPHERE_IDLE_JUMP_INTERVAL_MS);
    assert!(SPHERE_IDLE_JUMP_MS < SPHERE_IDLE_JUMP_INTERVAL_MS);
    assert!(MENU_CLOSE_DELAY_MS < MENU_RESTORE_DELAY_MS);
    assert!(COIN_SETTLE_MS < COIN_FLIP_MS);
    assert!(UPTIME_REFRESH_MS > 0);
    assert!(LOADING_REDIRECT_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_decay_terminates() {
    assert!(SPIN_DECAY_FACTOR > 0.0 && SPIN_DECAY_FACTOR < 1.0);
    assert!(SPIN_DECAY_MIN_SPEED < SPIN_DECAY_START_SPEED);
    assert!(SPIN_BOUNCE_SPLIT > 0.0 && SPIN_BOUNCE_SPLIT < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    for t in [REVEAL_THRESHOLD, REVEAL_FADE_THRESHOLD, REVEAL_GAUGE_THRESHOLD] {
        assert!(t > 0.0 && t <= 1.0);
    }
    assert!(REVEAL_GAUGE_DELAY_MS >= 0.0);
    assert!(ROTATION_SMOOTHING_PER_FRAME > 0.0 && ROTATION_SMOOTHING_PER_FRAME <= 1.0);
}

#[test]
fn selectors_are_not_empty() {
    assert!(!REVEAL_SELECTORS.is_empty());
    assert!(REVEAL_SELECTORS.iter().all(|s| !s.trim().is_empty()));
    assert!(MENU_OPEN_SELECTORS.iter().all(|s| s.starts_with('.')));
    assert!(CURSOR_INTERACTIVE_SELECTOR.contains('a'));
}
