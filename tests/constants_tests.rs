// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

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
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_MIN < PARTICLE_RADIUS_MAX);
    assert!(PARTICLE_ALPHA_MIN > 0.0 && PARTICLE_ALPHA_MAX <= 1.0);
    assert!(PARTICLE_ALPHA_MIN < PARTICLE_ALPHA_MAX);
    assert!(PARTICLE_SPEED_MAX > 0.0);
    assert!(PARTICLE_GLOW_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ephemeral_timing_relationships() {
    // hearts outlive their spawn interval so several are visible at once
    assert!(HEART_LIFETIME_MS > HEART_INTERVAL_MS);
    assert!(SPARK_LIFETIME_MS > 0.0 && SPARK_LIFETIME_MS < HEART_INTERVAL_MS);
    assert!(TOUCH_SPARKS_PER_POINT > POINTER_SPARKS_PER_EVENT);
    assert!(TOUCH_SPARK_JITTER_PX > POINTER_SPARK_JITTER_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_are_valid_css_values() {
    for (lo, hi) in [
        (HEART_OPACITY_MIN, HEART_OPACITY_MAX),
        (SPARK_OPACITY_MIN, SPARK_OPACITY_MAX),
    ] {
        assert!(lo >= 0.0 && hi <= 1.0 && lo < hi);
    }
    assert!(HEART_LEFT_MAX_PCT > 0.0 && HEART_LEFT_MAX_PCT <= 100.0);
}

#[test]
fn dust_colour_formatting() {
    assert_eq!(dust_rgba(0.5), "rgba(120,170,255,0.500)");
    assert_eq!(dust_rgba(2.0), "rgba(120,170,255,1.000)");
    assert_eq!(DUST_TRANSPARENT, "rgba(0,0,0,0)");
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        DUST_CANVAS_ID,
        HEARTS_LAYER_ID,
        SPARKS_LAYER_ID,
        HERO_ID,
        PLAY_BUTTON_ID,
        REPLAY_BUTTON_ID,
        AUDIO_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(LIGHT_SHIFT_PROPERTY.starts_with("--"));
}
