// Host-side tests for the dust field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::constants::*;
use sim::particles::*;

fn field(seed: u64, w: f32, h: f32) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(PARTICLE_COUNT, Viewport::new(w, h), &mut rng)
}

fn assert_inside(field: &ParticleField) {
    let vp = field.viewport();
    for p in field.particles() {
        assert!(
            p.position.x >= 0.0 && p.position.x < vp.width,
            "x out of bounds: {}",
            p.position.x
        );
        assert!(
            p.position.y >= 0.0 && p.position.y < vp.height,
            "y out of bounds: {}",
            p.position.y
        );
    }
}

#[test]
fn new_field_respects_initial_ranges() {
    let f = field(7, 800.0, 600.0);
    assert_eq!(f.len(), PARTICLE_COUNT);
    assert_inside(&f);
    for p in f.particles() {
        assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius <= PARTICLE_RADIUS_MAX);
        assert!(p.alpha >= PARTICLE_ALPHA_MIN && p.alpha <= PARTICLE_ALPHA_MAX);
        assert!(p.velocity.x.abs() <= PARTICLE_SPEED_MAX);
        assert!(p.velocity.y.abs() <= PARTICLE_SPEED_MAX);
        assert!((p.glow_radius() - p.radius * 8.0).abs() < 1e-6);
    }
}

#[test]
fn positions_stay_inside_viewport_over_many_frames() {
    let mut f = field(42, 320.0, 240.0);
    for frame in 0..20_000 {
        f.step();
        if frame % 997 == 0 {
            assert_inside(&f);
        }
    }
    assert_inside(&f);
    assert_eq!(f.len(), PARTICLE_COUNT);
}

#[test]
fn wrap_is_toroidal_not_a_bounce() {
    assert_eq!(wrap_axis(-0.5, 100.0), 99.5);
    assert_eq!(wrap_axis(100.25, 100.0), 0.25);
    assert_eq!(wrap_axis(100.0, 100.0), 0.0);
    assert_eq!(wrap_axis(50.0, 100.0), 50.0);
    // tiny negatives must not round up onto the far edge
    let w = wrap_axis(-1e-9, 100.0);
    assert!(w >= 0.0 && w < 100.0);
    assert_eq!(wrap_axis(f32::NAN, 100.0), 0.0);
}

#[test]
fn step_advances_by_velocity_then_wraps() {
    let mut f = field(1, 100.0, 100.0);
    let before: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
    f.step();
    for (p, b) in f.particles().iter().zip(before) {
        let moved = b + p.velocity;
        let expect = Vec2::new(wrap_axis(moved.x, 100.0), wrap_axis(moved.y, 100.0));
        assert!((p.position - expect).length() < 1e-4);
    }
}

#[test]
fn resize_preserves_particles_and_rewraps_on_next_frame() {
    let mut f = field(9, 1920.0, 1080.0);
    let before: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.radius, p.alpha)).collect();
    f.resize(Viewport::new(200.0, 150.0));
    assert_eq!(f.len(), PARTICLE_COUNT);
    let after: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.radius, p.alpha)).collect();
    assert_eq!(before, after, "resize must not reallocate particles");
    f.step();
    assert_inside(&f);
}

#[test]
fn degenerate_viewport_does_not_produce_nan() {
    let mut f = field(3, 0.0, 0.0);
    for _ in 0..100 {
        f.step();
    }
    for p in f.particles() {
        assert!(p.position.is_finite());
        assert!(p.position.x >= 0.0 && p.position.x < 1.0);
    }
}

#[test]
fn different_seeds_give_different_distributions() {
    let a = field(1, 800.0, 600.0);
    let b = field(2, 800.0, 600.0);
    let same = a
        .particles()
        .iter()
        .zip(b.particles())
        .filter(|(p, q)| p.position == q.position)
        .count();
    assert!(same < PARTICLE_COUNT / 10);
}
