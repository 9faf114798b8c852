use super::constants::*;
use glam::Vec2;
use rand::Rng;

/// Drawing-surface dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent used for wrapping; degenerate axes collapse to a single pixel.
    #[inline]
    pub fn wrap_extent(&self) -> Vec2 {
        let sanitize = |v: f32| if v.is_finite() && v > 1.0 { v } else { 1.0 };
        Vec2::new(sanitize(self.width), sanitize(self.height))
    }
}

/// A single dust mote drifting across the background layer.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let extent = viewport.wrap_extent();
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..extent.x),
                rng.gen_range(0.0..extent.y),
            ),
            velocity: Vec2::new(
                rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX),
                rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX),
            ),
            radius: rng.gen_range(PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX),
            alpha: rng.gen_range(PARTICLE_ALPHA_MIN..=PARTICLE_ALPHA_MAX),
        }
    }

    /// Outer radius of the rendered glow.
    #[inline]
    pub fn glow_radius(&self) -> f32 {
        self.radius * PARTICLE_GLOW_SCALE
    }
}

/// Fixed-size field of particles living on a torus the size of the viewport.
///
/// The particle set is allocated once at construction; `resize` only changes
/// the wrap bounds, and `step` advances every particle by its velocity and
/// folds it back into `[0, width) x [0, height)`.
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, viewport))
            .collect();
        Self {
            particles,
            viewport,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn step(&mut self) {
        let extent = self.viewport.wrap_extent();
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position.x = wrap_axis(p.position.x, extent.x);
            p.position.y = wrap_axis(p.position.y, extent.y);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Toroidal wrap of a coordinate into `[0, extent)`.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}
