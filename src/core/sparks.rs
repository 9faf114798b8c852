use super::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// A cursor/touch spark at a viewport position (CSS px).
#[derive(Clone, Copy, Debug)]
pub struct Spark {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
}

/// Burst of `count` sparks scattered within `±jitter` px of `origin`.
pub fn spark_burst<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Vec2,
    count: usize,
    jitter: f32,
) -> SmallVec<[Spark; 4]> {
    (0..count)
        .map(|_| {
            let offset = if jitter > 0.0 {
                Vec2::new(rng.gen_range(-jitter..=jitter), rng.gen_range(-jitter..=jitter))
            } else {
                Vec2::ZERO
            };
            Spark {
                position: origin + offset,
                rotation_deg: rng.gen_range(0.0..360.0),
                opacity: rng.gen_range(SPARK_OPACITY_MIN..=SPARK_OPACITY_MAX),
            }
        })
        .collect()
}
