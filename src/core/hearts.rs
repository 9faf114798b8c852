use super::constants::*;
use rand::Rng;

/// A floating heart; horizontal placement is a percentage of the layer width.
#[derive(Clone, Copy, Debug)]
pub struct Heart {
    pub left_pct: f32,
    pub opacity: f32,
}

impl Heart {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..HEART_LEFT_MAX_PCT),
            opacity: rng.gen_range(HEART_OPACITY_MIN..=HEART_OPACITY_MAX),
        }
    }
}
