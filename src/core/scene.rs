use super::constants::*;
use super::ephemeral::{EntityId, EphemeralPool};
use super::hearts::Heart;
use super::particles::{ParticleField, Viewport};
use super::playback::ReplayKey;
use super::sparks::{spark_burst, Spark};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Tunables for one animation session.
///
/// Defaults come from `constants`; tests shrink or stretch them freely.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub heart_lifetime_ms: f64,
    pub spark_lifetime_ms: f64,
    pub pointer_sparks: usize,
    pub pointer_jitter_px: f32,
    pub touch_sparks: usize,
    pub touch_jitter_px: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            heart_lifetime_ms: HEART_LIFETIME_MS,
            spark_lifetime_ms: SPARK_LIFETIME_MS,
            pointer_sparks: POINTER_SPARKS_PER_EVENT,
            pointer_jitter_px: POINTER_SPARK_JITTER_PX,
            touch_sparks: TOUCH_SPARKS_PER_POINT,
            touch_jitter_px: TOUCH_SPARK_JITTER_PX,
        }
    }
}

/// Ids dropped from the ephemeral pools during one `step`.
#[derive(Debug, Default)]
pub struct StepReport {
    pub expired_hearts: SmallVec<[EntityId; 8]>,
    pub expired_sparks: SmallVec<[EntityId; 8]>,
}

/// All animated state belonging to one mount of the page.
///
/// A scene is built when a session starts and dropped when it ends; replaying
/// builds a new one from a new seed, so nothing carries over.
pub struct Scene {
    pub config: SceneConfig,
    pub replay_key: ReplayKey,
    field: ParticleField,
    hearts: EphemeralPool<Heart>,
    sparks: EphemeralPool<Spark>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Viewport, replay_key: ReplayKey, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(config.particle_count, viewport, &mut rng);
        Self {
            hearts: EphemeralPool::new(config.heart_lifetime_ms),
            sparks: EphemeralPool::new(config.spark_lifetime_ms),
            config,
            replay_key,
            field,
            rng,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.field.resize(viewport);
    }

    /// Advance one frame: move the dust and expire overdue hearts and sparks.
    pub fn step(&mut self, now_ms: f64) -> StepReport {
        self.field.step();
        StepReport {
            expired_hearts: self.hearts.prune(now_ms),
            expired_sparks: self.sparks.prune(now_ms),
        }
    }

    pub fn spawn_heart(&mut self, now_ms: f64) -> EntityId {
        let heart = Heart::random(&mut self.rng);
        self.hearts.spawn(now_ms, heart)
    }

    pub fn spawn_pointer_sparks(&mut self, now_ms: f64, origin: Vec2) -> SmallVec<[EntityId; 8]> {
        let burst = spark_burst(
            &mut self.rng,
            origin,
            self.config.pointer_sparks,
            self.config.pointer_jitter_px,
        );
        self.sparks.spawn_all(now_ms, burst)
    }

    pub fn spawn_touch_sparks(&mut self, now_ms: f64, points: &[Vec2]) -> SmallVec<[EntityId; 8]> {
        let mut ids = SmallVec::new();
        for &p in points {
            let burst = spark_burst(
                &mut self.rng,
                p,
                self.config.touch_sparks,
                self.config.touch_jitter_px,
            );
            ids.extend(self.sparks.spawn_all(now_ms, burst));
        }
        ids
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn hearts(&self) -> &EphemeralPool<Heart> {
        &self.hearts
    }

    #[inline]
    pub fn sparks(&self) -> &EphemeralPool<Spark> {
        &self.sparks
    }
}
