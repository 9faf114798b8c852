// Simulation tuning shared by the scene and its tests.

// Dust field
pub const PARTICLE_COUNT: usize = 120;
pub const PARTICLE_RADIUS_MIN: f32 = 0.2;
pub const PARTICLE_RADIUS_MAX: f32 = 1.4;
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_MAX: f32 = 0.7;
pub const PARTICLE_SPEED_MAX: f32 = 0.1; // per axis, per frame (px)
pub const PARTICLE_GLOW_SCALE: f32 = 8.0; // glow radius as a multiple of particle radius

// Hearts
pub const HEART_INTERVAL_MS: f64 = 2_500.0;
pub const HEART_LIFETIME_MS: f64 = 7_000.0;
pub const HEART_LEFT_MAX_PCT: f32 = 90.0;
pub const HEART_OPACITY_MIN: f32 = 0.6;
pub const HEART_OPACITY_MAX: f32 = 1.0;

// Sparks
pub const SPARK_LIFETIME_MS: f64 = 600.0;
pub const POINTER_SPARKS_PER_EVENT: usize = 2;
pub const POINTER_SPARK_JITTER_PX: f32 = 5.0;
pub const TOUCH_SPARKS_PER_POINT: usize = 4;
pub const TOUCH_SPARK_JITTER_PX: f32 = 6.0;
pub const SPARK_OPACITY_MIN: f32 = 0.7;
pub const SPARK_OPACITY_MAX: f32 = 1.0;
