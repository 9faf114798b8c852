pub mod constants;
pub mod ephemeral;
pub mod hearts;
pub mod lighting;
pub mod particles;
pub mod playback;
pub mod scene;
pub mod sparks;

pub use constants::*;
pub use ephemeral::*;
pub use hearts::*;
pub use lighting::*;
pub use particles::*;
pub use playback::*;
pub use scene::*;
pub use sparks::*;
