pub mod assets;
pub mod clock;
pub mod config;
pub mod constants;
pub mod content;
pub mod draw;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod listeners;
pub mod motion;
pub mod present;
pub mod scene;

#[cfg(feature = "gpu")]
pub mod gpu;

pub use assets::*;
pub use clock::*;
pub use config::*;
pub use draw::*;
pub use error::*;
pub use interaction::*;
pub use listeners::*;
pub use scene::*;

// WGSL for the scene renderer, bundled at compile time
pub static SCENE_WGSL: &str = include_str!("../../../shaders/scene.wgsl");
