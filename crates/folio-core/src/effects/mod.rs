//! Procedural background effects.
//!
//! Every effect owns its own state and only depends on the elapsed time the
//! scene driver hands it; effects never talk to each other.

use crate::draw::DrawList;
use glam::{EulerRot, Mat4, Quat, Vec3};

mod floating;
mod lattice;
mod morph;
mod orbiters;
mod particles;
mod ring;
mod sparkles;

pub use floating::FloatingShapes;
pub use lattice::{lattice_layout, NodeLattice};
pub use morph::{shape_at, shape_index_at, MorphingSolid};
pub use orbiters::{orbiter_layout, Orbiters};
pub use particles::{wave_offset, ParticleField};
pub use ring::{ring_opacity, HoloRing};
pub use sparkles::Sparkles;

pub trait Effect {
    fn name(&self) -> &'static str;
    /// Update internal state for the given elapsed scene time in seconds.
    fn advance(&mut self, elapsed: f32);
    fn draw(&self, out: &mut DrawList);
}

/// Gentle bob-and-sway applied around an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatMotion {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Euler rotation (x, y, z) in radians at time `t`.
    pub fn rotation(&self, t: f32) -> Vec3 {
        let phase = t / 4.0 * self.speed;
        Vec3::new(
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        )
    }

    pub fn lift(&self, t: f32) -> f32 {
        (t / 4.0 * self.speed).sin() / 10.0 * self.float_intensity
    }

    /// Transform for a child placed at `position` inside this float.
    pub fn matrix(&self, t: f32) -> Mat4 {
        let r = self.rotation(t);
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            Vec3::new(0.0, self.lift(t), 0.0),
        )
    }
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// XYZ euler rotation matrix.
#[inline]
pub(crate) fn euler_xyz(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, x, y, z))
}
