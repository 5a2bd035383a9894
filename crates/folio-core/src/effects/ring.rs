use super::Effect;
use crate::constants::{
    CYAN, RING_BASE_OPACITY, RING_HEIGHT, RING_OPACITY_SWING, RING_PULSE_FREQ, RING_RADIUS,
    RING_SEGMENTS, RING_SPIN_Y,
};
use crate::draw::{rgba, DrawList};
use crate::geometry::{open_cylinder, Wireframe};
use glam::Mat4;

#[inline]
pub fn ring_opacity(t: f32) -> f32 {
    RING_BASE_OPACITY + (t * RING_PULSE_FREQ).sin() * RING_OPACITY_SWING
}

/// Thin translucent wireframe band whose opacity breathes.
pub struct HoloRing {
    shell: Wireframe,
    spin: f32,
    opacity: f32,
}

impl HoloRing {
    pub fn new() -> Self {
        Self {
            shell: open_cylinder(RING_RADIUS, RING_HEIGHT, RING_SEGMENTS),
            spin: 0.0,
            opacity: RING_BASE_OPACITY,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }
}

impl Default for HoloRing {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for HoloRing {
    fn name(&self) -> &'static str {
        "holo-ring"
    }

    fn advance(&mut self, elapsed: f32) {
        self.spin = elapsed * RING_SPIN_Y;
        self.opacity = ring_opacity(elapsed);
    }

    fn draw(&self, out: &mut DrawList) {
        out.push_wireframe(
            &Mat4::from_rotation_y(self.spin),
            &self.shell.vertices,
            &self.shell.edges,
            rgba(CYAN, self.opacity),
        );
    }
}
