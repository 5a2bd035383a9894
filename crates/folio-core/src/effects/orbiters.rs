use super::{Effect, FloatMotion};
use crate::constants::{
    ORBITER_COUNT, ORBITER_DEPTH, ORBITER_RADIUS_X, ORBITER_RADIUS_Y, ORBITER_SIZE,
};
use crate::draw::{hsl_to_rgb, rgba, DrawList};
use glam::Vec3;
use std::f32::consts::TAU;

/// Ellipse of `count` anchor points around the projects centre-piece.
pub fn orbiter_layout(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let a = i as f32 / count as f32 * TAU;
            Vec3::new(
                a.cos() * ORBITER_RADIUS_X,
                a.sin() * ORBITER_RADIUS_Y,
                (i as f32).sin() * ORBITER_DEPTH,
            )
        })
        .collect()
}

/// Ring of coloured glowing spheres, each gently floating on its own.
pub struct Orbiters {
    anchors: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    floats: Vec<FloatMotion>,
    time: f32,
}

impl Orbiters {
    pub fn new() -> Self {
        let anchors = orbiter_layout(ORBITER_COUNT);
        let colors = (0..ORBITER_COUNT)
            .map(|i| hsl_to_rgb((i * 45 % 360) as f32, 0.7, 0.6))
            .collect();
        let floats = (0..ORBITER_COUNT)
            .map(|i| FloatMotion::new(0.3 + i as f32 * 0.1, 0.4, 1.0))
            .collect();
        Self {
            anchors,
            colors,
            floats,
            time: 0.0,
        }
    }
}

impl Default for Orbiters {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Orbiters {
    fn name(&self) -> &'static str {
        "orbiters"
    }

    fn advance(&mut self, elapsed: f32) {
        self.time = elapsed;
    }

    fn draw(&self, out: &mut DrawList) {
        for ((anchor, color), float) in self.anchors.iter().zip(&self.colors).zip(&self.floats) {
            let pos = *anchor + Vec3::new(0.0, float.lift(self.time), 0.0);
            out.push_sprite(pos, ORBITER_SIZE, rgba(*color, 1.0));
        }
    }
}
