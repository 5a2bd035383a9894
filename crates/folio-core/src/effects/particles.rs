use super::{euler_xyz, Effect};
use crate::constants::{
    PARTICLE_ALPHA, PARTICLE_SIZE, PARTICLE_SPIN_X, PARTICLE_SPIN_Y, PARTICLE_SPREAD,
    PARTICLE_WAVE_AMPLITUDE,
};
use crate::draw::DrawList;
use glam::{Mat4, Vec3};
use rand::prelude::*;

/// Vertical nudge applied to a sample at `x` on a tick at elapsed time `t`.
#[inline]
pub fn wave_offset(t: f32, x: f32) -> f32 {
    (t + x).sin() * PARTICLE_WAVE_AMPLITUDE
}

/// Large field of additive points drifting on a slow sine wave.
///
/// The vertical nudge accumulates tick over tick, so the field's shape
/// depends on the frame rate; the amplitude keeps it visually contained.
pub struct ParticleField {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    rotation: Vec3,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = PARTICLE_SPREAD * 0.5;
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ));
            colors.push([
                rng.gen::<f32>() * 0.5 + 0.5,
                rng.gen::<f32>() * 0.3 + 0.7,
                1.0,
            ]);
        }
        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Whole-field rotation (radians) after the last advance.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    fn model(&self) -> Mat4 {
        euler_xyz(self.rotation.x, self.rotation.y, 0.0)
    }
}

impl Effect for ParticleField {
    fn name(&self) -> &'static str {
        "particle-field"
    }

    fn advance(&mut self, elapsed: f32) {
        self.rotation = Vec3::new(elapsed * PARTICLE_SPIN_X, elapsed * PARTICLE_SPIN_Y, 0.0);
        for p in self.positions.iter_mut() {
            p.y += wave_offset(elapsed, p.x);
        }
    }

    fn draw(&self, out: &mut DrawList) {
        let model = self.model();
        out.sprites.reserve(self.positions.len());
        for (p, c) in self.positions.iter().zip(&self.colors) {
            out.push_sprite(
                model.transform_point3(*p),
                PARTICLE_SIZE,
                [c[0], c[1], c[2], PARTICLE_ALPHA],
            );
        }
    }
}
