use super::Effect;
use crate::constants::{SPARKLE_BASE_SIZE, SPARKLE_DRIFT};
use crate::draw::DrawList;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

struct Sparkle {
    base: Vec3,
    phase: f32,
    size: f32,
}

/// Scattered twinkling points inside a cube of edge `scale`.
pub struct Sparkles {
    sparkles: Vec<Sparkle>,
    speed: f32,
    color: [f32; 3],
    time: f32,
}

impl Sparkles {
    pub fn new(count: usize, scale: f32, speed: f32, color: [f32; 3], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = scale * 0.5;
        let sparkles = (0..count)
            .map(|_| Sparkle {
                base: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                phase: rng.gen::<f32>() * TAU,
                size: SPARKLE_BASE_SIZE * (0.5 + rng.gen::<f32>()),
            })
            .collect();
        Self {
            sparkles,
            speed,
            color,
            time: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    /// Opacity of a sparkle with `phase` at the current time, in [0, 1].
    pub fn twinkle(&self, phase: f32) -> f32 {
        0.5 + 0.5 * (self.time * self.speed * 2.0 + phase).sin()
    }
}

impl Effect for Sparkles {
    fn name(&self) -> &'static str {
        "sparkles"
    }

    fn advance(&mut self, elapsed: f32) {
        self.time = elapsed;
    }

    fn draw(&self, out: &mut DrawList) {
        out.sprites.reserve(self.sparkles.len());
        for s in &self.sparkles {
            let drift = (self.time * self.speed + s.phase).sin() * SPARKLE_DRIFT;
            let alpha = self.twinkle(s.phase);
            out.push_sprite(
                s.base + Vec3::new(0.0, drift, 0.0),
                s.size,
                [self.color[0], self.color[1], self.color[2], alpha],
            );
        }
    }
}
