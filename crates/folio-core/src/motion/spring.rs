use glam::Vec2;

const MAX_STEP_SECS: f32 = 1.0 / 240.0;
const MAX_FRAME_SECS: f32 = 0.1;

/// 2D damped spring that chases a moving target, one step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringFollower {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
}

impl SpringFollower {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Jump to `at` with no velocity.
    pub fn snap(&mut self, at: Vec2) {
        self.position = at;
        self.target = at;
        self.velocity = Vec2::ZERO;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Integrate `dt` seconds. Long frames (tab in background) are capped.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force =
                (self.target - self.position) * self.stiffness - self.velocity * self.damping;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.position
    }

    pub fn is_resting(&self, tolerance: f32) -> bool {
        (self.target - self.position).length() <= tolerance && self.velocity.length() <= tolerance
    }
}
