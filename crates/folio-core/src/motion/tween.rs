use super::style::Property;
use super::{lerp, spring_settle_secs, Easing};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Never,
    /// Play once, then repeat `n` more times.
    Times(u32),
    Forever,
}

/// One property animated through a list of keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub keyframes: SmallVec<[f32; 4]>,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    pub repeat: Repeat,
    pub repeat_delay: f32,
}

const DEFAULT_DURATION: f32 = 0.3;

impl Tween {
    pub fn new(property: Property, from: f32, to: f32) -> Self {
        Self::keyframes(property, &[from, to])
    }

    pub fn keyframes(property: Property, frames: &[f32]) -> Self {
        let mut keyframes: SmallVec<[f32; 4]> = SmallVec::from_slice(frames);
        if keyframes.is_empty() {
            keyframes.push(property.rest_value());
        }
        Self {
            property,
            keyframes,
            duration: DEFAULT_DURATION,
            delay: 0.0,
            easing: Easing::EaseInOut,
            repeat: Repeat::Never,
            repeat_delay: 0.0,
        }
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.duration = secs;
        self
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.delay = secs;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn repeat_delay(mut self, secs: f32) -> Self {
        self.repeat_delay = secs;
        self
    }

    #[inline]
    pub fn first(&self) -> f32 {
        self.keyframes[0]
    }

    #[inline]
    pub fn last(&self) -> f32 {
        self.keyframes[self.keyframes.len() - 1]
    }

    /// Length of one play, not counting the delay.
    pub fn play_secs(&self) -> f32 {
        match self.easing {
            Easing::Spring {
                stiffness,
                damping,
                mass,
            } => spring_settle_secs(stiffness, damping, mass),
            _ => self.duration.max(f32::EPSILON),
        }
    }

    /// Delay plus every play; `None` for tweens that never end.
    pub fn total_secs(&self) -> Option<f32> {
        let play = self.play_secs();
        match self.repeat {
            Repeat::Never => Some(self.delay + play),
            Repeat::Times(n) => {
                Some(self.delay + play * (n + 1) as f32 + self.repeat_delay * n as f32)
            }
            Repeat::Forever => None,
        }
    }

    pub fn is_finished(&self, t: f32) -> bool {
        self.total_secs().map_or(false, |end| t >= end)
    }

    /// Value of the property `t` seconds after the tween was started.
    pub fn sample(&self, t: f32) -> f32 {
        if self.is_finished(t) {
            return self.last();
        }
        let local = t - self.delay;
        if local <= 0.0 {
            return self.first();
        }
        if self.easing.is_spring() {
            return lerp(self.first(), self.last(), self.easing.apply(local));
        }

        let play = self.play_secs();
        let cycle = play + self.repeat_delay.max(0.0);
        let iteration = (local / cycle).floor();
        let exhausted = match self.repeat {
            Repeat::Never => iteration >= 1.0,
            Repeat::Times(n) => iteration > n as f32,
            Repeat::Forever => false,
        };
        if exhausted {
            return self.last();
        }
        let phase = local - iteration * cycle;
        if phase >= play {
            return self.last();
        }
        self.at_progress(phase / play)
    }

    fn at_progress(&self, progress: f32) -> f32 {
        let segments = self.keyframes.len() - 1;
        if segments == 0 {
            return self.first();
        }
        let pos = progress.clamp(0.0, 1.0) * segments as f32;
        let i = (pos.floor() as usize).min(segments - 1);
        let eased = self.easing.apply(pos - i as f32);
        lerp(self.keyframes[i], self.keyframes[i + 1], eased)
    }
}
