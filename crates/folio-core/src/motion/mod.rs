//! Declarative animation engine for the page's DOM decorations.
//!
//! A [`MotionSpec`] describes what to animate and when; a [`MotionState`]
//! tracks the runtime side (trigger time, hover transitions) and samples a
//! [`MotionStyle`] for any point in time. Nothing here touches the DOM.

pub mod presets;
mod spec;
mod spring;
mod style;
mod tween;

pub use spec::{HoverSpec, MotionSpec, MotionState, Trigger};
pub use spring::SpringFollower;
pub use style::{MotionStyle, Property};
pub use tween::{Repeat, Tween};

pub use crate::interaction::in_view;

/// Default spring parameters when only stiffness is given.
pub const DEFAULT_SPRING_DAMPING: f32 = 10.0;
pub const DEFAULT_SPRING_MASS: f32 = 1.0;

/// Residual amplitude at which a spring counts as settled.
const SETTLE_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring {
        stiffness: f32,
        damping: f32,
        mass: f32,
    },
}

impl Easing {
    pub const fn spring(stiffness: f32) -> Self {
        Easing::Spring {
            stiffness,
            damping: DEFAULT_SPRING_DAMPING,
            mass: DEFAULT_SPRING_MASS,
        }
    }

    pub const fn damped_spring(stiffness: f32, damping: f32) -> Self {
        Easing::Spring {
            stiffness,
            damping,
            mass: DEFAULT_SPRING_MASS,
        }
    }

    #[inline]
    pub fn is_spring(self) -> bool {
        matches!(self, Easing::Spring { .. })
    }

    /// Map linear progress `p` in `[0, 1]` to eased progress.
    ///
    /// Springs are time based rather than progress based, so for them `p` is
    /// interpreted as seconds since the spring was released.
    pub fn apply(self, p: f32) -> f32 {
        match self {
            Easing::Linear => p.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, p),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, p),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, p),
            Easing::Spring {
                stiffness,
                damping,
                mass,
            } => spring_progress(p, stiffness, damping, mass),
        }
    }
}

/// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p == 0.0 || p == 1.0 {
        return p;
    }
    let bez = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    // Bisection on x(s) = p; x is monotonic for control x in [0, 1].
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut s = p;
    for _ in 0..32 {
        let x = bez(x1, x2, s);
        if (x - p).abs() < 1e-6 {
            break;
        }
        if x < p {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bez(y1, y2, s)
}

/// Closed-form position of a damped spring released from rest at 0 towards 1.
pub fn spring_progress(t: f32, stiffness: f32, damping: f32, mass: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    let w0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());
    if (zeta - 1.0).abs() < 1e-4 {
        1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * w0 * t).exp();
        1.0 - envelope * ((wd * t).cos() + zeta * w0 / wd * (wd * t).sin())
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}

/// Time after which the spring's envelope is below the settle threshold.
pub fn spring_settle_secs(stiffness: f32, damping: f32, mass: f32) -> f32 {
    let w0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());
    let decay = if zeta < 1.0 {
        zeta * w0
    } else {
        // slowest root; the critical case carries an extra (1 + w0 t) factor
        w0 * (zeta - (zeta * zeta - 1.0).max(0.0).sqrt()) * 0.5
    };
    if decay <= 0.0 {
        return f32::INFINITY;
    }
    -SETTLE_EPSILON.ln() / decay
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
