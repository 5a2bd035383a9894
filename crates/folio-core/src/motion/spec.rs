use super::style::{MotionStyle, Property};
use super::tween::Tween;
use super::{lerp, Easing};
use smallvec::SmallVec;

/// When an element's entrance animation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    /// First time the element scrolls into view. With `once == false` the
    /// animation resets when the element leaves the viewport again.
    InView { once: bool },
    Manual,
}

/// Target values the element moves to while hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverSpec {
    pub targets: SmallVec<[(Property, f32); 4]>,
    pub easing: Easing,
    pub duration: f32,
}

impl HoverSpec {
    pub fn new(targets: &[(Property, f32)]) -> Self {
        Self {
            targets: SmallVec::from_slice(targets),
            easing: Easing::EaseOut,
            duration: 0.3,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.duration = secs;
        self
    }

    fn progress(&self, since: f32) -> f32 {
        if self.easing.is_spring() {
            self.easing.apply(since)
        } else {
            self.easing.apply(since / self.duration.max(f32::EPSILON))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionSpec {
    pub trigger: Trigger,
    pub tweens: Vec<Tween>,
    pub hover: Option<HoverSpec>,
}

impl MotionSpec {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            tweens: Vec::new(),
            hover: None,
        }
    }

    pub fn tween(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    pub fn hover(mut self, hover: HoverSpec) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Push every tween back by `secs`; used for staggered lists.
    pub fn delayed(mut self, secs: f32) -> Self {
        for t in &mut self.tweens {
            t.delay += secs;
        }
        self
    }

    /// Style before the animation has started.
    pub fn initial_style(&self) -> MotionStyle {
        let mut style = MotionStyle::default();
        for t in &self.tweens {
            style.set(t.property, t.first());
        }
        style
    }

    /// Style once every finite tween has finished.
    pub fn final_style(&self) -> MotionStyle {
        let mut style = MotionStyle::default();
        for t in &self.tweens {
            style.set(t.property, t.last());
        }
        style
    }

    pub fn end_secs(&self) -> Option<f32> {
        self.tweens
            .iter()
            .map(Tween::total_secs)
            .try_fold(0.0f32, |acc, end| end.map(|e| acc.max(e)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct HoverTransition {
    entered: bool,
    changed_at: f32,
    from: MotionStyle,
}

/// Runtime state of one animated element. Times are page seconds.
#[derive(Clone, Debug)]
pub struct MotionState {
    spec: MotionSpec,
    started_at: Option<f32>,
    hover: Option<HoverTransition>,
}

impl MotionState {
    pub fn new(spec: MotionSpec) -> Self {
        Self {
            spec,
            started_at: None,
            hover: None,
        }
    }

    pub fn spec(&self) -> &MotionSpec {
        &self.spec
    }

    #[inline]
    pub fn trigger(&self) -> Trigger {
        self.spec.trigger
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start the entrance animation; later calls keep the first start time.
    pub fn start(&mut self, now: f32) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }

    /// Feed the element's current visibility. Only `InView` specs react.
    pub fn on_visibility(&mut self, visible: bool, now: f32) {
        if let Trigger::InView { once } = self.spec.trigger {
            if visible {
                self.start(now);
            } else if !once {
                self.reset();
            }
        }
    }

    pub fn set_hover(&mut self, hovering: bool, now: f32) {
        if self.spec.hover.is_none() {
            return;
        }
        if self.hover.map_or(!hovering, |h| h.entered == hovering) {
            return;
        }
        let from = self.sample(now);
        self.hover = Some(HoverTransition {
            entered: hovering,
            changed_at: now,
            from,
        });
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.map_or(false, |h| h.entered)
    }

    fn base_style(&self, now: f32) -> MotionStyle {
        match self.started_at {
            None => self.spec.initial_style(),
            Some(start) => {
                let mut style = MotionStyle::default();
                for t in &self.spec.tweens {
                    style.set(t.property, t.sample(now - start));
                }
                style
            }
        }
    }

    pub fn sample(&self, now: f32) -> MotionStyle {
        let mut style = self.base_style(now);
        if let (Some(spec), Some(h)) = (&self.spec.hover, &self.hover) {
            let p = spec.progress(now - h.changed_at);
            for &(prop, target) in &spec.targets {
                let to = if h.entered { target } else { style.value(prop) };
                style.set(prop, lerp(h.from.value(prop), to, p));
            }
        }
        style
    }

    /// True once nothing about the sampled style changes any more.
    pub fn is_settled(&self, now: f32) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        let entrance_done = self.spec.end_secs().map_or(false, |end| now - start >= end);
        let hover_done = match (&self.spec.hover, &self.hover) {
            (Some(spec), Some(h)) => {
                let since = now - h.changed_at;
                if spec.easing.is_spring() {
                    since >= spec_settle(spec.easing)
                } else {
                    since >= spec.duration
                }
            }
            _ => true,
        };
        entrance_done && hover_done
    }
}

fn spec_settle(easing: Easing) -> f32 {
    match easing {
        Easing::Spring {
            stiffness,
            damping,
            mass,
        } => super::spring_settle_secs(stiffness, damping, mass),
        _ => 0.0,
    }
}
