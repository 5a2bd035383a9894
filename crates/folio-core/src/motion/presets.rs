//! Motion specs used by the page sections.

use super::{Easing, HoverSpec, MotionSpec, Property, Repeat, Trigger, Tween};
use crate::constants::SKILL_RING_CIRCUMFERENCE;

const ONCE: Trigger = Trigger::InView { once: true };

pub const SKILL_STAGGER_SECS: f32 = 0.05;
pub const SKILL_RING_STAGGER_SECS: f32 = 0.1;
pub const PROJECT_STAGGER_SECS: f32 = 0.15;
pub const CONTACT_STAGGER_SECS: f32 = 0.2;
pub const STAT_STAGGER_SECS: f32 = 0.1;
pub const SOCIAL_STAGGER_SECS: f32 = 0.1;
pub const HEADING_UNDERLINE_PX: f32 = 128.0;

/// Dash offset that leaves `proficiency` percent of the ring stroked.
#[inline]
pub fn ring_dash_offset(proficiency: f32) -> f32 {
    SKILL_RING_CIRCUMFERENCE - proficiency / 100.0 * SKILL_RING_CIRCUMFERENCE
}

pub fn fade_in(duration: f32, delay: f32) -> MotionSpec {
    MotionSpec::new(ONCE).tween(
        Tween::new(Property::Opacity, 0.0, 1.0)
            .duration(duration)
            .delay(delay),
    )
}

/// Fade in while sliding vertically from `offset_y` to rest.
pub fn fade_in_up(offset_y: f32, duration: f32, delay: f32) -> MotionSpec {
    fade_in(duration, delay).tween(
        Tween::new(Property::Y, offset_y, 0.0)
            .duration(duration)
            .delay(delay),
    )
}

pub fn heading_underline() -> MotionSpec {
    MotionSpec::new(ONCE).tween(
        Tween::new(Property::WidthPx, 0.0, HEADING_UNDERLINE_PX)
            .duration(1.0)
            .delay(0.5),
    )
}

pub fn skill_badge(index: usize) -> MotionSpec {
    let spring = Easing::spring(200.0);
    let delay = index as f32 * SKILL_STAGGER_SECS;
    MotionSpec::new(ONCE)
        .tween(
            Tween::new(Property::Opacity, 0.0, 1.0)
                .duration(0.5)
                .delay(delay),
        )
        .tween(Tween::new(Property::Scale, 0.5, 1.0).easing(spring).delay(delay))
        .hover(HoverSpec::new(&[(Property::Scale, 1.1), (Property::Y, -10.0)]).easing(spring))
}

pub fn skill_ring(index: usize, proficiency: f32) -> MotionSpec {
    MotionSpec::new(ONCE)
        .tween(
            Tween::new(
                Property::StrokeDashoffset,
                SKILL_RING_CIRCUMFERENCE,
                ring_dash_offset(proficiency),
            )
            .duration(0.8)
            .delay(index as f32 * SKILL_RING_STAGGER_SECS),
        )
        .hover(
            HoverSpec::new(&[(Property::StrokeDashoffset, 0.0)])
                .easing(Easing::EaseInOut)
                .duration(2.0),
        )
}

pub fn project_card(index: usize) -> MotionSpec {
    let spring = Easing::spring(80.0);
    let delay = index as f32 * PROJECT_STAGGER_SECS;
    MotionSpec::new(ONCE)
        .tween(
            Tween::new(Property::Opacity, 0.0, 1.0)
                .duration(0.8)
                .delay(delay),
        )
        .tween(Tween::new(Property::Y, 100.0, 0.0).easing(spring).delay(delay))
        .tween(Tween::new(Property::RotateX, -20.0, 0.0).easing(spring).delay(delay))
        .hover(
            HoverSpec::new(&[
                (Property::Y, -10.0),
                (Property::Scale, 1.02),
                (Property::RotateY, 5.0),
            ])
            .easing(Easing::damped_spring(300.0, 20.0)),
        )
}

pub fn stat_tile(index: usize) -> MotionSpec {
    let delay = index as f32 * STAT_STAGGER_SECS;
    MotionSpec::new(ONCE)
        .tween(
            Tween::new(Property::Opacity, 0.0, 1.0)
                .duration(0.5)
                .delay(delay),
        )
        .tween(
            Tween::new(Property::Scale, 0.8, 1.0)
                .duration(0.5)
                .delay(delay),
        )
        .hover(HoverSpec::new(&[(Property::Scale, 1.05), (Property::Y, -5.0)]))
}

/// Contact cards slide in from alternating sides.
pub fn contact_link(index: usize) -> MotionSpec {
    let delay = index as f32 * CONTACT_STAGGER_SECS;
    let from_x = if index % 2 == 0 { -100.0 } else { 100.0 };
    MotionSpec::new(ONCE)
        .tween(
            Tween::new(Property::Opacity, 0.0, 1.0)
                .duration(0.8)
                .delay(delay),
        )
        .tween(
            Tween::new(Property::X, from_x, 0.0)
                .duration(0.8)
                .delay(delay),
        )
        .hover(HoverSpec::new(&[(Property::Scale, 1.02), (Property::Y, -5.0)]))
}

pub fn footer_social(index: usize) -> MotionSpec {
    fade_in_up(20.0, 0.5, index as f32 * SOCIAL_STAGGER_SECS)
        .hover(HoverSpec::new(&[(Property::Scale, 1.2), (Property::Y, -5.0)]))
}

/// Endless drift of one contact-section floating icon.
pub fn floating_icon(index: usize, delay: f32) -> MotionSpec {
    let duration = 6.0 + index as f32 * 0.5;
    let looped = |prop: Property, frames: &[f32]| {
        Tween::keyframes(prop, frames)
            .duration(duration)
            .delay(delay)
            .easing(Easing::EaseInOut)
            .repeat(Repeat::Forever)
    };
    MotionSpec::new(Trigger::Mount)
        .tween(looped(Property::Opacity, &[0.3, 0.7, 0.3]))
        .tween(looped(Property::Scale, &[0.8, 1.2, 0.8]))
        .tween(looped(Property::Rotate, &[0.0, 360.0]))
        .tween(looped(Property::Y, &[-10.0, 10.0, -10.0]))
        .tween(looped(Property::X, &[-5.0, 5.0, -5.0]))
        .hover(HoverSpec::new(&[
            (Property::Scale, 1.8),
            (Property::Opacity, 1.0),
            (Property::Rotate, 180.0),
        ]))
}

/// The three blurred gradient orbs behind the contact section.
pub fn ambient_orbs() -> [MotionSpec; 3] {
    let orb = |duration: f32, x: [f32; 3], y: [f32; 3], scale: Option<[f32; 3]>| {
        let looped = |prop: Property, frames: &[f32]| {
            Tween::keyframes(prop, frames)
                .duration(duration)
                .easing(Easing::EaseInOut)
                .repeat(Repeat::Forever)
        };
        let mut spec = MotionSpec::new(Trigger::Mount)
            .tween(looped(Property::X, &x))
            .tween(looped(Property::Y, &y));
        if let Some(s) = scale {
            spec = spec.tween(looped(Property::Scale, &s));
        }
        spec
    };
    [
        orb(8.0, [0.0, 50.0, 0.0], [0.0, -30.0, 0.0], Some([1.0, 1.2, 1.0])),
        orb(10.0, [0.0, -40.0, 0.0], [0.0, 40.0, 0.0], Some([1.0, 0.8, 1.0])),
        orb(12.0, [-100.0, 100.0, -100.0], [-50.0, 50.0, -50.0], None),
    ]
}
