// Host-side tests for tweens, springs and the motion presets.

use folio_core::motion::presets::{self, ring_dash_offset};
use folio_core::motion::{
    cubic_bezier, in_view, spring_progress, Easing, HoverSpec, MotionSpec, MotionState,
    MotionStyle, Property, Repeat, SpringFollower, Trigger, Tween,
};
use glam::Vec2;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn easings_pin_their_endpoints() {
    for e in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert_eq!(e.apply(-3.0), 0.0);
        assert_eq!(e.apply(4.0), 1.0);
    }
    assert!(close(Easing::EaseInOut.apply(0.5), 0.5));
    assert!(Easing::EaseIn.apply(0.3) < 0.3);
    assert!(Easing::EaseOut.apply(0.3) > 0.3);
}

#[test]
fn cubic_bezier_is_monotonic_for_css_curves() {
    let mut last = 0.0;
    for i in 0..=100 {
        let y = cubic_bezier(0.42, 0.0, 0.58, 1.0, i as f32 / 100.0);
        assert!(y >= last - 1e-6);
        last = y;
    }
}

#[test]
fn tween_holds_first_keyframe_before_delay_and_last_after_duration() {
    let t = Tween::new(Property::Opacity, 0.0, 1.0)
        .duration(0.8)
        .delay(0.5)
        .easing(Easing::Linear);
    assert_eq!(t.sample(0.0), 0.0);
    assert_eq!(t.sample(0.5), 0.0);
    assert!(close(t.sample(0.9), 0.5));
    assert_eq!(t.sample(1.3), 1.0);
    assert_eq!(t.sample(50.0), 1.0);
    assert!(t.is_finished(1.31));
    assert!(!t.is_finished(1.0));
}

#[test]
fn finished_tweens_sample_their_last_keyframe() {
    let durations = [0.3, 0.6, 0.8, 1.2];
    let delays = [0.0, 0.1, 0.2, 0.5, 0.7];
    let repeats = [Repeat::Never, Repeat::Times(1), Repeat::Times(2), Repeat::Times(3)];
    for &duration in &durations {
        for &delay in &delays {
            for &repeat in &repeats {
                let t = Tween::new(Property::Opacity, 0.0, 1.0)
                    .duration(duration)
                    .delay(delay)
                    .repeat(repeat)
                    .easing(Easing::Linear);
                let end = t.total_secs().unwrap();
                assert!(t.is_finished(end));
                assert_eq!(
                    t.sample(end),
                    t.last(),
                    "duration {duration} delay {delay} {repeat:?}"
                );
            }
        }
    }
}

#[test]
fn keyframe_segments_are_eased_individually() {
    let t = Tween::keyframes(Property::Y, &[-10.0, 10.0, -10.0])
        .duration(2.0)
        .easing(Easing::Linear);
    assert!(close(t.sample(0.5), 0.0));
    assert!(close(t.sample(1.0), 10.0));
    assert!(close(t.sample(1.5), 0.0));

    let eased = t.clone().easing(Easing::EaseInOut);
    // the midpoint of each segment is symmetric for ease-in-out
    assert!(close(eased.sample(0.5), 0.0));
    assert!(close(eased.sample(1.5), 0.0));
}

#[test]
fn forever_tweens_are_periodic() {
    let t = Tween::keyframes(Property::Rotate, &[0.0, 360.0])
        .duration(6.0)
        .delay(1.0)
        .repeat(Repeat::Forever);
    assert_eq!(t.total_secs(), None);
    assert!(!t.is_finished(1e6));
    for i in 0..20 {
        let s = 1.0 + i as f32 * 0.29;
        assert!((t.sample(s) - t.sample(s + 6.0)).abs() < 1e-2);
    }
}

#[test]
fn finite_repeats_end_on_last_keyframe() {
    let t = Tween::new(Property::Scale, 1.0, 2.0)
        .duration(1.0)
        .repeat(Repeat::Times(2))
        .repeat_delay(0.5)
        .easing(Easing::Linear);
    assert_eq!(t.total_secs(), Some(4.0));
    // second play starts after the repeat delay
    assert_eq!(t.sample(1.2), 2.0);
    assert!(close(t.sample(2.0), 1.5));
    assert_eq!(t.sample(10.0), 2.0);
}

#[test]
fn spring_starts_at_zero_and_settles_at_one() {
    for (k, c) in [(150.0, 15.0), (200.0, 10.0), (100.0, 20.0), (100.0, 40.0)] {
        assert_eq!(spring_progress(0.0, k, c, 1.0), 0.0);
        assert!(spring_progress(0.01, k, c, 1.0) > 0.0);
        assert!(close(spring_progress(10.0, k, c, 1.0), 1.0));
    }
}

#[test]
fn underdamped_spring_overshoots() {
    let peak = (0..200)
        .map(|i| spring_progress(i as f32 * 0.01, 200.0, 10.0, 1.0))
        .fold(0.0f32, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn spring_tween_interpolates_between_ends() {
    let t = Tween::new(Property::Y, 100.0, 0.0).easing(Easing::spring(80.0));
    assert_eq!(t.sample(0.0), 100.0);
    assert!(t.sample(0.1) < 100.0);
    assert!(t.sample(20.0).abs() < 0.01);
    let end = t.total_secs().unwrap();
    assert!(end > 0.5 && end < 5.0);
}

#[test]
fn spring_follower_chases_its_target() {
    let mut glow = SpringFollower::new(150.0, 15.0, 1.0);
    glow.set_target(Vec2::new(200.0, -100.0));
    for _ in 0..180 {
        glow.step(1.0 / 60.0);
    }
    assert!(glow.is_resting(0.5));
    assert!((glow.position() - Vec2::new(200.0, -100.0)).length() < 0.5);
}

#[test]
fn motion_style_renders_css() {
    let mut style = MotionStyle::default();
    assert!(style.is_empty());
    assert_eq!(style.transform_css(), None);
    style.set(Property::Y, -10.0);
    style.set(Property::Scale, 1.1);
    style.set(Property::Opacity, 0.5);
    assert_eq!(
        style.transform_css().as_deref(),
        Some("translate(0px, -10px) scale(1.1)")
    );
    let decls = style.css_declarations();
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[1], ("opacity", "0.5".to_string()));
    assert_eq!(style.value(Property::ScaleX), 1.0);
}

#[test]
fn in_view_trigger_starts_once() {
    let mut state = MotionState::new(presets::fade_in_up(30.0, 0.8, 0.0));
    assert_eq!(state.trigger(), Trigger::InView { once: true });
    let initial = state.sample(0.0);
    assert_eq!(initial.get(Property::Opacity), Some(0.0));
    assert_eq!(initial.get(Property::Y), Some(30.0));

    state.on_visibility(false, 1.0);
    assert!(!state.is_started());
    state.on_visibility(true, 2.0);
    state.on_visibility(false, 2.5);
    state.on_visibility(true, 2.6);
    assert!(state.is_started());
    let done = state.sample(3.0);
    assert_eq!(done.get(Property::Opacity), Some(1.0));
    assert_eq!(done.get(Property::Y), Some(0.0));
    assert!(state.is_settled(3.0));
}

#[test]
fn repeatable_in_view_resets_on_leave() {
    let spec = MotionSpec::new(Trigger::InView { once: false })
        .tween(Tween::new(Property::Opacity, 0.0, 1.0));
    let mut state = MotionState::new(spec);
    state.on_visibility(true, 0.0);
    state.on_visibility(false, 1.0);
    assert!(!state.is_started());
}

#[test]
fn hover_blends_towards_targets_and_back() {
    let spec = MotionSpec::new(Trigger::Manual)
        .tween(Tween::new(Property::Scale, 1.0, 1.0))
        .hover(
            HoverSpec::new(&[(Property::Scale, 2.0)])
                .easing(Easing::Linear)
                .duration(1.0),
        );
    let mut state = MotionState::new(spec);
    state.start(0.0);
    state.set_hover(true, 1.0);
    assert!(close(state.sample(1.5).value(Property::Scale), 1.5));
    assert_eq!(state.sample(3.0).value(Property::Scale), 2.0);
    assert!(state.is_hovered());

    state.set_hover(false, 3.0);
    assert!(close(state.sample(3.25).value(Property::Scale), 1.75));
    assert_eq!(state.sample(5.0).value(Property::Scale), 1.0);

    // leaving twice is a no-op
    state.set_hover(false, 5.0);
    assert!(!state.is_hovered());
}

#[test]
fn skill_ring_offsets() {
    assert_eq!(ring_dash_offset(100.0), 0.0);
    assert_eq!(ring_dash_offset(0.0), 283.0);
    assert!(close(ring_dash_offset(50.0), 141.5));

    let mut ring = MotionState::new(presets::skill_ring(3, 100.0));
    assert_eq!(
        ring.sample(0.0).get(Property::StrokeDashoffset),
        Some(283.0)
    );
    ring.start(0.0);
    assert_eq!(
        ring.sample(0.2).get(Property::StrokeDashoffset),
        Some(283.0)
    );
    assert_eq!(ring.sample(1.2).get(Property::StrokeDashoffset), Some(0.0));
}

#[test]
fn staggered_presets_delay_by_index() {
    let first = presets::project_card(0);
    let third = presets::project_card(2);
    assert!(close(third.tweens[0].delay - first.tweens[0].delay, 0.3));
    let skills = presets::skill_badge(4);
    assert!(close(skills.tweens[0].delay, 0.2));
    let contacts = [presets::contact_link(0), presets::contact_link(1)];
    assert_eq!(contacts[0].initial_style().get(Property::X), Some(-100.0));
    assert_eq!(contacts[1].initial_style().get(Property::X), Some(100.0));
}

#[test]
fn floating_icons_loop_forever() {
    let spec = presets::floating_icon(2, 1.0);
    assert_eq!(spec.trigger, Trigger::Mount);
    assert_eq!(spec.end_secs(), None);
    assert!(spec.tweens.iter().all(|t| close(t.duration, 7.0)));
    assert_eq!(presets::ambient_orbs().len(), 3);
}

#[test]
fn in_view_checks_overlap() {
    assert!(in_view(100.0, 300.0, 800.0));
    assert!(in_view(-50.0, 10.0, 800.0));
    assert!(!in_view(900.0, 1200.0, 800.0));
    assert!(!in_view(-300.0, 0.0, 800.0));
}
