// Host-side tests for the clock, scene presets and runtime config.

use folio_core::{
    Clock, FolioError, Light, SceneConfig, SceneDriver, ScenePreset, KEY_MAX_DPR, KEY_PARTICLES,
};
use std::collections::HashMap;
use std::time::Duration;

fn small_config() -> SceneConfig {
    SceneConfig {
        particle_count: 50,
        sparkle_count: Some(10),
        ..SceneConfig::default()
    }
}

#[test]
fn clock_elapsed_never_decreases() {
    let mut clock = Clock::new();
    let mut last = clock.elapsed_secs();
    for ms in [16, 0, 33, 1, 250, 0, 16] {
        clock.advance(Duration::from_millis(ms));
        assert!(clock.elapsed_secs() >= last);
        last = clock.elapsed_secs();
    }
    assert_eq!(clock.ticks(), 7);
    assert_eq!(clock.elapsed(), Duration::from_millis(332));
}

#[test]
fn presets_register_their_effects_in_order() {
    let cfg = small_config();
    let names = |p| SceneDriver::preset(p, &cfg).effect_names();
    assert_eq!(names(ScenePreset::Hero), vec!["particle-field", "sparkles"]);
    assert_eq!(names(ScenePreset::About), vec!["node-lattice"]);
    assert_eq!(names(ScenePreset::Skills), vec!["floating-shapes"]);
    assert_eq!(
        names(ScenePreset::Projects),
        vec!["morphing-solid", "orbiters", "holo-ring", "sparkles"]
    );
}

#[test]
fn preset_cameras_match_sections() {
    let cfg = small_config();
    let z = |p| SceneDriver::preset(p, &cfg).camera.eye.z;
    assert_eq!(z(ScenePreset::Hero), 5.0);
    assert_eq!(z(ScenePreset::About), 4.0);
    assert_eq!(z(ScenePreset::Skills), 8.0);
    assert_eq!(z(ScenePreset::Projects), 10.0);
}

#[test]
fn hero_lighting_sums_ambient_and_scales_points() {
    let scene = SceneDriver::preset(ScenePreset::Hero, &small_config());
    let ambient = scene.ambient();
    assert!((ambient[0] - 0.2).abs() < 1e-6);
    let points: Vec<_> = scene.point_lights().collect();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].0.x, 10.0);
    assert!((points[0].1[1] - 0.5).abs() < 1e-6);
    assert!(matches!(scene.lights[0], Light::Ambient { .. }));
}

#[test]
fn tick_advances_clock_then_collects_draw_data() {
    let mut scene = SceneDriver::preset(ScenePreset::Hero, &small_config());
    let list = scene.tick(Duration::from_millis(16));
    assert_eq!(list.sprites.len(), 60);
    assert!(list.lines.is_empty());
    assert!((scene.elapsed() - 0.016).abs() < 1e-6);

    // draw data is rebuilt, not appended
    let again = scene.tick(Duration::from_millis(16)).sprites.len();
    assert_eq!(again, 60);
}

#[test]
fn projects_scene_draws_lines_and_sprites() {
    let mut scene = SceneDriver::preset(ScenePreset::Projects, &small_config());
    let list = scene.tick(Duration::from_millis(10));
    // orbiters plus sparkles
    assert_eq!(list.sprites.len(), 8 + 10);
    // dodecahedron (30 edges) plus ring (4 per segment)
    assert_eq!(list.segment_count(), 30 + 32 * 4);
}

#[test]
fn set_aspect_guards_zero_height() {
    let mut scene = SceneDriver::preset(ScenePreset::About, &small_config());
    scene.set_aspect(800, 400);
    assert_eq!(scene.camera.aspect, 2.0);
    scene.set_aspect(800, 0);
    assert_eq!(scene.camera.aspect, 800.0);
}

#[test]
fn scene_preset_parses_names() {
    assert_eq!("hero".parse::<ScenePreset>().unwrap(), ScenePreset::Hero);
    assert_eq!(" Projects ".parse::<ScenePreset>().unwrap(), ScenePreset::Projects);
    for p in ScenePreset::ALL {
        assert_eq!(p.to_string().parse::<ScenePreset>().unwrap(), p);
    }
    match "stars".parse::<ScenePreset>() {
        Err(FolioError::UnknownScene(name)) => assert_eq!(name, "stars"),
        other => panic!("unexpected {:?}", other),
    }
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn config_defaults_when_nothing_set() {
    let cfg = SceneConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, SceneConfig::default());
    assert_eq!(cfg.particle_count, 5000);
    assert_eq!(cfg.hero_sparkles(), 100);
    assert_eq!(cfg.sparkles_or(200), 200);
}

#[test]
fn config_accepts_valid_overrides() {
    let cfg = SceneConfig::from_lookup(lookup(&[
        ("particles", " 1200 "),
        ("sparkles", "40"),
        ("seed", "7"),
        ("max-dpr", "1.5"),
    ]))
    .unwrap();
    assert_eq!(cfg.particle_count, 1200);
    assert_eq!(cfg.hero_sparkles(), 40);
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.clamp_dpr(3.0), 1.5);
    assert_eq!(cfg.clamp_dpr(0.5), 1.0);
}

#[test]
fn config_rejects_malformed_values() {
    match SceneConfig::from_lookup(lookup(&[("particles", "lots")])) {
        Err(FolioError::InvalidConfig { key, value }) => {
            assert_eq!(key, KEY_PARTICLES);
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(SceneConfig::from_lookup(lookup(&[("seed", "-1")])).is_err());
    match SceneConfig::from_lookup(lookup(&[("max-dpr", "0.5")])) {
        Err(FolioError::InvalidConfig { key, .. }) => assert_eq!(key, KEY_MAX_DPR),
        other => panic!("unexpected {:?}", other),
    }
}
