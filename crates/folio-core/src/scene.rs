//! Scene driver: owns the clock and the effects of one background canvas.

use crate::clock::Clock;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::DrawList;
use crate::effects::{
    Effect, FloatingShapes, HoloRing, MorphingSolid, NodeLattice, Orbiters, ParticleField,
    Sparkles,
};
use crate::error::FolioError;
use glam::{Mat4, Vec3};
use std::str::FromStr;
use std::time::Duration;

/// Right-handed perspective camera looking at `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin.
    pub fn looking_at_origin(distance: f32, fovy_degrees: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fovy_degrees.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up vectors, used to face sprites at the camera.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Point {
        position: Vec3,
        color: [f32; 3],
        intensity: f32,
    },
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenePreset {
    Hero,
    About,
    Skills,
    Projects,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 4] = [
        ScenePreset::Hero,
        ScenePreset::About,
        ScenePreset::Skills,
        ScenePreset::Projects,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenePreset::Hero => "hero",
            ScenePreset::About => "about",
            ScenePreset::Skills => "skills",
            ScenePreset::Projects => "projects",
        }
    }
}

impl FromStr for ScenePreset {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(ScenePreset::Hero),
            "about" => Ok(ScenePreset::About),
            "skills" => Ok(ScenePreset::Skills),
            "projects" => Ok(ScenePreset::Projects),
            other => Err(FolioError::UnknownScene(other.to_string())),
        }
    }
}

impl std::fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub struct SceneDriver {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub clear_color: [f32; 4],
    clock: Clock,
    effects: Vec<Box<dyn Effect>>,
    draw_list: DrawList,
}

impl SceneDriver {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            clear_color: CLEAR_COLOR,
            clock: Clock::new(),
            effects: Vec::new(),
            draw_list: DrawList::default(),
        }
    }

    /// Build one of the page's section scenes.
    pub fn preset(preset: ScenePreset, config: &SceneConfig) -> Self {
        let seed = config.seed;
        match preset {
            ScenePreset::Hero => {
                let mut s = Self::new(Camera::looking_at_origin(5.0, DEFAULT_FOV_DEG));
                s.add_light(Light::Ambient {
                    color: WHITE,
                    intensity: 0.2,
                });
                s.add_light(point(10.0, CYAN, 0.5));
                s.add_light(point(-10.0, MAGENTA, 0.3));
                s.register(ParticleField::new(config.particle_count, seed));
                s.register(Sparkles::new(
                    config.hero_sparkles(),
                    HERO_SPARKLE_SCALE,
                    HERO_SPARKLE_SPEED,
                    CYAN,
                    seed.wrapping_add(1),
                ));
                s
            }
            ScenePreset::About => {
                let mut s = Self::new(Camera::looking_at_origin(4.0, DEFAULT_FOV_DEG));
                s.add_light(Light::Ambient {
                    color: WHITE,
                    intensity: 0.3,
                });
                s.add_light(point(5.0, CYAN, 0.4));
                s.register(NodeLattice::new());
                s
            }
            ScenePreset::Skills => {
                let mut s = Self::new(Camera::looking_at_origin(8.0, DEFAULT_FOV_DEG));
                s.add_light(Light::Ambient {
                    color: WHITE,
                    intensity: 0.4,
                });
                s.add_light(point(10.0, CYAN, 0.6));
                s.add_light(point(-10.0, MAGENTA, 0.4));
                s.register(FloatingShapes::new(FLOATING_SHAPE_COUNT));
                s
            }
            ScenePreset::Projects => {
                let mut s = Self::new(Camera::looking_at_origin(10.0, DEFAULT_FOV_DEG));
                s.add_light(Light::Ambient {
                    color: WHITE,
                    intensity: 0.3,
                });
                s.add_light(point(15.0, CYAN, 0.8));
                s.add_light(point(-15.0, MAGENTA, 0.6));
                s.register(MorphingSolid::new(1.0));
                s.register(Orbiters::new());
                s.register(HoloRing::new());
                s.register(Sparkles::new(
                    config.sparkles_or(PROJECT_SPARKLE_COUNT),
                    PROJECT_SPARKLE_SCALE,
                    PROJECT_SPARKLE_SPEED,
                    CYAN,
                    seed.wrapping_add(2),
                ));
                s
            }
        }
    }

    pub fn register(&mut self, effect: impl Effect + 'static) {
        self.effects.push(Box::new(effect));
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Advance the clock, let every effect update, and collect draw data.
    pub fn tick(&mut self, dt: Duration) -> &DrawList {
        self.clock.advance(dt);
        let t = self.clock.elapsed_secs();
        for effect in self.effects.iter_mut() {
            effect.advance(t);
        }
        self.draw_list.clear();
        for effect in self.effects.iter() {
            effect.draw(&mut self.draw_list);
        }
        &self.draw_list
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn effect_names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|e| e.name()).collect()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Sum of ambient light contributions.
    pub fn ambient(&self) -> [f32; 3] {
        let mut acc = [0.0f32; 3];
        for light in &self.lights {
            if let Light::Ambient { color, intensity } = light {
                for (a, c) in acc.iter_mut().zip(color) {
                    *a += c * intensity;
                }
            }
        }
        acc
    }

    pub fn point_lights(&self) -> impl Iterator<Item = (Vec3, [f32; 3])> + '_ {
        self.lights.iter().filter_map(|l| match l {
            Light::Point {
                position,
                color,
                intensity,
            } => Some((
                *position,
                [color[0] * intensity, color[1] * intensity, color[2] * intensity],
            )),
            Light::Ambient { .. } => None,
        })
    }
}

#[inline]
fn point(at: f32, color: [f32; 3], intensity: f32) -> Light {
    Light::Point {
        position: Vec3::splat(at),
        color,
        intensity,
    }
}
