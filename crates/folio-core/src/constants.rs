//! Visual and interaction tuning constants shared by every front-end.
//!
//! Each literal the page relies on has a name here so the effects and the
//! interaction layer read as intent rather than magic numbers.

// Particle field (hero background)
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_SPREAD: f32 = 20.0; // edge length of the initial cube
pub const PARTICLE_WAVE_AMPLITUDE: f32 = 0.001; // per-tick vertical nudge
pub const PARTICLE_SPIN_X: f32 = 0.05; // radians per second
pub const PARTICLE_SPIN_Y: f32 = 0.03;
pub const PARTICLE_SIZE: f32 = 0.06;
pub const PARTICLE_ALPHA: f32 = 0.8;

// Sparkles
pub const HERO_SPARKLE_COUNT: usize = 100;
pub const HERO_SPARKLE_SCALE: f32 = 10.0;
pub const HERO_SPARKLE_SPEED: f32 = 0.5;
pub const PROJECT_SPARKLE_COUNT: usize = 200;
pub const PROJECT_SPARKLE_SCALE: f32 = 15.0;
pub const PROJECT_SPARKLE_SPEED: f32 = 0.3;
pub const SPARKLE_BASE_SIZE: f32 = 0.08;
pub const SPARKLE_DRIFT: f32 = 0.15;

// Morphing solid
pub const MORPH_INTERVAL_SEC: f32 = 3.0;
pub const MORPH_SPIN_X: f32 = 0.1;
pub const MORPH_SPIN_Y: f32 = 0.15;
pub const MORPH_BOB_FREQ: f32 = 0.3;
pub const MORPH_BOB_AMPLITUDE: f32 = 0.5;
pub const MORPH_OPACITY: f32 = 0.6;

// Node lattice
pub const LATTICE_LAYERS: usize = 4;
pub const LATTICE_NODES_PER_LAYER: usize = 5;
pub const LATTICE_LAYER_SPACING: f32 = 2.0;
pub const LATTICE_NODE_SPACING: f32 = 0.8;
pub const LATTICE_SPIN_Y: f32 = 0.1;
pub const LATTICE_NODE_SIZE: f32 = 0.1;

// Holographic ring
pub const RING_RADIUS: f32 = 1.5;
pub const RING_HEIGHT: f32 = 0.1;
pub const RING_SEGMENTS: usize = 32;
pub const RING_SPIN_Y: f32 = 0.2;
pub const RING_BASE_OPACITY: f32 = 0.3;
pub const RING_OPACITY_SWING: f32 = 0.1;
pub const RING_PULSE_FREQ: f32 = 2.0;

// Orbiters
pub const ORBITER_COUNT: usize = 8;
pub const ORBITER_RADIUS_X: f32 = 6.0;
pub const ORBITER_RADIUS_Y: f32 = 3.0;
pub const ORBITER_DEPTH: f32 = 2.0;
pub const ORBITER_SIZE: f32 = 0.4;

// Floating wireframe shapes (skills background)
pub const FLOATING_SHAPE_COUNT: usize = 6;
pub const FLOATING_SHAPE_RADIUS: f32 = 0.5;
pub const FLOATING_SHAPE_SPACING: f32 = 3.0;
pub const FLOATING_SHAPE_DEPTH: f32 = -5.0;
pub const FLOATING_SHAPE_OPACITY: f32 = 0.3;

// Palette
pub const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
pub const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// Camera
pub const DEFAULT_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Pointer / cursor
pub const CURSOR_OFFSET_PX: f64 = 10.0; // half the follower's size
pub const CURSOR_HOVER_SCALE: f64 = 1.5;
pub const INTERACTIVE_SELECTOR: &str = "a, button, .interactive";

// Tilt
pub const PROJECT_TILT_DIVISOR: f64 = 20.0;
pub const PROJECT_TILT_LIFT_PX: f64 = 20.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// Scroll
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const HERO_PARALLAX_FACTOR: f64 = 0.2;

// Contact glow follower
pub const GLOW_STIFFNESS: f32 = 150.0;
pub const GLOW_DAMPING: f32 = 15.0;
pub const GLOW_HALF_SIZE_PX: f32 = 128.0;

// Skill progress ring (2πr for r = 45 in a 100x100 viewBox)
pub const SKILL_RING_CIRCUMFERENCE: f32 = 283.0;

// Device pixel ratio clamp for scene canvases
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const DEFAULT_SEED: u64 = 42;
