//! Runtime overrides for scene construction.
//!
//! The browser reads these from `data-*` attributes on each scene canvas and
//! the native preview from command-line flags; both go through a key lookup
//! so parsing stays in one place.

use crate::constants::{
    DEFAULT_SEED, HERO_SPARKLE_COUNT, MAX_DEVICE_PIXEL_RATIO, PARTICLE_COUNT,
};
use crate::error::{FolioError, Result};
use std::str::FromStr;

pub const KEY_PARTICLES: &str = "particles";
pub const KEY_SPARKLES: &str = "sparkles";
pub const KEY_SEED: &str = "seed";
pub const KEY_MAX_DPR: &str = "max-dpr";

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    /// Overrides the sparkle count of every sparkle effect in a scene.
    pub sparkle_count: Option<usize>,
    pub seed: u64,
    pub max_device_pixel_ratio: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            sparkle_count: None,
            seed: DEFAULT_SEED,
            max_device_pixel_ratio: MAX_DEVICE_PIXEL_RATIO,
        }
    }
}

impl SceneConfig {
    /// Build a config from a key lookup, starting from the defaults.
    ///
    /// Missing keys keep their default; present but malformed values are an
    /// error so the caller can decide whether to fall back.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(n) = parse_key::<usize, _>(&lookup, KEY_PARTICLES)? {
            cfg.particle_count = n;
        }
        if let Some(n) = parse_key::<usize, _>(&lookup, KEY_SPARKLES)? {
            cfg.sparkle_count = Some(n);
        }
        if let Some(seed) = parse_key::<u64, _>(&lookup, KEY_SEED)? {
            cfg.seed = seed;
        }
        if let Some(dpr) = parse_key::<f64, _>(&lookup, KEY_MAX_DPR)? {
            if !(dpr.is_finite() && dpr >= 1.0) {
                return Err(FolioError::InvalidConfig {
                    key: KEY_MAX_DPR,
                    value: dpr.to_string(),
                });
            }
            cfg.max_device_pixel_ratio = dpr;
        }
        Ok(cfg)
    }

    pub fn sparkles_or(&self, fallback: usize) -> usize {
        self.sparkle_count.unwrap_or(fallback)
    }

    #[inline]
    pub fn hero_sparkles(&self) -> usize {
        self.sparkles_or(HERO_SPARKLE_COUNT)
    }

    /// Clamp a device pixel ratio into `[1, max]`.
    #[inline]
    pub fn clamp_dpr(&self, dpr: f64) -> f64 {
        dpr.clamp(1.0, self.max_device_pixel_ratio)
    }
}

fn parse_key<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| FolioError::InvalidConfig { key, value: raw }),
    }
}
