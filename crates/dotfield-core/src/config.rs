//! User-facing and normalized configuration.
//!
//! `UserConfig` mirrors the options a host page passes in (and deserializes
//! from JSON with the same field names). `normalize` resolves it into the
//! immutable `Config` the simulation runs on.

use crate::constants::*;
use crate::error::ConfigError;
use serde::Deserialize;

/// Particle radius as either one value or a `[min, max]` range.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParticleSize {
    Fixed(f32),
    Range([f32; 2]),
}

impl ParticleSize {
    pub fn to_range(self) -> [f32; 2] {
        match self {
            ParticleSize::Fixed(s) => [s, s],
            ParticleSize::Range(r) => r,
        }
    }
}

impl From<f32> for ParticleSize {
    fn from(s: f32) -> Self {
        ParticleSize::Fixed(s)
    }
}

impl From<[f32; 2]> for ParticleSize {
    fn from(r: [f32; 2]) -> Self {
        ParticleSize::Range(r)
    }
}

/// Optional bounds on the otherwise unbounded motion model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionLimits {
    /// Upper bound on velocity magnitude, applied after all forces.
    pub max_speed: Option<f32>,
    /// Smallest per-axis pointer distance used as a divisor.
    pub min_pointer_distance: Option<f32>,
}

/// How the reported rate treats ring slots that have not been written yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateWarmup {
    /// Average over the whole ring, counting unwritten slots as zero.
    #[default]
    ZeroFilled,
    /// Average over written slots only.
    Populated,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub density: f32,
    pub size: ParticleSize,
    pub speed: f32,
    pub wander: f32,
    pub cursor: f32,
    pub fps: f64,
    pub color: String,
    pub limits: Option<MotionLimits>,
    pub rate_warmup: RateWarmup,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            size: ParticleSize::Range(DEFAULT_SIZE),
            speed: DEFAULT_SPEED,
            wander: DEFAULT_WANDER,
            cursor: DEFAULT_CURSOR,
            fps: DEFAULT_FPS,
            color: DEFAULT_COLOR.to_string(),
            limits: None,
            rate_warmup: RateWarmup::default(),
        }
    }
}

/// Fully resolved configuration. Built only through [`normalize`], so
/// `frame_interval_ms` always matches `fps`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub density: f32,
    pub size_range: [f32; 2],
    pub speed: f32,
    pub wander: f32,
    pub cursor_radius: f32,
    pub fps: f64,
    frame_interval_ms: f64,
    pub color: String,
    pub limits: Option<MotionLimits>,
    pub rate_warmup: RateWarmup,
}

impl Config {
    /// Minimum milliseconds between two paints.
    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }
}

impl TryFrom<UserConfig> for Config {
    type Error = ConfigError;

    fn try_from(user: UserConfig) -> Result<Self, Self::Error> {
        normalize(user)
    }
}

pub fn normalize(user: UserConfig) -> Result<Config, ConfigError> {
    if !user.fps.is_finite() || user.fps <= 0.0 {
        return Err(ConfigError::InvalidFps(user.fps));
    }
    if !user.density.is_finite() || user.density <= 0.0 {
        return Err(ConfigError::InvalidDensity(user.density));
    }
    if !user.wander.is_finite() || user.wander == 0.0 {
        return Err(ConfigError::InvalidWander(user.wander));
    }
    Ok(Config {
        density: user.density,
        size_range: user.size.to_range(),
        speed: user.speed,
        wander: user.wander,
        cursor_radius: user.cursor,
        fps: user.fps,
        frame_interval_ms: MS_PER_SEC / user.fps,
        color: user.color,
        limits: user.limits,
        rate_warmup: user.rate_warmup,
    })
}
