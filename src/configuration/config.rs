//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants, time step, trail capacity, seed
//! - [`EngineConfig`]     – real-time pacing of the fixed-step loop
//! - [`WindowConfig`]     – viewer window settings
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Only `bodies` is required; every other section falls back to defaults.
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   dt: 1.0                 # logical time per tick
//!   eps2: 0.0               # softening added to squared distance
//!   trail_capacity: 2000    # points kept per trail
//!   seed: 7                 # seed for random_velocity
//!
//! engine:
//!   ticks_per_second: 60.0
//!   max_ticks_per_frame: 8
//!
//! window:
//!   title: "Sun and Earth"
//!   width: 1600
//!   height: 900
//!   fullscreen: false
//!   scale: 1.0
//!
//! bodies:
//!   - x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 100000.0
//!     radius: 50.0
//!     color: yellow
//!   - x: [-500.0, 0.0]
//!     v: [0.0, -13.0]
//!     m: 10.0
//!     radius: 25.0
//!     color: [0, 255, 255]
//!     trail: true
//! ```

use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::states::Rgb;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub dt: f64, // time step size
    pub eps2: f64, // softening
    pub trail_capacity: usize, // max points per trail
    pub seed: u64, // seed for random initial velocities
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: 1.0,
            dt: 1.0,
            eps2: 0.0,
            trail_capacity: 2000,
            seed: 0,
        }
    }
}

/// Real-time pacing of the physics loop
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub ticks_per_second: f64, // physics ticks per real second
    pub max_ticks_per_frame: u32, // backlog cap
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            max_ticks_per_frame: 8,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            return Err(SimError::InvalidTickRate(self.ticks_per_second));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(SimError::InvalidTickCap(self.max_ticks_per_frame));
        }
        Ok(())
    }
}

/// Viewer window settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub scale: f32, // pixels per world unit
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "N-Body Simulation".to_string(),
            width: 1600,
            height: 900,
            fullscreen: false,
            scale: 1.0,
        }
    }
}

/// A colour given by name (`yellow`) or as `[r, g, b]`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorConfig {
    Named(String),
    Rgb([u8; 3]),
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig::Named("white".to_string())
    }
}

impl ColorConfig {
    pub fn resolve(&self) -> Result<Rgb, SimError> {
        match self {
            ColorConfig::Named(name) => Rgb::from_name(name),
            ColorConfig::Rgb([r, g, b]) => Ok(Rgb(*r, *g, *b)),
        }
    }
}

fn default_mass() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    50.0
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity
    #[serde(default = "default_mass")]
    pub m: f64, // mass
    #[serde(default = "default_radius")]
    pub radius: f64, // drawing radius
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub trail: bool, // record and draw a trail
    #[serde(default)]
    pub random_velocity: Option<f64>, // extra velocity of this length in a seeded random direction
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub window: WindowConfig,
    pub bodies: Vec<BodyConfig>, // bodies that define the initial state
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
