//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`EngineConfig`]     – force backend and diagnostic / frame cadences
//! - [`ParametersConfig`] – duration, step size and physical constants
//! - [`BodiesConfig`]     – asteroid belt size and presentation flag
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document describes the reference
//! run (3 years at dt = 0.01 with 25 asteroids).
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   solver: "direct"        # or "parallel"
//!   energy_interval: 50     # steps between energy samples
//!   target_frames: 800      # frame stride = max(1, steps / target_frames)
//!   trail_capacity: 500     # points kept per body
//!   frame_body_limit: null  # snapshot only the first N bodies
//!
//! parameters:
//!   years: 3.0
//!   dt: 0.01
//!   G: 39.47841760435743    # 4 pi^2
//!   distance_floor: 0.01
//!   seed: 42
//!
//! bodies:
//!   asteroids: 25           # 0 disables the belt
//!   show_asteroids: true
//! ```

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::engine::Engine;
use crate::simulation::energy::DEFAULT_ENERGY_INTERVAL;
use crate::simulation::forces::{DEFAULT_DISTANCE_FLOOR, G_SOLAR};
use crate::simulation::frames::DEFAULT_TARGET_FRAMES;
use crate::simulation::params::Parameters;
use crate::simulation::trail::DEFAULT_TRAIL_CAPACITY;

/// Which pairwise force backend the engine uses
/// `solver: "direct"` or `solver: "parallel"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverConfig {
    #[default]
    #[serde(rename = "direct")] // Single-threaded O(n^2) pair loop
    Direct,

    #[serde(rename = "parallel")] // Same pair loop spread over rayon workers (needs the `parallel` feature)
    Parallel,
}

/// Engine-level options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub solver: SolverConfig,
    pub energy_interval: u64,
    pub target_frames: u64,
    pub trail_capacity: usize,
    pub frame_body_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::Direct,
            energy_interval: DEFAULT_ENERGY_INTERVAL,
            target_frames: DEFAULT_TARGET_FRAMES,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            frame_body_limit: None,
        }
    }
}

/// Duration, step and physical constants
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub years: f64,          // simulated duration
    pub dt: f64,             // fixed step size in years
    #[serde(rename = "G")]
    pub g: f64,              // gravitational constant
    pub distance_floor: f64, // singularity clamp for force and energy
    pub seed: u64,           // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            years: 3.0,
            dt: 0.01,
            g: G_SOLAR,
            distance_floor: DEFAULT_DISTANCE_FLOOR,
            seed: 42,
        }
    }
}

/// Body population options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BodiesConfig {
    pub asteroids: usize,     // 0 disables the belt
    pub show_asteroids: bool, // presentation only
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            asteroids: 25,
            show_asteroids: true,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: BodiesConfig,
}

impl ScenarioConfig {
    /// Close-up of the star and the four inner planets: 2 years at
    /// dt = 0.005, no belt, 500 frames of the first five bodies
    pub fn inner_planets() -> Self {
        Self {
            engine: EngineConfig {
                target_frames: 500,
                frame_body_limit: Some(5),
                ..EngineConfig::default()
            },
            parameters: ParametersConfig {
                years: 2.0,
                dt: 0.005,
                ..ParametersConfig::default()
            },
            bodies: BodiesConfig {
                asteroids: 0,
                show_asteroids: false,
            },
        }
    }

    /// Runtime engine settings
    pub fn engine(&self) -> Engine {
        Engine {
            solver: self.engine.solver,
            energy_interval: self.engine.energy_interval,
            target_frames: self.engine.target_frames,
            trail_capacity: self.engine.trail_capacity,
            frame_body_limit: self.engine.frame_body_limit,
        }
    }

    /// Runtime numerical parameters
    pub fn parameters(&self) -> Parameters {
        Parameters {
            years: self.parameters.years,
            dt: self.parameters.dt,
            g: self.parameters.g,
            distance_floor: self.parameters.distance_floor,
            seed: self.parameters.seed,
        }
    }

    /// Check every setting before anything is built
    pub fn validate(&self) -> SimResult<()> {
        self.parameters().validate()?;
        self.engine().validate()
    }
}
