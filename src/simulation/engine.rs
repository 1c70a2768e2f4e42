//! High-level runtime engine settings
//!
//! Selects the force backend and the diagnostic / presentation cadences
//! used when building and running a `Scenario`

use crate::configuration::config::SolverConfig;
use crate::error::{SimError, SimResult};
use super::energy::DEFAULT_ENERGY_INTERVAL;
use super::frames::DEFAULT_TARGET_FRAMES;
use super::trail::DEFAULT_TRAIL_CAPACITY;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub solver: SolverConfig,             // direct or parallel pair sum
    pub energy_interval: u64,             // steps between energy samples
    pub target_frames: u64,               // upper bound on frames per run
    pub trail_capacity: usize,            // points kept per body
    pub frame_body_limit: Option<usize>,  // snapshot only the first N bodies
}

impl Engine {
    pub fn validate(&self) -> SimResult<()> {
        if self.energy_interval == 0 {
            return Err(SimError::invalid_parameter("energy_interval", "must be at least 1"));
        }
        if self.target_frames == 0 {
            return Err(SimError::invalid_parameter("target_frames", "must be at least 1"));
        }
        if self.trail_capacity == 0 {
            return Err(SimError::invalid_parameter("trail_capacity", "must be at least 1"));
        }
        if self.frame_body_limit == Some(0) {
            return Err(SimError::invalid_parameter("frame_body_limit", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Engine {
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
