//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - duration and fixed step size (`years`, `dt`),
//! - gravitational constant and distance floor (`g`, `distance_floor`),
//! - random seed for body generation

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub years: f64,          // simulated duration
    pub dt: f64,             // fixed step size, years
    pub g: f64,              // gravitational constant
    pub distance_floor: f64, // minimum pair separation, AU
    pub seed: u64,           // deterministic seed
}

impl Parameters {
    /// Fail fast on values that cannot drive a run
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if !(self.years > 0.0 && self.years.is_finite()) {
            return Err(SimError::InvalidDuration(self.years));
        }
        if !(self.g > 0.0 && self.g.is_finite()) {
            return Err(SimError::invalid_parameter("G", format!("must be positive, got {}", self.g)));
        }
        if !(self.distance_floor > 0.0 && self.distance_floor.is_finite()) {
            return Err(SimError::invalid_parameter(
                "distance_floor",
                format!("must be positive, got {}", self.distance_floor),
            ));
        }
        Ok(())
    }

    /// Whole steps that fit in the duration (truncating)
    pub fn total_steps(&self) -> u64 {
        // small bias so 1.0 / 0.001 doesn't truncate to 999
        (self.years / self.dt + 1e-9).floor() as u64
    }
}
