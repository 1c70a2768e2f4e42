//! Error types for scenario construction.
//!
//! Every variant is a configuration error: it is raised while building a
//! scenario and stops the run before any step executes. Once a run is in
//! progress the engine has no failure modes.

use thiserror::Error;

/// Result type alias for simulation construction.
pub type SimResult<T> = Result<T, SimError>;

/// Errors detected while configuring a simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A body was given a zero, negative or non-finite mass.
    #[error("body `{name}` has non-positive mass {mass}")]
    InvalidMass { name: String, mass: f64 },

    /// A population request asked for zero bodies.
    #[error("requested body count must be positive, got {0}")]
    InvalidBodyCount(usize),

    /// The integration step is zero, negative or non-finite.
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f64),

    /// The simulated duration is zero, negative or non-finite.
    #[error("simulation duration must be positive, got {0} years")]
    InvalidDuration(f64),

    /// Any other numeric setting outside its valid range.
    #[error("invalid parameter `{name}`: {details}")]
    InvalidParameter { name: &'static str, details: String },
}

impl SimError {
    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            details: details.into(),
        }
    }
}
