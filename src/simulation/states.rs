//! Core state types for the solar system simulation.
//!
//! - `Body`: one point mass (identity, kinematics, force accumulator,
//!   derived reporting values, rendering hints, trail)
//! - `SimulationState`: the ordered body list plus clock and energy log
//!
//! Units: positions in AU, velocities in AU/year, masses in solar masses.

use nalgebra::Vector2;

use crate::error::{SimError, SimResult};
use super::clock::SimulationClock;
use super::energy::EnergyLog;
use super::trail::{TrailBuffer, DEFAULT_TRAIL_CAPACITY};

pub type NVec2 = Vector2<f64>;

/// What a body is; only the star is treated specially (it reports zero
/// distance and speed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Asteroid,
}

/// Presentation data carried through untouched by the physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderHints {
    pub color: [f32; 3], // linear-ish sRGB in 0..1
    pub size: f32,       // marker area in display units
}

impl RenderHints {
    pub const fn new(color: [f32; 3], size: f32) -> Self {
        Self { color, size }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    mass: f64,                   // solar masses, always > 0
    pub position: NVec2,         // AU
    pub velocity: NVec2,         // AU/year
    pub(crate) force: NVec2,     // rebuilt from zero every step
    distance: f64,               // from the origin, 0 for the star
    speed: f64,                  // |velocity|, 0 for the star
    pub hints: RenderHints,
    pub(crate) trail: TrailBuffer,
}

impl Body {
    /// Build a body, rejecting non-positive (or non-finite) masses
    pub fn new(
        name: impl Into<String>,
        kind: BodyKind,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
        hints: RenderHints,
    ) -> SimResult<Self> {
        let name = name.into();
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimError::InvalidMass { name, mass });
        }

        let mut body = Self {
            name,
            kind,
            mass,
            position,
            velocity,
            force: NVec2::zeros(),
            distance: 0.0,
            speed: 0.0,
            hints,
            trail: TrailBuffer::new(DEFAULT_TRAIL_CAPACITY),
        };
        body.refresh_derived();
        Ok(body)
    }

    /// Replace the trail with an empty one of a different capacity
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = TrailBuffer::new(capacity);
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Net force from the most recent force evaluation
    pub fn force(&self) -> NVec2 {
        self.force
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// z-component of r x (m v) about the origin
    pub fn angular_momentum(&self) -> f64 {
        self.mass * (self.position.x * self.velocity.y - self.position.y * self.velocity.x)
    }

    /// Kepler period in years for the current distance (a^3 = P^2 in
    /// solar units); 0 for the star
    pub fn nominal_period(&self) -> f64 {
        if self.is_star() {
            0.0
        } else {
            self.distance.powi(3).sqrt()
        }
    }

    /// Recompute reporting values from position and velocity
    pub(crate) fn refresh_derived(&mut self) {
        if self.is_star() {
            self.distance = 0.0;
            self.speed = 0.0;
        } else {
            self.distance = self.position.norm();
            self.speed = self.velocity.norm();
        }
    }
}

/// Everything that changes during a run. Index 0 is conventionally the star.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub(crate) bodies: Vec<Body>,
    pub(crate) clock: SimulationClock,
    pub(crate) energy_log: EnergyLog,
}

impl SimulationState {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            clock: SimulationClock::new(),
            energy_log: EnergyLog::default(),
        }
    }

    /// Bodies are only ever appended, never removed
    pub fn push_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn energy_log(&self) -> &EnergyLog {
        &self.energy_log
    }

    /// Mass of body 0, or 0 for an empty system
    pub fn star_mass(&self) -> f64 {
        self.bodies.first().map_or(0.0, Body::mass)
    }

    /// Sum of m v over all bodies; constant for an isolated system
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies.iter().map(Body::angular_momentum).sum()
    }
}
