//! Initial body populations: the fixed planet catalog and a random
//! asteroid belt.
//!
//! All randomness comes from the factory's own seeded `ChaCha8Rng`, so two
//! factories built with the same seed produce identical bodies.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{SimError, SimResult};
use super::forces::G_SOLAR;
use super::states::{Body, BodyKind, NVec2, RenderHints, SimulationState};
use super::trail::DEFAULT_TRAIL_CAPACITY;

/// One row of the planet catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub mass: f64,     // solar masses
    pub distance: f64, // mean distance from the star, AU
    pub speed: f64,    // mean orbital speed, AU/year
    pub hints: RenderHints,
}

const fn entry(
    name: &'static str,
    mass: f64,
    distance: f64,
    speed: f64,
    color: [f32; 3],
    size: f32,
) -> CatalogEntry {
    CatalogEntry {
        name,
        mass,
        distance,
        speed,
        hints: RenderHints::new(color, size),
    }
}

const GOLD: [f32; 3] = [1.0, 0.84, 0.0];
const GRAY: [f32; 3] = [0.5, 0.5, 0.5];
const ORANGE: [f32; 3] = [1.0, 0.65, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const BROWN: [f32; 3] = [0.65, 0.16, 0.16];
const GOLDENROD: [f32; 3] = [0.85, 0.65, 0.13];
const LIGHT_BLUE: [f32; 3] = [0.68, 0.85, 0.9];
const DARK_BLUE: [f32; 3] = [0.0, 0.0, 0.55];

/// The star followed by the eight planets
pub const SOLAR_CATALOG: [CatalogEntry; 9] = [
    entry("Sun", 1.0, 0.0, 0.0, GOLD, 300.0),
    entry("Mercury", 1.66e-7, 0.39, 9.8, GRAY, 20.0),
    entry("Venus", 2.45e-6, 0.72, 7.4, ORANGE, 25.0),
    entry("Earth", 3.0e-6, 1.0, 6.3, BLUE, 25.0),
    entry("Mars", 3.23e-7, 1.5, 5.1, RED, 22.0),
    entry("Jupiter", 9.55e-4, 5.2, 2.8, BROWN, 100.0),
    entry("Saturn", 2.86e-4, 9.5, 2.0, GOLDENROD, 90.0),
    entry("Uranus", 4.37e-5, 19.2, 1.4, LIGHT_BLUE, 50.0),
    entry("Neptune", 5.15e-5, 30.1, 1.1, DARK_BLUE, 50.0),
];

/// Belt annulus between Mars and Jupiter, AU
pub const ASTEROID_DISTANCE_RANGE: Range<f64> = 2.2..3.3;
/// Negligible masses, solar masses
pub const ASTEROID_MASS_RANGE: Range<f64> = 1e-12..1e-10;
/// Multiplicative jitter on the circular speed
pub const ASTEROID_SPEED_JITTER: Range<f64> = 0.95..1.05;
const ASTEROID_SIZE_RANGE: Range<f32> = 2.0..5.0;

/// Place a body on a circle of radius `distance` at phase `angle`, moving
/// tangentially (counter-clockwise) at `speed`
fn on_circle(distance: f64, speed: f64, angle: f64) -> (NVec2, NVec2) {
    let (sin, cos) = angle.sin_cos();
    let position = NVec2::new(distance * cos, distance * sin);
    let velocity = NVec2::new(-speed * sin, speed * cos);
    (position, velocity)
}

/// Builds simulation states from the catalog, with injected randomness
#[derive(Debug, Clone)]
pub struct BodyCatalogFactory {
    rng: ChaCha8Rng,
    g: f64,
    trail_capacity: usize,
}

impl BodyCatalogFactory {
    /// Factory seeded deterministically from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            g: G_SOLAR,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }

    /// Gravitational constant used for asteroid circular speeds
    pub fn with_gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    /// Star at the origin at rest, then each planet at a random phase on
    /// its mean orbit
    pub fn build_catalog(&mut self) -> SimResult<SimulationState> {
        self.build_from_entries(&SOLAR_CATALOG)
    }

    /// Same as [`build_catalog`](Self::build_catalog) for a custom table.
    /// The first entry is the star.
    pub fn build_from_entries(&mut self, entries: &[CatalogEntry]) -> SimResult<SimulationState> {
        if entries.is_empty() {
            return Err(SimError::InvalidBodyCount(0));
        }

        let mut bodies = Vec::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            let body = if i == 0 {
                Body::new(e.name, BodyKind::Star, e.mass, NVec2::zeros(), NVec2::zeros(), e.hints)?
            } else {
                let angle = self.rng.gen_range(0.0..TAU);
                let (position, velocity) = on_circle(e.distance, e.speed, angle);
                Body::new(e.name, BodyKind::Planet, e.mass, position, velocity, e.hints)?
            };
            bodies.push(body.with_trail_capacity(self.trail_capacity));
        }

        Ok(SimulationState::new(bodies))
    }

    /// Append `count` asteroids on near-circular orbits around body 0
    ///
    /// Speed is sqrt(G M_star / d) times a jitter in [0.95, 1.05). The
    /// asteroids take part in every force and energy computation.
    pub fn add_asteroid_belt(&mut self, state: &mut SimulationState, count: usize) -> SimResult<()> {
        if count == 0 {
            return Err(SimError::InvalidBodyCount(0));
        }
        if state.body_count() == 0 {
            return Err(SimError::invalid_parameter(
                "asteroids",
                "an asteroid belt needs a star at index 0",
            ));
        }

        let star_mass = state.star_mass();
        let already = state
            .bodies()
            .iter()
            .filter(|b| b.kind == BodyKind::Asteroid)
            .count();

        for k in 0..count {
            let distance = self.rng.gen_range(ASTEROID_DISTANCE_RANGE);
            let angle = self.rng.gen_range(0.0..TAU);
            let circular = (self.g * star_mass / distance).sqrt();
            let speed = circular * self.rng.gen_range(ASTEROID_SPEED_JITTER);
            let mass = self.rng.gen_range(ASTEROID_MASS_RANGE);
            let size = self.rng.gen_range(ASTEROID_SIZE_RANGE);

            let (position, velocity) = on_circle(distance, speed, angle);
            let body = Body::new(
                format!("Asteroid_{}", already + k + 1),
                BodyKind::Asteroid,
                mass,
                position,
                velocity,
                RenderHints::new(GRAY, size),
            )?;
            state.push_body(body.with_trail_capacity(self.trail_capacity));
        }

        Ok(())
    }
}
