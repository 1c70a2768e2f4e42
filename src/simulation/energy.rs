//! Energy conservation diagnostics
//!
//! `EnergyMonitor` samples total mechanical energy (kinetic + potential) on
//! a fixed step cadence and appends `(time, energy)` to the state's
//! append-only `EnergyLog`. Drift is reported, never corrected.

use super::forces::ForceSolver;
use super::states::{Body, SimulationState};

/// Reference cadence: one sample every 50 steps
pub const DEFAULT_ENERGY_INTERVAL: u64 = 50;

/// One diagnostic sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub time: f64,   // years
    pub energy: f64, // solar mass AU^2 / year^2
}

/// Append-only sequence of energy samples
#[derive(Debug, Clone, Default)]
pub struct EnergyLog {
    samples: Vec<EnergySample>,
}

impl EnergyLog {
    pub fn samples(&self) -> &[EnergySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&EnergySample> {
        self.samples.first()
    }

    pub fn latest(&self) -> Option<&EnergySample> {
        self.samples.last()
    }

    pub(crate) fn push(&mut self, sample: EnergySample) {
        self.samples.push(sample);
    }

    /// |(E_latest - E_first) / E_first| * 100
    ///
    /// `None` until two samples exist, or if the first energy is zero.
    pub fn drift_percent(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            return None;
        }
        let first = self.samples[0].energy;
        let latest = self.samples[self.samples.len() - 1].energy;
        relative_percent(first, latest)
    }

    /// Largest drift of any sample relative to the first one
    pub fn max_drift_percent(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            return None;
        }
        let first = self.samples[0].energy;
        self.samples[1..]
            .iter()
            .filter_map(|s| relative_percent(first, s.energy))
            .reduce(f64::max)
    }
}

fn relative_percent(reference: f64, value: f64) -> Option<f64> {
    if reference == 0.0 {
        None
    } else {
        Some(((value - reference) / reference).abs() * 100.0)
    }
}

/// Sum of 0.5 m v^2
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Kinetic plus the solver's potential energy
pub fn total_energy(bodies: &[Body], forces: &dyn ForceSolver) -> f64 {
    kinetic_energy(bodies) + forces.potential_energy(bodies)
}

/// Samples energy every `interval` completed steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyMonitor {
    pub interval: u64,
}

impl EnergyMonitor {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }

    /// Compute energy now and append it to the log
    pub fn sample(&self, state: &mut SimulationState, forces: &dyn ForceSolver) -> EnergySample {
        let sample = EnergySample {
            time: state.clock.time(),
            energy: total_energy(&state.bodies, forces),
        };
        state.energy_log.push(sample);
        sample
    }

    /// Sample only on the configured cadence; returns the sample if taken
    pub fn maybe_sample(
        &self,
        state: &mut SimulationState,
        forces: &dyn ForceSolver,
    ) -> Option<EnergySample> {
        if state.clock.is_multiple_of(self.interval) {
            Some(self.sample(state, forces))
        } else {
            None
        }
    }
}

impl Default for EnergyMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_ENERGY_INTERVAL)
    }
}
