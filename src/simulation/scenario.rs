//! Build and drive fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`SimulationState`, catalog plus optional belt at t = 0)
//! - the active force solver, energy monitor and frame sampler
//!
//! The scenario is the single owner of the state. Consumers only ever see
//! `Frame`s produced after a step has fully completed.

use tracing::{debug, info, warn};

use crate::configuration::config::{ScenarioConfig, SolverConfig};
use crate::error::SimResult;
use super::catalog::BodyCatalogFactory;
use super::energy::{EnergyLog, EnergyMonitor};
use super::engine::Engine;
use super::forces::{ForceSolver, NewtonianGravity};
#[cfg(feature = "parallel")]
use super::forces::ParallelNewtonianGravity;
use super::frames::{Frame, FrameSampler, FrameSink};
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::states::SimulationState;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    state: SimulationState,
    forces: Box<dyn ForceSolver + Send + Sync>,
    monitor: EnergyMonitor,
    sampler: FrameSampler,
}

/// Pick the force backend for an engine setting
fn make_solver(solver: SolverConfig, params: &Parameters) -> Box<dyn ForceSolver + Send + Sync> {
    match solver {
        SolverConfig::Direct => Box::new(NewtonianGravity::new(params.g, params.distance_floor)),
        #[cfg(feature = "parallel")]
        SolverConfig::Parallel => {
            Box::new(ParallelNewtonianGravity::new(params.g, params.distance_floor))
        }
        #[cfg(not(feature = "parallel"))]
        SolverConfig::Parallel => {
            warn!("built without the `parallel` feature; using the direct solver");
            Box::new(NewtonianGravity::new(params.g, params.distance_floor))
        }
    }
}

impl Scenario {
    /// Validate `cfg`, build the catalog (and belt) and wire up the engine
    ///
    /// Any configuration error is returned before a single body exists.
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        cfg.validate()?;
        let engine = cfg.engine();
        let parameters = cfg.parameters();

        let mut factory = BodyCatalogFactory::new(parameters.seed)
            .with_gravity(parameters.g)
            .with_trail_capacity(engine.trail_capacity);
        let mut state = factory.build_catalog()?;
        if cfg.bodies.asteroids > 0 {
            factory.add_asteroid_belt(&mut state, cfg.bodies.asteroids)?;
        }

        let scenario = Self::from_state(state, engine, parameters)?;
        info!(
            bodies = scenario.state.body_count(),
            steps = scenario.total_steps(),
            dt = scenario.parameters.dt,
            frame_stride = scenario.sampler.stride(),
            "scenario built"
        );
        Ok(scenario)
    }

    /// Wrap an already-built state (custom systems, tests)
    pub fn from_state(state: SimulationState, engine: Engine, parameters: Parameters) -> SimResult<Self> {
        parameters.validate()?;
        engine.validate()?;

        let sampler = FrameSampler::new(parameters.total_steps(), engine.target_frames)?
            .with_body_limit(engine.frame_body_limit);
        let forces = make_solver(engine.solver, &parameters);
        let monitor = EnergyMonitor::new(engine.energy_interval);

        Ok(Self {
            engine,
            parameters,
            state,
            forces,
            monitor,
            sampler,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn energy_log(&self) -> &EnergyLog {
        self.state.energy_log()
    }

    pub fn energy_drift_percent(&self) -> Option<f64> {
        self.state.energy_log().drift_percent()
    }

    pub fn total_steps(&self) -> u64 {
        self.parameters.total_steps()
    }

    pub fn frame_stride(&self) -> u64 {
        self.sampler.stride()
    }

    pub fn is_finished(&self) -> bool {
        self.state.clock().steps() >= self.total_steps()
    }

    /// Total mechanical energy of the current configuration (not logged)
    pub fn current_energy(&self) -> f64 {
        super::energy::total_energy(self.state.bodies(), self.forces.as_ref())
    }

    /// One full step: integrate, sample energy on cadence, then maybe
    /// snapshot the finished state
    pub fn step(&mut self) -> Option<Frame> {
        symplectic_euler(&mut self.state, self.forces.as_ref(), self.parameters.dt);

        if let Some(sample) = self.monitor.maybe_sample(&mut self.state, self.forces.as_ref()) {
            debug!(time = sample.time, energy = sample.energy, "energy sample");
        }

        self.sampler.sample(&self.state)
    }

    /// Run `steps` more steps, forwarding frames to `sink`
    pub fn run_steps(&mut self, steps: u64, sink: &mut dyn FrameSink) {
        for _ in 0..steps {
            if let Some(frame) = self.step() {
                sink.on_frame(frame);
            }
        }
    }

    /// Run the remaining steps of the configured duration
    pub fn run(&mut self, sink: &mut dyn FrameSink) {
        let total = self.total_steps();
        let tick = (total / 10).max(1);

        while !self.is_finished() {
            if let Some(frame) = self.step() {
                sink.on_frame(frame);
            }
            let done = self.state.clock().steps();
            if done % tick == 0 {
                info!(percent = 100 * done / total.max(1), "simulating");
            }
        }

        match self.energy_drift_percent() {
            Some(drift) if drift > 1.0 => {
                warn!(drift_percent = drift, "energy drift above 1%; consider a smaller dt")
            }
            Some(drift) => info!(drift_percent = drift, "run finished"),
            None => info!("run finished (too few energy samples for drift)"),
        }
    }
}
