pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyKind, RenderHints, SimulationState, NVec2};
pub use simulation::forces::{ForceSolver, NewtonianGravity, G_SOLAR, DEFAULT_DISTANCE_FLOOR};
#[cfg(feature = "parallel")]
pub use simulation::forces::ParallelNewtonianGravity;
pub use simulation::integrator::symplectic_euler;
pub use simulation::energy::{EnergyLog, EnergyMonitor, EnergySample};
pub use simulation::trail::TrailBuffer;
pub use simulation::clock::SimulationClock;
pub use simulation::frames::{Frame, FrameRecorder, FrameSampler, FrameSink, BodyLabel, body_labels};
pub use simulation::catalog::{BodyCatalogFactory, SOLAR_CATALOG};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BodiesConfig, SolverConfig};

pub use visualization::ViewMode;
#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_2d;

pub use benchmark::benchmark::{bench_forces, bench_energy_drift};
