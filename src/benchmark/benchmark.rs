use std::time::Instant;

use crate::simulation::catalog::BodyCatalogFactory;
use crate::simulation::energy::EnergyMonitor;
use crate::simulation::forces::{ForceSolver, NewtonianGravity, DEFAULT_DISTANCE_FLOOR, G_SOLAR};
#[cfg(feature = "parallel")]
use crate::simulation::forces::ParallelNewtonianGravity;
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::SimulationState;
use crate::error::SimResult;

/// Catalog plus `asteroids` belt bodies from a fixed seed
fn make_state(asteroids: usize) -> SimResult<SimulationState> {
    let mut factory = BodyCatalogFactory::new(7);
    let mut state = factory.build_catalog()?;
    factory.add_asteroid_belt(&mut state, asteroids)?;
    Ok(state)
}

/// Average milliseconds per force evaluation over `reps` calls
fn time_solver(solver: &dyn ForceSolver, state: &SimulationState, reps: u32) -> f64 {
    let mut bodies = state.bodies().to_vec();

    // Warm up
    solver.compute_forces(&mut bodies);

    let t0 = Instant::now();
    for _ in 0..reps {
        solver.compute_forces(&mut bodies);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / reps as f64
}

/// Direct vs parallel pair sums for growing belts
/// Paste output directly into a spreadsheet to graph
pub fn bench_forces() -> SimResult<()> {
    println!("N,direct_ms,parallel_ms");

    for asteroids in [100, 200, 400, 800, 1600, 3200] {
        let state = make_state(asteroids)?;
        let n = state.body_count();
        // Small n: average over more calls to smooth noise
        let reps = if n <= 500 { 20 } else { 3 };

        let direct = NewtonianGravity::default();
        let ms_direct = time_solver(&direct, &state, reps);

        #[cfg(feature = "parallel")]
        let ms_parallel = time_solver(&ParallelNewtonianGravity::default(), &state, reps);
        #[cfg(not(feature = "parallel"))]
        let ms_parallel = f64::NAN;

        println!("{},{:.6},{:.6}", n, ms_direct, ms_parallel);
    }
    Ok(())
}

/// Energy drift after three years of the plain catalog for a sweep of dt
pub fn bench_energy_drift() -> SimResult<()> {
    println!("dt,steps,drift_percent,ms");

    for dt in [0.02, 0.01, 0.005, 0.002, 0.001] {
        let params = Parameters {
            years: 3.0,
            dt,
            g: G_SOLAR,
            distance_floor: DEFAULT_DISTANCE_FLOOR,
            seed: 7,
        };
        params.validate()?;
        let gravity = NewtonianGravity::new(params.g, params.distance_floor);

        let mut state = BodyCatalogFactory::new(params.seed).build_catalog()?;
        let monitor = EnergyMonitor::new(1);
        monitor.sample(&mut state, &gravity);

        let steps = params.total_steps();
        let t0 = Instant::now();
        for _ in 0..steps {
            symplectic_euler(&mut state, &gravity, dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0;
        monitor.sample(&mut state, &gravity);

        let drift = state.energy_log().drift_percent().unwrap_or(f64::NAN);
        println!("{},{},{:.6},{:.3}", dt, steps, drift, ms);
    }
    Ok(())
}
