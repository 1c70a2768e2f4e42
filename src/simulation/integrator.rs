//! Fixed-step time integration for the solar system
//!
//! Semi-implicit (symplectic) Euler: the velocity kick happens first and the
//! drift uses the freshly updated velocity. One force evaluation per step.

use super::forces::ForceSolver;
use super::states::SimulationState;

/// Advance `state` by one step of length `dt`
///
/// Order within the step is fixed: forces, then kick + drift for every body,
/// then derived values and trails, then the clock. Nothing else observes the
/// state until this returns.
pub fn symplectic_euler(state: &mut SimulationState, forces: &dyn ForceSolver, dt: f64) {
    if state.bodies.is_empty() {
        // Nothing to move, but time still passes
        state.clock.advance(dt);
        return;
    }

    // F_n from x_n
    forces.compute_forces(&mut state.bodies);

    for b in state.bodies.iter_mut() {
        // Kick: v_n+1 = v_n + dt * F_n / m
        let a = b.force / b.mass();
        b.velocity += dt * a;

        // Drift: x_n+1 = x_n + dt * v_n+1
        b.position += dt * b.velocity;

        b.refresh_derived();
        b.trail.append(b.position);
    }

    state.clock.advance(dt);
}
