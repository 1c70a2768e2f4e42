//! Pairwise gravitational force solvers
//!
//! Defines the [`ForceSolver`] trait plus direct O(n^2) Newtonian gravity,
//! serial and (with the `parallel` feature) rayon-backed.
//!
//! Close encounters are handled with a hard distance floor rather than
//! softening: below `distance_floor` the separation is clamped in the force
//! kernel and the pair is dropped from the potential. Both kernels share
//! the same floor so the energy diagnostic stays consistent with the forces.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::states::{Body, NVec2};

/// Gravitational constant in AU^3 / (solar mass * year^2); gives a one-year
/// period for a 1 AU orbit around one solar mass
pub const G_SOLAR: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;

/// Default minimum separation (AU) used by the force and energy kernels
pub const DEFAULT_DISTANCE_FLOOR: f64 = 0.01;

/// Trait for solvers that fill every body's force accumulator
pub trait ForceSolver {
    /// Zero all accumulators, then add the net force on each body
    fn compute_forces(&self, bodies: &mut [Body]);

    /// Total gravitational potential energy of the configuration
    fn potential_energy(&self, bodies: &[Body]) -> f64;
}

/// Direct-summation Newtonian gravity with a distance floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64,              // gravitational constant
    pub distance_floor: f64, // minimum separation
}

impl NewtonianGravity {
    pub fn new(g: f64, distance_floor: f64) -> Self {
        Self { g, distance_floor }
    }

    /// Force on body `i` due to body `j`. The force on `j` due to `i` is
    /// exactly the negation.
    pub fn pair_force(&self, bi: &Body, bj: &Body) -> NVec2 {
        // r points from i to j, so i is pulled along +r
        let r = bj.position - bi.position;
        let d = r.norm().max(self.distance_floor);
        let coef = self.g * bi.mass() * bj.mass() / (d * d * d);
        coef * r
    }

    /// -G m_i m_j / d, or 0 when the pair is at or inside the floor
    pub fn pair_potential(&self, bi: &Body, bj: &Body) -> f64 {
        let d = (bj.position - bi.position).norm();
        if d > self.distance_floor {
            -self.g * bi.mass() * bj.mass() / d
        } else {
            0.0
        }
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(G_SOLAR, DEFAULT_DISTANCE_FLOOR)
    }
}

impl ForceSolver for NewtonianGravity {
    fn compute_forces(&self, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            b.force = NVec2::zeros();
        }

        let n = bodies.len();
        // One evaluation per unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.pair_force(&bodies[i], &bodies[j]);
                bodies[i].force += f;
                bodies[j].force -= f;
            }
        }
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let n = bodies.len();
        let mut pe = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                pe += self.pair_potential(&bodies[i], &bodies[j]);
            }
        }
        pe
    }
}

/// Same physics as [`NewtonianGravity`], with pair rows spread over the
/// rayon pool.
///
/// Each worker folds into its own per-body partial sum vector. The partial
/// vectors are reduced after every pair has been evaluated and only then
/// written into the body accumulators, so the integrator never sees a
/// partially accumulated force.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallelNewtonianGravity {
    pub gravity: NewtonianGravity,
}

#[cfg(feature = "parallel")]
impl ParallelNewtonianGravity {
    pub fn new(g: f64, distance_floor: f64) -> Self {
        Self {
            gravity: NewtonianGravity::new(g, distance_floor),
        }
    }
}

#[cfg(feature = "parallel")]
impl ForceSolver for ParallelNewtonianGravity {
    fn compute_forces(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        let view: &[Body] = bodies;
        let gravity = &self.gravity;

        let totals = (0..n)
            .into_par_iter()
            .fold(
                || vec![NVec2::zeros(); n],
                |mut partial, i| {
                    for j in (i + 1)..n {
                        let f = gravity.pair_force(&view[i], &view[j]);
                        partial[i] += f;
                        partial[j] -= f;
                    }
                    partial
                },
            )
            .reduce(
                || vec![NVec2::zeros(); n],
                |mut acc, partial| {
                    for (a, p) in acc.iter_mut().zip(partial.iter()) {
                        *a += *p;
                    }
                    acc
                },
            );

        for (b, f) in bodies.iter_mut().zip(totals) {
            b.force = f;
        }
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let n = bodies.len();
        let gravity = &self.gravity;
        (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| gravity.pair_potential(&bodies[i], &bodies[j]))
                    .sum::<f64>()
            })
            .sum()
    }
}
