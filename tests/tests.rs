use std::f64::consts::PI;

use orbitsim::simulation::catalog::{ASTEROID_DISTANCE_RANGE, ASTEROID_MASS_RANGE};
use orbitsim::simulation::engine::Engine;
use orbitsim::simulation::params::Parameters;
use orbitsim::{
    symplectic_euler, Body, BodyCatalogFactory, BodyKind, EnergyMonitor, ForceSolver, Frame,
    FrameRecorder, FrameSampler, NVec2, NewtonianGravity, RenderHints, Scenario, ScenarioConfig,
    SimError, SimulationState, G_SOLAR,
};

const HINTS: RenderHints = RenderHints::new([1.0, 1.0, 1.0], 10.0);

fn body(name: &str, kind: BodyKind, m: f64, x: [f64; 2], v: [f64; 2]) -> Body {
    Body::new(name, kind, m, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]), HINTS).unwrap()
}

/// Star of mass 1 at rest at the origin, one planet at 1 AU moving at 2 pi AU/yr
pub fn star_and_planet(planet_mass: f64) -> SimulationState {
    SimulationState::new(vec![
        body("Sun", BodyKind::Star, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("Earth", BodyKind::Planet, planet_mass, [1.0, 0.0], [0.0, 2.0 * PI]),
    ])
}

/// A few bodies scattered irregularly
pub fn scattered_system() -> SimulationState {
    SimulationState::new(vec![
        body("a", BodyKind::Star, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("b", BodyKind::Planet, 1e-3, [1.3, -0.4], [0.5, 5.0]),
        body("c", BodyKind::Planet, 3e-4, [-2.1, 0.7], [-1.0, -3.0]),
        body("d", BodyKind::Asteroid, 1e-10, [0.2, 2.9], [3.6, 0.0]),
    ])
}

/// Runtime settings with an explicit energy cadence
pub fn test_engine(energy_interval: u64) -> Engine {
    Engine {
        energy_interval,
        ..Engine::default()
    }
}

pub fn test_params(years: f64, dt: f64) -> Parameters {
    Parameters {
        years,
        dt,
        g: G_SOLAR,
        distance_floor: 0.01,
        seed: 42,
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = scattered_system();
    let gravity = NewtonianGravity::default();
    let bodies = sys.bodies();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let fij = gravity.pair_force(&bodies[i], &bodies[j]);
            let fji = gravity.pair_force(&bodies[j], &bodies[i]);
            let scale = fij.norm().max(1e-300);
            assert!(
                (fij + fji).norm() / scale < 1e-12,
                "pair ({i}, {j}) not equal and opposite: {fij:?} vs {fji:?}"
            );
        }
    }

    let mut bodies = bodies.to_vec();
    gravity.compute_forces(&mut bodies);
    let net = bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.force());
    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();

    let mut bodies = sys.bodies().to_vec();
    gravity.compute_forces(&mut bodies);

    let dx = bodies[0].position - bodies[1].position;
    assert!(bodies[1].force().dot(&dx) > 0.0, "Planet is not pulled toward the star");
    assert!(bodies[0].force().dot(&dx) < 0.0, "Star is not pulled toward the planet");

    // bodies can still be appended after construction
    sys.push_body(body("extra", BodyKind::Asteroid, 1e-12, [3.0, 0.0], [0.0, 3.6]));
    assert_eq!(sys.body_count(), 3);
}

#[test]
fn gravity_inverse_square_law() {
    let gravity = NewtonianGravity::default();
    let near = [
        body("a", BodyKind::Star, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("b", BodyKind::Planet, 1.0, [1.0, 0.0], [0.0, 0.0]),
    ];
    let far = [
        body("a", BodyKind::Star, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("b", BodyKind::Planet, 1.0, [2.0, 0.0], [0.0, 0.0]),
    ];

    let ratio = gravity.pair_force(&near[0], &near[1]).norm() / gravity.pair_force(&far[0], &far[1]).norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);

    let expected = G_SOLAR; // G m m / d^2 with unit masses at 1 AU
    let f = gravity.pair_force(&near[0], &near[1]).norm();
    assert!((f - expected).abs() < 1e-9, "Expected {expected}, got {f}");
}

#[test]
fn distance_floor_prevents_blowup() {
    let gravity = NewtonianGravity::default();
    let pair = [
        body("a", BodyKind::Planet, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("b", BodyKind::Planet, 1.0, [1e-9, 0.0], [0.0, 0.0]),
    ];

    let f = gravity.pair_force(&pair[0], &pair[1]);
    let bound = G_SOLAR / (0.01 * 0.01);
    assert!(f.norm().is_finite());
    assert!(f.norm() <= bound, "Floor failed; force too large: {}", f.norm());

    // the same pair contributes nothing to the potential
    assert_eq!(gravity.pair_potential(&pair[0], &pair[1]), 0.0);
    assert_eq!(gravity.potential_energy(&pair), 0.0);
}

#[test]
fn forces_are_rebuilt_every_call() {
    let gravity = NewtonianGravity::default();
    let mut bodies = scattered_system().bodies().to_vec();

    gravity.compute_forces(&mut bodies);
    let first: Vec<NVec2> = bodies.iter().map(|b| b.force()).collect();
    gravity.compute_forces(&mut bodies);
    let second: Vec<NVec2> = bodies.iter().map(|b| b.force()).collect();

    assert_eq!(first, second, "Forces carried over between evaluations");
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_solver_matches_direct() {
    use orbitsim::ParallelNewtonianGravity;

    let mut factory = BodyCatalogFactory::new(3);
    let mut state = factory.build_catalog().unwrap();
    factory.add_asteroid_belt(&mut state, 200).unwrap();

    let direct = NewtonianGravity::default();
    let parallel = ParallelNewtonianGravity::default();

    let mut a = state.bodies().to_vec();
    let mut b = state.bodies().to_vec();
    direct.compute_forces(&mut a);
    parallel.compute_forces(&mut b);

    for (x, y) in a.iter().zip(b.iter()) {
        let scale = x.force().norm().max(1e-300);
        assert!(
            (x.force() - y.force()).norm() / scale < 1e-9,
            "{}: {:?} vs {:?}",
            x.name,
            x.force(),
            y.force()
        );
    }

    let pe_direct = direct.potential_energy(state.bodies());
    let pe_parallel = parallel.potential_energy(state.bodies());
    assert!(((pe_direct - pe_parallel) / pe_direct).abs() < 1e-12);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn integrator_advances_clock() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();

    for _ in 0..10 {
        symplectic_euler(&mut sys, &gravity, 0.01);
    }

    assert_eq!(sys.clock().steps(), 10);
    assert!((sys.time() - 0.1).abs() < 1e-12);
}

#[test]
fn integrator_kick_feeds_drift() {
    let mut sys = star_and_planet(1e-10);
    let gravity = NewtonianGravity::default();
    let dt = 0.01;

    symplectic_euler(&mut sys, &gravity, dt);

    // v1 = v0 + a dt with a = -G (1, 0); x1 = x0 + v1 dt
    let planet = &sys.bodies()[1];
    let v1 = NVec2::new(-G_SOLAR * dt, 2.0 * PI);
    let x1 = NVec2::new(1.0, 0.0) + v1 * dt;
    assert!((planet.velocity - v1).norm() < 1e-9, "velocity {:?}", planet.velocity);
    assert!((planet.position - x1).norm() < 1e-9, "position {:?}", planet.position);
    assert!((planet.distance() - x1.norm()).abs() < 1e-12);
    assert!((planet.speed() - v1.norm()).abs() < 1e-12);
}

#[test]
fn star_reports_zero_distance_and_speed() {
    let mut sys = star_and_planet(1e-3);
    let gravity = NewtonianGravity::default();

    for _ in 0..100 {
        symplectic_euler(&mut sys, &gravity, 0.01);
    }

    let star = &sys.bodies()[0];
    assert!(star.velocity.norm() > 0.0, "heavy planet should move the star");
    assert_eq!(star.distance(), 0.0);
    assert_eq!(star.speed(), 0.0);
}

#[test]
fn two_body_momentum_conserved() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();
    let p0 = sys.total_momentum();

    for _ in 0..5000 {
        symplectic_euler(&mut sys, &gravity, 0.001);
    }

    let p1 = sys.total_momentum();
    assert!(
        (p1 - p0).norm() <= 1e-9 * p0.norm(),
        "momentum drifted from {:?} to {:?}",
        p0,
        p1
    );
}

#[test]
fn two_body_angular_momentum_conserved() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();
    let l0 = sys.total_angular_momentum();

    for _ in 0..1000 {
        symplectic_euler(&mut sys, &gravity, 0.001);
    }

    let l1 = sys.total_angular_momentum();
    assert!(((l1 - l0) / l0).abs() < 1e-9, "angular momentum drifted from {l0} to {l1}");
}

#[test]
fn one_year_completes_one_orbit() {
    let mut sys = star_and_planet(1e-10);
    let gravity = NewtonianGravity::new(4.0 * PI * PI, 0.01);

    for _ in 0..1000 {
        symplectic_euler(&mut sys, &gravity, 0.001);
    }

    assert!((sys.time() - 1.0).abs() < 1e-9);
    let planet = &sys.bodies()[1];
    let r = planet.distance();
    assert!((r - 1.0).abs() < 0.01, "distance after one year: {r}");
    // back near the starting point as well
    assert!((planet.position - NVec2::new(1.0, 0.0)).norm() < 0.1, "{:?}", planet.position);
}

// ==================================================================================
// Energy tests
// ==================================================================================

#[test]
fn energy_sampled_on_cadence() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();
    let monitor = EnergyMonitor::new(50);
    let dt = 0.001;

    for _ in 0..120 {
        symplectic_euler(&mut sys, &gravity, dt);
        monitor.maybe_sample(&mut sys, &gravity);
    }

    let samples = sys.energy_log().samples();
    assert_eq!(samples.len(), 2);
    assert!((samples[0].time - 50.0 * dt).abs() < 1e-12);
    assert!((samples[1].time - 100.0 * dt).abs() < 1e-12);
    assert!(samples[0].energy < 0.0, "bound orbit must have negative energy");
}

#[test]
fn drift_needs_two_samples() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();
    let monitor = EnergyMonitor::new(1);

    assert_eq!(sys.energy_log().drift_percent(), None);
    monitor.sample(&mut sys, &gravity);
    assert_eq!(sys.energy_log().drift_percent(), None);
    monitor.sample(&mut sys, &gravity);
    assert_eq!(sys.energy_log().drift_percent(), Some(0.0));
}

#[test]
fn energy_drift_small_for_small_dt() {
    let mut scenario = Scenario::from_state(star_and_planet(3e-6), test_engine(50), test_params(1.0, 0.001)).unwrap();
    scenario.run(&mut FrameRecorder::new());

    assert_eq!(scenario.state().clock().steps(), 1000);
    assert_eq!(scenario.energy_log().len(), 20);
    let drift = scenario.energy_drift_percent().unwrap();
    assert!(drift < 1.0, "drift {drift}% over one orbit");
}

#[test]
fn energy_drift_grows_with_dt() {
    let max_drift = |dt: f64| {
        let mut scenario =
            Scenario::from_state(star_and_planet(3e-6), test_engine(1), test_params(1.0, dt)).unwrap();
        scenario.run(&mut FrameRecorder::new());
        scenario.energy_log().max_drift_percent().unwrap()
    };

    let fine = max_drift(0.001);
    let coarse = max_drift(0.02);
    assert!(fine < coarse, "fine {fine}% should be below coarse {coarse}%");
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_bounded_and_fifo() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();
    let mut history = Vec::new();

    for _ in 0..700 {
        symplectic_euler(&mut sys, &gravity, 0.001);
        history.push(sys.bodies()[1].position);
        assert!(sys.bodies()[1].trail().len() <= 500);
    }

    let trail = sys.bodies()[1].trail();
    assert_eq!(trail.len(), 500);
    assert_eq!(trail.oldest(), Some(&history[200]));
    assert_eq!(trail.newest(), Some(&history[699]));
}

// ==================================================================================
// Catalog and asteroid belt tests
// ==================================================================================

#[test]
fn catalog_layout() {
    let state = BodyCatalogFactory::new(1).build_catalog().unwrap();
    let bodies = state.bodies();

    assert_eq!(bodies.len(), 9);
    assert_eq!(bodies[0].kind, BodyKind::Star);
    assert_eq!(bodies[0].mass(), 1.0);
    assert_eq!(bodies[0].position, NVec2::zeros());
    assert_eq!(bodies[0].velocity, NVec2::zeros());

    let earth = &bodies[3];
    assert_eq!(earth.name, "Earth");
    assert!((earth.distance() - 1.0).abs() < 1e-12);
    assert!((earth.speed() - 6.3).abs() < 1e-12);
    // velocity is tangential
    assert!(earth.position.dot(&earth.velocity).abs() < 1e-9);
    assert!(bodies[1..].iter().all(|b| b.kind == BodyKind::Planet && b.trail().is_empty()));
}

#[test]
fn catalog_nominal_periods_follow_kepler() {
    let state = BodyCatalogFactory::new(1).build_catalog().unwrap();
    let bodies = state.bodies();

    assert_eq!(bodies[0].nominal_period(), 0.0);
    let earth = &bodies[3];
    assert!((earth.nominal_period() - 1.0).abs() < 1e-9, "{}", earth.nominal_period());
    for b in &bodies[1..] {
        let expected = b.distance().powf(1.5);
        assert!((b.nominal_period() - expected).abs() < 1e-9, "{}", b.name);
    }
}

#[test]
fn asteroid_belt_adds_exact_count_in_range() {
    let mut factory = BodyCatalogFactory::new(42);
    let mut state = factory.build_catalog().unwrap();
    factory.add_asteroid_belt(&mut state, 25).unwrap();

    assert_eq!(state.body_count(), 9 + 25);
    for a in &state.bodies()[9..] {
        assert_eq!(a.kind, BodyKind::Asteroid);
        let d = a.distance();
        assert!(
            d >= ASTEROID_DISTANCE_RANGE.start - 1e-12 && d <= ASTEROID_DISTANCE_RANGE.end + 1e-12,
            "{} at {d} AU",
            a.name
        );
        assert!(a.mass() >= ASTEROID_MASS_RANGE.start && a.mass() < ASTEROID_MASS_RANGE.end);

        let circular = (G_SOLAR / d).sqrt();
        let jitter = a.speed() / circular;
        assert!((0.95 - 1e-9..=1.05 + 1e-9).contains(&jitter), "{} speed factor {jitter}", a.name);
    }
    assert_eq!(state.bodies()[9].name, "Asteroid_1");
    assert_eq!(state.bodies()[33].name, "Asteroid_25");
}

#[test]
fn asteroid_belt_is_deterministic_for_seed() {
    let build = || {
        let mut factory = BodyCatalogFactory::new(42);
        let mut state = factory.build_catalog().unwrap();
        factory.add_asteroid_belt(&mut state, 25).unwrap();
        state
    };
    let a = build();
    let b = build();

    for (x, y) in a.bodies().iter().zip(b.bodies().iter()) {
        assert_eq!(x.name, y.name);
        assert_eq!(x.mass(), y.mass());
        assert_eq!(x.position, y.position);
        assert_eq!(x.velocity, y.velocity);
    }

    let mut other = BodyCatalogFactory::new(43);
    let c = other.build_catalog().unwrap();
    assert_ne!(a.bodies()[3].position, c.bodies()[3].position);
}

#[test]
fn second_belt_continues_numbering() {
    let mut factory = BodyCatalogFactory::new(5);
    let mut state = factory.build_catalog().unwrap();
    factory.add_asteroid_belt(&mut state, 3).unwrap();
    factory.add_asteroid_belt(&mut state, 2).unwrap();

    let names: Vec<&str> = state.bodies()[9..].iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Asteroid_1", "Asteroid_2", "Asteroid_3", "Asteroid_4", "Asteroid_5"]);
}

// ==================================================================================
// Configuration error tests
// ==================================================================================

#[test]
fn non_positive_mass_rejected() {
    for m in [0.0, -1.0, f64::NAN] {
        let err = Body::new("bad", BodyKind::Planet, m, NVec2::zeros(), NVec2::zeros(), HINTS).unwrap_err();
        assert!(matches!(err, SimError::InvalidMass { .. }));
    }
}

#[test]
fn empty_belt_rejected() {
    let mut factory = BodyCatalogFactory::new(1);
    let mut state = factory.build_catalog().unwrap();
    assert_eq!(factory.add_asteroid_belt(&mut state, 0), Err(SimError::InvalidBodyCount(0)));
    assert_eq!(state.body_count(), 9);

    let mut empty = SimulationState::default();
    assert!(factory.add_asteroid_belt(&mut empty, 5).is_err());
}

#[test]
fn bad_step_or_duration_stops_before_building() {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.dt = -0.01;
    assert!(matches!(Scenario::build_scenario(&cfg), Err(SimError::InvalidTimeStep(_))));

    let mut cfg = ScenarioConfig::default();
    cfg.parameters.years = 0.0;
    assert!(matches!(Scenario::build_scenario(&cfg), Err(SimError::InvalidDuration(_))));

    let mut cfg = ScenarioConfig::default();
    cfg.engine.target_frames = 0;
    assert!(matches!(Scenario::build_scenario(&cfg), Err(SimError::InvalidParameter { .. })));
}

// ==================================================================================
// Frame and scenario tests
// ==================================================================================

#[test]
fn step_count_survives_float_division() {
    assert_eq!(test_params(3.0, 0.01).total_steps(), 300);
    assert_eq!(test_params(1.0, 0.001).total_steps(), 1000);
    assert_eq!(test_params(3.0, 0.02).total_steps(), 150);
    // a partial last step is dropped
    assert_eq!(test_params(1.0, 0.3).total_steps(), 3);
}

#[test]
fn frame_stride_from_target() {
    assert_eq!(FrameSampler::new(300, 800).unwrap().stride(), 1);
    assert_eq!(FrameSampler::new(3000, 800).unwrap().stride(), 3);
    assert!(FrameSampler::new(3000, 0).is_err());

    let sampler = FrameSampler::new(3000, 800).unwrap();
    assert!(sampler.should_capture(1));
    assert!(!sampler.should_capture(2));
    assert!(sampler.should_capture(4));
}

#[test]
fn frames_are_detached_snapshots() {
    let mut sys = star_and_planet(3e-6);
    let gravity = NewtonianGravity::default();
    symplectic_euler(&mut sys, &gravity, 0.01);

    let frame = Frame::capture(&sys, None);
    let before = frame.clone();
    for _ in 0..10 {
        symplectic_euler(&mut sys, &gravity, 0.01);
    }

    assert_eq!(frame, before);
    assert_eq!(frame.trails[1].len(), 1);
    assert_eq!(frame.distances[0], 0.0);
    assert_eq!(frame.speeds[0], 0.0);
    assert_eq!(sys.bodies()[1].trail().len(), 11);
}

#[test]
fn reference_run_produces_frames_and_samples() {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.years = 0.5;
    cfg.engine.target_frames = 20;

    let mut scenario = Scenario::build_scenario(&cfg).unwrap();
    assert_eq!(scenario.state().body_count(), 9 + 25);
    assert_eq!(scenario.total_steps(), 50);
    assert_eq!(scenario.frame_stride(), 2);

    let mut recorder = FrameRecorder::new();
    scenario.run(&mut recorder);

    assert!(scenario.is_finished());
    assert_eq!(recorder.frames.len(), 25);
    assert_eq!(scenario.energy_log().len(), 1);
    for frame in &recorder.frames {
        assert_eq!(frame.positions.len(), 34);
        assert_eq!(frame.trails.len(), 34);
    }
    let times: Vec<f64> = recorder.frames.iter().map(|f| f.time).collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn inner_view_limits_frame_bodies() {
    let mut cfg = ScenarioConfig::inner_planets();
    cfg.parameters.years = 0.1;

    let mut scenario = Scenario::build_scenario(&cfg).unwrap();
    assert_eq!(scenario.state().body_count(), 9);

    let mut recorder = FrameRecorder::new();
    scenario.run(&mut recorder);
    assert!(!recorder.frames.is_empty());
    assert!(recorder.frames.iter().all(|f| f.body_count() == 5));
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut cfg = ScenarioConfig::default();
        cfg.parameters.years = 0.2;
        let mut scenario = Scenario::build_scenario(&cfg).unwrap();
        let mut recorder = FrameRecorder::new();
        scenario.run(&mut recorder);
        recorder.into_frames()
    };
    assert_eq!(run(), run());
}

#[test]
fn run_steps_forwards_frames_and_keeps_energy_consistent() {
    let mut scenario = Scenario::from_state(star_and_planet(3e-6), test_engine(10), test_params(1.0, 0.001)).unwrap();
    let e0 = scenario.current_energy();

    let mut recorder = FrameRecorder::new();
    scenario.run_steps(30, &mut recorder);

    // stride is 1 for 1000 steps and 800 target frames
    assert_eq!(recorder.frames.len(), 30);
    assert_eq!(scenario.energy_log().len(), 3);
    assert!(!scenario.is_finished());

    let logged = scenario.energy_log().latest().unwrap().energy;
    assert!((logged - scenario.current_energy()).abs() < 1e-15);
    assert!(((logged - e0) / e0).abs() < 1e-2);
}

// ==================================================================================
// Report tests
// ==================================================================================

#[test]
fn text_report_lists_planets_and_drift() {
    use orbitsim::body_labels;
    use orbitsim::visualization::report::{drift_line, energy_csv, info_panel};

    let mut cfg = ScenarioConfig::default();
    cfg.parameters.years = 1.0;
    let mut scenario = Scenario::build_scenario(&cfg).unwrap();
    let labels = body_labels(scenario.state());
    let mut recorder = FrameRecorder::new();
    scenario.run(&mut recorder);

    let panel = info_panel(recorder.frames.last().unwrap(), &labels);
    assert!(panel.contains("Bodies: 34"));
    assert!(panel.contains("Mercury:"));
    assert!(panel.contains("Mars:"));
    assert!(!panel.contains("Sun:"));
    assert!(!panel.contains("Jupiter:"));

    assert!(drift_line(scenario.energy_log()).contains("Drift:"));

    let csv = energy_csv(scenario.energy_log());
    assert!(csv.starts_with("time,energy\n"));
    assert_eq!(csv.lines().count(), 1 + scenario.energy_log().len());
}

#[test]
fn info_panel_layout() {
    use orbitsim::body_labels;
    use orbitsim::visualization::report::info_panel;

    let state = BodyCatalogFactory::new(1).build_catalog().unwrap();
    let labels = body_labels(&state);
    let frame = Frame::capture(&state, None);

    let panel = info_panel(&frame, &labels);
    assert!(panel.starts_with("N-BODY SIMULATION\n\nTime: 0.00 years\nBodies: 9\n\n"), "{panel}");
    assert!(panel.contains("Earth:\n  1.00 AU\n  6.30 AU/yr\n\n"), "{panel}");
}

#[test]
fn window_title_follows_view() {
    use orbitsim::ViewMode;

    assert_eq!(ViewMode::Full.window_title(1.5), "N-Body Solar System - Year 1.50");
    assert_eq!(ViewMode::Inner.window_title(0.25), "Inner Solar System - Year 0.25");
}
