use orbitsim::visualization::report::{drift_line, energy_csv, info_panel};
use orbitsim::{body_labels, FrameRecorder, Scenario, ScenarioConfig, ViewMode};
use orbitsim::{bench_energy_drift, bench_forces};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Newtonian N-body solar system simulation")]
struct Args {
    /// Scenario YAML; relative names are looked up in ./scenarios
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override the simulated duration (years)
    #[arg(long)]
    years: Option<f64>,

    /// Override the time step (years)
    #[arg(long)]
    dt: Option<f64>,

    /// Override the asteroid count (0 disables the belt)
    #[arg(long)]
    asteroids: Option<usize>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Draw planets only
    #[arg(long)]
    hide_asteroids: bool,

    /// Presentation preset; `inner` also switches to the inner-planets run
    #[arg(long, value_enum, default_value_t = ViewMode::Full)]
    view: ViewMode,

    /// Skip the window and print the text report
    #[arg(long)]
    headless: bool,

    /// Print the energy log as CSV after the run
    #[arg(long)]
    energy_csv: bool,

    /// Run the force and drift benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match (&args.file_name, args.view) {
        (Some(file_name), _) => {
            let mut config_path = PathBuf::from(file_name);
            if !config_path.exists() {
                config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            }
            let file = File::open(&config_path)
                .with_context(|| format!("opening scenario {}", config_path.display()))?;
            serde_yaml::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing scenario {}", config_path.display()))?
        }
        (None, ViewMode::Inner) => ScenarioConfig::inner_planets(),
        (None, ViewMode::Full) => ScenarioConfig::default(),
    };

    if let Some(years) = args.years {
        cfg.parameters.years = years;
    }
    if let Some(dt) = args.dt {
        cfg.parameters.dt = dt;
    }
    if let Some(asteroids) = args.asteroids {
        cfg.bodies.asteroids = asteroids;
    }
    if let Some(seed) = args.seed {
        cfg.parameters.seed = seed;
    }
    if args.hide_asteroids {
        cfg.bodies.show_asteroids = false;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_forces()?;
        bench_energy_drift()?;
        return Ok(());
    }

    let cfg = load_scenario(&args)?;
    let mut scenario = Scenario::build_scenario(&cfg)?;
    let labels = body_labels(scenario.state());

    let mut recorder = FrameRecorder::new();
    scenario.run(&mut recorder);
    let frames = recorder.into_frames();

    if args.energy_csv {
        print!("{}", energy_csv(scenario.energy_log()));
    }

    if args.headless || !cfg!(feature = "viewer") {
        if let Some(last) = frames.last() {
            print!("{}", info_panel(last, &labels));
        }
        println!("{}", drift_line(scenario.energy_log()));
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    orbitsim::run_2d(frames, labels, args.view, cfg.bodies.show_asteroids);

    Ok(())
}
