//! Text diagnostics for a frame and the energy log
//!
//! Plain-string formatting so any front end (terminal, window overlay,
//! plotting script) can show the same numbers.

use crate::simulation::energy::EnergyLog;
use crate::simulation::frames::{BodyLabel, Frame};
use crate::simulation::states::BodyKind;

/// How many leading bodies the info panel lists
const PANEL_BODIES: usize = 5;

/// Panel text: time, body count, then distance and speed of the first few
/// planets (star and asteroids skipped)
pub fn info_panel(frame: &Frame, labels: &[BodyLabel]) -> String {
    let mut out = format!(
        "N-BODY SIMULATION\n\nTime: {:.2} years\nBodies: {}\n\n",
        frame.time,
        labels.len()
    );

    let shown = frame.body_count().min(labels.len()).min(PANEL_BODIES);
    for (i, label) in labels.iter().enumerate().take(shown) {
        if label.kind != BodyKind::Planet {
            continue;
        }
        out.push_str(&format!(
            "{}:\n  {:.2} AU\n  {:.2} AU/yr\n\n",
            label.name, frame.distances[i], frame.speeds[i]
        ));
    }
    out
}

/// One-line drift summary
pub fn drift_line(log: &EnergyLog) -> String {
    match log.drift_percent() {
        Some(drift) => format!(
            "Energy Conservation - Drift: {:.4}% over {} samples",
            drift,
            log.len()
        ),
        None => format!("Energy Conservation - not enough samples ({})", log.len()),
    }
}

/// `time,energy` CSV for external plotting
pub fn energy_csv(log: &EnergyLog) -> String {
    let rows: String = log
        .samples()
        .iter()
        .map(|s| format!("{},{}\n", s.time, s.energy))
        .collect();
    format!("time,energy\n{rows}")
}
