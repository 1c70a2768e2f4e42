//! Elapsed simulated time and step count

/// Monotonic clock advanced once per integration step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    time: f64,  // elapsed years
    steps: u64, // completed steps
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed step of length `dt`
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
        self.steps += 1;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// True when the completed step count is a positive multiple of `interval`
    pub fn is_multiple_of(&self, interval: u64) -> bool {
        interval > 0 && self.steps > 0 && self.steps % interval == 0
    }
}
