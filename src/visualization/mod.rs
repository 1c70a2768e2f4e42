//! Consumers of simulation output: text diagnostics and (with the `viewer`
//! feature) a bevy 2D playback window.

pub mod report;
#[cfg(feature = "viewer")]
pub mod viewer2d;

use clap::ValueEnum;

/// Which part of the system the presentation frames on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Whole system out to Neptune
    #[default]
    Full,
    /// Star and the four inner planets
    Inner,
}

impl ViewMode {
    /// Half-width of the visible square, AU
    pub fn extent(self) -> f64 {
        match self {
            ViewMode::Full => 35.0,
            ViewMode::Inner => 2.5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Full => "N-Body Solar System",
            ViewMode::Inner => "Inner Solar System",
        }
    }

    /// Window title while showing the frame at `year`
    pub fn window_title(self, year: f64) -> String {
        format!("{} - Year {:.2}", self.title(), year)
    }
}
