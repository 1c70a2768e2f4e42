//! Immutable snapshots handed to rendering consumers
//!
//! The physics step rate has to be fine enough for accuracy; the frame rate
//! does not. `FrameSampler` keeps only every `stride`-th post-step state so a
//! long run produces roughly `target_frames` snapshots.

use crate::error::{SimError, SimResult};
use super::states::{BodyKind, RenderHints, SimulationState};

/// Reference cap on frames produced by a full run
pub const DEFAULT_TARGET_FRAMES: u64 = 800;

/// Copy of one body's trail, split into coordinate columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailSnapshot {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl TrailSnapshot {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// State of the system at one sampled instant, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub positions: Vec<(f64, f64)>,
    pub trails: Vec<TrailSnapshot>,
    pub distances: Vec<f64>, // star = 0
    pub speeds: Vec<f64>,    // star = 0
}

impl Frame {
    /// Snapshot the first `limit` bodies (all of them when `None`)
    pub fn capture(state: &SimulationState, limit: Option<usize>) -> Self {
        let n = limit.map_or(state.bodies.len(), |l| l.min(state.bodies.len()));
        let bodies = &state.bodies[..n];

        Self {
            time: state.time(),
            positions: bodies.iter().map(|b| (b.position.x, b.position.y)).collect(),
            trails: bodies
                .iter()
                .map(|b| {
                    let (xs, ys) = b.trail().to_columns();
                    TrailSnapshot { xs, ys }
                })
                .collect(),
            distances: bodies.iter().map(|b| b.distance()).collect(),
            speeds: bodies.iter().map(|b| b.speed()).collect(),
        }
    }

    pub fn body_count(&self) -> usize {
        self.positions.len()
    }
}

/// Consumer of frames. Implementations must not reach back into the
/// simulation; they only see the snapshot.
pub trait FrameSink {
    fn on_frame(&mut self, frame: Frame);
}

/// Sink that keeps every frame in memory (for playback or tests)
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl FrameSink for FrameRecorder {
    fn on_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
}

/// Decides which completed steps become frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSampler {
    stride: u64,
    body_limit: Option<usize>,
}

impl FrameSampler {
    /// stride = max(1, total_steps / target_frames)
    pub fn new(total_steps: u64, target_frames: u64) -> SimResult<Self> {
        if target_frames == 0 {
            return Err(SimError::invalid_parameter(
                "target_frames",
                "must be at least 1",
            ));
        }
        Ok(Self {
            stride: (total_steps / target_frames).max(1),
            body_limit: None,
        })
    }

    /// Restrict snapshots to the first `limit` bodies
    pub fn with_body_limit(mut self, limit: Option<usize>) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn body_limit(&self) -> Option<usize> {
        self.body_limit
    }

    /// True for the 1st, (stride+1)th, (2*stride+1)th ... completed step
    pub fn should_capture(&self, completed_steps: u64) -> bool {
        completed_steps > 0 && (completed_steps - 1) % self.stride == 0
    }

    /// Snapshot `state` if its step count falls on the stride
    pub fn sample(&self, state: &SimulationState) -> Option<Frame> {
        if self.should_capture(state.clock().steps()) {
            Some(Frame::capture(state, self.body_limit))
        } else {
            None
        }
    }
}

/// Static per-body data a renderer needs alongside the frames
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLabel {
    pub name: String,
    pub kind: BodyKind,
    pub hints: RenderHints,
}

/// Labels for every body, in catalog order
pub fn body_labels(state: &SimulationState) -> Vec<BodyLabel> {
    state
        .bodies()
        .iter()
        .map(|b| BodyLabel {
            name: b.name.clone(),
            kind: b.kind,
            hints: b.hints,
        })
        .collect()
}
