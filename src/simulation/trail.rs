//! Bounded position history used to draw motion trails
//!
//! The physics kernels never read trails; they exist only so a renderer can
//! show where each body has recently been.

use std::collections::VecDeque;

use super::states::NVec2;

/// Default number of points kept per body
pub const DEFAULT_TRAIL_CAPACITY: usize = 500;

/// Fixed-capacity FIFO of past positions (oldest evicted first)
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl TrailBuffer {
    /// Empty trail that will hold at most `capacity` points
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest position, dropping the oldest one when full
    pub fn append(&mut self, position: NVec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Split copy of the history as (x-history, y-history)
    pub fn to_columns(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}
