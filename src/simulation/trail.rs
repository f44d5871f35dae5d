//! Bounded position history used to draw a body's path
//!
//! Points are world-space positions; translating them into a drawing frame is
//! the renderer's job.

use std::collections::VecDeque;

use super::states::{NVec2, System};

#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, dropping the oldest ones so that `len() <= capacity`
    pub fn push(&mut self, p: NVec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
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

    /// Oldest point first
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }
}

/// Record the current position of every trail-enabled body
pub fn record_trails(sys: &mut System) {
    for b in sys.bodies.iter_mut() {
        let x = b.x;
        if let Some(trail) = b.trail_mut() {
            trail.push(x);
        }
    }
}
