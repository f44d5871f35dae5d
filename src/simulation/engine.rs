//! One simulation tick
//!
//! `step` is the only entry point a driver needs: forces, integration and
//! trail recording in that order. Drivers call it once per tick with the
//! fixed logical `dt`; real-time pacing stays on the driver side.

use super::forces::AccelSet;
use super::integrator::semi_implicit_euler;
use super::states::System;
use super::trail::record_trails;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub tick: u64, // tick number after the step
    pub degenerate_pairs: usize, // coincident pairs skipped by the force terms
}

/// Advance `sys` by exactly one tick of length `dt`.
///
/// After the call every velocity and position reflects one semi-implicit
/// Euler step and every trail ends with the post-step position.
pub fn step(sys: &mut System, forces: &AccelSet, dt: f64) -> StepReport {
    let degenerate_pairs = semi_implicit_euler(sys, forces, dt);
    record_trails(sys);

    if degenerate_pairs > 0 {
        log::warn!("tick {}: {} degenerate body pair(s) skipped", sys.ticks, degenerate_pairs);
    }

    StepReport {
        tick: sys.ticks,
        degenerate_pairs,
    }
}
