//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by an `AccelSet`

use super::forces::AccelSet;
use super::states::{NVec2, System};

/// Advance the system by one step of semi-implicit Euler.
///
/// All accelerations are taken from the positions at the start of the step,
/// then every velocity is kicked, then every position drifts with its new
/// velocity. Returns the number of degenerate pairs met while computing
/// accelerations.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, dt: f64) -> usize {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return 0;
    }

    // a[i] holds a_n for body i, from a consistent snapshot of x_n
    let mut a = vec![NVec2::zeros(); n];
    let degenerate = forces.accumulate_accels(sys.t, &*sys, &mut a);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;
    sys.ticks += 1;

    degenerate
}
