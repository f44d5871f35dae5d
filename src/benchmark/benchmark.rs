use std::time::Instant;

use crate::simulation::engine::step;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::states::{Body, NVec2, Rgb, System};

/// Helper to build a deterministic system of size `n`: a ring of equal
/// masses, every fourth body traced
fn make_system(n: usize, trail_capacity: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let angle = i_f / n as f64 * std::f64::consts::TAU;
        let radius = 100.0 + (i_f * 0.37).sin() * 20.0;
        let x = NVec2::new(angle.cos() * radius, angle.sin() * radius);
        let v = NVec2::new(-angle.sin(), angle.cos()) * 0.5;

        // Every value is finite and m > 0, so construction cannot fail
        if let Ok(body) = Body::new(x, v, 1.0, 1.0, Rgb::WHITE) {
            bodies.push(if i % 4 == 0 { body.with_trail(trail_capacity) } else { body });
        }
    }

    System::from_bodies(bodies)
}

/// Time `step()` for a range of n.
/// Paste output directly into excel to graph
pub fn bench_step() {
    println!("N,step_ms");

    for n in [2, 4, 8, 16, 32, 64, 128, 256] {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 32 { 10_000 } else { 200 };

        let mut sys = make_system(n, 2000);
        let forces = AccelSet::new().with(NewtonianGravity { G: 1.0, eps2: 0.0 });

        // Warm-up
        step(&mut sys, &forces, 0.01);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &forces, 0.01);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
