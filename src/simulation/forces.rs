//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums contributors, and
//! direct (O(N^2)) Newtonian gravity

use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::vector::VectorExt;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - returns the number of degenerate pairs met by all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) -> usize {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        let mut degenerate = 0;
        for term in &self.terms {
            degenerate += term.acceleration(t, sys, out);
        }
        degenerate
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body and
/// return how many degenerate interactions they had to fall back on
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) -> usize;
}

/// Newtonian gravity, evaluated body by body against every other body.
///
/// `eps2` is added to the squared separation; with `eps2 = 0` this is the
/// plain inverse-square law.
///
/// Coincident bodies have no defined direction. `unit_or_zero` then yields
/// the zero vector and the undivided `dir * G * m_o` is used, so the pair
/// contributes nothing; it is counted towards the tick's degenerate pairs.
///
/// The acceleration is `G * m_o / d2` directly: the body's own mass never
/// enters, which keeps `G * m_b * m_o` from overflowing for huge masses.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl NewtonianGravity {
    /// Net acceleration on `bodies[i]` from all other bodies, or `None` if
    /// `i` is out of range.
    /// Self-interaction is skipped by index, never by comparing values.
    pub fn acceleration_on(&self, i: usize, bodies: &[Body], degenerate: &mut usize) -> Option<NVec2> {
        let b = bodies.get(i)?;
        let mut acc = NVec2::zeros();

        for (j, o) in bodies.iter().enumerate() {
            if j == i {
                continue;
            }

            // delta points from b toward o, so attraction is along +delta
            let delta = o.x - b.x;
            let d2 = delta.norm_squared() + self.eps2;

            let dir = delta.unit_or_zero();
            if dir == NVec2::zeros() {
                *degenerate += 1;
            }

            let pull = self.G * o.mass();
            acc += if d2 == 0.0 { dir * pull } else { dir * (pull / d2) };
        }

        Some(acc)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) -> usize {
        let mut degenerate = 0;
        for (i, a) in out.iter_mut().enumerate() {
            let Some(acc) = self.acceleration_on(i, &sys.bodies, &mut degenerate) else {
                break;
            };
            *a += acc;
        }
        degenerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Rgb;

    fn body(x: f64, y: f64, m: f64) -> Body {
        Body::new(NVec2::new(x, y), NVec2::zeros(), m, 0.0, Rgb::WHITE).unwrap()
    }

    #[test]
    fn single_body_feels_nothing() {
        let g = NewtonianGravity { G: 1.0, eps2: 0.0 };
        let mut degenerate = 0;
        let a = g.acceleration_on(0, &[body(3.0, 4.0, 5.0)], &mut degenerate);
        assert_eq!(a, Some(NVec2::zeros()));
        assert_eq!(degenerate, 0);
    }

    #[test]
    fn acceleration_is_independent_of_own_mass() {
        let g = NewtonianGravity { G: 2.0, eps2: 0.0 };
        let mut degenerate = 0;
        let light = g.acceleration_on(0, &[body(0.0, 0.0, 1.0), body(10.0, 0.0, 50.0)], &mut degenerate).unwrap();
        let heavy = g.acceleration_on(0, &[body(0.0, 0.0, 1e6), body(10.0, 0.0, 50.0)], &mut degenerate).unwrap();
        assert!((light.x - 1.0).abs() < 1e-12, "{light:?}");
        assert!((light - heavy).norm() < 1e-12);
        assert_eq!(light.y, 0.0);
    }

    #[test]
    fn out_of_range_index_is_none() {
        let g = NewtonianGravity { G: 1.0, eps2: 0.0 };
        let mut degenerate = 0;
        assert_eq!(g.acceleration_on(2, &[body(0.0, 0.0, 1.0), body(1.0, 0.0, 1.0)], &mut degenerate), None);
        assert_eq!(g.acceleration_on(0, &[], &mut degenerate), None);
        assert_eq!(degenerate, 0);
    }

    #[test]
    fn huge_masses_stay_finite() {
        // G * m * m would overflow to inf here and turn the force into NaN
        let g = NewtonianGravity { G: 1.0, eps2: 0.0 };
        let bodies = [body(0.0, 0.0, 1e200), body(1e150, 0.0, 1e200)];
        let mut degenerate = 0;
        let a = g.acceleration_on(0, &bodies, &mut degenerate).unwrap();
        assert!(a.x.is_finite() && a.y.is_finite(), "{a:?}");
        // 1e200 / 1e300
        assert!((a.x - 1e-100).abs() < 1e-112, "{a:?}");
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn coincident_pair_is_skipped_and_counted() {
        let g = NewtonianGravity { G: 1.0, eps2: 0.0 };
        let sys = System::from_bodies(vec![body(1.0, 1.0, 1.0), body(1.0, 1.0, 2.0), body(4.0, 5.0, 3.0)]);
        let mut out = vec![NVec2::zeros(); 3];
        let degenerate = AccelSet::new().with(g).accumulate_accels(0.0, &sys, &mut out);

        // both directions of the coincident pair
        assert_eq!(degenerate, 2);
        for a in &out {
            assert!(a.x.is_finite() && a.y.is_finite());
        }
        // body 0 only feels body 2: G * 3 / 25 along (3, 4) / 5
        assert!((out[0] - NVec2::new(0.072, 0.096)).norm() < 1e-12, "{:?}", out[0]);
    }

    #[test]
    fn terms_are_summed() {
        let sys = System::from_bodies(vec![body(0.0, 0.0, 1.0), body(2.0, 0.0, 4.0)]);
        let single = AccelSet::new().with(NewtonianGravity { G: 1.0, eps2: 0.0 });
        let double = AccelSet::new()
            .with(NewtonianGravity { G: 1.0, eps2: 0.0 })
            .with(NewtonianGravity { G: 1.0, eps2: 0.0 });

        let mut a1 = vec![NVec2::zeros(); 2];
        let mut a2 = vec![NVec2::new(9.0, 9.0); 2];
        single.accumulate_accels(0.0, &sys, &mut a1);
        double.accumulate_accels(0.0, &sys, &mut a2);

        assert!((a2[0] - 2.0 * a1[0]).norm() < 1e-12);
        assert!((a2[1] - 2.0 * a1[1]).norm() < 1e-12);
    }
}
