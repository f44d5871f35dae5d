//! 2D vector helpers on top of `nalgebra::Vector2<f64>`
//!
//! nalgebra already gives the value type its arithmetic (`+`, `-`, scalar
//! `*`, `component_mul`) and `norm()`. [`VectorExt`] adds the named
//! directions, a checked normalization and a random direction.
//!
//! `norm()` of the zero vector is 0. Normalizing it is undefined, so the
//! crate never calls nalgebra's `normalize()` directly:
//! - [`VectorExt::try_unit`] returns [`SimError::DegenerateVector`]
//! - [`VectorExt::unit_or_zero`] returns the zero vector and logs a warning
//!
//! Gravity goes through `unit_or_zero`; each zero direction it gets back is
//! also counted in the tick's `StepReport::degenerate_pairs`.

use rand::Rng;

use super::error::SimError;
use super::states::NVec2;

pub trait VectorExt: Sized {
    fn zero() -> Self;
    fn one() -> Self;
    fn up() -> Self;
    fn down() -> Self;
    fn left() -> Self;
    fn right() -> Self;

    /// Unit vector in the same direction, or an error for a zero vector
    fn try_unit(&self) -> Result<Self, SimError>;

    /// Unit vector in the same direction, or the zero vector (with a warning)
    fn unit_or_zero(&self) -> Self;

    /// Random direction scaled to `max_length`
    fn random_unit<R: Rng + ?Sized>(max_length: f64, rng: &mut R) -> Self;
}

impl VectorExt for NVec2 {
    fn zero() -> Self {
        NVec2::zeros()
    }

    fn one() -> Self {
        NVec2::new(1.0, 1.0)
    }

    fn up() -> Self {
        NVec2::new(0.0, 1.0)
    }

    fn down() -> Self {
        NVec2::new(0.0, -1.0)
    }

    fn left() -> Self {
        NVec2::new(-1.0, 0.0)
    }

    fn right() -> Self {
        NVec2::new(1.0, 0.0)
    }

    fn try_unit(&self) -> Result<Self, SimError> {
        let len = self.norm();
        // NaN and inf lengths are as degenerate as zero
        if len > 0.0 && len.is_finite() {
            Ok(self / len)
        } else {
            Err(SimError::DegenerateVector)
        }
    }

    fn unit_or_zero(&self) -> Self {
        match self.try_unit() {
            Ok(u) => u,
            Err(_) => {
                log::warn!("normalize of degenerate vector ({}, {}), using zero", self.x, self.y);
                NVec2::zeros()
            }
        }
    }

    fn random_unit<R: Rng + ?Sized>(max_length: f64, rng: &mut R) -> Self {
        // Re-draw the (measure zero) all-zero sample instead of normalizing it
        loop {
            let sample = NVec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            if let Ok(u) = sample.try_unit() {
                return u * max_length;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unit_of_nonzero_has_length_one() {
        for v in [NVec2::new(3.0, 4.0), NVec2::new(-1e-8, 2e-8), NVec2::new(1e9, -7.0)] {
            let u = v.try_unit().unwrap();
            assert!((u.norm() - 1.0).abs() < 1e-12, "|{:?}| = {}", u, u.norm());
        }
    }

    #[test]
    fn zero_vector_is_degenerate() {
        assert_eq!(NVec2::zero().norm(), 0.0);
        assert_eq!(NVec2::zero().try_unit(), Err(SimError::DegenerateVector));
        assert_eq!(NVec2::zero().unit_or_zero(), NVec2::zeros());
        assert!(NVec2::new(f64::NAN, 0.0).try_unit().is_err());
    }

    #[test]
    fn queries_do_not_mutate() {
        let v = NVec2::new(-2.0, 5.0);
        let _ = v.norm();
        let _ = v.unit_or_zero();
        let _ = v.try_unit();
        assert_eq!(v, NVec2::new(-2.0, 5.0));
    }

    #[test]
    fn named_directions() {
        assert_eq!(NVec2::up() + NVec2::down(), NVec2::zero());
        assert_eq!(NVec2::left() + NVec2::right(), NVec2::zero());
        assert_eq!(NVec2::up() + NVec2::right(), NVec2::one());
        assert_eq!(NVec2::new(2.0, 3.0).component_mul(&NVec2::new(4.0, -1.0)), NVec2::new(8.0, -3.0));
    }

    #[test]
    fn random_unit_is_scaled_and_seeded() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let va = NVec2::random_unit(2.5, &mut a);
            let vb = NVec2::random_unit(2.5, &mut b);
            assert_eq!(va, vb);
            assert!((va.norm() - 2.5).abs() < 1e-12);
        }
    }
}
