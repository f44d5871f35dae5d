//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` and softening `eps2`,
//! - the fixed logical step `dt`,
//! - trail capacity for traced bodies

use super::error::SimError;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step size
    pub eps2: f64, // softening, 0 = plain inverse square
    pub trail_capacity: usize, // max points per trail
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 1.0,
            dt: 1.0,
            eps2: 0.0,
            trail_capacity: 2000,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if !self.G.is_finite() {
            return Err(SimError::NonFinite("G"));
        }
        if !(self.eps2.is_finite() && self.eps2 >= 0.0) {
            return Err(SimError::NonFinite("eps2"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_step() {
        let p = Parameters { dt: 0.0, ..Default::default() };
        assert_eq!(p.validate(), Err(SimError::InvalidTimeStep(0.0)));
        let p = Parameters { eps2: -1.0, ..Default::default() };
        assert_eq!(p.validate(), Err(SimError::NonFinite("eps2")));
    }
}
