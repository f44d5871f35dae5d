//! Conserved quantities of a [`System`], for checking numerical drift

use super::states::{Body, NVec2, System};

impl Body {
    pub fn momentum(&self) -> NVec2 {
        self.v * self.mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.v.norm_squared()
    }

    /// z component of `x × (m v)` about the origin
    pub fn angular_momentum(&self) -> f64 {
        self.mass() * (self.x.x * self.v.y - self.x.y * self.v.x)
    }
}

impl System {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass()).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Pairwise `-G m_i m_j / r`; coincident pairs are left out
    #[allow(non_snake_case)]
    pub fn potential_energy(&self, G: f64) -> f64 {
        let mut u = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let r = (bj.x - bi.x).norm();
                if r > 0.0 {
                    u -= G * bi.mass() * bj.mass() / r;
                }
            }
        }
        u
    }

    #[allow(non_snake_case)]
    pub fn total_energy(&self, G: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(G)
    }

    /// Should stay constant for an isolated system
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    pub fn angular_momentum(&self) -> f64 {
        self.bodies.iter().map(|b| b.angular_momentum()).sum()
    }

    /// Mass-weighted mean position; the origin for an empty system
    pub fn center_of_mass(&self) -> NVec2 {
        let m = self.total_mass();
        if m == 0.0 {
            return NVec2::zeros();
        }
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.x * b.mass())
            / m
    }
}
