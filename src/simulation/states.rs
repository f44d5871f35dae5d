//! Core state types for the N-body simulation.
//!
//! - `Body`   a point mass drawn as a disc, with an optional trail
//! - `System` the owned, ordered list of bodies plus the elapsed time `t`
//! - `Rgb`    the display colour carried by each body
//!
//! Bodies are only created through [`Body::new`], which rejects invalid
//! masses, so every body in a `System` has `m > 0`.

use nalgebra::Vector2;

use super::error::SimError;
use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// Display colour. The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(128, 128, 128);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);

    /// Look up a named colour (case-insensitive)
    pub fn from_name(name: &str) -> Result<Rgb, SimError> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Ok(Rgb::WHITE),
            "black" => Ok(Rgb::BLACK),
            "grey" | "gray" => Ok(Rgb::GREY),
            "red" => Ok(Rgb::RED),
            "green" => Ok(Rgb::GREEN),
            "blue" => Ok(Rgb::BLUE),
            "yellow" => Ok(Rgb::YELLOW),
            "cyan" => Ok(Rgb::CYAN),
            "orange" => Ok(Rgb::ORANGE),
            _ => Err(SimError::UnknownColor(name.to_string())),
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (world space)
    pub v: NVec2, // velocity
    m: f64, // mass, always > 0
    radius: f64, // drawing radius only, no physical effect
    color: Rgb,
    trail: Option<Trail>, // None = trail disabled
}

impl Body {
    /// Create a body, rejecting non-positive mass, negative radius and
    /// non-finite state.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: Rgb) -> Result<Self, SimError> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::NonPositiveMass(m));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(SimError::NonFinite("position"));
        }
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(SimError::NonFinite("velocity"));
        }

        Ok(Self {
            x,
            v,
            m,
            radius,
            color,
            trail: None,
        })
    }

    /// Enable a trail holding at most `capacity` points
    pub fn with_trail(mut self, capacity: usize) -> Self {
        self.trail = Some(Trail::new(capacity));
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn trail_enabled(&self) -> bool {
        self.trail.is_some()
    }

    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    pub(crate) fn trail_mut(&mut self) -> Option<&mut Trail> {
        self.trail.as_mut()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, indices never change
    pub t: f64, // logical time
    pub ticks: u64, // steps taken
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            ticks: 0,
        }
    }

    /// Append a body and return its index, which stays valid for the life
    /// of the system
    pub fn add(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_mass() {
        for m in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let r = Body::new(NVec2::zeros(), NVec2::zeros(), m, 1.0, Rgb::WHITE);
            assert!(matches!(r, Err(SimError::NonPositiveMass(_))), "mass {m} accepted");
        }
    }

    #[test]
    fn rejects_bad_radius_and_state() {
        assert!(matches!(
            Body::new(NVec2::zeros(), NVec2::zeros(), 1.0, -0.5, Rgb::WHITE),
            Err(SimError::InvalidRadius(_))
        ));
        assert_eq!(
            Body::new(NVec2::new(f64::NAN, 0.0), NVec2::zeros(), 1.0, 0.0, Rgb::WHITE).unwrap_err(),
            SimError::NonFinite("position")
        );
        assert_eq!(
            Body::new(NVec2::zeros(), NVec2::new(0.0, f64::INFINITY), 1.0, 0.0, Rgb::WHITE).unwrap_err(),
            SimError::NonFinite("velocity")
        );
    }

    #[test]
    fn ids_are_positions() {
        let mut sys = System::new();
        let a = sys.add(Body::new(NVec2::zeros(), NVec2::zeros(), 1.0, 0.0, Rgb::RED).unwrap());
        let b = sys.add(Body::new(NVec2::new(1.0, 0.0), NVec2::zeros(), 2.0, 0.0, Rgb::BLUE).unwrap());
        assert_eq!((a, b), (0, 1));
        assert_eq!(sys.bodies[b].mass(), 2.0);
        assert_eq!(sys.len(), 2);
    }

    #[test]
    fn colour_names() {
        assert_eq!(Rgb::from_name("Cyan").unwrap(), Rgb::CYAN);
        assert_eq!(Rgb::from_name("gray").unwrap(), Rgb::GREY);
        assert_eq!(Rgb::from_name("mauve").unwrap_err(), SimError::UnknownColor("mauve".into()));
    }
}
