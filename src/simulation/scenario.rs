//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - pacing and window settings for drivers
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The viewer inserts a `Scenario` into Bevy as a `Resource`; headless runs
//! and tests drive it directly through [`Scenario::step`].

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{BodyConfig, EngineConfig, ScenarioConfig, WindowConfig};
use crate::simulation::engine::{step, StepReport};
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, Rgb, System};
use crate::simulation::vector::VectorExt;

#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub engine: EngineConfig,
    pub window: WindowConfig,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            eps2: p_cfg.eps2,
            trail_capacity: p_cfg.trail_capacity,
        };
        parameters.validate()?;
        cfg.engine.validate()?;

        // One seeded stream for the whole scenario keeps builds reproducible
        let mut rng = StdRng::seed_from_u64(p_cfg.seed);

        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| -> Result<Body, SimError> {
                let mut v = NVec2::new(bc.v[0], bc.v[1]);
                if let Some(len) = bc.random_velocity {
                    v += NVec2::random_unit(len, &mut rng);
                }
                let body = Body::new(
                    NVec2::new(bc.x[0], bc.x[1]),
                    v,
                    bc.m,
                    bc.radius,
                    bc.color.resolve()?,
                )?;
                Ok(if bc.trail {
                    body.with_trail(parameters.trail_capacity)
                } else {
                    body
                })
            })
            .collect::<Result<Vec<Body>, SimError>>()?;

        log::info!(
            "built scenario with {} bodies (G = {}, dt = {})",
            bodies.len(),
            parameters.G,
            parameters.dt
        );

        Ok(Self::assemble(parameters, cfg.engine, cfg.window, System::from_bodies(bodies)))
    }

    /// Heavy sun at the origin and a light traced planet on a near-circular orbit
    pub fn sun_earth() -> Result<Self, SimError> {
        let parameters = Parameters::default();
        let mut system = System::new();

        system.add(Body::new(NVec2::zero(), NVec2::zero(), 100_000.0, 50.0, Rgb::YELLOW)?);
        system.add(
            Body::new(NVec2::new(-500.0, 0.0), NVec2::new(0.0, -13.0), 10.0, 25.0, Rgb::CYAN)?
                .with_trail(parameters.trail_capacity),
        );

        Ok(Self::assemble(parameters, EngineConfig::default(), WindowConfig::default(), system))
    }

    fn assemble(parameters: Parameters, engine: EngineConfig, window: WindowConfig, system: System) -> Self {
        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Self {
            parameters,
            engine,
            window,
            system,
            forces,
        }
    }

    /// Run one tick with this scenario's forces and time step
    pub fn step(&mut self) -> StepReport {
        step(&mut self.system, &self.forces, self.parameters.dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_yaml() {
        let yaml = "
parameters:
  G: 2.0
  trail_capacity: 5
bodies:
  - x: [0, 0]
    m: 10
  - x: [3, 4]
    v: [1, 0]
    trail: true
";
        let cfg = ScenarioConfig::from_yaml(yaml).unwrap();
        let mut scenario = Scenario::build(cfg).unwrap();

        assert_eq!(scenario.system.len(), 2);
        assert!(!scenario.system.bodies[0].trail_enabled());
        assert_eq!(scenario.system.bodies[1].trail().map(|t| t.capacity()), Some(5));

        for _ in 0..8 {
            scenario.step();
        }
        assert_eq!(scenario.system.ticks, 8);
        assert_eq!(scenario.system.bodies[1].trail().map(|t| t.len()), Some(5));
    }

    #[test]
    fn rejects_invalid_bodies_and_parameters() {
        let zero_mass = ScenarioConfig::from_yaml("bodies:\n  - x: [0, 0]\n    m: 0\n").unwrap();
        assert_eq!(Scenario::build(zero_mass).err(), Some(SimError::NonPositiveMass(0.0)));

        let bad_dt = ScenarioConfig::from_yaml("parameters:\n  dt: -1\nbodies: []\n").unwrap();
        assert_eq!(Scenario::build(bad_dt).err(), Some(SimError::InvalidTimeStep(-1.0)));

        let bad_rate = ScenarioConfig::from_yaml("engine:\n  ticks_per_second: -60\nbodies: []\n").unwrap();
        assert_eq!(Scenario::build(bad_rate).err(), Some(SimError::InvalidTickRate(-60.0)));

        let bad_colour = ScenarioConfig::from_yaml("bodies:\n  - x: [0, 0]\n    color: plaid\n").unwrap();
        assert_eq!(Scenario::build(bad_colour).err(), Some(SimError::UnknownColor("plaid".into())));
    }

    #[test]
    fn random_velocity_is_seeded() {
        let yaml = "
parameters:
  seed: 99
bodies:
  - x: [0, 0]
    random_velocity: 3.0
";
        let a = Scenario::build(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap();
        let b = Scenario::build(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap();
        let va = a.system.bodies[0].v;
        assert_eq!(va, b.system.bodies[0].v);
        assert!((va.norm() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn sun_earth_matches_reference_setup() {
        let s = Scenario::sun_earth().unwrap();
        assert_eq!(s.system.len(), 2);
        assert_eq!(s.system.bodies[0].mass(), 100_000.0);
        assert!(!s.system.bodies[0].trail_enabled());
        assert_eq!(s.system.bodies[1].v, NVec2::new(0.0, -13.0));
        assert_eq!(s.system.bodies[1].trail().map(|t| t.capacity()), Some(2000));
    }
}
