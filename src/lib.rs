pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, Rgb};
pub use simulation::vector::VectorExt;
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::trail::{Trail, record_trails};
pub use simulation::engine::{step, StepReport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, EngineConfig, WindowConfig, BodyConfig, ColorConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
