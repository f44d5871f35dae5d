//! Error type for building and running a simulation
//!
//! Only configuration problems are hard errors. Degenerate geometry met
//! while stepping (zero-length vectors, coincident bodies) is handled in
//! place and reported through logging and [`StepReport`](super::engine::StepReport).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Normalizing a vector of zero (or non-finite) length
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("body mass must be strictly positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("body radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("unknown colour name `{0}`")]
    UnknownColor(String),

    #[error("tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f64),

    #[error("at least one tick per frame is required, got {0}")]
    InvalidTickCap(u32),
}
