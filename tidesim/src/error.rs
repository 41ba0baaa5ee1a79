//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while configuring or advancing a session
///
/// `InvalidUnit` and `InvalidConfiguration` are raised before any tick is
/// accepted. `DegenerateGeometry` and `InvalidTimeStep` reject a single tick
/// or query and leave the last committed state untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid time step: {0}")]
    InvalidTimeStep(f64),
}
