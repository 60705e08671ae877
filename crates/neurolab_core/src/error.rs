//! Error types for neurolab_core.
//!
//! Construction and bulk-replacement contracts fail with a `NetworkError`;
//! a tick itself never fails.

use thiserror::Error;

/// Main error type for network operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Layer sizes that cannot form a network.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Bulk weight replacement with the wrong number of weights.
    #[error("Weight length mismatch: expected {expected}, got {actual}")]
    WeightLengthMismatch { expected: usize, actual: usize },

    /// Bulk input write with the wrong number of values.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    /// NaN or infinite value written to an input slot.
    #[error("Non-finite input at slot {index}: {value}")]
    NonFiniteInput { index: usize, value: f64 },

    /// Addressed a neuron that does not exist.
    #[error("No neuron at layer {layer}, index {index}")]
    NeuronOutOfRange { layer: usize, index: usize },
}

/// Result type alias for neurolab_core operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

impl NetworkError {
    /// Creates a new invalid topology error.
    #[must_use]
    pub fn invalid_topology<S: Into<String>>(msg: S) -> Self {
        Self::InvalidTopology(msg.into())
    }
}
