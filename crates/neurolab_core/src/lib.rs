//! # Neurolab Core
//!
//! A small layered neuron network with online Hebbian plasticity and a
//! per-neuron fatigue automaton, ticked once per simulation step.
//!
//! This crate contains:
//! - The [`Signal`] capability and its [`Input`] and [`Neuron`] variants
//! - [`Network`] construction (dense feed-forward layers) and tick evaluation
//! - Hyperparameter sampling configuration
//! - Metrics collection and structured logging
//!
//! Construction is the only place randomness is consumed; with a fixed seed
//! every tick after it is reproducible.
//!
//! ## Example
//!
//! ```
//! use neurolab_core::Network;
//!
//! let mut network = Network::seeded(&[2, 3, 2], 42).unwrap();
//! network.set_inputs(&[1.0, 1.0]).unwrap();
//! network.update();
//!
//! assert_eq!(network.outputs().len(), 2);
//! ```

/// Network construction and sampling configuration
pub mod config;
/// Contract errors raised by construction and bulk writes
pub mod error;
/// Tick metrics and logging setup
pub mod metrics;
/// Layered network: topology and per-tick evaluation
pub mod network;
/// Single neuron update rule
pub mod neuron;
/// Signal capability and input slots
pub mod signal;

pub use config::{HyperparameterConfig, NetworkConfig, ParamRange};
pub use error::{NetworkError, Result};
pub use metrics::{init_logging, Metrics, TickReport};
pub use network::Network;
pub use neuron::{is_active, Neuron};
pub use signal::{Input, Signal};

pub use neurolab_data::{Activation, Connection, EnergyState, NeuronFeatures, NeuronParams};
