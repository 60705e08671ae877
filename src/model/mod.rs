pub mod agent;
pub mod arena;
pub mod config;
pub mod simulation;

pub use neurolab_core::{Network, NetworkConfig, NetworkError};
