//! Core data structures for neurolab networks.

pub mod neuron;
pub mod snapshot;
