//! Plain state types shared by the neurolab engine and its hosts.
//!
//! Nothing in this crate evaluates a network; it only describes the data a
//! neuron carries so it can be configured, inspected and printed.

pub mod data;

pub use data::neuron::{Activation, Connection, EnergyState, NeuronFeatures, NeuronParams};
pub use data::snapshot::{NetworkSnapshot, NeuronSnapshot};
