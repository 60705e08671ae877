use crate::data::neuron::{Activation, Connection, EnergyState, NeuronParams};
use serde::{Deserialize, Serialize};

/// Read-only copy of one neuron's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeuronSnapshot {
    pub layer: usize,
    pub index: usize,
    pub value: f64,
    pub params: NeuronParams,
    pub energy: EnergyState,
    pub connections: Vec<Connection>,
}

/// Read-only copy of a whole network, taken between ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub tick: u64,
    pub activation: Activation,
    pub layer_sizes: Vec<usize>,
    pub inputs: Vec<f64>,
    pub outputs: Vec<f64>,
    pub neurons: Vec<NeuronSnapshot>,
}

impl NetworkSnapshot {
    /// Looks up a neuron by position.
    #[must_use]
    pub fn neuron(&self, layer: usize, index: usize) -> Option<&NeuronSnapshot> {
        self.neurons
            .iter()
            .find(|n| n.layer == layer && n.index == index)
    }

    /// Pretty JSON for inspection tools.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
