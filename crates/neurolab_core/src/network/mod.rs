pub mod forward;
pub mod topology;

use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::neuron::Neuron;
use crate::signal::{Input, Signal};
use neurolab_data::{Activation, NetworkSnapshot, NeuronSnapshot};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use topology::{connection_count, create_layers_with_rng, validate_layer_sizes};

/// Layered, fully connected, plastic network.
///
/// Owns its input slots, its neurons and the output buffer. One
/// [`Network::update`] call is one tick.
#[derive(Clone, Debug)]
pub struct Network {
    activation: Activation,
    inputs: Vec<Input>,
    layers: Vec<Vec<Neuron>>,
    outputs: Vec<f64>,
    tick: u64,
}

impl Network {
    /// Builds a network with default hyperparameter ranges from thread RNG.
    pub fn new_random(layer_sizes: &[usize]) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::with_rng(layer_sizes, &mut rng)
    }

    pub fn with_rng<R: Rng>(layer_sizes: &[usize], rng: &mut R) -> Result<Self> {
        Self::from_config(&NetworkConfig::with_layers(layer_sizes), rng)
    }

    /// Reproducible construction: same sizes and seed, same network.
    pub fn seeded(layer_sizes: &[usize], seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(layer_sizes, &mut rng)
    }

    pub fn from_config<R: Rng>(config: &NetworkConfig, rng: &mut R) -> Result<Self> {
        let layers = topology::create_layers_with_rng(config, rng)?;
        let input_count = config.layer_sizes[0];
        let output_count = config.layer_sizes[config.layer_sizes.len() - 1];

        tracing::debug!(
            layers = ?config.layer_sizes,
            connections = topology::connection_count(&config.layer_sizes),
            activation = ?config.activation,
            "Network constructed"
        );

        Ok(Self {
            activation: config.activation,
            inputs: vec![Input::default(); input_count],
            layers,
            outputs: vec![0.0; output_count],
            tick: 0,
        })
    }

    /// Uses `config.seed` when set, entropy otherwise.
    pub fn build(config: &NetworkConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::from_config(config, &mut rng)
    }

    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn layers(&self) -> &[Vec<Neuron>] {
        &self.layers
    }

    #[must_use]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    #[must_use]
    pub fn neuron(&self, layer: usize, index: usize) -> Option<&Neuron> {
        self.layers.get(layer)?.get(index)
    }

    pub fn neuron_mut(&mut self, layer: usize, index: usize) -> Result<&mut Neuron> {
        self.layers
            .get_mut(layer)
            .and_then(|l| l.get_mut(index))
            .ok_or(NetworkError::NeuronOutOfRange { layer, index })
    }

    /// Bulk-replaces one neuron's weights.
    pub fn set_weights(&mut self, layer: usize, index: usize, weights: &[f64]) -> Result<()> {
        self.neuron_mut(layer, index)?.set_weights(weights)
    }

    #[must_use]
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Writes one input slot.
    pub fn set_input(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.inputs.len();
        let input = self
            .inputs
            .get_mut(index)
            .ok_or(NetworkError::InputLengthMismatch {
                expected: len,
                actual: index + 1,
            })?;
        if !value.is_finite() {
            return Err(NetworkError::NonFiniteInput { index, value });
        }
        input.set(value);
        Ok(())
    }

    /// Writes every input slot at once, or none on a length mismatch or a
    /// non-finite value.
    pub fn set_inputs(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.inputs.len() {
            return Err(NetworkError::InputLengthMismatch {
                expected: self.inputs.len(),
                actual: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(NetworkError::NonFiniteInput { index, value });
        }
        for (input, &v) in self.inputs.iter_mut().zip(values) {
            input.set(v);
        }
        Ok(())
    }

    /// Last layer's values as of the most recent tick.
    #[must_use]
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Completed ticks since construction.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.layers
            .iter()
            .flatten()
            .map(|n| n.connections().len())
            .sum()
    }

    #[must_use]
    pub fn neuron_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn recovering_count(&self) -> usize {
        self.layers
            .iter()
            .flatten()
            .filter(|n| n.is_recovering())
            .count()
    }

    /// Smallest and largest weight across the whole network.
    #[must_use]
    pub fn weight_bounds(&self) -> (f64, f64) {
        self.layers
            .iter()
            .flatten()
            .flat_map(|n| n.connections().iter().map(|c| c.weight))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
                (lo.min(w), hi.max(w))
            })
    }

    #[must_use]
    pub fn snapshot(&self) -> NetworkSnapshot {
        let neurons = self
            .layers
            .iter()
            .enumerate()
            .flat_map(|(layer, neurons)| {
                neurons
                    .iter()
                    .enumerate()
                    .map(move |(index, n)| NeuronSnapshot {
                        layer,
                        index,
                        value: n.value(),
                        params: *n.params(),
                        energy: n.energy(),
                        connections: n.connections().to_vec(),
                    })
            })
            .collect();

        NetworkSnapshot {
            tick: self.tick,
            activation: self.activation,
            layer_sizes: self.layer_sizes(),
            inputs: self.inputs.iter().map(Signal::value).collect(),
            outputs: self.outputs.clone(),
            neurons,
        }
    }
}
