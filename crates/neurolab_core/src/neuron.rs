//! A single plastic, fatigable neuron.
//!
//! Each [`Neuron::update`] runs four phases in a fixed order:
//!
//! 1. weighted sum of upstream values, scaled by `sensitivity`, through the
//!    activation function;
//! 2. Hebbian plasticity, only when the neuron itself is active;
//! 3. clamping every weight to `[-1, 1]`;
//! 4. the energy automaton, which may pin the output to `1.0`.

use crate::error::{NetworkError, Result};
use crate::signal::Signal;
use neurolab_data::{Activation, Connection, EnergyState, NeuronFeatures, NeuronParams};

/// Firing threshold shared by plasticity and the pre-synaptic test.
pub const ACTIVE_THRESHOLD: f64 = 0.5;

/// Bound applied to every weight after each tick.
pub const WEIGHT_LIMIT: f64 = 1.0;

#[inline]
#[must_use]
pub fn is_active(value: f64) -> bool {
    value > ACTIVE_THRESHOLD
}

#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    value: f64,
    activation: Activation,
    features: NeuronFeatures,
    params: NeuronParams,
    energy: EnergyState,
    connections: Vec<Connection>,
}

impl Neuron {
    #[must_use]
    pub fn new(activation: Activation, params: NeuronParams, features: NeuronFeatures) -> Self {
        Self {
            value: 0.0,
            activation,
            features,
            params,
            energy: EnergyState::full(params.energy_saturation),
            connections: Vec::new(),
        }
    }

    /// Appends an upstream connection. `source` indexes the slice later
    /// passed to [`Neuron::update`].
    pub fn assign(&mut self, source: usize, weight: f64) {
        self.connections.push(Connection { source, weight });
    }

    /// Replaces every weight at once.
    ///
    /// Fails without touching the current weights if `weights.len()` differs
    /// from the number of upstream connections.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        if weights.len() != self.connections.len() {
            return Err(NetworkError::WeightLengthMismatch {
                expected: self.connections.len(),
                actual: weights.len(),
            });
        }

        for (conn, &w) in self.connections.iter_mut().zip(weights) {
            conn.weight = w;
        }
        Ok(())
    }

    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.connections.iter().map(|c| c.weight).collect()
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn params(&self) -> &NeuronParams {
        &self.params
    }

    #[must_use]
    pub fn features(&self) -> NeuronFeatures {
        self.features
    }

    #[must_use]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    #[must_use]
    pub fn energy(&self) -> EnergyState {
        self.energy
    }

    #[must_use]
    pub fn is_recovering(&self) -> bool {
        self.energy.recovering
    }

    /// Runs one tick against the upstream layer.
    ///
    /// # Panics
    ///
    /// Panics if a connection's `source` is out of bounds for `upstream`.
    /// Networks only ever pass the layer the neuron was wired to.
    pub fn update<S: Signal>(&mut self, upstream: &[S]) {
        let sum: f64 = self
            .connections
            .iter()
            .map(|c| upstream[c.source].value() * c.weight)
            .sum();
        self.value = self.activation.apply(sum * self.params.sensitivity);

        if self.features.plasticity {
            self.apply_plasticity(upstream);
        }

        for conn in &mut self.connections {
            conn.weight = conn.weight.clamp(-WEIGHT_LIMIT, WEIGHT_LIMIT);
        }

        if self.features.energy {
            self.apply_energy();
        }
    }

    fn apply_plasticity<S: Signal>(&mut self, upstream: &[S]) {
        if !is_active(self.value) {
            return;
        }

        for conn in &mut self.connections {
            if is_active(upstream[conn.source].value()) {
                conn.weight += self.params.potentiation_delta;
            } else {
                conn.weight -= self.params.depression_delta;
            }
        }
    }

    fn apply_energy(&mut self) {
        let p = &self.params;
        let energy = &mut self.energy;

        if energy.recovering {
            self.value = 1.0;
            energy.level += p.energy_recovering_delta;

            if energy.level > p.energy_saturation {
                energy.level = p.energy_saturation;
                energy.recovering = false;
                tracing::trace!(level = energy.level, "neuron recovered");
            }
        } else {
            let level = self.value.clamp(0.0, 1.0);
            energy.level -= level * p.energy_delta;

            if energy.level < p.energy_threshold {
                energy.recovering = true;
                tracing::trace!(level = energy.level, "neuron fatigued");
            }
        }
    }
}

impl Signal for Neuron {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }
}
