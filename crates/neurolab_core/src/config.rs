//! Configuration for network construction.
//!
//! Maps to the `[network]` table of the application's `config.toml`.
//!
//! ## Example
//!
//! ```toml
//! layer_sizes = [13, 15, 30, 30, 15, 8]
//! activation = "sigmoid"
//! seed = 42
//!
//! [features]
//! plasticity = true
//! energy = true
//!
//! [hyperparameters]
//! sensitivity = { min = 0.0, max = 10.0 }
//! ```

use neurolab_data::{Activation, NeuronFeatures, NeuronParams};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-open sampling interval `[min, max)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A zero-width range always yields `min`.
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * (self.max - self.min)
    }

    fn ensure_valid(&self, name: &str) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.min.is_finite() && self.max.is_finite(),
            "{name} range must be finite"
        );
        anyhow::ensure!(self.min <= self.max, "{name} range min must not exceed max");
        Ok(())
    }
}

/// Sampling ranges for the seven per-neuron hyperparameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HyperparameterConfig {
    pub depression_delta: ParamRange,
    pub potentiation_delta: ParamRange,
    pub energy_delta: ParamRange,
    pub energy_threshold: ParamRange,
    pub energy_recovering_delta: ParamRange,
    pub energy_saturation: ParamRange,
    pub sensitivity: ParamRange,
}

impl Default for HyperparameterConfig {
    fn default() -> Self {
        Self {
            depression_delta: ParamRange::new(0.0, 0.05),
            potentiation_delta: ParamRange::new(0.0, 0.05),
            energy_delta: ParamRange::new(0.0, 0.05),
            energy_threshold: ParamRange::new(0.0, 0.5),
            energy_recovering_delta: ParamRange::new(0.0, 0.01),
            energy_saturation: ParamRange::new(0.5, 1.0),
            sensitivity: ParamRange::new(0.0, 10.0),
        }
    }
}

impl HyperparameterConfig {
    /// Draws one neuron's parameters. The draw order is part of the seed
    /// contract: changing it changes every seeded network.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> NeuronParams {
        NeuronParams {
            depression_delta: self.depression_delta.sample(rng),
            potentiation_delta: self.potentiation_delta.sample(rng),
            energy_delta: self.energy_delta.sample(rng),
            energy_threshold: self.energy_threshold.sample(rng),
            energy_recovering_delta: self.energy_recovering_delta.sample(rng),
            energy_saturation: self.energy_saturation.sample(rng),
            sensitivity: self.sensitivity.sample(rng),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let named = [
            ("depression_delta", &self.depression_delta),
            ("potentiation_delta", &self.potentiation_delta),
            ("energy_delta", &self.energy_delta),
            ("energy_threshold", &self.energy_threshold),
            ("energy_recovering_delta", &self.energy_recovering_delta),
            ("energy_saturation", &self.energy_saturation),
            ("sensitivity", &self.sensitivity),
        ];
        for (name, range) in named {
            range.ensure_valid(name)?;
        }

        anyhow::ensure!(
            self.depression_delta.min >= 0.0,
            "Depression delta must be non-negative"
        );
        anyhow::ensure!(
            self.potentiation_delta.min >= 0.0,
            "Potentiation delta must be non-negative"
        );
        anyhow::ensure!(
            self.energy_delta.min >= 0.0,
            "Energy delta must be non-negative"
        );
        anyhow::ensure!(
            self.energy_recovering_delta.min >= 0.0,
            "Energy recovering delta must be non-negative"
        );
        anyhow::ensure!(
            self.energy_saturation.min > 0.0,
            "Energy saturation must be positive"
        );
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Neuron count per layer; the first entry is also the input width.
    pub layer_sizes: Vec<usize>,
    pub activation: Activation,
    pub features: NeuronFeatures,
    /// Fixed seed for reproducible construction. `None` draws from entropy.
    pub seed: Option<u64>,
    pub hyperparameters: HyperparameterConfig,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            layer_sizes: vec![13, 15, 30, 30, 15, 8],
            activation: Activation::Sigmoid,
            features: NeuronFeatures::default(),
            seed: None,
            hyperparameters: HyperparameterConfig::default(),
        }
    }
}

impl NetworkConfig {
    /// Default configuration with the given layer sizes.
    #[must_use]
    pub fn with_layers(layer_sizes: &[usize]) -> Self {
        Self {
            layer_sizes: layer_sizes.to_vec(),
            ..Self::default()
        }
    }

    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - At least two layers, each with at least one neuron
    /// - Every sampling range finite with `min <= max`
    /// - Deltas non-negative, saturation positive
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.layer_sizes.len() >= 2,
            "Network needs at least 2 layers, got {}",
            self.layer_sizes.len()
        );
        anyhow::ensure!(
            self.layer_sizes.iter().all(|&s| s > 0),
            "Every layer must have at least one neuron"
        );
        self.hyperparameters.validate()
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of everything that shapes the network.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.layer_sizes).as_bytes());
        hasher.update(format!("{:?}", self.activation).as_bytes());
        hasher.update(format!("{:?}", self.features).as_bytes());
        hasher.update(format!("{:?}", self.seed).as_bytes());
        hasher.update(format!("{:?}", self.hyperparameters).as_bytes());
        hex::encode(hasher.finalize())
    }
}
