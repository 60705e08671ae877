use serde::{Deserialize, Serialize};

/// Scalar nonlinearity applied to a neuron's scaled input sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Standard logistic function, range (0, 1).
    #[default]
    Sigmoid,
    /// Hyperbolic tangent, range (-1, 1).
    Tanh,
    /// Pass-through.
    Identity,
}

impl Activation {
    #[inline]
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
            Self::Identity => x,
        }
    }
}

/// Optional stages of the per-tick neuron rule.
///
/// Turning both off yields a plain weighted-sum neuron.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuronFeatures {
    /// Hebbian potentiation/depression of incoming weights.
    pub plasticity: bool,
    /// Fatigue automaton (energy drain and recovery pin).
    pub energy: bool,
}

impl Default for NeuronFeatures {
    fn default() -> Self {
        Self {
            plasticity: true,
            energy: true,
        }
    }
}

/// Per-neuron hyperparameters, sampled once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeuronParams {
    /// Weight decrease for inactive sources while the neuron fires.
    pub depression_delta: f64,
    /// Weight increase for co-active sources.
    pub potentiation_delta: f64,
    /// Energy drained per unit of firing strength.
    pub energy_delta: f64,
    /// Level below which the neuron starts recovering.
    pub energy_threshold: f64,
    /// Energy regained per tick while recovering.
    pub energy_recovering_delta: f64,
    /// Upper bound of the energy reserve.
    pub energy_saturation: f64,
    /// Gain applied to the weighted sum before activation.
    pub sensitivity: f64,
}

impl Default for NeuronParams {
    fn default() -> Self {
        Self {
            depression_delta: 0.0,
            potentiation_delta: 0.0,
            energy_delta: 0.0,
            energy_threshold: 0.0,
            energy_recovering_delta: 0.0,
            energy_saturation: 1.0,
            sensitivity: 1.0,
        }
    }
}

/// Fatigue state of a neuron.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyState {
    /// Current reserve, never above the neuron's saturation.
    pub level: f64,
    /// `true` while the neuron is pinned and refilling.
    pub recovering: bool,
}

impl EnergyState {
    /// Fresh reserve: full (1.0) but never above `saturation`.
    #[must_use]
    pub fn full(saturation: f64) -> Self {
        Self {
            level: saturation.min(1.0),
            recovering: false,
        }
    }
}

/// A weighted link from one upstream signal.
///
/// `source` indexes into the upstream layer: the input slots for layer 0,
/// the previous neuron layer otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: usize,
    pub weight: f64,
}
