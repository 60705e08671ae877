//! The "produces a current value" capability shared by inputs and neurons.

use serde::{Deserialize, Serialize};

/// Anything a neuron can read from.
pub trait Signal {
    fn value(&self) -> f64;
}

/// Externally driven value slot. The network only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    value: f64,
}

impl Input {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }
}

impl Signal for Input {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }
}

impl Signal for f64 {
    #[inline]
    fn value(&self) -> f64 {
        *self
    }
}
