use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::neuron::Neuron;
use rand::Rng;

pub fn validate_layer_sizes(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(NetworkError::invalid_topology(format!(
            "need at least 2 layers, got {}",
            layer_sizes.len()
        )));
    }
    if let Some(pos) = layer_sizes.iter().position(|&s| s == 0) {
        return Err(NetworkError::invalid_topology(format!(
            "layer {pos} has no neurons"
        )));
    }
    Ok(())
}

/// Builds the dense layered graph.
///
/// Layer 0 neuron `j` reads input slot `j` only; every neuron of layer
/// `i > 0` reads every neuron of layer `i - 1`. Each neuron draws its
/// hyperparameters first, then its weights in upstream order.
pub fn create_layers_with_rng<R: Rng>(
    config: &NetworkConfig,
    rng: &mut R,
) -> Result<Vec<Vec<Neuron>>> {
    validate_layer_sizes(&config.layer_sizes)?;

    let mut layers: Vec<Vec<Neuron>> = Vec::with_capacity(config.layer_sizes.len());

    for (i, &size) in config.layer_sizes.iter().enumerate() {
        let mut layer = Vec::with_capacity(size);

        for j in 0..size {
            let params = config.hyperparameters.sample(rng);
            let mut neuron = Neuron::new(config.activation, params, config.features);

            if i == 0 {
                neuron.assign(j, rng.gen_range(-1.0..1.0));
            } else {
                for k in 0..config.layer_sizes[i - 1] {
                    neuron.assign(k, rng.gen_range(-1.0..1.0));
                }
            }

            layer.push(neuron);
        }

        layers.push(layer);
    }

    Ok(layers)
}

/// Total number of weighted connections for the given sizes.
#[must_use]
pub fn connection_count(layer_sizes: &[usize]) -> usize {
    let first = layer_sizes.first().copied().unwrap_or(0);
    first
        + layer_sizes
            .windows(2)
            .map(|w| w[0] * w[1])
            .sum::<usize>()
}
