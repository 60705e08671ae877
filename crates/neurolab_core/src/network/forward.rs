use super::Network;
use crate::signal::{Input, Signal};

impl Network {
    /// Runs one tick: layer 0 through the last layer, each neuron in index
    /// order, then copies the last layer into the output buffer.
    pub fn update(&mut self) {
        self.update_with(|_, _| {});
    }

    /// Same as [`Network::update`], calling `after_layer(i, inputs)` once
    /// layer `i` is fully evaluated.
    ///
    /// The hook may write the input slots; only layer 0 reads them, so a
    /// write after layer 0 takes effect on the next tick.
    pub fn update_with<F>(&mut self, mut after_layer: F)
    where
        F: FnMut(usize, &mut [Input]),
    {
        for i in 0..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(i);
            let layer = &mut rest[0];

            match done.last() {
                None => {
                    for neuron in layer.iter_mut() {
                        neuron.update(&self.inputs);
                    }
                }
                Some(upstream) => {
                    for neuron in layer.iter_mut() {
                        neuron.update(upstream);
                    }
                }
            }

            after_layer(i, &mut self.inputs);
        }

        if let Some(last) = self.layers.last() {
            for (out, neuron) in self.outputs.iter_mut().zip(last) {
                *out = neuron.value();
            }
        }

        self.tick += 1;
    }
}
