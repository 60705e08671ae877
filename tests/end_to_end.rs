use neurolab_core::Network;
use neurolab_data::{Activation, NetworkSnapshot};

const SEED: u64 = 42;

/// Tick-1 outputs of `[2, 3, 2]`, seed 42, both inputs at 1.0.
const GOLDEN: [f64; 2] = [0.15634490243164725, 0.9761191404166152];

/// Recomputes tick 1 from a pre-tick snapshot: nothing is fatigued yet, so
/// the outputs are a pure forward pass over the initial weights.
fn reference_outputs(snapshot: &NetworkSnapshot) -> Vec<f64> {
    let mut upstream = snapshot.inputs.clone();
    for layer in 0..snapshot.layer_sizes.len() {
        upstream = snapshot
            .neurons
            .iter()
            .filter(|n| n.layer == layer)
            .map(|n| {
                let sum: f64 = n
                    .connections
                    .iter()
                    .map(|c| upstream[c.source] * c.weight)
                    .sum();
                Activation::Sigmoid.apply(sum * n.params.sensitivity)
            })
            .collect();
    }
    upstream
}

#[test]
fn test_two_three_two_golden_tick() {
    let mut net = Network::seeded(&[2, 3, 2], SEED).unwrap();
    net.set_inputs(&[1.0, 1.0]).unwrap();
    let before = net.snapshot();

    net.update();
    let outputs = net.outputs().to_vec();

    assert_eq!(outputs.len(), 2);
    for &o in &outputs {
        assert!((0.0..=1.0).contains(&o), "Output {o} outside sigmoid range");
    }
    assert_eq!(outputs, GOLDEN, "Construction stream changed");
    assert_eq!(outputs, reference_outputs(&before));

    let mut again = Network::seeded(&[2, 3, 2], SEED).unwrap();
    again.set_inputs(&[1.0, 1.0]).unwrap();
    again.update();
    let bits: Vec<u64> = outputs.iter().map(|o| o.to_bits()).collect();
    let again_bits: Vec<u64> = again.outputs().iter().map(|o| o.to_bits()).collect();
    assert_eq!(bits, again_bits);
}

#[test]
fn test_memory_feedback_loop() {
    // Feed outputs back into the inputs for a few hundred ticks, the way a
    // controller implements memory channels.
    let mut net = Network::seeded(&[4, 6, 6, 4], SEED).unwrap();
    for t in 0..300 {
        let mut inputs = net.outputs().to_vec();
        inputs[3] = (t as f64 * 0.1).sin();
        net.set_inputs(&inputs).unwrap();
        net.update();
        assert!(net.outputs().iter().all(|o| (0.0..=1.0).contains(o)));
    }
    assert_eq!(net.tick(), 300);
}
