use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neurolab_core::{Network, NetworkConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const AGENT_LAYERS: [usize; 6] = [13, 15, 30, 30, 15, 8];

/// Benchmark one tick of the default agent-sized network.
fn bench_network_update(c: &mut Criterion) {
    let mut network = Network::seeded(&AGENT_LAYERS, 42).unwrap();
    network.set_inputs(&[0.5; 13]).unwrap();

    c.bench_function("network_update", |b| {
        b.iter(|| {
            network.update();
            black_box(network.outputs()[0])
        })
    });
}

/// Benchmark a tick with plasticity and energy disabled.
fn bench_network_update_plain(c: &mut Criterion) {
    let mut config = NetworkConfig::with_layers(&AGENT_LAYERS);
    config.features.plasticity = false;
    config.features.energy = false;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut network = Network::from_config(&config, &mut rng).unwrap();
    network.set_inputs(&[0.5; 13]).unwrap();

    c.bench_function("network_update_plain", |b| {
        b.iter(|| {
            network.update();
            black_box(network.outputs()[0])
        })
    });
}

/// Benchmark a wide network tick.
fn bench_network_update_wide(c: &mut Criterion) {
    let mut network = Network::seeded(&[64, 256, 256, 32], 42).unwrap();
    network.set_inputs(&[1.0; 64]).unwrap();

    c.bench_function("network_update_wide", |b| {
        b.iter(|| {
            network.update();
            black_box(network.outputs()[0])
        })
    });
}

/// Benchmark network construction.
fn bench_network_creation(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("network_creation", |b| {
        b.iter(|| {
            let network = Network::with_rng(black_box(&AGENT_LAYERS), &mut rng).unwrap();
            black_box(network)
        })
    });
}

/// Benchmark snapshot capture.
fn bench_network_snapshot(c: &mut Criterion) {
    let network = Network::seeded(&AGENT_LAYERS, 42).unwrap();

    c.bench_function("network_snapshot", |b| {
        b.iter(|| {
            let snapshot = network.snapshot();
            black_box(snapshot)
        })
    });
}

criterion_group!(
    benches,
    bench_network_update,
    bench_network_update_plain,
    bench_network_update_wide,
    bench_network_creation,
    bench_network_snapshot
);
criterion_main!(benches);
