//! Headless tick loop: one agent, one arena.

use crate::model::agent::Agent;
use crate::model::arena::{Arena, Vec2};
use crate::model::config::AppConfig;
use neurolab_core::{Metrics, Network, TickReport};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// End-of-run digest, printable as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub position: Vec2,
    pub distance_travelled: f64,
    pub recovering: usize,
    pub peak_recovering: usize,
    pub outputs: Vec<f64>,
    pub config_fingerprint: String,
    pub elapsed_ms: u64,
}

pub struct Simulation {
    arena: Arena,
    agent: Agent,
    metrics: Metrics,
    dt: f64,
    fingerprint: String,
}

impl Simulation {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let network = Network::build(&config.network)?;
        let agent = Agent::new(network, config.agent.clone(), config.arena.start)?;
        let fingerprint = config.network.fingerprint();

        tracing::info!(
            layers = ?config.network.layer_sizes,
            seed = ?config.network.seed,
            fingerprint = %fingerprint,
            "Simulation initialized"
        );

        Ok(Self {
            arena: config.arena.build(),
            agent,
            metrics: Metrics::new(config.simulation.log_interval),
            dt: config.simulation.dt,
            fingerprint,
        })
    }

    pub fn step(&mut self) -> anyhow::Result<TickReport> {
        let start = Instant::now();
        self.agent.step(&self.arena, self.dt)?;
        Ok(self
            .metrics
            .record_tick(self.agent.network(), start.elapsed()))
    }

    pub fn run(&mut self, ticks: u64) -> anyhow::Result<()> {
        for _ in 0..ticks {
            self.step()?;
        }
        tracing::info!(
            ticks = self.metrics.tick_count(),
            distance = self.agent.distance_travelled(),
            "Run finished"
        );
        Ok(())
    }

    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let network = self.agent.network();
        RunSummary {
            ticks: network.tick(),
            position: self.agent.position(),
            distance_travelled: self.agent.distance_travelled(),
            recovering: network.recovering_count(),
            peak_recovering: self.metrics.peak_recovering(),
            outputs: network.outputs().to_vec(),
            config_fingerprint: self.fingerprint.clone(),
            elapsed_ms: self.metrics.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.network.seed = Some(seed);
        config.simulation.log_interval = 0;
        config
    }

    #[test]
    fn test_step_advances_network() {
        let mut sim = Simulation::new(&seeded_config(1)).unwrap();
        let report = sim.step().unwrap();
        assert_eq!(report.tick, 1);
        assert_eq!(sim.summary().ticks, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = seeded_config(1);
        config.network.layer_sizes = vec![4, 4];
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn test_run_summary() {
        let mut sim = Simulation::new(&seeded_config(2)).unwrap();
        sim.run(50).unwrap();
        let summary = sim.summary();
        assert_eq!(summary.ticks, 50);
        assert_eq!(summary.outputs.len(), 8);
        assert!(summary.recovering <= summary.peak_recovering);
        assert!(!sim.arena().is_blocked(summary.position, 0.5));
    }
}
