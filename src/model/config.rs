//! Application configuration.
//!
//! Maps to `config.toml`. Every table is optional; missing keys fall back to
//! the defaults below.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [network]
//! layer_sizes = [13, 15, 30, 30, 15, 8]
//! seed = 42
//!
//! [agent]
//! memory = 4
//! frequency = 1.0
//!
//! [arena]
//! width = 40.0
//! height = 40.0
//!
//! [simulation]
//! ticks = 5000
//! dt = 0.02
//! ```

use crate::model::agent::{input_width, output_width};
use crate::model::arena::{Arena, Rect, Vec2};
use neurolab_core::NetworkConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Output channels fed back as inputs on the next tick.
    pub memory: usize,
    /// Angular frequency of the clock input and sensor wave.
    pub frequency: f64,
    /// Raycast length; obstacles further away read as silence.
    pub sensing_range: f64,
    /// Speed that maps to a full-strength velocity sense.
    pub speed_scale: f64,
    pub radius: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            memory: 4,
            frequency: 1.0,
            sensing_range: 10.0,
            speed_scale: 2.0,
            radius: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    pub start: Vec2,
    pub obstacles: Vec<Rect>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 40.0,
            start: Vec2::new(20.0, 20.0),
            obstacles: vec![Rect::new(8.0, 26.0, 6.0, 4.0), Rect::new(28.0, 8.0, 4.0, 8.0)],
        }
    }
}

impl ArenaConfig {
    #[must_use]
    pub fn build(&self) -> Arena {
        Arena::new(self.width, self.height, self.obstacles.clone())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub ticks: u64,
    /// Seconds of simulated time per tick.
    pub dt: f64,
    /// Ticks between progress log lines, 0 to disable.
    pub log_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 5000,
            dt: 0.02,
            log_interval: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub agent: AgentConfig,
    pub arena: ArenaConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// The network's first and last layers must match the agent's sensor
    /// and motor widths.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.network.validate()?;

        let sizes = &self.network.layer_sizes;
        let expected_in = input_width(self.agent.memory);
        let expected_out = output_width(self.agent.memory);
        anyhow::ensure!(
            sizes[0] == expected_in,
            "Input layer must have {expected_in} neurons for memory = {}, got {}",
            self.agent.memory,
            sizes[0]
        );
        anyhow::ensure!(
            sizes[sizes.len() - 1] == expected_out,
            "Output layer must have {expected_out} neurons for memory = {}, got {}",
            self.agent.memory,
            sizes[sizes.len() - 1]
        );

        // Agent validation
        anyhow::ensure!(
            self.agent.frequency.is_finite(),
            "Agent frequency must be finite"
        );
        anyhow::ensure!(
            self.agent.sensing_range > 0.0,
            "Sensing range must be positive"
        );
        anyhow::ensure!(self.agent.speed_scale > 0.0, "Speed scale must be positive");
        anyhow::ensure!(self.agent.radius > 0.0, "Agent radius must be positive");

        // Arena validation
        anyhow::ensure!(self.arena.width > 0.0, "Arena width must be positive");
        anyhow::ensure!(self.arena.height > 0.0, "Arena height must be positive");
        anyhow::ensure!(
            self.arena.obstacles.iter().all(|r| r.w >= 0.0 && r.h >= 0.0),
            "Obstacle sizes must be non-negative"
        );
        anyhow::ensure!(
            !self
                .arena
                .build()
                .is_blocked(self.arena.start, self.agent.radius),
            "Start position ({}, {}) is blocked",
            self.arena.start.x,
            self.arena.start.y
        );

        // Simulation validation
        anyhow::ensure!(
            self.simulation.dt > 0.0 && self.simulation.dt.is_finite(),
            "Tick duration must be positive"
        );

        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))
    }
}
