//! Sensor/motor glue between an arena body and its network.
//!
//! Input layout, for `m` memory channels:
//!
//! | slots          | content                                  |
//! |----------------|------------------------------------------|
//! | `0..m`         | previous tick's outputs `0..m`           |
//! | `m`            | clock, `sin(t * frequency)`              |
//! | `m+1..=m+4`    | wall proximity forward/right/back/left   |
//! | `m+5..=m+8`    | velocity along forward/right/back/left   |
//!
//! Outputs `m..m+4` weight the four movement directions.

use crate::model::arena::{Arena, Vec2};
use crate::model::config::AgentConfig;
use neurolab_core::Network;

pub const SENSOR_CHANNELS: usize = 9;
pub const MOTOR_CHANNELS: usize = 4;

/// Forward, right, back, left. The body never turns.
pub const DIRECTIONS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(-1.0, 0.0),
];

#[must_use]
pub const fn input_width(memory: usize) -> usize {
    memory + SENSOR_CHANNELS
}

#[must_use]
pub const fn output_width(memory: usize) -> usize {
    memory + MOTOR_CHANNELS
}

pub struct Agent {
    network: Network,
    config: AgentConfig,
    position: Vec2,
    velocity: Vec2,
    clock: f64,
    distance_travelled: f64,
    inputs: Vec<f64>,
}

impl Agent {
    pub fn new(network: Network, config: AgentConfig, position: Vec2) -> anyhow::Result<Self> {
        let sizes = network.layer_sizes();
        anyhow::ensure!(
            network.inputs().len() == input_width(config.memory)
                && network.outputs().len() == output_width(config.memory),
            "Network {sizes:?} does not fit an agent with {} memory channels",
            config.memory
        );

        let inputs = vec![0.0; input_width(config.memory)];
        Ok(Self {
            network,
            config,
            position,
            velocity: Vec2::ZERO,
            clock: 0.0,
            distance_travelled: 0.0,
            inputs,
        })
    }

    /// One tick: sense, think, move.
    pub fn step(&mut self, arena: &Arena, dt: f64) -> anyhow::Result<()> {
        anyhow::ensure!(
            dt > 0.0 && dt.is_finite(),
            "Tick duration must be positive and finite, got {dt}"
        );
        self.clock += dt;
        self.sense(arena);
        self.network.set_inputs(&self.inputs)?;
        self.network.update();
        self.act(arena, dt);
        Ok(())
    }

    fn sense(&mut self, arena: &Arena) {
        let m = self.config.memory;
        let wave = (self.clock * self.config.frequency).sin();

        self.inputs[..m].copy_from_slice(&self.network.outputs()[..m]);
        self.inputs[m] = wave;

        for (k, dir) in DIRECTIONS.iter().enumerate() {
            let origin = self.position + *dir * self.config.radius;
            let distance = arena.raycast(origin, *dir, self.config.sensing_range);
            let proximity = self.distance_sense(distance);
            let speed = self.speed_sense(self.velocity.dot(*dir));
            self.inputs[m + 1 + k] = wave * proximity;
            self.inputs[m + 5 + k] = wave * speed;
        }
    }

    fn act(&mut self, arena: &Arena, dt: f64) {
        let m = self.config.memory;
        let outputs = self.network.outputs();
        let motor = DIRECTIONS
            .iter()
            .zip(&outputs[m..m + MOTOR_CHANNELS])
            .fold(Vec2::ZERO, |acc, (dir, &o)| acc + *dir * o);

        let delta = motor * dt;
        let start = self.position;

        // Slide: a blocked axis is dropped, the other still applies.
        let along_x = Vec2::new(self.position.x + delta.x, self.position.y);
        if !arena.is_blocked(along_x, self.config.radius) {
            self.position = along_x;
        }
        let along_y = Vec2::new(self.position.x, self.position.y + delta.y);
        if !arena.is_blocked(along_y, self.config.radius) {
            self.position = along_y;
        }

        let moved = self.position - start;
        self.velocity = moved * (1.0 / dt);
        self.distance_travelled += moved.length();
    }

    /// 1 at contact, 0 at the edge of sensing range.
    #[must_use]
    pub fn distance_sense(&self, distance: f64) -> f64 {
        (1.0 - distance / self.config.sensing_range).powi(2)
    }

    #[must_use]
    pub fn speed_sense(&self, speed: f64) -> f64 {
        (speed / self.config.speed_scale).powi(2)
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[must_use]
    pub fn distance_travelled(&self) -> f64 {
        self.distance_travelled
    }

    /// Inputs written on the most recent tick.
    #[must_use]
    pub fn last_inputs(&self) -> &[f64] {
        &self.inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::arena::Rect;

    fn agent(memory: usize, seed: u64) -> Agent {
        let network =
            Network::seeded(&[input_width(memory), 6, output_width(memory)], seed).unwrap();
        let config = AgentConfig {
            memory,
            ..Default::default()
        };
        Agent::new(network, config, Vec2::new(5.0, 5.0)).unwrap()
    }

    #[test]
    fn test_rejects_mismatched_network() {
        let network = Network::seeded(&[5, 3], 1).unwrap();
        assert!(Agent::new(network, AgentConfig::default(), Vec2::ZERO).is_err());
    }

    #[test]
    fn test_step_rejects_bad_dt() {
        let arena = Arena::new(10.0, 10.0, Vec::new());
        let mut a = agent(1, 4);

        assert!(a.step(&arena, 0.0).is_err());
        assert!(a.step(&arena, -0.1).is_err());
        assert!(a.step(&arena, f64::NAN).is_err());
        assert!(a.step(&arena, f64::INFINITY).is_err());

        assert_eq!(a.network().tick(), 0);
        assert_eq!(a.clock(), 0.0);
        assert_eq!(a.velocity(), Vec2::ZERO);

        a.step(&arena, 0.1).unwrap();
        assert!(a.velocity().x.is_finite() && a.velocity().y.is_finite());
    }

    #[test]
    fn test_senses() {
        let a = agent(0, 1);
        assert_eq!(a.distance_sense(0.0), 1.0);
        assert_eq!(a.distance_sense(10.0), 0.0);
        assert_eq!(a.distance_sense(5.0), 0.25);
        assert_eq!(a.speed_sense(-2.0), 1.0);
        assert_eq!(a.speed_sense(1.0), 0.25);
    }

    #[test]
    fn test_memory_channels_echo_previous_outputs() {
        let arena = Arena::new(10.0, 10.0, Vec::new());
        let mut a = agent(3, 7);

        a.step(&arena, 0.1).unwrap();
        let previous: Vec<f64> = a.network().outputs()[..3].to_vec();
        a.step(&arena, 0.1).unwrap();

        assert_eq!(&a.last_inputs()[..3], previous.as_slice());
    }

    #[test]
    fn test_clock_and_sensor_layout() {
        let arena = Arena::new(10.0, 10.0, Vec::new());
        let mut a = agent(1, 3);
        a.step(&arena, 0.5).unwrap();

        let wave = (0.5f64).sin();
        let inputs = a.last_inputs();
        assert_eq!(inputs[0], 0.0);
        assert_eq!(inputs[1], wave);
        // Centred in a 10x10 room, radius 0.5: every wall 4.5 away.
        let proximity = wave * a.distance_sense(4.5);
        assert_eq!(&inputs[2..6], &[proximity; 4]);
        // At rest before the first move.
        assert_eq!(&inputs[6..10], &[0.0; 4]);
    }

    #[test]
    fn test_stays_inside_arena() {
        let arena = Arena::new(6.0, 6.0, vec![Rect::new(1.0, 1.0, 1.0, 1.0)]);
        let network = Network::seeded(&[input_width(2), 8, output_width(2)], 21).unwrap();
        let config = AgentConfig {
            memory: 2,
            ..Default::default()
        };
        let mut a = Agent::new(network, config, Vec2::new(3.0, 3.0)).unwrap();

        for _ in 0..2000 {
            a.step(&arena, 0.5).unwrap();
            assert!(!arena.is_blocked(a.position(), 0.5));
        }
        assert!(a.distance_travelled() > 0.0);
    }
}
