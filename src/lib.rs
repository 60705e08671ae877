//! Host glue for the neurolab engine: a 2-D arena, an agent body that turns
//! raycasts and velocity into network inputs and outputs into motion, and
//! the headless simulation loop driven by the `neurolab` binary.

pub mod model;

pub use model::simulation::{RunSummary, Simulation};
