//! Simulation engine for SKYSTRIKE.
//!
//! Owns the hecs ECS world, advances it one fixed tick at a time,
//! and produces GameSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skystrike_core as core;

#[cfg(test)]
mod tests;
