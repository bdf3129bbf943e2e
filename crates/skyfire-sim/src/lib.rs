//! Simulation engine for SKYFIRE.
//!
//! Owns the world, runs the tick stages in a fixed order and produces
//! `GameStateSnapshot`s for presentation collaborators.

pub mod engine;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyfire_core as core;
