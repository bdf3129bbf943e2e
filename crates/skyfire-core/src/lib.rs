//! Core types and definitions for the SKYFIRE simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vector math, components, commands, state snapshots, events, tuning
//! and constants. It contains no tick logic and no runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod math;
pub mod state;
pub mod tuning;
pub mod types;
