//! Headless SKYFIRE host.
//!
//! Owns the simulation engine on a game loop thread, forwards commands to it
//! over a channel and keeps the latest snapshot for polling.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;

pub use skyfire_core as core;
