//! Entity records held in the simulation world.
//!
//! Components are plain data. Game logic lives in the sim crate's systems.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Owner;
use crate::types::{Orientation, Position, Velocity};

/// Unique projectile id. Never reused within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u64);

/// Unique adversary id. Never reused within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdversaryId(pub u64);

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl fmt::Display for AdversaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// Held controls for the player craft, as polled by the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub fire: bool,
}

/// The player craft and its session counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub orientation: Orientation,
    /// Not clamped at zero; the session machine only looks at the sign.
    pub health: i32,
    pub score: u32,
    pub controls: ControlIntent,
    /// Seconds until the next intent-driven shot is allowed.
    pub fire_cooldown: f64,
}

/// A round in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Position,
    pub velocity: Velocity,
    pub owner: Owner,
    /// Simulation time at creation (seconds).
    pub created_at: f64,
}

impl Projectile {
    /// Age at simulation time `now`.
    pub fn age(&self, now: f64) -> f64 {
        now - self.created_at
    }
}

/// An AI-driven pursuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adversary {
    pub id: AdversaryId,
    pub position: Position,
    pub orientation: Orientation,
    pub health: i32,
}
