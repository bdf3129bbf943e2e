//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CONTACT_DRAIN_PER_SEC;

/// Who fired a projectile. Serialised as `"player"` / `"enemy"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Player,
    Enemy,
}

/// Session state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Active,
    /// Terminal until an explicit reset. The world is frozen.
    GameOver,
}

/// How the player pose is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilotMode {
    /// The input collaborator submits the pose every tick.
    #[default]
    External,
    /// The simulation flies the player from the held control intent.
    Flight,
}

/// What happens when an adversary touches the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BodyCollisionPolicy {
    /// Health drops to zero immediately.
    #[default]
    InstantLoss,
    /// Health drains while in contact, per touching adversary.
    Drain { damage_per_sec: f64 },
}

impl BodyCollisionPolicy {
    /// Drain policy at the default rate.
    pub fn default_drain() -> Self {
        Self::Drain {
            damage_per_sec: CONTACT_DRAIN_PER_SEC,
        }
    }
}

/// How the population is seeded when a session starts or resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialPopulation {
    /// Spawn the full minimum population immediately on an evenly spaced ring.
    #[default]
    Ring,
    /// Start empty and let the per-tick population manager backfill.
    Deferred,
}

/// What ended the player's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    EnemyFire,
    BodyCollision,
    GroundImpact,
}

/// Entity category, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Adversary,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Player => "player",
            EntityKind::Projectile => "projectile",
            EntityKind::Adversary => "adversary",
        };
        f.write_str(name)
    }
}

/// Tick stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TickStage {
    Commands,
    Flight,
    Ballistics,
    Steering,
    Collision,
    Population,
    Session,
}

impl fmt::Display for TickStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TickStage::Commands => "commands",
            TickStage::Flight => "flight",
            TickStage::Ballistics => "ballistics",
            TickStage::Steering => "steering",
            TickStage::Collision => "collision",
            TickStage::Population => "population",
            TickStage::Session => "session",
        };
        f.write_str(name)
    }
}
