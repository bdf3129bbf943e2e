//! Commands written into the simulation by collaborators.
//!
//! Commands are queued and applied at the start of the next tick, in
//! submission order, never in the middle of a tick.

use serde::{Deserialize, Serialize};

use crate::components::ControlIntent;
use crate::enums::Owner;
use crate::types::{Orientation, Position, Velocity};

/// All inputs the simulation accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Overwrite the player pose.
    SubmitPose {
        position: Position,
        orientation: Orientation,
    },
    /// Replace the held control intent.
    SetControls(ControlIntent),
    /// Spawn a projectile.
    FireProjectile {
        position: Position,
        velocity: Velocity,
        owner: Owner,
    },
    /// Return the session to its initial configuration.
    Reset,
}
