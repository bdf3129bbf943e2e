//! Events emitted by the simulation for effects and UI feedback.
//!
//! Events are drained into the next published snapshot.

use serde::{Deserialize, Serialize};

use crate::components::{AdversaryId, ProjectileId};
use crate::enums::LossCause;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    AdversarySpawned {
        id: AdversaryId,
        position: Position,
    },
    /// An adversary reached zero health. Triggers an explosion.
    AdversaryDestroyed {
        id: AdversaryId,
        position: Position,
        by: ProjectileId,
    },
    PlayerHit {
        by: ProjectileId,
        damage: i32,
        health: i32,
    },
    /// The session entered game over. Triggers the player explosion.
    PlayerDestroyed {
        position: Position,
        cause: Option<LossCause>,
    },
    ProjectileExpired {
        id: ProjectileId,
    },
    SessionReset,
}
