//! State snapshot: the complete visible state published after each tick.

use serde::{Deserialize, Serialize};

use crate::components::{AdversaryId, ProjectileId};
use crate::enums::{Owner, SessionPhase};
use crate::events::SimEvent;
use crate::types::{Orientation, Position, SimTime, Velocity};

/// Immutable simulation state handed to presentation collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub adversaries: Vec<AdversaryView>,
    pub score: u32,
    pub health: i32,
    pub game_over: bool,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
    pub velocity: Velocity,
    pub owner: Owner,
    /// Seconds since creation.
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdversaryView {
    pub id: AdversaryId,
    pub position: Position,
    pub orientation: Orientation,
    pub health: i32,
}
