//! The simulation world: every entity plus the session phase.
//!
//! `World` is a plain value. The engine clones it at the start of a tick,
//! runs the stages on the clone and only commits the clone if every stage
//! succeeded, so a failed tick leaves no trace.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use skyfire_core::components::{Adversary, AdversaryId, PlayerState, Projectile, ProjectileId};
use skyfire_core::enums::{EntityKind, SessionPhase, TickStage};
use skyfire_core::error::SimError;
use skyfire_core::math::is_finite;

/// Monotonic id source. Never rewound, not even by a session reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdAllocator {
    next_projectile: u64,
    next_adversary: u64,
}

impl IdAllocator {
    pub fn next_projectile(&mut self) -> ProjectileId {
        let id = ProjectileId(self.next_projectile);
        self.next_projectile += 1;
        id
    }

    pub fn next_adversary(&mut self) -> AdversaryId {
        let id = AdversaryId(self.next_adversary);
        self.next_adversary += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: PlayerState,
    pub projectiles: Vec<Projectile>,
    pub adversaries: Vec<Adversary>,
    pub phase: SessionPhase,
    pub ids: IdAllocator,
    /// Set when a session starts; the population stage seeds the opening
    /// wave on the next active tick and clears it.
    pub needs_seed: bool,
}

impl World {
    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Fail if any entity holds a NaN or infinite value.
    pub fn check_finite(&self, stage: TickStage) -> Result<(), SimError> {
        let player = &self.player;
        if !is_finite(player.position)
            || !player.orientation.is_finite()
            || !player.fire_cooldown.is_finite()
        {
            return Err(SimError::NonFiniteState {
                stage,
                entity: EntityKind::Player,
                id: None,
            });
        }

        if let Some(p) = self
            .projectiles
            .iter()
            .find(|p| !is_finite(p.position) || !is_finite(p.velocity) || !p.created_at.is_finite())
        {
            return Err(SimError::NonFiniteState {
                stage,
                entity: EntityKind::Projectile,
                id: Some(p.id.0),
            });
        }

        if let Some(a) = self
            .adversaries
            .iter()
            .find(|a| !is_finite(a.position) || !a.orientation.is_finite())
        {
            return Err(SimError::NonFiniteState {
                stage,
                entity: EntityKind::Adversary,
                id: Some(a.id.0),
            });
        }

        Ok(())
    }

    /// Fail on the first id shared by two live entities of the same kind.
    pub fn check_unique_ids(&self) -> Result<(), SimError> {
        let mut seen = HashSet::with_capacity(self.projectiles.len());
        for p in &self.projectiles {
            if !seen.insert(p.id) {
                return Err(SimError::DuplicateId {
                    kind: EntityKind::Projectile,
                    id: p.id.0,
                });
            }
        }

        let mut seen = HashSet::with_capacity(self.adversaries.len());
        for a in &self.adversaries {
            if !seen.insert(a.id) {
                return Err(SimError::DuplicateId {
                    kind: EntityKind::Adversary,
                    id: a.id.0,
                });
            }
        }

        Ok(())
    }
}
