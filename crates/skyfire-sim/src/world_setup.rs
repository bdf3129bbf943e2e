//! Entity spawn factories and session (re)initialisation.

use std::f64::consts::TAU;

use tracing::debug;

use skyfire_core::components::{
    Adversary, AdversaryId, ControlIntent, PlayerState, Projectile, ProjectileId,
};
use skyfire_core::enums::{Owner, SessionPhase};
use skyfire_core::events::SimEvent;
use skyfire_core::math::{ring_point, yaw_toward};
use skyfire_core::tuning::{AdversaryTuning, PlayerTuning, Tuning};
use skyfire_core::types::{Orientation, Position, Velocity};

use crate::world::{IdAllocator, World};

/// A fresh session world with a brand-new id allocator.
pub fn new_world(tuning: &Tuning) -> World {
    World {
        player: initial_player(&tuning.player),
        projectiles: Vec::new(),
        adversaries: Vec::new(),
        phase: SessionPhase::Active,
        ids: IdAllocator::default(),
        needs_seed: true,
    }
}

/// Restore the session to its initial configuration. Ids keep counting.
pub fn reset_world(world: &mut World, tuning: &Tuning) {
    world.player = initial_player(&tuning.player);
    world.projectiles.clear();
    world.adversaries.clear();
    world.phase = SessionPhase::Active;
    world.needs_seed = true;
}

/// The player at the start of a session.
pub fn initial_player(tuning: &PlayerTuning) -> PlayerState {
    PlayerState {
        position: tuning.start_position,
        orientation: Orientation::default(),
        health: tuning.max_health,
        score: 0,
        controls: ControlIntent::default(),
        fire_cooldown: 0.0,
    }
}

/// Add a projectile created at simulation time `now`.
pub fn spawn_projectile(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    owner: Owner,
    now: f64,
) -> ProjectileId {
    let id = world.ids.next_projectile();
    world.projectiles.push(Projectile {
        id,
        position,
        velocity,
        owner,
        created_at: now,
    });
    id
}

/// Add an adversary at `position`, facing the player, at full health.
pub fn spawn_adversary(
    world: &mut World,
    position: Position,
    tuning: &AdversaryTuning,
    events: &mut Vec<SimEvent>,
) -> AdversaryId {
    let id = world.ids.next_adversary();
    let orientation = yaw_toward(world.player.position - position)
        .map(Orientation::from_yaw)
        .unwrap_or_default();
    world.adversaries.push(Adversary {
        id,
        position,
        orientation,
        health: tuning.max_health,
    });
    debug!(adversary = %id, x = position.x, y = position.y, z = position.z, "adversary spawned");
    events.push(SimEvent::AdversarySpawned { id, position });
    id
}

/// Fill the population up to its minimum on an evenly spaced ring around
/// the player. Slot `i` sits at angle `i * TAU / min_population`.
pub fn spawn_ring(world: &mut World, tuning: &AdversaryTuning, events: &mut Vec<SimEvent>) {
    let slots = tuning.min_population;
    let center = world.player.position;
    for i in world.adversaries.len()..slots {
        let angle = i as f64 * TAU / slots as f64;
        spawn_adversary(world, ring_point(center, tuning.spawn_radius, angle), tuning, events);
    }
}
