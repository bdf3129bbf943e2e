//! Snapshot system: builds the published GameStateSnapshot from the world.
//!
//! Read-only; never modifies the world.

use skyfire_core::events::SimEvent;
use skyfire_core::state::{AdversaryView, GameStateSnapshot, PlayerView, ProjectileView};
use skyfire_core::types::SimTime;

use crate::world::World;

pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<SimEvent>) -> GameStateSnapshot {
    let mut projectiles: Vec<ProjectileView> = world
        .projectiles
        .iter()
        .map(|p| ProjectileView {
            id: p.id,
            position: p.position,
            velocity: p.velocity,
            owner: p.owner,
            age: p.age(time.elapsed_secs),
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);

    let mut adversaries: Vec<AdversaryView> = world
        .adversaries
        .iter()
        .map(|a| AdversaryView {
            id: a.id,
            position: a.position,
            orientation: a.orientation,
            health: a.health,
        })
        .collect();
    adversaries.sort_by_key(|a| a.id);

    GameStateSnapshot {
        time: *time,
        phase: world.phase,
        player: PlayerView {
            position: world.player.position,
            orientation: world.player.orientation,
        },
        projectiles,
        adversaries,
        score: world.player.score,
        health: world.player.health,
        game_over: world.is_game_over(),
        events,
    }
}
