//! Session state machine: Active until health runs out, then GameOver
//! until an explicit reset.

use tracing::info;

use skyfire_core::enums::{LossCause, SessionPhase};
use skyfire_core::events::SimEvent;
use skyfire_core::tuning::Tuning;

use crate::world::World;
use crate::world_setup;

/// Move to GameOver the first time health is observed at or below zero.
/// Returns true on the tick the transition fires. `cause` is `None` when health
/// was already non-positive before any damage this tick.
pub fn evaluate(world: &mut World, cause: Option<LossCause>, events: &mut Vec<SimEvent>) -> bool {
    if world.phase != SessionPhase::Active || world.player.health > 0 {
        return false;
    }

    world.phase = SessionPhase::GameOver;
    info!(
        score = world.player.score,
        health = world.player.health,
        ?cause,
        "game over"
    );
    events.push(SimEvent::PlayerDestroyed {
        position: world.player.position,
        cause,
    });
    true
}

/// Return to the initial configuration from any phase.
pub fn reset(world: &mut World, tuning: &Tuning, events: &mut Vec<SimEvent>) {
    let previous = world.phase;
    world_setup::reset_world(world, tuning);
    info!(?previous, "session reset");
    events.push(SimEvent::SessionReset);
}
