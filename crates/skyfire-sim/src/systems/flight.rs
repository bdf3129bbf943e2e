//! Player flight model and fire-on-intent.
//!
//! Arcade handling: left/right roll about the nose axis, pitch up/down
//! about the wing axis (nose up for `pitch_up`), and the craft always
//! moves forward at a fixed speed. Movement only runs when the pilot mode
//! is `Flight`; firing works in both modes.

use glam::DQuat;
use tracing::debug;

use skyfire_core::components::{ControlIntent, PlayerState};
use skyfire_core::enums::{Owner, PilotMode};
use skyfire_core::tuning::PlayerTuning;
use skyfire_core::types::Orientation;

use crate::world::World;
use crate::world_setup;

/// -1, 0 or +1 from a pair of opposing buttons.
fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Rotate and move the player from its held controls.
pub fn fly(player: &mut PlayerState, tuning: &PlayerTuning, dt: f64) {
    let ControlIntent {
        turn_left,
        turn_right,
        pitch_up,
        pitch_down,
        ..
    } = player.controls;

    let step = tuning.turn_rate * dt;
    let roll = axis(turn_left, turn_right) * step;
    let pitch = axis(pitch_up, pitch_down) * step;

    let mut q = player.orientation.to_quat();
    if roll != 0.0 {
        q *= DQuat::from_rotation_z(roll);
    }
    if pitch != 0.0 {
        q *= DQuat::from_rotation_x(pitch);
    }

    player.orientation = Orientation::from_quat(q);
    player.position += player.orientation.forward() * tuning.flight_speed * dt;
}

/// Run the flight stage on the working world.
pub fn run(world: &mut World, tuning: &PlayerTuning, pilot: PilotMode, dt: f64, now: f64) {
    world.player.fire_cooldown = (world.player.fire_cooldown - dt).max(0.0);

    if pilot == PilotMode::Flight {
        fly(&mut world.player, tuning, dt);
    }

    if world.player.controls.fire && world.player.fire_cooldown <= 0.0 {
        let forward = world.player.orientation.forward();
        let muzzle = world.player.position + forward * tuning.muzzle_offset;
        let id = world_setup::spawn_projectile(
            world,
            muzzle,
            forward * tuning.muzzle_speed,
            Owner::Player,
            now,
        );
        world.player.fire_cooldown = tuning.fire_cooldown_secs;
        debug!(projectile = %id, "player fired");
    }
}
