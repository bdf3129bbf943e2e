//! Population maintenance: keep enough adversaries in the air.

use std::f64::consts::TAU;

use rand::Rng;

use skyfire_core::enums::InitialPopulation;
use skyfire_core::events::SimEvent;
use skyfire_core::math::ring_point;
use skyfire_core::tuning::AdversaryTuning;

use crate::world::World;
use crate::world_setup;

/// Seed the opening wave if the session just started, otherwise spawn at
/// most one adversary at a random bearing on the spawn ring when the
/// population is under its minimum.
///
/// The random source is injected so tests and replays can seed it.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    tuning: &AdversaryTuning,
    initial: InitialPopulation,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) {
    if world.needs_seed {
        world.needs_seed = false;
        if initial == InitialPopulation::Ring {
            world_setup::spawn_ring(world, tuning, events);
            return;
        }
    }

    if world.adversaries.len() < tuning.min_population {
        let angle: f64 = rng.gen_range(0.0..TAU);
        let position = ring_point(world.player.position, tuning.spawn_radius, angle);
        world_setup::spawn_adversary(world, position, tuning, events);
    }
}
