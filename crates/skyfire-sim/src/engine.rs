//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world, queues collaborator commands, runs
//! the tick stages in their fixed order and publishes `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use skyfire_core::commands::PlayerCommand;
use skyfire_core::enums::{BodyCollisionPolicy, InitialPopulation, PilotMode, SessionPhase, TickStage};
use skyfire_core::error::SimError;
use skyfire_core::events::SimEvent;
use skyfire_core::state::GameStateSnapshot;
use skyfire_core::tuning::Tuning;
use skyfire_core::types::{sanitize_dt, SimTime};

use crate::systems;
use crate::world::World;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
    pub pilot: PilotMode,
    pub body_collision: BodyCollisionPolicy,
    pub initial_population: InitialPopulation,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
            pilot: PilotMode::default(),
            body_collision: BodyCollisionPolicy::default(),
            initial_population: InitialPopulation::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        self.tuning.validate()?;
        if let BodyCollisionPolicy::Drain { damage_per_sec } = self.body_collision {
            if !(damage_per_sec.is_finite() && damage_per_sec >= 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "body_collision.damage_per_sec must be non-negative, got {damage_per_sec}"
                )));
            }
        }
        Ok(())
    }
}

/// State a tick mutates before it is committed.
struct Working {
    world: World,
    rng: ChaCha8Rng,
    events: Vec<SimEvent>,
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    /// Events produced outside a tick (direct reset), published with the next snapshot.
    pending_events: Vec<SimEvent>,
    last_snapshot: GameStateSnapshot,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let world = world_setup::new_world(&config.tuning);
        let time = SimTime::default();
        let last_snapshot = systems::snapshot::build_snapshot(&world, &time, Vec::new());
        Self {
            config,
            world,
            time,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            pending_events: Vec::new(),
            last_snapshot,
        }
    }

    /// Validate the config before building the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Reset the session right away, between ticks, and return the fresh
    /// snapshot. Queued commands are kept for the next tick.
    pub fn reset(&mut self) -> GameStateSnapshot {
        systems::session::reset(&mut self.world, &self.config.tuning, &mut self.pending_events);
        self.last_snapshot = systems::snapshot::build_snapshot(&self.world, &self.time, Vec::new());
        self.last_snapshot.clone()
    }

    /// Advance the simulation by `elapsed_secs` and return the resulting snapshot.
    ///
    /// Negative or non-finite frame times are replaced by the fallback tick
    /// length. A tick that leaves non-finite state behind is discarded: the
    /// previous snapshot is returned (without events) and the fault is
    /// logged. Duplicate entity ids are fatal and returned as `Err`.
    pub fn tick(&mut self, elapsed_secs: f64) -> Result<GameStateSnapshot, SimError> {
        let dt = sanitize_dt(elapsed_secs);
        if dt != elapsed_secs {
            debug!(elapsed_secs, dt, "substituted fallback frame time");
        }

        let commands: Vec<PlayerCommand> = self.command_queue.drain(..).collect();
        let mut work = Working {
            world: self.world.clone(),
            rng: self.rng.clone(),
            events: Vec::new(),
        };

        let advanced = match self.step(&mut work, commands, dt) {
            Ok(advanced) => advanced,
            Err(err) if err.is_recoverable() => {
                warn!(tick = self.time.tick, error = %err, "tick discarded");
                let mut previous = self.last_snapshot.clone();
                previous.events.clear();
                return Ok(previous);
            }
            Err(err) => {
                error!(tick = self.time.tick, error = %err, "simulation invariant violated");
                return Err(err);
            }
        };

        self.world = work.world;
        self.rng = work.rng;
        if advanced {
            self.time.advance(dt);
        }

        let mut events = std::mem::take(&mut self.pending_events);
        events.extend(work.events);
        self.last_snapshot = systems::snapshot::build_snapshot(&self.world, &self.time, events);
        Ok(self.last_snapshot.clone())
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> &GameStateSnapshot {
        &self.last_snapshot
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.world.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the committed world for test setups.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run one tick on the working state. Returns whether the clock should
    /// advance (false while the world is frozen in GameOver).
    fn step(
        &self,
        work: &mut Working,
        commands: Vec<PlayerCommand>,
        dt: f64,
    ) -> Result<bool, SimError> {
        let now = self.time.elapsed_secs;
        let tuning = &self.config.tuning;

        for command in commands {
            self.apply_command(work, command, now);
        }
        work.world.check_finite(TickStage::Commands)?;

        if work.world.is_game_over() {
            return Ok(false);
        }

        // 1. Flight (player pose and fire-on-intent)
        systems::flight::run(&mut work.world, &tuning.player, self.config.pilot, dt, now);
        work.world.check_finite(TickStage::Flight)?;

        // 2. Ballistics
        let ballistics = systems::ballistics::advance(
            &work.world.projectiles,
            dt,
            now + dt,
            tuning.projectile.ttl_secs,
        );
        work.world.projectiles = ballistics.projectiles;
        work.events.extend(
            ballistics
                .expired
                .into_iter()
                .map(|id| SimEvent::ProjectileExpired { id }),
        );
        work.world.check_finite(TickStage::Ballistics)?;

        // 3. Pursuit steering
        work.world.adversaries = systems::pursuit::run(
            &work.world.adversaries,
            work.world.player.position,
            tuning.adversary.speed,
            dt,
        );
        work.world.check_finite(TickStage::Steering)?;

        // 4. Collision resolution
        let outcome = systems::collision::resolve(
            &work.world.player,
            std::mem::take(&mut work.world.projectiles),
            std::mem::take(&mut work.world.adversaries),
            tuning,
            self.config.body_collision,
            dt,
            &mut work.events,
        );
        work.world.projectiles = outcome.projectiles;
        work.world.adversaries = outcome.adversaries;
        work.world.player.health = outcome.player_health;
        work.world.player.score = work.world.player.score.saturating_add(outcome.score_gained);
        work.world.check_finite(TickStage::Collision)?;

        // 5. Population
        systems::population::run(
            &mut work.world,
            &tuning.adversary,
            self.config.initial_population,
            &mut work.rng,
            &mut work.events,
        );
        work.world.check_finite(TickStage::Population)?;

        // 6. Session
        systems::session::evaluate(&mut work.world, outcome.loss_cause, &mut work.events);

        work.world.check_unique_ids()?;
        Ok(true)
    }

    /// Apply one queued command to the working world.
    fn apply_command(&self, work: &mut Working, command: PlayerCommand, now: f64) {
        if work.world.is_game_over() && !matches!(command, PlayerCommand::Reset) {
            debug!(?command, "ignoring command while game over");
            return;
        }

        match command {
            PlayerCommand::SubmitPose {
                position,
                orientation,
            } => {
                work.world.player.position = position;
                work.world.player.orientation = orientation;
            }
            PlayerCommand::SetControls(intent) => {
                work.world.player.controls = intent;
            }
            PlayerCommand::FireProjectile {
                position,
                velocity,
                owner,
            } => {
                let id =
                    world_setup::spawn_projectile(&mut work.world, position, velocity, owner, now);
                debug!(projectile = %id, ?owner, "projectile fired");
            }
            PlayerCommand::Reset => {
                systems::session::reset(&mut work.world, &self.config.tuning, &mut work.events);
            }
        }
    }
}
