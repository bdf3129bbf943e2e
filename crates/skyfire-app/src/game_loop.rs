//! Game loop thread: runs the simulation engine at a fixed rate and publishes
//! snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via an `mpsc` channel; snapshots are stored in shared state for
//! synchronous polling. Each tick is fed the real time elapsed since the
//! previous one.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use skyfire_core::error::SimError;
use skyfire_core::state::GameStateSnapshot;
use skyfire_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::state::GameLoopCommand;

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub config: SimConfig,
    /// Nominal wall-clock duration of one tick.
    pub tick_interval: Duration,
    /// Drive the player with the scripted autopilot.
    pub autopilot: bool,
}

/// What the loop did before it stopped.
#[derive(Debug, Clone, Default)]
pub struct LoopSummary {
    pub ticks: u64,
    pub sessions_lost: u32,
    pub best_score: u32,
    pub last_snapshot: Option<GameStateSnapshot>,
    /// Set when the loop stopped on a fatal simulation error.
    pub fault: Option<SimError>,
}

impl LoopSummary {
    fn record(&mut self, snapshot: &GameStateSnapshot, was_over: bool) {
        self.ticks += 1;
        self.best_score = self.best_score.max(snapshot.score);
        if snapshot.game_over && !was_over {
            self.sessions_lost += 1;
            info!(
                score = snapshot.score,
                tick = snapshot.time.tick,
                "session lost"
            );
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle that yields the loop summary.
pub fn spawn_game_loop(
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyfire-game-loop".into())
        .spawn(move || run_game_loop(settings, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command, channel disconnect or a fatal
/// simulation error.
fn run_game_loop(
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let mut engine = SimulationEngine::new(settings.config);
    let autopilot = settings
        .autopilot
        .then(|| Autopilot::new(settings.config.pilot));
    let mut summary = LoopSummary::default();

    info!(
        seed = settings.config.seed,
        tick_ms = settings.tick_interval.as_secs_f64() * 1000.0,
        autopilot = settings.autopilot,
        "game loop started"
    );

    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!(ticks = summary.ticks, "game loop stopping");
                    summary.last_snapshot = Some(engine.snapshot().clone());
                    return summary;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Scripted input reads the previous snapshot
        if let Some(autopilot) = &autopilot {
            engine.queue_commands(autopilot.commands(engine.snapshot()));
        }

        // 3. Advance one tick by the real elapsed time
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let was_over = engine.snapshot().game_over;
        let snapshot = match engine.tick(elapsed) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(error = %err, "game loop stopped");
                summary.last_snapshot = Some(engine.snapshot().clone());
                summary.fault = Some(err);
                return summary;
            }
        };
        summary.record(&snapshot, was_over);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += settings.tick_interval;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > settings.tick_interval * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
