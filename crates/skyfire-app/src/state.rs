//! Host state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyfire_core::commands::PlayerCommand;
use skyfire_core::state::GameStateSnapshot;

use crate::game_loop::{self, LoopSettings, LoopSummary};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the state can be shared by reference
/// - `Arc<Mutex<Option<...>>>` for the latest snapshot (written by the game loop thread)
pub struct AppState {
    /// `None` until `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling. Updated after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    loop_handle: Mutex<Option<JoinHandle<LoopSummary>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.loop_handle
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }

    /// True once the game loop thread has exited on its own.
    pub fn loop_finished(&self) -> bool {
        self.loop_handle
            .lock()
            .map(|handle| handle.as_ref().is_some_and(|h| h.is_finished()))
            .unwrap_or(false)
    }

    /// Spawn the game loop thread if it is not already running.
    pub fn start_simulation(&self, settings: LoopSettings) -> Result<(), String> {
        let mut handle = self.loop_handle.lock().map_err(|e| e.to_string())?;
        if handle.is_some() {
            return Err("Simulation already running".into());
        }

        let (cmd_tx, join) = game_loop::spawn_game_loop(settings, self.latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn game loop: {e}"))?;

        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        *tx_lock = Some(cmd_tx);
        *handle = Some(join);
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;

        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|e| format!("Failed to send command: {e}")),
            None => Err("Simulation not started".into()),
        }
    }

    /// The latest published snapshot, if a tick has run.
    pub fn get_snapshot(&self) -> Result<Option<GameStateSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Stop the game loop and wait for its summary.
    pub fn shutdown(&self) -> Result<LoopSummary, String> {
        let join = self
            .loop_handle
            .lock()
            .map_err(|e| e.to_string())?
            .take()
            .ok_or_else(|| "Simulation not started".to_string())?;

        if let Some(tx) = self.command_tx.lock().map_err(|e| e.to_string())?.take() {
            // The loop may already have stopped on a fatal error.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }

        join.join().map_err(|_| "Game loop thread panicked".to_string())
    }
}
