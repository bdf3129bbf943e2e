use std::process::ExitCode;
use std::time::{Duration, Instant};

use skyfire_app::config;
use skyfire_app::game_loop::LoopSettings;
use skyfire_app::state::AppState;

const STATUS_INTERVAL: Duration = Duration::from_secs(1);

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let path = config::config_path();
    let sim_config = match config::load_sim_config(path.as_deref(), config::seed()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new();
    let settings = LoopSettings {
        config: sim_config,
        tick_interval: config::tick_interval(),
        autopilot: true,
    };
    if let Err(e) = state.start_simulation(settings) {
        tracing::error!(error = %e, "failed to start simulation");
        return ExitCode::FAILURE;
    }

    let run_for = config::run_duration();
    let started = Instant::now();
    while run_for.map_or(true, |limit| started.elapsed() < limit) && !state.loop_finished() {
        std::thread::sleep(STATUS_INTERVAL);
        if let Ok(Some(snap)) = state.get_snapshot() {
            tracing::info!(
                tick = snap.time.tick,
                score = snap.score,
                health = snap.health,
                adversaries = snap.adversaries.len(),
                projectiles = snap.projectiles.len(),
                "status"
            );
        }
    }

    let summary = match state.shutdown() {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "failed to stop simulation");
            return ExitCode::FAILURE;
        }
    };

    if let Some(snap) = &summary.last_snapshot {
        match serde_json::to_string(snap) {
            Ok(json) => tracing::debug!(%json, "final snapshot"),
            Err(e) => tracing::warn!(error = %e, "could not serialize final snapshot"),
        }
    }
    tracing::info!(
        ticks = summary.ticks,
        sessions_lost = summary.sessions_lost,
        best_score = summary.best_score,
        "simulation finished"
    );

    match summary.fault {
        Some(err) => {
            tracing::error!(error = %err, "simulation stopped on a fault");
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}
