use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use skyfire_core::error::SimError;
use skyfire_sim::SimConfig;

// Host runtime settings (not gameplay tuning).

pub const DEFAULT_TICK_HZ: u32 = 60;
pub const MAX_TICK_HZ: u32 = 1000;
pub const DEFAULT_RUN_SECS: u64 = 30;

/// Seed override for the simulation RNG.
pub fn seed() -> Option<u64> {
    env::var("SKYFIRE_SEED").ok().and_then(|v| v.parse().ok())
}

pub fn tick_hz() -> u32 {
    env::var("SKYFIRE_TICK_HZ")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|hz| *hz > 0)
        .map(|hz| hz.min(MAX_TICK_HZ))
        .unwrap_or(DEFAULT_TICK_HZ)
}

pub fn tick_interval() -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_hz()))
}

/// How long the headless host runs before shutting the loop down.
/// 0 runs until the process is killed.
pub fn run_duration() -> Option<Duration> {
    let secs = env::var("SKYFIRE_RUN_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RUN_SECS);
    (secs > 0).then(|| Duration::from_secs(secs))
}

pub fn config_path() -> Option<PathBuf> {
    env::var_os("SKYFIRE_CONFIG").map(PathBuf::from)
}

/// Parse a JSON `SimConfig`. Missing fields fall back to their defaults.
pub fn parse_sim_config(json: &str) -> Result<SimConfig, SimError> {
    serde_json::from_str(json).map_err(|e| SimError::InvalidConfig(e.to_string()))
}

/// Build the simulation config from an optional JSON file and seed override,
/// then validate it.
pub fn load_sim_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimConfig, SimError> {
    let mut config = match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| {
                SimError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
            })?;
            parse_sim_config(&json)?
        }
        None => SimConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfire_core::enums::{BodyCollisionPolicy, PilotMode};

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = parse_sim_config(
            r#"{ "seed": 7, "pilot": "Flight", "tuning": { "adversary": { "speed": 4.5 } } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.pilot, PilotMode::Flight);
        assert_eq!(config.tuning.adversary.speed, 4.5);
        assert_eq!(
            config.tuning.adversary.spawn_radius,
            SimConfig::default().tuning.adversary.spawn_radius
        );
        assert_eq!(config.body_collision, BodyCollisionPolicy::InstantLoss);
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        assert!(matches!(
            parse_sim_config("{ seed: "),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_without_file_applies_seed() {
        let config = load_sim_config(None, Some(99)).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.tuning, SimConfig::default().tuning);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_sim_config(Some(Path::new("/nonexistent/skyfire.json")), None).unwrap_err();
        assert!(err.to_string().contains("cannot read"), "Unexpected error: {err}");
    }

    #[test]
    fn test_load_rejects_invalid_tuning() {
        let path = env::temp_dir().join(format!("skyfire-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "tuning": { "projectile": { "ttl_secs": 0.0 } } }"#).unwrap();
        let result = load_sim_config(Some(&path), None);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }
}
