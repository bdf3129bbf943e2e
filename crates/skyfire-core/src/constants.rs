//! Simulation constants and tuning defaults.

use glam::DVec3;

// --- Timing ---

/// Frame time substituted for negative or non-finite input (seconds).
pub const FALLBACK_DT: f64 = 1.0 / 60.0;

// --- Player ---

/// Health at session start.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Spawn position at session start and after reset.
pub const PLAYER_START_POSITION: DVec3 = DVec3::new(0.0, 5.0, 0.0);

/// Altitude of the ground plane. Touching it ends the session.
pub const GROUND_LEVEL: f64 = -1.0;

/// Roll and pitch rate of the flight model (radians per second).
pub const PLAYER_TURN_RATE: f64 = 1.5;

/// Forward speed of the flight model (units per second).
pub const PLAYER_FLIGHT_SPEED: f64 = 10.0;

/// Distance ahead of the nose at which player rounds spawn.
pub const MUZZLE_OFFSET: f64 = 2.0;

/// Muzzle speed of player rounds fired from the control intent.
pub const MUZZLE_SPEED: f64 = 20.0;

/// Minimum time between two intent-driven shots (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.1;

// --- Projectiles ---

/// Maximum projectile age before it is discarded (seconds).
pub const PROJECTILE_TTL_SECS: f64 = 3.0;

/// Enemy rounds closer than this to the player hit it.
pub const ENEMY_HIT_RADIUS: f64 = 2.0;

/// Damage dealt to the player by one enemy round.
pub const ENEMY_PROJECTILE_DAMAGE: i32 = 10;

/// Player rounds closer than this to an adversary hit it.
pub const PLAYER_HIT_RADIUS: f64 = 1.5;

/// Damage dealt to an adversary by one player round.
pub const PLAYER_PROJECTILE_DAMAGE: i32 = 25;

// --- Adversaries ---

/// Pursuit speed (units per second).
pub const ADVERSARY_SPEED: f64 = 3.0;

/// Health of a freshly spawned adversary.
pub const ADVERSARY_MAX_HEALTH: i32 = 100;

/// Adversary-to-player distance that counts as a body collision.
pub const BODY_COLLISION_RADIUS: f64 = 2.0;

/// Score awarded for destroying an adversary.
pub const KILL_SCORE: u32 = 100;

/// Minimum adversary population while the session is active.
pub const MIN_ADVERSARIES: usize = 3;

/// Radius of the spawn ring around the player.
pub const SPAWN_RADIUS: f64 = 30.0;

/// Health drained per second of contact under the drain body-collision policy.
pub const CONTACT_DRAIN_PER_SEC: f64 = 25.0;
