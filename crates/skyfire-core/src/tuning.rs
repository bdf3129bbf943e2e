//! Gameplay tuning, grouped per entity kind.
//!
//! Every field defaults to the matching value in `constants`, and every
//! struct deserialises with `#[serde(default)]` so a config file only has
//! to name what it changes. Runtime settings (tick rate, seed) live with
//! the host, not here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SimError;
use crate::types::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub adversary: AdversaryTuning,
}

/// Player craft and flight model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: i32,
    pub start_position: Position,
    pub ground_level: f64,
    /// Roll/pitch rate in radians per second.
    pub turn_rate: f64,
    /// Forward speed in units per second.
    pub flight_speed: f64,
    pub muzzle_offset: f64,
    pub muzzle_speed: f64,
    pub fire_cooldown_secs: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            start_position: PLAYER_START_POSITION,
            ground_level: GROUND_LEVEL,
            turn_rate: PLAYER_TURN_RATE,
            flight_speed: PLAYER_FLIGHT_SPEED,
            muzzle_offset: MUZZLE_OFFSET,
            muzzle_speed: MUZZLE_SPEED,
            fire_cooldown_secs: FIRE_COOLDOWN_SECS,
        }
    }
}

/// Projectile lifetime and hit model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub ttl_secs: f64,
    pub enemy_hit_radius: f64,
    pub enemy_damage: i32,
    pub player_hit_radius: f64,
    pub player_damage: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            ttl_secs: PROJECTILE_TTL_SECS,
            enemy_hit_radius: ENEMY_HIT_RADIUS,
            enemy_damage: ENEMY_PROJECTILE_DAMAGE,
            player_hit_radius: PLAYER_HIT_RADIUS,
            player_damage: PLAYER_PROJECTILE_DAMAGE,
        }
    }
}

/// Adversary pursuit, durability and population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdversaryTuning {
    pub speed: f64,
    pub max_health: i32,
    pub body_radius: f64,
    pub kill_score: u32,
    pub min_population: usize,
    pub spawn_radius: f64,
}

impl Default for AdversaryTuning {
    fn default() -> Self {
        Self {
            speed: ADVERSARY_SPEED,
            max_health: ADVERSARY_MAX_HEALTH,
            body_radius: BODY_COLLISION_RADIUS,
            kill_score: KILL_SCORE,
            min_population: MIN_ADVERSARIES,
            spawn_radius: SPAWN_RADIUS,
        }
    }
}

impl Tuning {
    /// Reject values that would break tick invariants.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("projectile.ttl_secs", self.projectile.ttl_secs),
            ("projectile.enemy_hit_radius", self.projectile.enemy_hit_radius),
            ("projectile.player_hit_radius", self.projectile.player_hit_radius),
            ("adversary.body_radius", self.adversary.body_radius),
            ("adversary.spawn_radius", self.adversary.spawn_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("adversary.speed", self.adversary.speed),
            ("player.turn_rate", self.player.turn_rate),
            ("player.flight_speed", self.player.flight_speed),
            ("player.muzzle_offset", self.player.muzzle_offset),
            ("player.muzzle_speed", self.player.muzzle_speed),
            ("player.fire_cooldown_secs", self.player.fire_cooldown_secs),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.player.max_health <= 0 || self.adversary.max_health <= 0 {
            return Err(SimError::InvalidConfig(
                "max health must be positive".into(),
            ));
        }
        if !self.player.start_position.is_finite() || !self.player.ground_level.is_finite() {
            return Err(SimError::InvalidConfig(
                "player start position and ground level must be finite".into(),
            ));
        }
        if self.player.start_position.y <= self.player.ground_level {
            return Err(SimError::InvalidConfig(
                "player must start above the ground plane".into(),
            ));
        }
        Ok(())
    }
}
