//! Collision resolution: projectile hits, body collisions and ground impact.
//!
//! Runs once per tick after ballistics and steering. All damage and removals
//! are accumulated in side buffers while the projectile list is walked, then
//! applied in one go, so list order cannot cause double counting. A
//! projectile scores at most one hit per tick and a destroyed adversary
//! cannot be hit again in the same pass.

use std::collections::HashSet;

use tracing::{debug, info};

use skyfire_core::components::{Adversary, PlayerState, Projectile, ProjectileId};
use skyfire_core::enums::{BodyCollisionPolicy, LossCause, Owner};
use skyfire_core::events::SimEvent;
use skyfire_core::math::distance;
use skyfire_core::tuning::Tuning;

/// Everything the resolver changed.
#[derive(Debug, Clone)]
pub struct CollisionOutcome {
    pub projectiles: Vec<Projectile>,
    pub adversaries: Vec<Adversary>,
    pub player_health: i32,
    pub score_gained: u32,
    /// The first cause that brought player health to zero or below this tick.
    pub loss_cause: Option<LossCause>,
}

/// Player health accumulator that remembers what knocked it out.
struct PlayerDamage {
    health: i32,
    cause: Option<LossCause>,
}

impl PlayerDamage {
    fn set(&mut self, health: i32, cause: LossCause) {
        self.health = health;
        if self.health <= 0 && self.cause.is_none() {
            self.cause = Some(cause);
        }
    }

    fn subtract(&mut self, amount: i32, cause: LossCause) {
        self.set(self.health.saturating_sub(amount), cause);
    }
}

/// Resolve all contacts for one tick against the working entity lists.
pub fn resolve(
    player: &PlayerState,
    projectiles: Vec<Projectile>,
    adversaries: Vec<Adversary>,
    tuning: &Tuning,
    body_policy: BodyCollisionPolicy,
    dt: f64,
    events: &mut Vec<SimEvent>,
) -> CollisionOutcome {
    let rules = &tuning.projectile;
    let mut spent: HashSet<ProjectileId> = HashSet::new();
    let mut adversary_health: Vec<i32> = adversaries.iter().map(|a| a.health).collect();
    let mut destroyed = vec![false; adversaries.len()];
    let mut damage = PlayerDamage {
        health: player.health,
        cause: None,
    };
    let mut score_gained: u32 = 0;

    // 1 + 2. Projectile hits.
    for p in &projectiles {
        if spent.contains(&p.id) {
            continue;
        }

        match p.owner {
            Owner::Enemy => {
                if distance(p.position, player.position) < rules.enemy_hit_radius {
                    spent.insert(p.id);
                    damage.subtract(rules.enemy_damage, LossCause::EnemyFire);
                    debug!(projectile = %p.id, health = damage.health, "player hit");
                    events.push(SimEvent::PlayerHit {
                        by: p.id,
                        damage: rules.enemy_damage,
                        health: damage.health,
                    });
                }
            }
            Owner::Player => {
                for (i, a) in adversaries.iter().enumerate() {
                    if destroyed[i] || distance(p.position, a.position) >= rules.player_hit_radius {
                        continue;
                    }

                    spent.insert(p.id);
                    adversary_health[i] = adversary_health[i].saturating_sub(rules.player_damage);
                    debug!(
                        projectile = %p.id,
                        adversary = %a.id,
                        health = adversary_health[i],
                        "adversary hit"
                    );

                    if adversary_health[i] <= 0 {
                        destroyed[i] = true;
                        score_gained = score_gained.saturating_add(tuning.adversary.kill_score);
                        info!(adversary = %a.id, projectile = %p.id, "adversary destroyed");
                        events.push(SimEvent::AdversaryDestroyed {
                            id: a.id,
                            position: a.position,
                            by: p.id,
                        });
                    }
                    break;
                }
            }
        }
    }

    let projectiles: Vec<Projectile> = projectiles
        .into_iter()
        .filter(|p| !spent.contains(&p.id))
        .collect();

    let adversaries: Vec<Adversary> = adversaries
        .into_iter()
        .zip(adversary_health)
        .zip(destroyed)
        .filter(|(_, gone)| !gone)
        .map(|((a, health), _)| Adversary { health, ..a })
        .collect();

    // 3. Body collisions with the survivors.
    for a in &adversaries {
        if distance(a.position, player.position) >= tuning.adversary.body_radius {
            continue;
        }
        match body_policy {
            BodyCollisionPolicy::InstantLoss => {
                info!(adversary = %a.id, "body collision with adversary");
                damage.set(0, LossCause::BodyCollision);
            }
            BodyCollisionPolicy::Drain { damage_per_sec } => {
                let drained = ((damage_per_sec * dt).ceil() as i32).max(1);
                damage.subtract(drained, LossCause::BodyCollision);
                debug!(adversary = %a.id, drained, health = damage.health, "contact drain");
            }
        }
    }

    // 4. Ground plane.
    if player.position.y <= tuning.player.ground_level {
        info!(altitude = player.position.y, "player hit the ground");
        damage.set(0, LossCause::GroundImpact);
    }

    CollisionOutcome {
        projectiles,
        adversaries,
        player_health: damage.health,
        score_gained,
        loss_cause: damage.cause,
    }
}
