//! Projectile integration and expiry.

use tracing::debug;

use skyfire_core::components::{Projectile, ProjectileId};

/// Result of advancing the projectile list by one tick.
#[derive(Debug, Clone, Default)]
pub struct BallisticsOutcome {
    pub projectiles: Vec<Projectile>,
    pub expired: Vec<ProjectileId>,
}

/// Advance every projectile by `velocity * dt` and drop the ones whose age
/// at `now` (the end-of-tick clock) has reached `ttl_secs`.
///
/// `dt` must already be sanitised. A zero `dt` leaves positions untouched.
pub fn advance(projectiles: &[Projectile], dt: f64, now: f64, ttl_secs: f64) -> BallisticsOutcome {
    let mut outcome = BallisticsOutcome {
        projectiles: Vec::with_capacity(projectiles.len()),
        expired: Vec::new(),
    };

    for p in projectiles {
        if p.age(now) >= ttl_secs {
            debug!(projectile = %p.id, age = p.age(now), "projectile expired");
            outcome.expired.push(p.id);
            continue;
        }
        outcome.projectiles.push(Projectile {
            position: p.position + p.velocity * dt,
            ..p.clone()
        });
    }

    outcome
}
