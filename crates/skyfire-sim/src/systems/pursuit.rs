//! Pursuit steering: every adversary flies straight at the player.

use skyfire_core::components::Adversary;
use skyfire_core::math::{normalize_or_zero, yaw_toward};
use skyfire_core::types::Position;

/// New position and heading for one adversary.
///
/// An adversary sitting exactly on the target keeps its position and
/// heading, and one directly above or below it keeps its heading. Pitch and
/// roll are never touched.
pub fn steer(adversary: &Adversary, target: Position, speed: f64, dt: f64) -> Adversary {
    let to_target = normalize_or_zero(target - adversary.position);
    if to_target == Position::ZERO {
        return adversary.clone();
    }

    let mut next = adversary.clone();
    next.position = adversary.position + to_target * speed * dt;
    if let Some(yaw) = yaw_toward(to_target) {
        next.orientation.yaw = yaw;
    }
    next
}

/// Steer the whole list. Adversaries do not interact with each other.
pub fn run(adversaries: &[Adversary], target: Position, speed: f64, dt: f64) -> Vec<Adversary> {
    adversaries
        .iter()
        .map(|a| steer(a, target, speed, dt))
        .collect()
}
