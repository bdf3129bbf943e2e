//! Scripted input for the headless host.
//!
//! Stands in for the keyboard and pose collaborators: it holds the trigger,
//! swings the nose onto the nearest adversary and presses restart once the
//! session is over.

use skyfire_core::commands::PlayerCommand;
use skyfire_core::components::ControlIntent;
use skyfire_core::enums::PilotMode;
use skyfire_core::math::yaw_toward;
use skyfire_core::state::{AdversaryView, GameStateSnapshot};
use skyfire_core::types::Orientation;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pilot: PilotMode,
}

impl Autopilot {
    pub fn new(pilot: PilotMode) -> Self {
        Self { pilot }
    }

    /// Commands to submit before the next tick, given the latest snapshot.
    pub fn commands(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if snapshot.game_over {
            return vec![PlayerCommand::Reset];
        }

        let mut commands = Vec::with_capacity(2);
        let target = nearest(snapshot);

        match self.pilot {
            PilotMode::External => {
                let heading =
                    target.and_then(|t| yaw_toward(t.position - snapshot.player.position));
                if let Some(yaw) = heading {
                    commands.push(PlayerCommand::SubmitPose {
                        position: snapshot.player.position,
                        orientation: Orientation::from_yaw(yaw),
                    });
                }
                commands.push(PlayerCommand::SetControls(ControlIntent {
                    fire: target.is_some(),
                    ..Default::default()
                }));
            }
            PilotMode::Flight => {
                // Level out when sinking toward the ground, otherwise fly straight and shoot.
                let sinking = snapshot.player.orientation.pitch < -0.05;
                commands.push(PlayerCommand::SetControls(ControlIntent {
                    pitch_up: sinking,
                    fire: target.is_some(),
                    ..Default::default()
                }));
            }
        }

        commands
    }
}

fn nearest(snapshot: &GameStateSnapshot) -> Option<&AdversaryView> {
    let origin = snapshot.player.position;
    snapshot
        .adversaries
        .iter()
        .min_by(|a, b| {
            origin
                .distance_squared(a.position)
                .total_cmp(&origin.distance_squared(b.position))
        })
}
