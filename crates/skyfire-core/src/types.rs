//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_DT;

/// 3D position in world space. y = Up (altitude), the player flies toward -z.
pub type Position = DVec3;

/// 3D velocity in world units per second.
pub type Velocity = DVec3;

/// Euler orientation in radians, applied in intrinsic x-y-z order.
///
/// `pitch` rotates about x, `yaw` about y and `roll` about z. A zero
/// orientation faces -z with +y up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Orientation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Orientation with only a heading component.
    pub fn from_yaw(yaw: f64) -> Self {
        Self {
            yaw,
            ..Self::default()
        }
    }

    pub fn from_quat(q: DQuat) -> Self {
        let (pitch, yaw, roll) = q.normalize().to_euler(EulerRot::XYZ);
        Self { pitch, yaw, roll }
    }

    pub fn to_quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    /// Transform a local-space direction into world space.
    pub fn rotate(&self, local: DVec3) -> DVec3 {
        self.to_quat() * local
    }

    /// Unit vector along the nose (local -z).
    pub fn forward(&self) -> DVec3 {
        self.rotate(DVec3::NEG_Z)
    }

    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }
}

/// Simulation time tracking. Ticks have variable length supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each committed tick).
    pub tick: u64,
    /// Accumulated simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Replace a negative or non-finite frame time with the fallback tick length.
/// Zero is a valid frame time and is kept.
pub fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        FALLBACK_DT
    }
}
