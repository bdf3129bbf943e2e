//! Vector helpers shared by the steering, collision and spawn code.

use glam::DVec3;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// Unit vector in the direction of `v`, or zero when `v` has no length.
#[inline]
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Heading (rotation about +y) that turns a -z facing nose onto `direction`.
///
/// Only the horizontal components matter: `atan2(-x, -z)`. A vertical or
/// zero direction has no heading and yields `None`.
#[inline]
pub fn yaw_toward(direction: DVec3) -> Option<f64> {
    if direction.x == 0.0 && direction.z == 0.0 {
        return None;
    }
    Some((-direction.x).atan2(-direction.z))
}

/// Point on the horizontal circle of `radius` around `center` at `angle`
/// radians, measured from +x toward +z.
#[inline]
pub fn ring_point(center: DVec3, radius: f64, angle: f64) -> DVec3 {
    center + DVec3::new(angle.cos(), 0.0, angle.sin()) * radius
}

/// True when every component is finite.
#[inline]
pub fn is_finite(v: DVec3) -> bool {
    v.is_finite()
}
