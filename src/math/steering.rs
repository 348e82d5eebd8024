//! Per-step kinematic primitives for a ground agent.
//!
//! World space is Y-up; an orientation "faces" a direction when it maps
//! local `+Z` onto that direction.

use crate::error::MotionError;

use super::{Point3, UnitQuaternion, UnitVector3, Vector3, TOLERANCE};

/// Directions shorter than this cannot be normalized.
pub const NORMALIZE_EPSILON: f64 = 1e-5;

/// Returns `v` with its vertical component zeroed.
#[must_use]
pub fn horizontal(v: &Vector3) -> Vector3 {
    Vector3::new(v.x, 0.0, v.z)
}

/// Moves `current` toward `target` by at most `max_delta`, never past it.
#[must_use]
pub fn move_towards(current: &Point3, target: &Point3, max_delta: f64) -> Point3 {
    let delta = target - current;
    let dist = delta.norm();
    if dist <= max_delta || dist < TOLERANCE {
        return *target;
    }
    current + delta / dist * max_delta
}

/// Normalizes `v`, failing with [`MotionError::ZeroDirection`] when it has
/// near-zero length.
///
/// # Errors
///
/// Returns [`MotionError::ZeroDirection`] if `|v|` is below [`NORMALIZE_EPSILON`].
pub fn unit_direction(v: &Vector3) -> Result<UnitVector3, MotionError> {
    UnitVector3::try_new(*v, NORMALIZE_EPSILON).ok_or(MotionError::ZeroDirection)
}

/// Orientation facing `direction` with `+Y` as up.
///
/// Vertical directions fall back to `+Z` as the up hint.
#[must_use]
pub fn look_rotation(direction: &UnitVector3) -> UnitQuaternion {
    let up = if direction.cross(&Vector3::y()).norm_squared() < TOLERANCE {
        Vector3::z()
    } else {
        Vector3::y()
    };
    UnitQuaternion::face_towards(&direction.into_inner(), &up)
}

/// Spherical interpolation from `from` to `to` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn slerp_clamped(from: &UnitQuaternion, to: &UnitQuaternion, t: f64) -> UnitQuaternion {
    let t = t.clamp(0.0, 1.0);
    // None only when the two rotations are (nearly) identical.
    from.try_slerp(to, t, TOLERANCE).unwrap_or(*to)
}

/// Rotates `orientation` toward facing `direction` by `gain * dt`.
#[must_use]
pub fn turn_towards(
    orientation: &UnitQuaternion,
    direction: &UnitVector3,
    gain: f64,
    dt: f64,
) -> UnitQuaternion {
    slerp_clamped(orientation, &look_rotation(direction), gain * dt)
}
