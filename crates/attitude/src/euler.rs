//! Euler angle ↔ rotation matrix conversion.
//!
//! Angles use the Z-Y-X (yaw, pitch, roll) convention:
//! - Yaw: rotation around Z (first)
//! - Pitch: rotation around Y' (second)
//! - Roll: rotation around X'' (third)
//!
//! This is equivalent to extrinsic X-Y-Z: roll around fixed X, pitch around
//! fixed Y, yaw around fixed Z. The composed matrix is
//! `R = Rz(yaw) * Ry(pitch) * Rx(roll)`, the same matrix produced by
//! `nalgebra::Rotation3::from_euler_angles(roll, pitch, yaw)`.
//!
//! All angles are in radians.

use std::f64::consts::{PI, TAU};
use std::fmt;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::settings::EulerSettings;

/// Build the rotation matrix for the given roll, pitch and yaw.
///
/// Total over all real inputs. Angles outside (−π, π] wrap through the
/// trigonometric functions, so `euler_to_matrix(r + 2π, p, y)` is the same
/// matrix as `euler_to_matrix(r, p, y)` up to rounding.
pub fn euler_to_matrix(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();

    Matrix3::new(
        cy * cp,
        cy * sp * sr - sy * cr,
        cy * sp * cr + sy * sr,
        sy * cp,
        sy * sp * sr + cy * cr,
        sy * sp * cr - cy * sr,
        -sp,
        cp * sr,
        cp * cr,
    )
}

/// Extract `(roll, pitch, yaw)` from a rotation matrix using the default
/// [`EulerSettings`].
///
/// See [`matrix_to_euler_with`].
pub fn matrix_to_euler(m: &Matrix3<f64>) -> Vector3<f64> {
    matrix_to_euler_with(m, &EulerSettings::default())
}

/// Extract `(roll, pitch, yaw)` from a rotation matrix.
///
/// Returns the canonical triple: pitch in [−π/2, π/2], roll and yaw in
/// (−π, π].
///
/// The input is expected to be a proper rotation (orthonormal, determinant
/// +1). This is not checked: any other matrix yields well-typed but
/// meaningless angles. Use [`crate::try_matrix_to_euler`] to reject such
/// input instead.
///
/// # Gimbal Lock
/// When `|cos(pitch)|` falls below `settings.singularity_threshold`, pitch
/// is ±π/2 and only a combination of roll and yaw is observable
/// (`yaw − roll` at +π/2, `yaw + roll` at −π/2). Roll is then fixed to 0
/// and the whole rotation about the vertical axis is reported as yaw.
pub fn matrix_to_euler_with(m: &Matrix3<f64>, settings: &EulerSettings) -> Vector3<f64> {
    let cos_pitch = m[(0, 0)].hypot(m[(1, 0)]);
    let pitch = (-m[(2, 0)]).atan2(cos_pitch);

    if cos_pitch < settings.singularity_threshold {
        trace!(
            "Gimbal lock (|cos(pitch)| = {:e}), fixing roll to 0",
            cos_pitch
        );
        let yaw = canonical_atan2(-m[(0, 1)], m[(1, 1)]);
        return Vector3::new(0.0, pitch, yaw);
    }

    let roll = canonical_atan2(m[(2, 1)], m[(2, 2)]);
    let yaw = canonical_atan2(m[(1, 0)], m[(0, 0)]);
    Vector3::new(roll, pitch, yaw)
}

/// Wrap an angle into (−π, π].
///
/// Angles already in range are returned unchanged. NaN and infinities
/// propagate as NaN.
pub fn canonical_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

// atan2 yields [−π, π]; −π only appears for a negative-zero numerator.
fn canonical_atan2(y: f64, x: f64) -> f64 {
    let angle = y.atan2(x);
    if angle <= -PI { PI } else { angle }
}

/// Roll, pitch and yaw in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation around X
    pub roll: f64,
    /// Rotation around Y
    pub pitch: f64,
    /// Rotation around Z
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// No rotation.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Extract the canonical angles of a rotation matrix.
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        matrix_to_euler(m).into()
    }

    pub fn to_matrix(&self) -> Matrix3<f64> {
        euler_to_matrix(self.roll, self.pitch, self.yaw)
    }

    /// The canonical representative of this orientation.
    ///
    /// Produces the same matrix as `self`, with pitch folded into
    /// [−π/2, π/2] and roll/yaw wrapped into (−π, π].
    pub fn canonicalized(&self) -> Self {
        Self::from_matrix(&self.to_matrix())
    }

    /// Whether pitch sits close enough to ±π/2 that roll and yaw are coupled.
    pub fn is_gimbal_locked(&self, settings: &EulerSettings) -> bool {
        self.pitch.cos().abs() < settings.singularity_threshold
    }
}

impl From<Vector3<f64>> for EulerAngles {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<EulerAngles> for Vector3<f64> {
    fn from(angles: EulerAngles) -> Self {
        Vector3::new(angles.roll, angles.pitch, angles.yaw)
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "roll={:.6} pitch={:.6} yaw={:.6} rad",
            self.roll, self.pitch, self.yaw
        )
    }
}
