//! Opt-in checks for rotation matrices.
//!
//! The conversions in [`crate::euler`] are numerical routines, not
//! validators. Callers that receive matrices from untrusted sources
//! (sensor fusion output, deserialized data) can reject non-rotations here
//! first. Nothing in this module repairs its input.

use nalgebra::Matrix3;
use tracing::debug;

use crate::error::{AttitudeError, AttitudeResult};
use crate::euler::{EulerAngles, matrix_to_euler_with};
use crate::settings::EulerSettings;

/// Check that `m` is a proper rotation within `tolerance`.
///
/// Fails with [`AttitudeError::NotFinite`], [`AttitudeError::NotOrthonormal`]
/// or, for reflections, [`AttitudeError::NotProperRotation`].
pub fn check_rotation(m: &Matrix3<f64>, tolerance: f64) -> AttitudeResult<()> {
    if m.iter().any(|v| !v.is_finite()) {
        return Err(AttitudeError::NotFinite);
    }

    let deviation = (m * m.transpose() - Matrix3::identity()).norm();
    if deviation > tolerance {
        return Err(AttitudeError::NotOrthonormal {
            deviation,
            tolerance,
        });
    }

    let determinant = m.determinant();
    if (determinant - 1.0).abs() > tolerance {
        return Err(AttitudeError::NotProperRotation { determinant });
    }

    Ok(())
}

pub fn is_rotation_matrix(m: &Matrix3<f64>, tolerance: f64) -> bool {
    check_rotation(m, tolerance).is_ok()
}

/// Extract Euler angles after checking that `m` is a proper rotation.
///
/// Uses `settings.orthonormal_tolerance` for the check and
/// `settings.singularity_threshold` for the conversion.
pub fn try_matrix_to_euler(
    m: &Matrix3<f64>,
    settings: &EulerSettings,
) -> AttitudeResult<EulerAngles> {
    if let Err(e) = check_rotation(m, settings.orthonormal_tolerance) {
        debug!("Rejected matrix for Euler extraction: {}", e);
        return Err(e);
    }

    Ok(matrix_to_euler_with(m, settings).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euler::euler_to_matrix;

    #[test]
    fn test_accepts_rotation() {
        let m = euler_to_matrix(0.3, -1.2, 2.8);
        assert!(is_rotation_matrix(&m, 1e-9));
        assert!(check_rotation(&Matrix3::identity(), 0.0).is_ok());
    }

    #[test]
    fn test_rejects_scaled_matrix() {
        let m = euler_to_matrix(0.3, 0.2, 0.1) * 2.0;
        match check_rotation(&m, 1e-6) {
            Err(AttitudeError::NotOrthonormal { deviation, tolerance }) => {
                assert!(deviation > 1.0, "deviation was {}", deviation);
                assert_eq!(tolerance, 1e-6);
            }
            other => panic!("expected NotOrthonormal, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_reflection() {
        let m = Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 1.0, -1.0));
        match check_rotation(&m, 1e-6) {
            Err(AttitudeError::NotProperRotation { determinant }) => {
                assert!((determinant + 1.0).abs() < 1e-12);
            }
            other => panic!("expected NotProperRotation, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_nan() {
        let mut m = Matrix3::identity();
        m[(1, 2)] = f64::NAN;
        assert_eq!(check_rotation(&m, 1e-6), Err(AttitudeError::NotFinite));
    }

    #[test]
    fn test_try_matrix_to_euler() {
        let settings = EulerSettings::default();
        let angles = try_matrix_to_euler(&euler_to_matrix(0.5, 0.25, -1.0), &settings).unwrap();
        assert!((angles.roll - 0.5).abs() < 1e-9);
        assert!((angles.pitch - 0.25).abs() < 1e-9);
        assert!((angles.yaw + 1.0).abs() < 1e-9);

        let bad = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert!(try_matrix_to_euler(&bad, &settings).is_err());
    }
}
