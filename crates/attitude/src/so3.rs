//! Small vector helpers and the so(3) skew-symmetric form.

use nalgebra::{Matrix3, Vector3};

use crate::error::{AttitudeError, AttitudeResult};

const NEAR_ZERO: f64 = 1e-6;

/// Whether `x` is small enough to be treated as zero.
pub fn near_zero(x: f64) -> bool {
    x.abs() < NEAR_ZERO
}

/// Scale `v` to unit length.
///
/// Returns [`AttitudeError::ZeroVector`] when the norm is near zero.
pub fn normalize(v: &Vector3<f64>) -> AttitudeResult<Vector3<f64>> {
    let norm = v.norm();
    if near_zero(norm) {
        return Err(AttitudeError::ZeroVector);
    }
    Ok(v / norm)
}

/// Skew-symmetric matrix `[v]x`, so that `vec_to_so3(v) * u == v.cross(u)`.
pub fn vec_to_so3(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Inverse of [`vec_to_so3`]. Only the lower/upper entries that define the
/// vector are read; the diagonal is ignored.
pub fn so3_to_vec(so3: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(so3[(2, 1)], so3[(0, 2)], so3[(1, 0)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(near_zero(-1e-7));
        assert!(near_zero(0.0));
        assert!(!near_zero(1e-5));
    }

    #[test]
    fn test_normalize() {
        let v = normalize(&Vector3::new(1.0, 2.0, 3.0)).unwrap();
        let expected = Vector3::new(0.26726124, 0.53452248, 0.80178373);
        assert!((v - expected).norm() < 1e-8, "got {}", v);
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(normalize(&Vector3::zeros()), Err(AttitudeError::ZeroVector));
    }

    #[test]
    fn test_vec_to_so3() {
        let so3 = vec_to_so3(&Vector3::new(1.0, 2.0, 3.0));
        let expected = Matrix3::new(
            0.0, -3.0, 2.0, //
            3.0, 0.0, -1.0, //
            -2.0, 1.0, 0.0,
        );
        assert_eq!(so3, expected);
        assert_eq!(so3_to_vec(&so3), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_so3_is_cross_product() {
        let v = Vector3::new(0.5, -1.0, 2.0);
        let u = Vector3::new(3.0, 0.25, -0.75);
        assert!((vec_to_so3(&v) * u - v.cross(&u)).norm() < 1e-12);
    }
}
