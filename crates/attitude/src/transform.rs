//! Homogeneous transforms built from a rotation and a position.

use nalgebra::{Matrix3, Matrix4, Vector3};
use tracing::debug;

use crate::error::{AttitudeError, AttitudeResult};
use crate::so3::near_zero;

/// Combine a rotation matrix and a position into a 4x4 homogeneous transform.
pub fn rp_to_trans(rotation: &Matrix3<f64>, position: &Vector3<f64>) -> Matrix4<f64> {
    let mut trans = Matrix4::identity();
    trans.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    trans.fixed_view_mut::<3, 1>(0, 3).copy_from(position);
    trans
}

/// Split a homogeneous transform into its rotation and position.
///
/// The bottom row is ignored; see [`try_trans_to_rp`] for a checked version.
pub fn trans_to_rp(trans: &Matrix4<f64>) -> (Matrix3<f64>, Vector3<f64>) {
    let rotation = trans.fixed_view::<3, 3>(0, 0).into_owned();
    let position = trans.fixed_view::<3, 1>(0, 3).into_owned();
    (rotation, position)
}

/// Like [`trans_to_rp`], but rejects a bottom row other than `[0, 0, 0, 1]`.
pub fn try_trans_to_rp(trans: &Matrix4<f64>) -> AttitudeResult<(Matrix3<f64>, Vector3<f64>)> {
    let bottom_row = [trans[(3, 0)], trans[(3, 1)], trans[(3, 2)], trans[(3, 3)]];
    let homogeneous = near_zero(bottom_row[0])
        && near_zero(bottom_row[1])
        && near_zero(bottom_row[2])
        && near_zero(bottom_row[3] - 1.0);

    if !homogeneous {
        debug!("Rejected transform with bottom row {:?}", bottom_row);
        return Err(AttitudeError::NotHomogeneous { bottom_row });
    }

    Ok(trans_to_rp(trans))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rp_to_trans() {
        let r = Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, //
            0.0, 1.0, 0.0,
        );
        let p = Vector3::new(1.0, 2.0, 5.0);
        let expected = Matrix4::new(
            1.0, 0.0, 0.0, 1.0, //
            0.0, 0.0, -1.0, 2.0, //
            0.0, 1.0, 0.0, 5.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(rp_to_trans(&r, &p), expected);
    }

    #[test]
    fn test_trans_to_rp() {
        let trans = Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, //
            0.0, 1.0, 0.0, 3.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        let (r, p) = trans_to_rp(&trans);
        assert_eq!(
            r,
            Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, 0.0, -1.0, //
                0.0, 1.0, 0.0,
            )
        );
        assert_eq!(p, Vector3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_try_trans_to_rp_rejects_projective_row() {
        let mut trans = Matrix4::identity();
        trans[(3, 2)] = 0.5;
        match try_trans_to_rp(&trans) {
            Err(AttitudeError::NotHomogeneous { bottom_row }) => {
                assert_eq!(bottom_row, [0.0, 0.0, 0.5, 1.0]);
            }
            other => panic!("expected NotHomogeneous, got {:?}", other),
        }
        assert!(try_trans_to_rp(&Matrix4::identity()).is_ok());
    }
}
