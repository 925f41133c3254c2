//! 6-D pose: position plus roll/pitch/yaw orientation.

use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::euler::{EulerAngles, euler_to_matrix, matrix_to_euler};
use crate::transform::{rp_to_trans, trans_to_rp};

/// Position and orientation of a body.
///
/// Stores:
/// - Position as Vector3<f64> (x, y, z)
/// - Orientation as roll, pitch, yaw in radians
///
/// The flat array form is `[x, y, z, roll, pitch, yaw]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub attitude: EulerAngles,
}

impl Pose {
    /// Create a new pose.
    pub fn new(position: Vector3<f64>, attitude: EulerAngles) -> Self {
        Self { position, attitude }
    }

    /// Create a pose from position only (no rotation).
    pub fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            attitude: EulerAngles::zero(),
        }
    }

    /// Create a pose from `[x, y, z, roll, pitch, yaw]`.
    pub fn from_array(pose: [f64; 6]) -> Self {
        let [x, y, z, roll, pitch, yaw] = pose;
        Self {
            position: Vector3::new(x, y, z),
            attitude: EulerAngles::new(roll, pitch, yaw),
        }
    }

    /// Flatten to `[x, y, z, roll, pitch, yaw]`.
    pub fn to_array(&self) -> [f64; 6] {
        let p = &self.position;
        let a = &self.attitude;
        [p.x, p.y, p.z, a.roll, a.pitch, a.yaw]
    }

    /// Homogeneous transform taking points from the body frame to the parent frame.
    pub fn to_transform(&self) -> Matrix4<f64> {
        rp_to_trans(&self.attitude.to_matrix(), &self.position)
    }

    /// Recover a pose from a homogeneous transform.
    ///
    /// The rotation block must be a proper rotation; it is not checked. The
    /// returned attitude is canonical (see [`crate::matrix_to_euler`]).
    pub fn from_transform(trans: &Matrix4<f64>) -> Self {
        let (rotation, position) = trans_to_rp(trans);
        Self {
            position,
            attitude: matrix_to_euler(&rotation).into(),
        }
    }
}

/// Convert `[x, y, z, roll, pitch, yaw]` into a homogeneous transform.
pub fn pose_to_trans(pose: [f64; 6]) -> Matrix4<f64> {
    let [x, y, z, roll, pitch, yaw] = pose;
    rp_to_trans(&euler_to_matrix(roll, pitch, yaw), &Vector3::new(x, y, z))
}

/// Convert a homogeneous transform into `[x, y, z, roll, pitch, yaw]`.
pub fn trans_to_pose(trans: &Matrix4<f64>) -> [f64; 6] {
    Pose::from_transform(trans).to_array()
}
