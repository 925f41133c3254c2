//! Conversions between rotation matrices and roll/pitch/yaw Euler angles.
//!
//! This crate uses nalgebra's `Matrix3<f64>` and `Vector3<f64>` as the value
//! types and provides the two closed-form conversions plus a few helpers for
//! composing homogeneous transforms.
//!
//! # Convention
//!
//! `R = Rz(yaw) * Ry(pitch) * Rx(roll)`:
//! - **Intrinsic** reading: yaw about Z, then pitch about Y', then roll about X''
//! - **Extrinsic** reading: roll about fixed X, then pitch about fixed Y, then yaw about fixed Z
//!
//! [`matrix_to_euler`] is the inverse of [`euler_to_matrix`] away from the
//! gimbal-lock singularity (pitch = ±π/2). At the singularity roll is fixed
//! to 0 and yaw carries the remaining rotation.
//!
//! Neither conversion validates its input or returns errors. The `try_*`
//! functions are opt-in checked variants.
//!
//! # Example
//!
//! ```rust
//! use attitude::{euler_to_matrix, matrix_to_euler};
//!
//! let m = euler_to_matrix(0.1, 0.2, 0.3);
//! let angles = matrix_to_euler(&m);
//! assert!((angles.x - 0.1).abs() < 1e-12);
//! assert!((angles.y - 0.2).abs() < 1e-12);
//! assert!((angles.z - 0.3).abs() < 1e-12);
//! ```

pub mod error;
pub mod euler;
pub mod pose;
pub mod settings;
pub mod so3;
pub mod transform;
pub mod validate;

pub use error::{AttitudeError, AttitudeResult};
pub use euler::{
    EulerAngles, canonical_angle, euler_to_matrix, matrix_to_euler, matrix_to_euler_with,
};
pub use pose::{Pose, pose_to_trans, trans_to_pose};
pub use settings::EulerSettings;
pub use so3::{near_zero, normalize, so3_to_vec, vec_to_so3};
pub use transform::{rp_to_trans, trans_to_rp, try_trans_to_rp};
pub use validate::{check_rotation, is_rotation_matrix, try_matrix_to_euler};
