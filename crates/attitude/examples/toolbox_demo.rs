//! Prints a few conversions, including the gimbal-lock case.
//!
//! Usage:
//!   cargo run -p attitude --example toolbox_demo
//!   RUST_LOG=attitude=trace cargo run -p attitude --example toolbox_demo

use std::f64::consts::FRAC_PI_2;

use attitude::{EulerAngles, EulerSettings, euler_to_matrix, matrix_to_euler, pose_to_trans};
use nalgebra::Matrix3;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let angles = EulerAngles::zero();
    info!("Euler angles: {}", angles);
    info!("Rotation matrix:{}", euler_to_matrix(angles.roll, angles.pitch, angles.yaw));

    let identity = Matrix3::identity();
    info!("Rotation matrix:{}", identity);
    info!("Euler angles: {}", EulerAngles::from(matrix_to_euler(&identity)));

    let pose = [1.0, 2.0, 3.0, 0.0, FRAC_PI_2, 0.0];
    info!("6-D pose: {:?}", pose);
    info!("Homogeneous transform:{}", pose_to_trans(pose));

    let locked = EulerAngles::new(0.5, FRAC_PI_2, 1.0);
    if locked.is_gimbal_locked(&EulerSettings::default()) {
        warn!("{} is gimbal locked, roll and yaw are coupled", locked);
    }
    info!("Recovered as: {}", locked.canonicalized());
}
