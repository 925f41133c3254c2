use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Numeric thresholds used when extracting and checking orientations
pub struct EulerSettings {
    /// Below this value of `|cos(pitch)|` the matrix is treated as gimbal locked
    /// and roll is fixed to 0.
    ///
    /// ## Default
    /// The default is set to 1e-6
    pub singularity_threshold: f64,
    /// Largest accepted deviation of a matrix from a proper rotation (default: 1e-6)
    ///
    /// Measured as the Frobenius norm of `M * Mᵀ - I` and as `|det(M) - 1|`.
    /// Only used by the checked conversions; the plain conversions never
    /// validate their input.
    pub orthonormal_tolerance: f64,
}

impl EulerSettings {
    /// Set the gimbal-lock threshold and return self for chaining.
    pub fn with_singularity_threshold(mut self, threshold: f64) -> Self {
        self.singularity_threshold = threshold;
        self
    }

    /// Set the rotation-matrix tolerance and return self for chaining.
    pub fn with_orthonormal_tolerance(mut self, tolerance: f64) -> Self {
        self.orthonormal_tolerance = tolerance;
        self
    }
}

impl Default for EulerSettings {
    fn default() -> Self {
        Self {
            singularity_threshold: 1e-6,
            orthonormal_tolerance: 1e-6,
        }
    }
}
