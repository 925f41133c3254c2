use std::fmt;

/// Errors produced by the checked conversions.
///
/// The plain conversions (`euler_to_matrix`, `matrix_to_euler`) never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum AttitudeError {
    /// The input contains NaN or infinite entries.
    NotFinite,

    /// The matrix columns are not an orthonormal basis.
    NotOrthonormal {
        /// Frobenius norm of `M * Mᵀ - I`
        deviation: f64,
        /// Tolerance the deviation was checked against
        tolerance: f64,
    },

    /// The matrix is orthonormal but is a reflection, not a rotation.
    NotProperRotation {
        /// Determinant of the matrix
        determinant: f64,
    },

    /// A vector with (near) zero length cannot be normalized.
    ZeroVector,

    /// A 4x4 matrix whose bottom row is not `[0, 0, 0, 1]`.
    NotHomogeneous {
        bottom_row: [f64; 4],
    },
}

impl fmt::Display for AttitudeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttitudeError::NotFinite => {
                write!(f, "Input contains NaN or infinite values")
            }
            AttitudeError::NotOrthonormal { deviation, tolerance } => {
                write!(
                    f,
                    "Matrix is not orthonormal: |M*Mt - I| = {:e} exceeds tolerance {:e}",
                    deviation, tolerance
                )
            }
            AttitudeError::NotProperRotation { determinant } => {
                write!(
                    f,
                    "Matrix is not a proper rotation: determinant is {} (expected +1)",
                    determinant
                )
            }
            AttitudeError::ZeroVector => {
                write!(f, "Cannot normalize a zero-length vector")
            }
            AttitudeError::NotHomogeneous { bottom_row } => {
                write!(
                    f,
                    "Not a homogeneous transform: bottom row is {:?} (expected [0, 0, 0, 1])",
                    bottom_row
                )
            }
        }
    }
}

impl std::error::Error for AttitudeError {}

/// Result type for the checked conversions.
pub type AttitudeResult<T> = Result<T, AttitudeError>;
