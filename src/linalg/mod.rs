pub(crate) mod elimination;
pub(crate) mod lu;
pub(crate) mod pivot;

pub use lu::{factorize, invert, solve, unpack, LuDecomposition};

/// Errors from the factorization and solve layer.
///
/// All variants are unrecoverable at the point of detection; a failed
/// factorization leaves no usable partial LU state.
///
/// ```
/// use doolittle::{factorize, LuError, Matrix};
///
/// let rect = Matrix::from_rows(2, 4, &[1.0_f64, 7.0, 6.0, 4.0, 2.0, 17.0, 27.0, 17.0]);
/// assert_eq!(
///     factorize(&rect).unwrap_err(),
///     LuError::NonSquare { nrows: 2, ncols: 4 }
/// );
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(factorize(&singular).unwrap_err(), LuError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuError {
    /// The input matrix is not square; checked before any elimination work.
    NonSquare {
        /// Row count of the offending matrix.
        nrows: usize,
        /// Column count of the offending matrix.
        ncols: usize,
    },
    /// A pivot's modulus fell below machine epsilon for the element type;
    /// the matrix is numerically singular for this algorithm.
    Singular,
    /// Right-hand-side length does not match the matrix row count.
    DimensionMismatch {
        /// Expected length (matrix row count).
        expected: usize,
        /// Actual right-hand-side length.
        got: usize,
    },
}

impl core::fmt::Display for LuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LuError::NonSquare { nrows, ncols } => {
                write!(f, "cannot factorize a non-square {nrows}x{ncols} matrix")
            }
            LuError::Singular => write!(f, "matrix is singular or nearly singular"),
            LuError::DimensionMismatch { expected, got } => {
                write!(f, "right-hand side has length {got}, expected {expected}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LuError {}
