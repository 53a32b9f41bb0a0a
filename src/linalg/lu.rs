//! Packed LU factorization, unpack, solve, and inversion.

use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::elimination::gauss_elimination;
use crate::linalg::LuError;
use crate::matrix::Matrix;
use crate::traits::LinalgScalar;

/// Factor a square matrix into packed LU form with partial pivoting.
///
/// Returns the packed factors (U on and above the diagonal, L multipliers
/// strictly below, L's diagonal implicitly 1) and the permutation vector:
/// `perm[i]` is the row of the original matrix behind row `i` of the
/// factorization. The input is copied, never mutated.
///
/// # Errors
///
/// [`LuError::NonSquare`] for rectangular input (checked before any work),
/// [`LuError::Singular`] when a pivot falls below machine epsilon.
///
/// # Example
///
/// ```
/// use doolittle::{factorize, Matrix};
///
/// let a = Matrix::from_rows(4, 4, &[
///     -1.0_f64, -2.0, 1.0, 2.0,
///      2.0,  0.0, 1.0, 2.0,
///     -1.0, -1.0, 0.0, 1.0,
///      1.0,  1.0, 1.0, 1.0,
/// ]);
/// let (_lu, perm) = factorize(&a).unwrap();
/// assert_eq!(perm, vec![1, 0, 3, 2]);
/// ```
pub fn factorize<T: LinalgScalar>(a: &Matrix<T>) -> Result<(Matrix<T>, Vec<usize>), LuError> {
    if !a.is_square() {
        return Err(LuError::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    let mut lu = a.clone();
    let mut perm = vec![0usize; a.nrows()];
    gauss_elimination(&mut lu, &mut perm)?;
    Ok((lu, perm))
}

/// Split a packed LU matrix into explicit L and U factors.
///
/// Pure copy-and-mask, no numerical work: L gets a literal unit diagonal
/// and a zeroed upper triangle, U gets a zeroed strict lower triangle.
///
/// The input must be a square packed-LU matrix as produced by
/// [`factorize`]; only factorization output is meaningful here.
pub fn unpack<T: LinalgScalar>(lu: &Matrix<T>) -> (Matrix<T>, Matrix<T>) {
    debug_assert!(lu.is_square(), "packed LU matrices are square");
    let n = lu.nrows();
    let mut l = lu.clone();
    let mut u = lu.clone();

    for i in 0..n {
        l[(i, i)] = T::one();
        for j in (i + 1)..n {
            l[(i, j)] = T::zero();
        }
        for j in 0..i {
            u[(i, j)] = T::zero();
        }
    }

    (l, u)
}

/// Solve `A x = b` via LU factorization with partial pivoting.
///
/// # Errors
///
/// [`LuError::NonSquare`], [`LuError::Singular`], or
/// [`LuError::DimensionMismatch`] if `b.len() != A.nrows()` — all detected
/// before any part of the solution is produced.
///
/// # Example
///
/// ```
/// use doolittle::{solve, Matrix};
///
/// let a = Matrix::from_rows(3, 3, &[
///     2.0_f64, 1.0, -1.0,
///     -3.0, -1.0, 2.0,
///     -2.0, 1.0, 2.0,
/// ]);
/// let x = solve(&a, &[8.0, -11.0, -3.0]).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// assert!((x[2] + 1.0).abs() < 1e-12);
/// ```
pub fn solve<T: LinalgScalar>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>, LuError> {
    LuDecomposition::new(a)?.solve(b)
}

/// Invert a square matrix.
///
/// Factors once, then solves against each unit basis vector and assembles
/// the columns — n triangular solves on one factorization rather than n
/// full refactorizations.
pub fn invert<T: LinalgScalar>(a: &Matrix<T>) -> Result<Matrix<T>, LuError> {
    Ok(LuDecomposition::new(a)?.inverse())
}

/// Permute `b`, then forward- and back-substitute through the packed
/// factors. `x` is the output slice, same length as `b`.
fn lu_solve<T: LinalgScalar>(lu: &Matrix<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Forward substitution: solve L y = P b. L's diagonal is implicitly 1,
    // so no division.
    for i in 0..n {
        let mut sum = b[perm[i]];
        let row = lu.row(i);
        for j in 0..i {
            sum = sum - row[j] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution: solve U x = y, last row upward.
    for i in (0..n).rev() {
        let mut sum = x[i];
        let row = lu.row(i);
        for j in (i + 1)..n {
            sum = sum - row[j] * x[j];
        }
        x[i] = sum / row[i];
    }
}

/// LU decomposition of a square matrix, with partial pivoting.
///
/// Stores the packed L/U factors and the permutation vector; use
/// [`solve`](Self::solve), [`inverse`](Self::inverse), or
/// [`det`](Self::det) to work with the decomposition without refactoring.
///
/// # Example
///
/// ```
/// use doolittle::{LuDecomposition, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = LuDecomposition::new(&a).unwrap();
///
/// let x = lu.solve(&[4.0, 11.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct LuDecomposition<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: LinalgScalar> LuDecomposition<T> {
    /// Decompose a matrix. Fails on non-square or singular input.
    pub fn new(a: &Matrix<T>) -> Result<Self, LuError> {
        if !a.is_square() {
            return Err(LuError::NonSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        let mut lu = a.clone();
        let mut perm = vec![0usize; a.nrows()];
        let even = gauss_elimination(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Solve `A x = b` for `x`.
    ///
    /// Fails with [`LuError::DimensionMismatch`] if `b.len()` differs from
    /// the matrix dimension.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LuError> {
        let n = self.lu.nrows();
        if b.len() != n {
            return Err(LuError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        let mut x = vec![T::zero(); n];
        lu_solve(&self.lu, &self.perm, b, &mut x);
        Ok(x)
    }

    /// Compute the matrix inverse by solving against each unit basis vector.
    ///
    /// The basis vector and the solve output use separate buffers, so a
    /// column can never alias the scratch it is computed from.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n, T::zero());
        let mut e = vec![T::zero(); n];
        let mut col_buf = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();

            lu_solve(&self.lu, &self.perm, &e, &mut col_buf);

            for row in 0..n {
                inv[(row, col)] = col_buf[row];
            }
        }

        inv
    }

    /// Determinant: the product of U's diagonal, negated for an odd number
    /// of row swaps.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }

    /// The packed factors: U on and above the diagonal, L multipliers below.
    pub fn packed(&self) -> &Matrix<T> {
        &self.lu
    }

    /// The row permutation; `permutation()[i]` is the original row behind
    /// factored row `i`.
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// Materialize explicit L and U factors (copy-and-mask).
    pub fn unpack(&self) -> (Matrix<T>, Matrix<T>) {
        unpack(&self.lu)
    }
}

/// Convenience methods on square matrices.
impl<T: LinalgScalar> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<LuDecomposition<T>, LuError> {
        LuDecomposition::new(self)
    }

    /// Solve `A x = b` for `x` via LU decomposition.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LuError> {
        solve(self, b)
    }

    /// Compute the matrix inverse via LU decomposition.
    pub fn inverse(&self) -> Result<Self, LuError> {
        invert(self)
    }
}
