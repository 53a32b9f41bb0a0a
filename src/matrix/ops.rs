//! Matrix arithmetic used by the factorization's consumers and tests.
//!
//! Multiplication here is a plain cache-friendly triple loop — it exists so
//! callers can verify reconstructions (`L*U`, `A*x`, `A*A⁻¹`), it is not a
//! tuned kernel.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Mul;

use super::Matrix;
use crate::traits::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product `A * x`.
    ///
    /// Panics if `x.len() != ncols`.
    pub fn mul_vec(&self, x: &[T]) -> Vec<T> {
        assert_eq!(x.len(), self.ncols, "vector length must equal ncols");
        let mut out = vec![T::zero(); self.nrows];
        for i in 0..self.nrows {
            let row = self.row(i);
            let mut sum = T::zero();
            for j in 0..self.ncols {
                sum = sum + row[j] * x[j];
            }
            out[i] = sum;
        }
        out
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// Matrix product, i-k-j loop order so the inner loop walks
    /// contiguous rows of both operands.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols,
            rhs.nrows,
            "inner dimensions must agree for multiplication"
        );
        let mut out = Matrix::zeros(self.nrows, rhs.ncols, T::zero());
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let a_ik = self[(i, k)];
                let rrow = rhs.row(k);
                let orow = out.row_mut(i);
                for j in 0..rrow.len() {
                    orow[j] = orow[j] + a_ik * rrow[j];
                }
            }
        }
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

/// Element-wise equality over the logical region; stride, alignment and
/// padding contents are ignored.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return false;
        }
        for i in 0..self.nrows {
            if self.row(i) != other.row(i) {
                return false;
            }
        }
        true
    }
}
