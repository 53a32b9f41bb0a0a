//! Doolittle Gaussian elimination back-ends and their dispatch entry point.
//!
//! Two functionally equivalent cores produce the packed LU factors in place:
//!
//! - [`eliminate_scalar`] — portable reference path, purely element-wise.
//! - [`eliminate_simd`] — same outer structure, but each row update below
//!   the pivot runs through the register-width AXPY kernel; the sub-register
//!   remainder is finished element-by-element inside the kernel.
//!
//! [`gauss_elimination`] picks a core once per call: the vectorized path
//! requires an `f32`/`f64` element type and storage aligned to at least one
//! vector register. Complex and integer elements always take the scalar
//! path. With the `rayon` feature, large matrices use a chunked variant
//! that updates disjoint row ranges in parallel while keeping the per-row
//! arithmetic order identical.

use core::any::TypeId;

use crate::linalg::pivot::pivot;
use crate::linalg::LuError;
use crate::matrix::Matrix;
use crate::simd;
use crate::traits::{LinalgScalar, Scalar};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Minimum dimension before the parallel chunked variant engages; below
/// this the per-column fork/join overhead outweighs the row work.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 128;

/// Closed type-set test for the vectorized core: the element type must have
/// SIMD kernels and the storage must be aligned to at least one register.
/// Inspected once per factorization, never inside the hot loops.
#[inline]
fn vectorizable<T: Scalar>(a: &Matrix<T>) -> bool {
    let width = simd::register_bytes();
    width != 0
        && a.alignment() >= width
        && (TypeId::of::<T>() == TypeId::of::<f64>() || TypeId::of::<T>() == TypeId::of::<f32>())
}

/// Run Doolittle elimination with partial pivoting in place.
///
/// On return `lu` holds U on and above the diagonal and the L multipliers
/// strictly below it; `perm` is initialized to the identity and then
/// tracks every row exchange. Returns `true` if the number of swaps was
/// even (determinant sign).
///
/// Fails with [`LuError::Singular`] when a pivot's modulus drops below
/// machine epsilon. The check runs per pivot column, before any
/// elimination factor for that column is computed — the pivot value
/// cannot change within the column, so this is equivalent to checking at
/// every factor.
pub(crate) fn gauss_elimination<T: LinalgScalar>(
    lu: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, LuError> {
    debug_assert!(lu.is_square());
    debug_assert_eq!(perm.len(), lu.nrows());

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    #[cfg(feature = "rayon")]
    if lu.nrows() >= PARALLEL_THRESHOLD {
        return eliminate_parallel(lu, perm);
    }

    if vectorizable::<T>(lu) {
        eliminate_simd(lu, perm)
    } else {
        eliminate_scalar(lu, perm)
    }
}

/// Portable scalar elimination core — the reference the vectorized path
/// must agree with up to floating-point associativity.
pub(crate) fn eliminate_scalar<T: LinalgScalar>(
    lu: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, LuError> {
    let n = lu.nrows();
    let mut even = true;

    for k in 0..n {
        if pivot(lu, k, perm) {
            even = !even;
        }
        if lu[(k, k)].modulus() < T::lepsilon() {
            return Err(LuError::Singular);
        }

        for i in (k + 1)..n {
            let factor = lu[(i, k)] / lu[(k, k)];
            lu[(i, k)] = factor;
            for j in (k + 1)..n {
                lu[(i, j)] = lu[(i, j)] - factor * lu[(k, j)];
            }
        }
    }

    Ok(even)
}

/// Vectorized elimination core.
///
/// Identical outer structure to [`eliminate_scalar`]; the inner column loop
/// is replaced by one AXPY kernel call on the contiguous sub-row
/// `k+1..n`. Starting past the pivot column means the update can never
/// touch finalized L entries, and the kernel's scalar tail covers any
/// range shorter than a register.
pub(crate) fn eliminate_simd<T: LinalgScalar>(
    lu: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, LuError> {
    let n = lu.nrows();
    let mut even = true;

    for k in 0..n {
        if pivot(lu, k, perm) {
            even = !even;
        }
        if lu[(k, k)].modulus() < T::lepsilon() {
            return Err(LuError::Singular);
        }

        for i in (k + 1)..n {
            let (prow, trow) = lu.row_pair_mut(k, i);
            let factor = trow[k] / prow[k];
            trow[k] = factor;
            simd::axpy_neg_dispatch(&mut trow[k + 1..n], factor, &prow[k + 1..n]);
        }
    }

    Ok(even)
}

/// Chunked parallel elimination: the rows below the pivot are disjoint and
/// each update writes only its own row, so they run concurrently with no
/// locking. Per-row arithmetic order matches the sequential cores exactly,
/// keeping results deterministic.
#[cfg(feature = "rayon")]
fn eliminate_parallel<T: LinalgScalar>(
    lu: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, LuError> {
    let n = lu.nrows();
    let stride = lu.stride();
    let vectorized = vectorizable::<T>(lu);
    let mut even = true;

    for k in 0..n {
        if pivot(lu, k, perm) {
            even = !even;
        }
        if lu[(k, k)].modulus() < T::lepsilon() {
            return Err(LuError::Singular);
        }
        if k + 1 == n {
            break;
        }

        let (head, tail) = lu.as_mut_slice().split_at_mut((k + 1) * stride);
        let prow = &head[k * stride..k * stride + n];
        let pivot_val = prow[k];

        // `tail` is exactly rows k+1..n, one padded row per chunk.
        tail.par_chunks_mut(stride).for_each(|row| {
            let factor = row[k] / pivot_val;
            row[k] = factor;
            if vectorized {
                simd::axpy_neg_dispatch(&mut row[k + 1..n], factor, &prow[k + 1..n]);
            } else {
                for j in (k + 1)..n {
                    row[j] = row[j] - factor * prow[j];
                }
            }
        });
    }

    Ok(even)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn well_conditioned(n: usize) -> Matrix<f64> {
        Matrix::from_fn(n, n, |i, j| {
            let base = ((i * 7 + j * 13) % 17) as f64 - 8.0;
            if i == j {
                base + 50.0
            } else {
                base
            }
        })
    }

    #[test]
    fn scalar_and_simd_paths_agree_for_all_sizes() {
        // Exhaustive sweep over sizes around every register boundary.
        for n in 1..=17 {
            let a = well_conditioned(n);

            let mut lu_scalar = a.clone();
            let mut perm_scalar = vec![0usize; n];
            for (i, p) in perm_scalar.iter_mut().enumerate() {
                *p = i;
            }
            eliminate_scalar(&mut lu_scalar, &mut perm_scalar).unwrap();

            let mut lu_simd = a.clone();
            let mut perm_simd = vec![0usize; n];
            for (i, p) in perm_simd.iter_mut().enumerate() {
                *p = i;
            }
            eliminate_simd(&mut lu_simd, &mut perm_simd).unwrap();

            assert_eq!(perm_scalar, perm_simd, "n={n}");
            for i in 0..n {
                for j in 0..n {
                    let d = (lu_scalar[(i, j)] - lu_simd[(i, j)]).abs();
                    assert!(
                        d < 1e-12,
                        "n={n} ({i},{j}): scalar={}, simd={}",
                        lu_scalar[(i, j)],
                        lu_simd[(i, j)]
                    );
                }
            }
        }
    }

    #[test]
    fn scalar_and_simd_paths_agree_f32() {
        for n in [3, 8, 9, 16, 17] {
            let a = Matrix::from_fn(n, n, |i, j| {
                let base = ((i * 5 + j * 11) % 13) as f32 - 6.0;
                if i == j {
                    base + 40.0
                } else {
                    base
                }
            });

            let mut lu_scalar = a.clone();
            let mut perm_scalar: alloc::vec::Vec<usize> = (0..n).collect();
            eliminate_scalar(&mut lu_scalar, &mut perm_scalar).unwrap();

            let mut lu_simd = a.clone();
            let mut perm_simd: alloc::vec::Vec<usize> = (0..n).collect();
            eliminate_simd(&mut lu_simd, &mut perm_simd).unwrap();

            assert_eq!(perm_scalar, perm_simd, "n={n}");
            for i in 0..n {
                for j in 0..n {
                    let d = (lu_scalar[(i, j)] - lu_simd[(i, j)]).abs();
                    assert!(d < 1e-4, "n={n} ({i},{j})");
                }
            }
        }
    }

    #[test]
    fn unaligned_storage_routes_to_scalar() {
        let a = Matrix::zeros_with_alignment(4, 4, 1, 0.0_f64);
        assert!(!vectorizable::<f64>(&a));
    }

    #[test]
    fn aligned_integers_never_vectorize() {
        let a = Matrix::zeros(4, 4, 0.0_f64);
        // f64 aligned storage may vectorize (depending on target)...
        let _ = vectorizable::<f64>(&a);
        // ...but the decision for non-float types is always scalar.
        let b = Matrix::zeros(4, 4, 0_i64);
        assert!(!vectorizable::<i64>(&b));
    }

    #[test]
    fn singular_detected_before_partial_update_escapes() {
        let a = Matrix::from_rows(3, 3, &[
            1.0_f64, 2.0, 3.0,
            2.0, 4.0, 6.0,
            1.0, 0.0, 1.0,
        ]);
        let mut lu = a.clone();
        let mut perm = vec![0usize; 3];
        assert_eq!(
            gauss_elimination(&mut lu, &mut perm).unwrap_err(),
            LuError::Singular
        );
    }

    #[test]
    fn trailing_zero_pivot_is_singular() {
        // Elimination zeroes the last diagonal entry; the final column
        // check must still catch it.
        let a = Matrix::from_rows(2, 2, &[1.0_f64, 1.0, 1.0, 1.0]);
        let mut lu = a.clone();
        let mut perm = vec![0usize; 2];
        assert_eq!(
            gauss_elimination(&mut lu, &mut perm).unwrap_err(),
            LuError::Singular
        );
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_variant_matches_sequential() {
        let n = PARALLEL_THRESHOLD;
        let a = well_conditioned(n);

        let mut lu_seq = a.clone();
        let mut perm_seq = vec![0usize; n];
        for (i, p) in perm_seq.iter_mut().enumerate() {
            *p = i;
        }
        eliminate_scalar(&mut lu_seq, &mut perm_seq).unwrap();

        let mut lu_par = a.clone();
        let mut perm_par = vec![0usize; n];
        gauss_elimination(&mut lu_par, &mut perm_par).unwrap();

        assert_eq!(perm_seq, perm_par);
        for i in 0..n {
            for j in 0..n {
                let d = (lu_seq[(i, j)] - lu_par[(i, j)]).abs();
                assert!(d < 1e-9, "({i},{j})");
            }
        }
    }
}
