//! Generic scalar fallback implementations for SIMD-dispatched operations.
//!
//! Used for element types without SIMD specializations (integers, complex
//! numbers) and on architectures without SIMD support. These define the
//! reference arithmetic the vectorized kernels must reproduce.

use crate::traits::Scalar;

/// Negated AXPY: `y[i] = y[i] - alpha * x[i]` (scalar fallback).
#[inline]
pub fn axpy_neg<T: Scalar>(y: &mut [T], alpha: T, x: &[T]) {
    debug_assert_eq!(y.len(), x.len());
    for i in 0..y.len() {
        y[i] = y[i] - alpha * x[i];
    }
}

/// Exchange the contents of two equal-length rows (scalar fallback).
#[inline]
pub fn swap_rows<T>(a: &mut [T], b: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    a.swap_with_slice(b);
}
