//! SIMD-accelerated row kernels with compile-time architecture dispatch.
//!
//! This module is private — it provides internal acceleration for the
//! elimination and row-swap hot paths. The public API is unchanged.
//!
//! ## Dispatch strategy
//!
//! TypeId-based dispatch at monomorphization time: for `f32`/`f64`, the
//! compiler selects SIMD kernels and dead-code-eliminates the fallback.
//! For all other types (integers, complex), the scalar fallback is used.
//!
//! On x86_64, the widest available instruction set is selected at compile
//! time: AVX-512 > AVX > SSE2. Enable via `-C target-cpu=native` or
//! `-C target-feature=+avx2` etc.
//!
//! ## Kernels
//!
//! Two operations cover everything the factorization needs per row:
//! `axpy_neg` (broadcast the elimination factor, multiply against the pivot
//! row, subtract into the target row) and `swap_rows` (register-block
//! exchange for pivoting). Both finish sub-register remainders with a
//! scalar tail loop, so any slice length is handled.

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f32_neon;
#[cfg(target_arch = "aarch64")]
pub(crate) mod f64_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_sse2;
#[cfg(target_arch = "x86_64")]
pub(crate) mod f64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub(crate) mod f32_avx;
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub(crate) mod f64_avx;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub(crate) mod f32_avx512;
#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub(crate) mod f64_avx512;

use core::any::TypeId;

use crate::traits::Scalar;

/// Width in bytes of the widest vector register this build targets,
/// or 0 when the target has no SIMD path at all.
///
/// The elimination dispatch compares this against the matrix's storage
/// alignment once per factorization call.
pub(crate) const fn register_bytes() -> usize {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
    return 64;
    #[cfg(all(target_arch = "x86_64", target_feature = "avx", not(target_feature = "avx512f")))]
    return 32;
    #[cfg(all(target_arch = "x86_64", not(target_feature = "avx")))]
    return 16;
    #[cfg(target_arch = "aarch64")]
    return 16;
    #[allow(unreachable_code)]
    0
}

/// Dispatch negated AXPY: `y[i] -= alpha * x[i]`.
///
/// For short slices (< 8 elements), uses a scalar loop to avoid the overhead
/// of SIMD dispatch and register setup, which dominates at small sizes.
#[inline]
pub(crate) fn axpy_neg_dispatch<T: Scalar>(y: &mut [T], alpha: T, x: &[T]) {
    let n = y.len();
    if n < 8 {
        for i in 0..n {
            y[i] = y[i] - alpha * x[i];
        }
        return;
    }
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f64]) };
            let a = unsafe { *(&alpha as *const T as *const f64) };
            let x = unsafe { &*(x as *const [T] as *const [f64]) };
            f64_neon::axpy_neg(y, a, x);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f32]) };
            let a = unsafe { *(&alpha as *const T as *const f32) };
            let x = unsafe { &*(x as *const [T] as *const [f32]) };
            f32_neon::axpy_neg(y, a, x);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f64]) };
            let a = unsafe { *(&alpha as *const T as *const f64) };
            let x = unsafe { &*(x as *const [T] as *const [f64]) };
            #[cfg(target_feature = "avx512f")]
            f64_avx512::axpy_neg(y, a, x);
            #[cfg(all(target_feature = "avx", not(target_feature = "avx512f")))]
            f64_avx::axpy_neg(y, a, x);
            #[cfg(not(target_feature = "avx"))]
            f64_sse2::axpy_neg(y, a, x);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f32]) };
            let a = unsafe { *(&alpha as *const T as *const f32) };
            let x = unsafe { &*(x as *const [T] as *const [f32]) };
            #[cfg(target_feature = "avx512f")]
            f32_avx512::axpy_neg(y, a, x);
            #[cfg(all(target_feature = "avx", not(target_feature = "avx512f")))]
            f32_avx::axpy_neg(y, a, x);
            #[cfg(not(target_feature = "avx"))]
            f32_sse2::axpy_neg(y, a, x);
            return;
        }
    }
    scalar::axpy_neg(y, alpha, x);
}

/// Dispatch a whole-row exchange to SIMD or scalar fallback.
#[inline]
pub(crate) fn swap_rows_dispatch<T: Scalar>(a: &mut [T], b: &mut [T]) {
    let n = a.len();
    if n < 8 {
        scalar::swap_rows(a, b);
        return;
    }
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f64]) };
            let b = unsafe { &mut *(b as *mut [T] as *mut [f64]) };
            f64_neon::swap_rows(a, b);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f32]) };
            let b = unsafe { &mut *(b as *mut [T] as *mut [f32]) };
            f32_neon::swap_rows(a, b);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f64]) };
            let b = unsafe { &mut *(b as *mut [T] as *mut [f64]) };
            #[cfg(target_feature = "avx512f")]
            f64_avx512::swap_rows(a, b);
            #[cfg(all(target_feature = "avx", not(target_feature = "avx512f")))]
            f64_avx::swap_rows(a, b);
            #[cfg(not(target_feature = "avx"))]
            f64_sse2::swap_rows(a, b);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f32]) };
            let b = unsafe { &mut *(b as *mut [T] as *mut [f32]) };
            #[cfg(target_feature = "avx512f")]
            f32_avx512::swap_rows(a, b);
            #[cfg(all(target_feature = "avx", not(target_feature = "avx512f")))]
            f32_avx::swap_rows(a, b);
            #[cfg(not(target_feature = "avx"))]
            f32_sse2::swap_rows(a, b);
            return;
        }
    }
    scalar::swap_rows(a, b);
}
