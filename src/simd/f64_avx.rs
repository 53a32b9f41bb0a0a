//! AVX-accelerated f64 kernels for x86_64.
//!
//! AVX provides 256-bit registers → 4×f64 lanes.
//! Only compiled when `target_feature = "avx"` is enabled
//! (e.g. via `-C target-cpu=native` on Haswell+).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Negated AXPY `y -= alpha * x` using AVX.
#[inline]
pub fn axpy_neg(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 4;

    unsafe {
        let va = _mm256_set1_pd(alpha);
        for i in 0..chunks {
            let offset = i * 4;
            let vy = _mm256_loadu_pd(y.as_ptr().add(offset));
            let vx = _mm256_loadu_pd(x.as_ptr().add(offset));
            let result = _mm256_sub_pd(vy, _mm256_mul_pd(va, vx));
            _mm256_storeu_pd(y.as_mut_ptr().add(offset), result);
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Exchange two equal-length f64 rows register-block-wise using AVX.
#[inline]
pub fn swap_rows(a: &mut [f64], b: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = _mm256_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm256_loadu_pd(b.as_ptr().add(offset));
            _mm256_storeu_pd(a.as_mut_ptr().add(offset), vb);
            _mm256_storeu_pd(b.as_mut_ptr().add(offset), va);
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        core::mem::swap(&mut a[i], &mut b[i]);
    }
}
