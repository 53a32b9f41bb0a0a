//! SSE2-accelerated f64 kernels for x86_64.
//!
//! SSE2 provides 128-bit registers → 2×f64 lanes.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Negated AXPY `y -= alpha * x` using SSE2.
#[inline]
pub fn axpy_neg(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 2;

    unsafe {
        let va = _mm_set1_pd(alpha);
        for i in 0..chunks {
            let offset = i * 2;
            let vy = _mm_loadu_pd(y.as_ptr().add(offset));
            let vx = _mm_loadu_pd(x.as_ptr().add(offset));
            let result = _mm_sub_pd(vy, _mm_mul_pd(va, vx));
            _mm_storeu_pd(y.as_mut_ptr().add(offset), result);
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Exchange two equal-length f64 rows register-block-wise using SSE2.
#[inline]
pub fn swap_rows(a: &mut [f64], b: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm_loadu_pd(b.as_ptr().add(offset));
            _mm_storeu_pd(a.as_mut_ptr().add(offset), vb);
            _mm_storeu_pd(b.as_mut_ptr().add(offset), va);
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        core::mem::swap(&mut a[i], &mut b[i]);
    }
}
