//! NEON-accelerated f64 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 2×f64 lanes.

use core::arch::aarch64::*;

/// Negated AXPY `y -= alpha * x` using NEON.
#[inline]
pub fn axpy_neg(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 2;

    unsafe {
        let va = vdupq_n_f64(alpha);
        for i in 0..chunks {
            let offset = i * 2;
            let vy = vld1q_f64(y.as_ptr().add(offset));
            let vx = vld1q_f64(x.as_ptr().add(offset));
            // y -= alpha * x  →  y = y - alpha * x  →  vfmsq_f64(y, alpha, x)
            let result = vfmsq_f64(vy, va, vx);
            vst1q_f64(y.as_mut_ptr().add(offset), result);
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Exchange two equal-length f64 rows register-block-wise using NEON.
#[inline]
pub fn swap_rows(a: &mut [f64], b: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = vld1q_f64(a.as_ptr().add(offset));
            let vb = vld1q_f64(b.as_ptr().add(offset));
            vst1q_f64(a.as_mut_ptr().add(offset), vb);
            vst1q_f64(b.as_mut_ptr().add(offset), va);
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        core::mem::swap(&mut a[i], &mut b[i]);
    }
}
