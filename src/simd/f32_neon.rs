//! NEON-accelerated f32 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes.

use core::arch::aarch64::*;

/// Negated AXPY `y -= alpha * x` using NEON.
#[inline]
pub fn axpy_neg(y: &mut [f32], alpha: f32, x: &[f32]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 4;

    unsafe {
        let va = vdupq_n_f32(alpha);
        for i in 0..chunks {
            let offset = i * 4;
            let vy = vld1q_f32(y.as_ptr().add(offset));
            let vx = vld1q_f32(x.as_ptr().add(offset));
            let result = vfmsq_f32(vy, va, vx);
            vst1q_f32(y.as_mut_ptr().add(offset), result);
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Exchange two equal-length f32 rows register-block-wise using NEON.
#[inline]
pub fn swap_rows(a: &mut [f32], b: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(a.as_mut_ptr().add(offset), vb);
            vst1q_f32(b.as_mut_ptr().add(offset), va);
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        core::mem::swap(&mut a[i], &mut b[i]);
    }
}
