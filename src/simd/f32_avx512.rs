//! AVX-512-accelerated f32 kernels for x86_64.
//!
//! AVX-512F provides 512-bit registers → 16×f32 lanes.
//! Only compiled when `target_feature = "avx512f"` is enabled
//! (e.g. via `-C target-cpu=native` on Skylake-X+ / Zen 4+).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Negated AXPY `y -= alpha * x` using AVX-512.
#[inline]
pub fn axpy_neg(y: &mut [f32], alpha: f32, x: &[f32]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 16;

    unsafe {
        let va = _mm512_set1_ps(alpha);
        for i in 0..chunks {
            let offset = i * 16;
            let vy = _mm512_loadu_ps(y.as_ptr().add(offset));
            let vx = _mm512_loadu_ps(x.as_ptr().add(offset));
            let result = _mm512_sub_ps(vy, _mm512_mul_ps(va, vx));
            _mm512_storeu_ps(y.as_mut_ptr().add(offset), result);
        }
    }

    let tail = chunks * 16;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Exchange two equal-length f32 rows register-block-wise using AVX-512.
#[inline]
pub fn swap_rows(a: &mut [f32], b: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 16;

    unsafe {
        for i in 0..chunks {
            let offset = i * 16;
            let va = _mm512_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm512_loadu_ps(b.as_ptr().add(offset));
            _mm512_storeu_ps(a.as_mut_ptr().add(offset), vb);
            _mm512_storeu_ps(b.as_mut_ptr().add(offset), va);
        }
    }

    let tail = chunks * 16;
    for i in tail..n {
        core::mem::swap(&mut a[i], &mut b[i]);
    }
}
