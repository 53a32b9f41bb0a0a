//! # doolittle
//!
//! Dense LU factorization with partial pivoting and a dual scalar/SIMD
//! execution strategy, no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use doolittle::Matrix;
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let x = a.solve(&[8.0, -11.0, -3.0]).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Row-major [`Matrix<T>`] with runtime dimensions and a
//!   padded row stride so every row starts at a configurable byte
//!   alignment (default 64). The padding lets the vectorized elimination
//!   treat rows as whole hardware registers.
//!
//! - [`linalg`] — Doolittle LU decomposition with partial pivoting in
//!   packed form ([`factorize`]), copy-and-mask splitting ([`unpack`]),
//!   forward/back substitution ([`solve`]), and inversion ([`invert`]).
//!   [`LuDecomposition`] keeps the factors for repeated solves, inversion,
//!   and determinants. Convenience methods on [`Matrix`]: `a.lu()`,
//!   `a.solve(&b)`, `a.inverse()`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — anything storable in a matrix (floats, integers)
//!   - [`FloatScalar`] — real floats
//!   - [`LinalgScalar`] — elements the factorization accepts: real floats
//!     and, with the `complex` feature, complex numbers
//!
//! ## Execution strategy
//!
//! Elimination has two interchangeable back-ends. The scalar core is the
//! portable reference; the vectorized core runs each row update through
//! register-width AXPY kernels (AVX-512 / AVX / SSE2 on x86_64, NEON on
//! aarch64, chosen at compile time). The back-end is selected once per
//! factorization: `f32`/`f64` matrices with register-aligned storage
//! vectorize, everything else (unaligned storage, integers, complex)
//! takes the scalar path. Both paths produce LU factors equal within
//! floating-point epsilon.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impl |
//! | `libm`    | no       | Pure-Rust software float fallback for no_std |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `rayon`   | no       | Chunked parallel row updates for large matrices |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub(crate) mod simd;
pub mod traits;

pub use linalg::{factorize, invert, solve, unpack, LuDecomposition, LuError};
pub use matrix::{Matrix, DEFAULT_ALIGNMENT};
pub use traits::{FloatScalar, LinalgScalar, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
