use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be stored as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types. `'static` enables the
/// TypeId-based SIMD dispatch; `Send + Sync` lets the chunked parallel
/// elimination share rows across threads.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + Send + Sync + 'static> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Implies `LinalgScalar<Real = Self>` since real floats are their own
/// real type.
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Trait for matrix elements that the factorization can operate on.
///
/// Covers real floats (`f32`, `f64`) and, with the `complex` feature,
/// `Complex<f32>` / `Complex<f64>`. Elimination needs exact division,
/// a magnitude for pivot selection, and a machine epsilon for the
/// singularity test — nothing more, so integers are excluded.
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Machine epsilon of the underlying real type.
    fn lepsilon() -> Self::Real;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn lepsilon() -> $t { <$t as Float>::epsilon() }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn lepsilon() -> T {
        T::epsilon()
    }
}
