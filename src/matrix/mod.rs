//! Dense row-major matrix with alignment-padded rows.
//!
//! [`Matrix<T>`] owns a contiguous buffer of `nrows * stride` elements where
//! `stride >= ncols` is rounded up so that every row begins at an address
//! satisfying the matrix's byte alignment. The padding lets the vectorized
//! elimination kernels treat each row as a whole number of hardware
//! registers; padding elements are kept at zero and never take part in
//! comparisons or arithmetic.

mod buffer;
mod ops;

use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use self::buffer::AlignedBuffer;

use crate::traits::Scalar;

/// Default row alignment in bytes — one AVX-512 register, which also
/// satisfies every narrower instruction set.
pub const DEFAULT_ALIGNMENT: usize = 64;

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major storage with a padded row stride. Rows are aligned to
/// [`DEFAULT_ALIGNMENT`] unless an explicit alignment is requested;
/// an alignment of 1 yields unpadded, unaligned storage (`stride == ncols`).
///
/// # Examples
///
/// ```
/// use doolittle::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
///
/// let i = Matrix::eye(3, 0.0_f64);
/// assert_eq!(i[(1, 1)], 1.0);
/// assert_eq!(i[(0, 1)], 0.0);
/// ```
pub struct Matrix<T> {
    buf: AlignedBuffer<T>,
    nrows: usize,
    ncols: usize,
    stride: usize,
}

#[inline]
fn stride_for<T>(ncols: usize, align: usize) -> usize {
    let size = mem::size_of::<T>();
    if ncols == 0 || align <= size {
        return ncols;
    }
    // Power-of-two element sizes only, so `align` is a whole number of
    // elements once it exceeds the element size.
    debug_assert_eq!(align % size, 0);
    let elems = align / size;
    ncols.div_ceil(elems) * elems
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros at the default alignment.
    ///
    /// ```
    /// use doolittle::Matrix;
    /// let m = Matrix::zeros(2, 3, 0.0_f64);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self::zeros_with_alignment(nrows, ncols, DEFAULT_ALIGNMENT, T::zero())
    }

    /// Create a zero matrix with an explicit row alignment in bytes.
    ///
    /// An alignment of 1 (or anything not exceeding the element size)
    /// produces unpadded storage: `stride() == ncols()`.
    pub fn zeros_with_alignment(nrows: usize, ncols: usize, align: usize, _zero: T) -> Self {
        let align = align.max(1);
        let stride = stride_for::<T>(ncols, align.max(mem::align_of::<T>()));
        Self {
            buf: AlignedBuffer::new(nrows * stride, align, T::zero()),
            nrows,
            ncols,
            stride,
        }
    }

    /// Create an `nrows x ncols` matrix with every logical element set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        let mut m = Self::zeros(nrows, ncols, T::zero());
        m.fill(value);
        m
    }

    /// Create a matrix from row-major element data.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use doolittle::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, data: &[T]) -> Self {
        Self::from_rows_with_alignment(nrows, ncols, DEFAULT_ALIGNMENT, data)
    }

    /// Create a matrix from row-major data with an explicit row alignment.
    pub fn from_rows_with_alignment(nrows: usize, ncols: usize, align: usize, data: &[T]) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "data length must equal nrows * ncols"
        );
        let mut m = Self::zeros_with_alignment(nrows, ncols, align, T::zero());
        for i in 0..nrows {
            m.row_mut(i).copy_from_slice(&data[i * ncols..(i + 1) * ncols]);
        }
        m
    }

    /// Create a matrix where element `(i, j)` is `f(i, j)`.
    ///
    /// ```
    /// use doolittle::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(2, 2)], 1.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut m = Self::zeros(nrows, ncols, T::zero());
        for i in 0..nrows {
            for j in 0..ncols {
                m[(i, j)] = f(i, j);
            }
        }
        m
    }

    /// Create an `n x n` identity matrix.
    pub fn eye(n: usize, _zero: T) -> Self {
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Discard the current contents and reallocate for new dimensions,
    /// zero-filled, keeping the alignment.
    ///
    /// Any raw pointer previously obtained from [`data`](Self::data) is
    /// invalidated.
    pub fn allocate(&mut self, nrows: usize, ncols: usize) {
        *self = Self::zeros_with_alignment(nrows, ncols, self.buf.align(), T::zero());
    }

    /// Set every logical element to `value` (padding stays zero).
    pub fn fill(&mut self, value: T) {
        for i in 0..self.nrows {
            let stride = self.stride;
            let ncols = self.ncols;
            self.buf.as_mut_slice()[i * stride..i * stride + ncols].fill(value);
        }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Padded row stride in elements (`>= ncols`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Row alignment guarantee in bytes.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.buf.align()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Raw pointer to the start of the buffer. Invalidated by
    /// [`allocate`](Self::allocate) and by dropping the matrix.
    #[inline]
    pub fn data(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable raw pointer to the start of the buffer.
    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// The full backing buffer including row padding, length `nrows * stride`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Logical row `i` (padding excluded).
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.buf.as_slice()[i * self.stride..i * self.stride + self.ncols]
    }

    /// Mutable logical row `i` (padding excluded).
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let (stride, ncols) = (self.stride, self.ncols);
        &mut self.buf.as_mut_slice()[i * stride..i * stride + ncols]
    }

    /// Mutable references to two distinct full rows (padding included),
    /// for swaps and eliminations that read one row while writing another.
    #[inline]
    pub(crate) fn row_pair_mut(&mut self, r1: usize, r2: usize) -> (&mut [T], &mut [T]) {
        debug_assert_ne!(r1, r2, "row_pair_mut requires distinct rows");
        let stride = self.stride;
        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let (head, tail) = self.buf.as_mut_slice().split_at_mut(hi * stride);
        let a = &mut head[lo * stride..lo * stride + stride];
        let b = &mut tail[..stride];
        if r1 < r2 {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Vec<T> {
        assert!(j < self.ncols, "column index out of bounds");
        (0..self.nrows).map(|i| self[(i, j)]).collect()
    }

    /// Swap rows `r1` and `r2`, padding included, through the SIMD
    /// dispatch layer.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        let (a, b) = self.row_pair_mut(r1, r2);
        crate::simd::swap_rows_dispatch(a, b);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(col < self.ncols, "column index out of bounds");
        &self.buf.as_slice()[row * self.stride + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(col < self.ncols, "column index out of bounds");
        let stride = self.stride;
        &mut self.buf.as_mut_slice()[row * stride + col]
    }
}

// ── Clone / Debug ───────────────────────────────────────────────────

impl<T: Copy> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            nrows: self.nrows,
            ncols: self.ncols,
            stride: self.stride,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} (stride {})", self.nrows, self.ncols, self.stride)?;
        for i in 0..self.nrows {
            let start = i * self.stride;
            writeln!(f, "  {:?}", &self.buf.as_slice()[start..start + self.ncols])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_start_is_aligned() {
        for (rows, cols) in [(1, 1), (3, 5), (7, 11), (4, 16), (5, 17)] {
            let m = Matrix::zeros(rows, cols, 0.0_f64);
            for i in 0..rows {
                let addr = m.row(i).as_ptr() as usize;
                assert_eq!(addr % DEFAULT_ALIGNMENT, 0, "{rows}x{cols} row {i}");
            }
        }
    }

    #[test]
    fn stride_rounds_up_to_register_multiples() {
        // 64 bytes = 8 f64 per alignment block
        let m = Matrix::zeros(2, 5, 0.0_f64);
        assert_eq!(m.stride(), 8);
        let m = Matrix::zeros(2, 8, 0.0_f64);
        assert_eq!(m.stride(), 8);
        let m = Matrix::zeros(2, 9, 0.0_f64);
        assert_eq!(m.stride(), 16);
        // 64 bytes = 16 f32 per block
        let m = Matrix::zeros(2, 5, 0.0_f32);
        assert_eq!(m.stride(), 16);
    }

    #[test]
    fn unaligned_storage_is_unpadded() {
        let m = Matrix::zeros_with_alignment(3, 5, 1, 0.0_f64);
        assert_eq!(m.stride(), 5);
        assert_eq!(m.as_slice().len(), 15);
    }

    #[test]
    fn from_rows_and_index() {
        let m = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.col(1), alloc::vec![2.0, 5.0]);
    }

    #[test]
    fn padding_stays_zero_after_fill() {
        let mut m = Matrix::zeros(2, 5, 0.0_f64);
        m.fill(7.0);
        assert_eq!(m.row(0), &[7.0; 5]);
        // stride is 8, elements 5..8 of each padded row are untouched
        assert_eq!(&m.as_slice()[5..8], &[0.0; 3]);
        assert_eq!(&m.as_slice()[13..16], &[0.0; 3]);
    }

    #[test]
    fn swap_rows_whole_row() {
        let mut m = Matrix::from_rows(3, 4, &[
            1.0_f64, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
        ]);
        m.swap_rows(0, 2);
        assert_eq!(m.row(0), &[9.0, 10.0, 11.0, 12.0]);
        assert_eq!(m.row(2), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(1), &[5.0, 6.0, 7.0, 8.0]);
        m.swap_rows(1, 1); // no-op
        assert_eq!(m.row(1), &[5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn eq_ignores_alignment_and_padding() {
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let a = Matrix::from_rows(2, 3, &data);
        let b = Matrix::from_rows_with_alignment(2, 3, 1, &data);
        assert_ne!(a.stride(), b.stride());
        assert_eq!(a, b);
    }

    #[test]
    fn clone_is_deep() {
        let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let mut b = a.clone();
        b[(0, 0)] = 99.0;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn allocate_resets_contents() {
        let mut m = Matrix::from_rows_with_alignment(2, 2, 16, &[1.0_f64, 2.0, 3.0, 4.0]);
        m.allocate(3, 3);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.alignment(), 16);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn access_needs_no_element_bounds() {
        // Indexing, row views, and Debug must work for any element type,
        // not just the ones the constructors require.
        fn corner<T>(m: &Matrix<T>) -> &T {
            let _ = m.row(0);
            let _ = m.as_slice();
            &m[(0, 0)]
        }
        fn render<T: fmt::Debug>(m: &Matrix<T>) -> alloc::string::String {
            alloc::format!("{m:?}")
        }

        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert_eq!(*corner(&m), 1.0);
        assert!(render(&m).contains("2x2"));
    }

    #[test]
    fn zero_sized_matrix() {
        let m = Matrix::zeros(0, 0, 0.0_f64);
        assert_eq!(m.nrows(), 0);
        assert!(m.as_slice().is_empty());
    }
}
