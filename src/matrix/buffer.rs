//! Raw aligned storage backing [`Matrix`](super::Matrix).
//!
//! All unsafe allocation code lives here. The buffer is a flat block of
//! `len` initialized elements whose base address is a multiple of `align`
//! bytes; everything above this file works with plain slices.

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::mem;
use core::ptr::NonNull;
use core::slice;

/// Exclusively-owned, alignment-constrained element buffer.
///
/// `align` is always a power of two and at least `align_of::<T>()`, so a
/// zero-length buffer can use a dangling pointer and still satisfy slice
/// construction rules.
pub(crate) struct AlignedBuffer<T> {
    ptr: NonNull<T>,
    len: usize,
    align: usize,
}

impl<T: Copy> AlignedBuffer<T> {
    /// Allocate `len` elements at `align` bytes, every element set to `fill`.
    ///
    /// Panics if `align` is not a power of two or the allocation size
    /// overflows `isize` (caller error, same contract as `Vec`).
    pub fn new(len: usize, align: usize, fill: T) -> Self {
        let align = align.max(mem::align_of::<T>());
        assert!(align.is_power_of_two(), "alignment must be a power of two");

        if len == 0 {
            return Self {
                ptr: NonNull::dangling(),
                len: 0,
                align,
            };
        }

        let layout = Self::layout(len, align);
        let raw = unsafe { alloc(layout) as *mut T };
        let ptr = match NonNull::new(raw) {
            Some(p) => p,
            None => handle_alloc_error(layout),
        };
        unsafe {
            for i in 0..len {
                ptr.as_ptr().add(i).write(fill);
            }
        }

        Self { ptr, len, align }
    }

    fn layout(len: usize, align: usize) -> Layout {
        let layout = Layout::array::<T>(len).and_then(|l| l.align_to(align));
        match layout {
            Ok(l) => l,
            Err(_) => panic!("matrix dimensions overflow the allocatable size"),
        }
    }
}

// Accessors never allocate or duplicate elements, so they carry no bound.
impl<T> AlignedBuffer<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alignment in bytes of the base pointer.
    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Copy> Clone for AlignedBuffer<T> {
    fn clone(&self) -> Self {
        if self.len == 0 {
            return Self {
                ptr: NonNull::dangling(),
                len: 0,
                align: self.align,
            };
        }
        let layout = Self::layout(self.len, self.align);
        let raw = unsafe { alloc(layout) as *mut T };
        let ptr = match NonNull::new(raw) {
            Some(p) => p,
            None => handle_alloc_error(layout),
        };
        unsafe {
            ptr.as_ptr()
                .copy_from_nonoverlapping(self.ptr.as_ptr(), self.len);
        }
        Self {
            ptr,
            len: self.len,
            align: self.align,
        }
    }
}

impl<T> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // Same layout computation as `new`; elements are Copy, no drop glue.
        let layout = Layout::array::<T>(self.len)
            .and_then(|l| l.align_to(self.align))
            .expect("layout was validated at allocation time");
        unsafe {
            dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

unsafe impl<T: Send> Send for AlignedBuffer<T> {}
unsafe impl<T: Sync> Sync for AlignedBuffer<T> {}
