//! Strategies for returning buffer storage to its allocator.

use core::ptr::{self, NonNull};

/// Returns the storage of a [`UniqueBuffer`](super::UniqueBuffer) to wherever it came from.
///
/// A buffer invokes its strategy exactly once, when it is dropped.
pub trait Release<T> {
    /// Releases `len` initialized elements starting at `data`.
    ///
    /// # Safety
    /// `data` and `len` must describe storage this strategy knows how to free, and the storage
    /// must not be used after this call.
    unsafe fn release(self, data: NonNull<T>, len: usize);
}

/// Releases storage allocated as a `Box<[T]>`.
///
/// This is the strategy of every buffer the crate allocates itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxRelease;

impl<T> Release<T> for BoxRelease {
    unsafe fn release(self, data: NonNull<T>, len: usize) {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
            data.as_ptr(),
            len,
        )));
    }
}

/// Releases storage with a caller-supplied closure.
pub struct ReleaseFn<F>(pub F);

impl<T, F> Release<T> for ReleaseFn<F>
where
    F: FnOnce(NonNull<T>, usize),
{
    unsafe fn release(self, data: NonNull<T>, len: usize) {
        (self.0)(data, len)
    }
}

impl<F> core::fmt::Debug for ReleaseFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "ReleaseFn")
    }
}

/// Releases storage obtained from the C allocator (`malloc`, `calloc`, `realloc`).
///
/// Elements are dropped in place before the memory is passed to `free`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CRelease;

impl<T> Release<T> for CRelease {
    unsafe fn release(self, data: NonNull<T>, len: usize) {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(data.as_ptr(), len));
        libc::free(data.as_ptr() as *mut libc::c_void);
    }
}
