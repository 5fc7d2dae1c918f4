//! Fixed-size, heap-backed, move-only buffers.

mod release;

pub use release::*;

use crate::error::{Error, Result};
use core::marker::PhantomData;
use core::ptr::NonNull;

struct RawParts<T, R> {
    data: NonNull<T>,
    len: usize,
    release: R,
}

/// A contiguous, fixed-size buffer that exclusively owns its storage.
///
/// The size never changes after construction.  Ownership moves with the value; a deep copy is
/// only made through [`copy`](Self::copy).  The release strategy `R` runs exactly once, when the
/// buffer that holds the storage is dropped.
pub struct UniqueBuffer<T, R: Release<T> = BoxRelease> {
    raw: Option<RawParts<T, R>>,
    marker: PhantomData<T>,
}

unsafe impl<T: Send, R: Release<T> + Send> Send for UniqueBuffer<T, R> {}
unsafe impl<T: Sync, R: Release<T> + Sync> Sync for UniqueBuffer<T, R> {}

impl<T: Default> UniqueBuffer<T> {
    /// Allocates `size` default-initialized elements.
    pub fn new(size: usize) -> Self {
        (0..size).map(|_| T::default()).collect()
    }
}

impl<T: Clone> UniqueBuffer<T> {
    /// Allocates a buffer holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> UniqueBuffer<T> {
    /// Converts the buffer back into a vector without copying.
    pub fn into_vec(mut self) -> Vec<T> {
        match self.raw.take() {
            Some(RawParts { data, len, .. }) => unsafe {
                Box::from_raw(core::ptr::slice_from_raw_parts_mut(data.as_ptr(), len)).into_vec()
            },
            None => Vec::new(),
        }
    }
}

impl<T, R: Release<T>> UniqueBuffer<T, R> {
    /// Takes ownership of foreign storage.
    ///
    /// `release` is invoked exactly once with `data` and `len` when the buffer is dropped.
    ///
    /// # Safety
    /// `data` must point to `len` initialized elements that stay valid and unaliased until
    /// `release` runs, and `release` must be the correct way to free them.
    pub unsafe fn from_raw_parts(data: NonNull<T>, len: usize, release: R) -> Self {
        Self {
            raw: Some(RawParts { data, len, release }),
            marker: PhantomData,
        }
    }

    /// Moves the storage into a new buffer, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self {
            raw: self.raw.take(),
            marker: PhantomData,
        }
    }

    /// The number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.raw.as_ref().map_or(0, |raw| raw.len)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.raw {
            Some(raw) => unsafe { core::slice::from_raw_parts(raw.data.as_ptr(), raw.len) },
            None => &[],
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.raw {
            Some(raw) => unsafe { core::slice::from_raw_parts_mut(raw.data.as_ptr(), raw.len) },
            None => &mut [],
        }
    }

    /// Returns the element at `index`, or [`Error::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&T> {
        let size = self.size();
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, size })
    }

    /// Returns the element at `index` mutably, or [`Error::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, size })
    }

    /// Creates an independent buffer with the same contents.
    ///
    /// The copy is allocated by the crate and uses the default release strategy, whatever the
    /// strategy of `self`.
    pub fn copy(&self) -> UniqueBuffer<T>
    where
        T: Clone,
    {
        UniqueBuffer::from_slice(self.as_slice())
    }
}

impl<T, R: Release<T>> Drop for UniqueBuffer<T, R> {
    fn drop(&mut self) {
        if let Some(RawParts { data, len, release }) = self.raw.take() {
            unsafe { release.release(data, len) }
        }
    }
}

impl<T> From<Box<[T]>> for UniqueBuffer<T> {
    fn from(values: Box<[T]>) -> Self {
        let len = values.len();
        let data = NonNull::from(Box::leak(values)).cast::<T>();
        unsafe { Self::from_raw_parts(data, len, BoxRelease) }
    }
}

impl<T> From<Vec<T>> for UniqueBuffer<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from(values.into_boxed_slice())
    }
}

impl<T> core::iter::FromIterator<T> for UniqueBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Box<[T]>>())
    }
}

impl<T, R: Release<T>> core::ops::Deref for UniqueBuffer<T, R> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, R: Release<T>> core::ops::DerefMut for UniqueBuffer<T, R> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, R: Release<T>> AsRef<[T]> for UniqueBuffer<T, R> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, R: Release<T>> AsMut<[T]> for UniqueBuffer<T, R> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, R: Release<T>> IntoIterator for &'a UniqueBuffer<T, R> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, R: Release<T>> IntoIterator for &'a mut UniqueBuffer<T, R> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: core::fmt::Debug, R: Release<T>> core::fmt::Debug for UniqueBuffer<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
