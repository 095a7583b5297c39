//! Bounds-checked views over caller-owned storage
//!
//! [`Span`] and [`SpanMut`] are windows `[start, start + len)` into a borrowed
//! slice. Construction validates the window before any element is touched and
//! never clamps: a window reaching past the storage is an error. Once built, a
//! span dereferences to a plain slice, so every search operation applies to it
//! directly.
//!
//! The free functions [`same_storage`] and [`byte_distance`] provide the
//! address arithmetic the search layers need without exposing raw pointers.

pub mod bits;

use crate::error::{Result, SpanError, check_bounds, checked_end};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

pub use bits::{BitComparable, as_bytes};

/// Read-only view over `len` contiguous elements of borrowed storage.
pub struct Span<'a, T> {
    data: &'a [T],
}

impl<'a, T> Span<'a, T> {
    /// Create a view over `storage[start..start + len]`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `start + len` overflows, `OutOfBounds` when the
    /// window ends past `storage.len()`.
    pub fn new(storage: &'a [T], start: usize, len: usize) -> Result<Self> {
        let end = checked_end(start, len, storage.len())?;
        Ok(Self {
            data: &storage[start..end],
        })
    }

    /// View an entire slice.
    #[inline]
    pub const fn from_slice(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Number of elements in the view
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view holds no elements
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the viewed elements in bytes
    #[inline]
    pub fn byte_len(&self) -> usize {
        mem::size_of_val(self.data)
    }

    /// The viewed elements as a slice with the original lifetime
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Element at `index`, failing instead of panicking when out of range.
    pub fn element_at(&self, index: usize) -> Result<&'a T> {
        check_bounds(index, self.data.len())?;
        Ok(&self.data[index])
    }

    /// A narrower view `[start, start + len)` relative to this one.
    pub fn subspan(&self, start: usize, len: usize) -> Result<Span<'a, T>> {
        Span::new(self.data, start, len)
    }

    /// Byte distance from element `from` to element `to`; both offsets may
    /// equal `len()` to address one-past-the-end.
    pub fn byte_distance(&self, from: usize, to: usize) -> Result<isize> {
        byte_distance::<T>(from, to, self.data.len())
    }

    /// Offset of `element` inside this view, when it refers to one of the
    /// viewed elements. Zero-sized element types have no addressable offset.
    pub fn offset_of(&self, element: &T) -> Option<usize> {
        let size = mem::size_of::<T>();
        if size == 0 {
            return None;
        }
        let base = self.data.as_ptr() as usize;
        let addr = element as *const T as usize;
        let delta = addr.checked_sub(base)?;
        if delta % size != 0 {
            return None;
        }
        let index = delta / size;
        (index < self.data.len()).then_some(index)
    }

    /// Whether both views start at the same address and cover the same length.
    #[inline]
    pub fn same_storage(&self, other: &Span<'_, T>) -> bool {
        same_storage(self.data, other.data)
    }
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<T> Deref for Span<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: fmt::Debug> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}

/// Read/write view over `len` contiguous elements of borrowed storage.
pub struct SpanMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> SpanMut<'a, T> {
    /// Create a mutable view over `storage[start..start + len]`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Span::new`].
    pub fn new(storage: &'a mut [T], start: usize, len: usize) -> Result<Self> {
        let end = checked_end(start, len, storage.len())?;
        Ok(Self {
            data: &mut storage[start..end],
        })
    }

    /// View an entire mutable slice.
    #[inline]
    pub fn from_slice(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_span(&self) -> Span<'_, T> {
        Span::from_slice(self.data)
    }

    /// Mutable element at `index`, failing when out of range.
    pub fn element_at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| SpanError::out_of_bounds(index, size))
    }

    /// Give back the underlying mutable slice.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<T> Deref for SpanMut<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<T> DerefMut for SpanMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.data
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SpanMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanMut")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}

/// Whether two slices begin at the same address and span the same bytes.
///
/// Empty slices never share storage: there is nothing to share.
#[inline]
pub fn same_storage<A, B>(a: &[A], b: &[B]) -> bool {
    let bytes = mem::size_of_val(a);
    bytes != 0 && bytes == mem::size_of_val(b) && a.as_ptr() as usize == b.as_ptr() as usize
}

/// Signed byte distance between element offsets `from` and `to` of a buffer
/// holding `len` elements of `T`.
pub fn byte_distance<T>(from: usize, to: usize, len: usize) -> Result<isize> {
    if from > len {
        return Err(SpanError::out_of_bounds(from, len));
    }
    if to > len {
        return Err(SpanError::out_of_bounds(to, len));
    }
    let size = mem::size_of::<T>();
    let (lo, hi, negative) = if to >= from {
        (from, to, false)
    } else {
        (to, from, true)
    };
    let bytes = (hi - lo)
        .checked_mul(size)
        .and_then(|b| isize::try_from(b).ok())
        .ok_or_else(|| SpanError::invalid_range(lo, hi))?;
    Ok(if negative { -bytes } else { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new_valid() {
        let storage = [1, 2, 3, 4, 5];
        let span = Span::new(&storage, 1, 3).unwrap();
        assert_eq!(span.len(), 3);
        assert_eq!(&*span, &[2, 3, 4]);
        assert_eq!(*span.element_at(0).unwrap(), 2);
    }

    #[test]
    fn test_span_new_rejects_out_of_range() {
        let storage = [1u8, 2, 3];
        assert!(matches!(
            Span::new(&storage, 2, 2),
            Err(SpanError::OutOfBounds { index: 4, size: 3 })
        ));
        assert!(matches!(
            Span::new(&storage, usize::MAX, 1),
            Err(SpanError::InvalidRange { .. })
        ));
        assert!(Span::new(&storage, 3, 0).unwrap().is_empty());
    }

    #[test]
    fn test_element_at_bounds() {
        let storage = [10, 20];
        let span = Span::from_slice(&storage);
        assert!(span.element_at(1).is_ok());
        assert!(matches!(
            span.element_at(2),
            Err(SpanError::OutOfBounds { index: 2, size: 2 })
        ));
    }

    #[test]
    fn test_subspan() {
        let storage = [0, 1, 2, 3, 4, 5, 6, 7];
        let outer = Span::new(&storage, 2, 5).unwrap();
        let inner = outer.subspan(1, 3).unwrap();
        assert_eq!(&*inner, &[3, 4, 5]);
        assert!(outer.subspan(3, 3).is_err());
    }

    #[test]
    fn test_byte_distance() {
        let storage = [0u32; 6];
        let span = Span::from_slice(&storage);
        assert_eq!(span.byte_distance(1, 4).unwrap(), 12);
        assert_eq!(span.byte_distance(4, 1).unwrap(), -12);
        assert_eq!(span.byte_distance(0, 6).unwrap(), 24);
        assert!(span.byte_distance(0, 7).is_err());
        assert_eq!(span.byte_len(), 24);
    }

    #[test]
    fn test_offset_of() {
        let storage = [5u16, 6, 7, 8];
        let span = Span::new(&storage, 1, 2).unwrap();
        assert_eq!(span.offset_of(&storage[1]), Some(0));
        assert_eq!(span.offset_of(&storage[2]), Some(1));
        assert_eq!(span.offset_of(&storage[0]), None);
        assert_eq!(span.offset_of(&storage[3]), None);

        let other = 6u16;
        assert_eq!(span.offset_of(&other), None);
    }

    #[test]
    fn test_same_storage() {
        let storage = [1, 2, 3, 4];
        let a = Span::new(&storage, 0, 3).unwrap();
        let b = Span::new(&storage, 0, 3).unwrap();
        let c = Span::new(&storage, 1, 3).unwrap();
        let d = Span::new(&storage, 0, 2).unwrap();
        assert!(a.same_storage(&b));
        assert!(!a.same_storage(&c));
        assert!(!a.same_storage(&d));

        let copy = storage;
        assert!(!same_storage(&storage, &copy));
        assert!(!same_storage::<i32, i32>(&[], &[]));
    }

    #[test]
    fn test_span_mut() {
        let mut storage = [1, 2, 3, 4];
        {
            let mut span = SpanMut::new(&mut storage, 1, 2).unwrap();
            *span.element_at_mut(1).unwrap() = 30;
            span[0] = 20;
            assert_eq!(&*span.as_span(), &[20, 30]);
            assert!(span.element_at_mut(2).is_err());
        }
        assert_eq!(storage, [1, 20, 30, 4]);
        assert!(SpanMut::new(&mut storage, 4, 1).is_err());
    }
}
