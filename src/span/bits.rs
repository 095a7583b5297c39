//! Bit-comparable element types and their byte views
//!
//! A type is bit-comparable when its equality is exactly equality of its
//! representation bytes. Slices of such types can be compared and searched
//! as raw bytes without changing any result.
//!
//! Floating-point types are deliberately absent: `NaN != NaN` although the
//! bytes match, and `0.0 == -0.0` although they do not.

use std::mem;
use std::slice;

/// Marker for types whose `==` is byte-for-byte equality of their
/// representation.
///
/// # Safety
///
/// Implementors must guarantee all of the following:
///
/// - the type has no padding bytes and no uninitialized bytes,
/// - the type has no interior mutability,
/// - for any `a` and `b`, `a == b` holds exactly when the `size_of::<Self>()`
///   bytes of `a` equal those of `b`.
pub unsafe trait BitComparable: Copy + Eq {}

macro_rules! impl_bit_comparable {
    ($($t:ty),* $(,)?) => {
        $(
            // SAFETY: primitive without padding; equality is value equality
            // of a unique representation.
            unsafe impl BitComparable for $t {}
        )*
    };
}

impl_bit_comparable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char,
);

// SAFETY: arrays have no padding between elements and compare element-wise.
unsafe impl<T: BitComparable, const N: usize> BitComparable for [T; N] {}

/// View a slice of bit-comparable elements as its underlying bytes.
#[inline]
pub fn as_bytes<T: BitComparable>(elements: &[T]) -> &[u8] {
    // SAFETY: `BitComparable` rules out padding and interior mutability, so
    // every byte of the slice is initialized and immutable for the borrow.
    unsafe { slice::from_raw_parts(elements.as_ptr().cast::<u8>(), mem::size_of_val(elements)) }
}

/// Compare two values by their representation bytes.
#[inline]
pub fn bits_eq<T: BitComparable>(a: &T, b: &T) -> bool {
    as_bytes(slice::from_ref(a)) == as_bytes(slice::from_ref(b))
}

/// The single byte of a one-byte bit-comparable value, if `T` is one byte wide.
#[inline]
pub fn single_byte<T: BitComparable>(value: &T) -> Option<u8> {
    match as_bytes(slice::from_ref(value)) {
        [byte] => Some(*byte),
        _ => None,
    }
}
