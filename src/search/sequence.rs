//! Element-wise comparison of whole buffers
//!
//! Buffers are compared position by position and the first mismatch ends the
//! comparison. Comparers with a byte-level representation answer through
//! their own [`Comparer::all_equal`] hook instead.

use crate::compare::Comparer;
use crate::error::{Result, SpanError};
use crate::span;

/// Pairwise equality of two buffers, stopping at the first mismatch.
///
/// Buffers of different lengths are unequal without invoking `cmp`.
pub fn equal_elementwise<S, V, C>(source: &[S], values: &[V], cmp: &mut C) -> bool
where
    C: Comparer<S, V> + ?Sized,
{
    source.len() == values.len() && source.iter().zip(values).all(|(s, v)| cmp.equals(s, v))
}

/// Whether `a` and `b` have the same length and equal elements.
///
/// Buffers of different lengths are unequal without invoking `cmp`, and a
/// buffer compared against its own storage is equal without invoking it.
pub fn sequence_equal<S, V, C>(a: &[S], b: &[V], cmp: &mut C) -> bool
where
    C: Comparer<S, V> + ?Sized,
{
    a.len() == b.len() && (span::same_storage(a, b) || cmp.all_equal(a, b))
}

/// Whether the first `length` elements of `a` and `b` are equal.
///
/// # Errors
///
/// `OutOfBounds` when either buffer holds fewer than `length` elements.
pub fn sequence_equal_len<S, V, C>(a: &[S], b: &[V], length: usize, cmp: &mut C) -> Result<bool>
where
    C: Comparer<S, V> + ?Sized,
{
    if length > a.len() {
        return Err(SpanError::out_of_bounds(length, a.len()));
    }
    if length > b.len() {
        return Err(SpanError::out_of_bounds(length, b.len()));
    }
    let (a, b) = (&a[..length], &b[..length]);
    Ok(span::same_storage(a, b) || cmp.all_equal(a, b))
}

/// Whether `source` begins with `prefix`.
pub fn starts_with<S, V, C>(source: &[S], prefix: &[V], cmp: &mut C) -> bool
where
    C: Comparer<S, V> + ?Sized,
{
    prefix.len() <= source.len() && cmp.all_equal(&source[..prefix.len()], prefix)
}

/// Whether `source` ends with `suffix`.
pub fn ends_with<S, V, C>(source: &[S], suffix: &[V], cmp: &mut C) -> bool
where
    C: Comparer<S, V> + ?Sized,
{
    suffix.len() <= source.len() && cmp.all_equal(&source[source.len() - suffix.len()..], suffix)
}

/// Length of the longest common prefix of `a` and `b`.
///
/// `cmp` runs once per position up to and including the first mismatch.
pub fn common_prefix_len<S, V, C>(a: &[S], b: &[V], cmp: &mut C) -> usize
where
    C: Comparer<S, V> + ?Sized,
{
    let len = a.len().min(b.len());
    a.iter()
        .zip(b)
        .position(|(s, v)| !cmp.equals(s, v))
        .unwrap_or(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Bitwise, SourceEquality, source_first};

    #[test]
    fn test_mismatch_at_last_position() {
        let mut calls = 0;
        let mut cmp = source_first(|s: &i32, v: &i32| {
            calls += 1;
            s == v
        });
        assert!(!sequence_equal(&[1, 2, 3], &[1, 2, 4], &mut cmp));
        drop(cmp);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_length_mismatch_skips_predicate() {
        let mut calls = 0;
        let mut cmp = source_first(|_: &i32, _: &i32| {
            calls += 1;
            true
        });
        assert!(!sequence_equal(&[1, 2], &[1, 2, 3], &mut cmp));
        assert!(sequence_equal(&[] as &[i32], &[] as &[i32], &mut cmp));
        drop(cmp);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_self_comparison_skips_predicate() {
        let mut calls = 0;
        let mut cmp = source_first(|_: &f64, _: &f64| {
            calls += 1;
            false
        });
        let a = [1.0f64, f64::NAN];
        assert!(sequence_equal(&a, &a, &mut cmp));
        assert!(sequence_equal_len(&a, &a, 1, &mut cmp).unwrap());
        assert!(!sequence_equal(&a[..1], &a[1..], &mut cmp));
        drop(cmp);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_elementwise_length_mismatch() {
        let mut calls = 0;
        let mut cmp = source_first(|s: &i32, v: &i32| {
            calls += 1;
            s == v
        });
        assert!(!equal_elementwise(&[1, 2], &[1], &mut cmp));
        assert!(!Comparer::<i32, i32>::all_equal(&mut cmp, &[1, 2, 3], &[1]));
        assert!(equal_elementwise(&[1, 2], &[1, 2], &mut cmp));
        drop(cmp);
        assert_eq!(calls, 2);

        let mut bitwise = Bitwise::default();
        assert!(!Comparer::<i32, i32>::all_equal(&mut bitwise, &[1, 2], &[1]));
        assert!(!Comparer::<i32, i32>::all_equal(&mut SourceEquality, &[1, 2, 3], &[1]));
    }

    #[test]
    fn test_sequence_equal_len() {
        let a = [1u16, 2, 3, 4];
        let b = [1u16, 2, 3, 9, 9];
        let mut cmp = Bitwise::default();
        assert!(sequence_equal_len(&a, &b, 3, &mut cmp).unwrap());
        assert!(!sequence_equal_len(&a, &b, 4, &mut cmp).unwrap());
        assert!(sequence_equal_len(&a, &b, 0, &mut cmp).unwrap());
        assert!(matches!(
            sequence_equal_len(&a, &b, 5, &mut cmp),
            Err(SpanError::OutOfBounds { index: 5, size: 4 })
        ));
    }

    #[test]
    fn test_starts_and_ends_with() {
        let mut cmp = SourceEquality;
        let data = [1, 2, 3, 4];
        assert!(starts_with(&data, &[1, 2], &mut cmp));
        assert!(!starts_with(&data, &[2], &mut cmp));
        assert!(starts_with(&data, &[] as &[i32], &mut cmp));
        assert!(!starts_with(&data, &[1, 2, 3, 4, 5], &mut cmp));
        assert!(ends_with(&data, &[3, 4], &mut cmp));
        assert!(!ends_with(&data, &[3], &mut cmp));
        assert!(ends_with(&data, &data, &mut cmp));
    }

    #[test]
    fn test_common_prefix_len() {
        let mut calls = 0;
        let mut cmp = source_first(|s: &u8, v: &u8| {
            calls += 1;
            s == v
        });
        assert_eq!(common_prefix_len(b"spanscan", b"spandex", &mut cmp), 4);
        drop(cmp);
        assert_eq!(calls, 5);

        let mut cmp = SourceEquality;
        assert_eq!(common_prefix_len(b"abc", b"abcdef", &mut cmp), 3);
        assert_eq!(common_prefix_len(b"", b"abc", &mut cmp), 0);
    }
}
