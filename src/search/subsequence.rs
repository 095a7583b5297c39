//! Contiguous subsequence search
//!
//! The needle is split into its head element and tail. The scan engine looks
//! for the head inside the region where the whole needle could still fit,
//! and each head hit is verified by comparing the tail that follows it.
//!
//! An empty needle matches at `0` searching forward and at
//! `haystack.len()` searching backward, like `str::find("")` and
//! `str::rfind("")`.

use crate::compare::Comparer;

/// Lowest index at which `needle` occurs in `haystack`.
pub fn index_of_subsequence<S, V, C>(haystack: &[S], needle: &[V], cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    let Some((head, tail)) = needle.split_first() else {
        return Some(0);
    };
    if needle.len() > haystack.len() {
        return None;
    }

    let last_start = haystack.len() - needle.len();
    let mut offset = 0;
    while offset <= last_start {
        let hit = offset + cmp.find_first(&haystack[offset..=last_start], head)?;
        let rest = hit + 1;
        if cmp.all_equal(&haystack[rest..rest + tail.len()], tail) {
            return Some(hit);
        }
        offset = hit + 1;
    }
    None
}

/// Highest index at which `needle` occurs in `haystack`.
pub fn last_index_of_subsequence<S, V, C>(
    haystack: &[S],
    needle: &[V],
    cmp: &mut C,
) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    let Some((head, tail)) = needle.split_first() else {
        return Some(haystack.len());
    };
    if needle.len() > haystack.len() {
        return None;
    }

    // Head candidates live in [0, end).
    let mut end = haystack.len() - needle.len() + 1;
    while end > 0 {
        let hit = cmp.find_last(&haystack[..end], head)?;
        let rest = hit + 1;
        if cmp.all_equal(&haystack[rest..rest + tail.len()], tail) {
            return Some(hit);
        }
        end = hit;
    }
    None
}

/// Number of non-overlapping occurrences of `needle`, scanning left to
/// right. An empty needle occurs zero times.
pub fn count_subsequence<S, V, C>(haystack: &[S], needle: &[V], cmp: &mut C) -> usize
where
    C: Comparer<S, V> + ?Sized,
{
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut offset = 0;
    while let Some(index) = index_of_subsequence(&haystack[offset..], needle, cmp) {
        count += 1;
        offset += index + needle.len();
    }
    count
}
