//! Searches against a set of targets
//!
//! `first_of_any` and `last_of_any` run one scan per target and narrow the
//! admissible window after every hit, so later targets only look where they
//! could still improve the answer. The `not_equal_to_all` pair inverts the
//! roles: each buffer element is looked up in the target list.

use super::scan;
use crate::compare::{Comparer, Flipped};

/// Lowest index of `source` equal to any element of `values`.
///
/// The answer is independent of the order of `values`.
pub fn first_of_any<S, V, C>(source: &[S], values: &[V], cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    let mut best = source.len();
    for value in values {
        if best == 0 {
            break;
        }
        if let Some(index) = cmp.find_first(&source[..best], value) {
            best = index;
        }
    }
    (best < source.len()).then_some(best)
}

/// Highest index of `source` equal to any element of `values`.
pub fn last_of_any<S, V, C>(source: &[S], values: &[V], cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    let mut best = None;
    // Window is [floor, len): strictly above the best hit so far.
    let mut floor = 0;
    for value in values {
        if floor == source.len() {
            break;
        }
        if let Some(index) = cmp.find_last(&source[floor..], value) {
            best = Some(floor + index);
            floor += index + 1;
        }
    }
    best
}

/// Lowest index of `source` whose element equals none of `values`.
///
/// Each element is tested by scanning `values`, with `cmp` still receiving
/// the buffer element as its source argument.
pub fn first_not_equal_to_all<S, V, C>(source: &[S], values: &[V], cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    let mut lookup = Flipped(cmp);
    scan::scan_forward_where(source, |item| lookup.find_first(values, item).is_none())
}

/// Highest index of `source` whose element equals none of `values`.
pub fn last_not_equal_to_all<S, V, C>(source: &[S], values: &[V], cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    let mut lookup = Flipped(cmp);
    scan::scan_backward_where(source, |item| lookup.find_first(values, item).is_none())
}
