//! Unrolled linear scans
//!
//! Buffers are walked in blocks of 8 elements, then 4, then one at a time.
//! Blocks come from `chunks_exact` / `rchunks_exact`, so no slot index can
//! reach outside the buffer. Every element is handed to the predicate at
//! most once, and exactly once when nothing matches.

use crate::compare::Comparer;

/// Test the listed slots of `$block` in the listed order, returning the
/// absolute index of the first hit.
macro_rules! check_block {
    ($pred:ident, $block:ident, $base:expr; $($slot:literal),+) => {
        $(
            if $pred(&$block[$slot]) {
                return Some($base + $slot);
            }
        )+
    };
}

/// Lowest index whose element satisfies `pred`.
pub fn scan_forward_where<T, P>(items: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    let mut base = 0;

    let mut blocks = items.chunks_exact(8);
    for block in &mut blocks {
        check_block!(pred, block, base; 0, 1, 2, 3, 4, 5, 6, 7);
        base += 8;
    }

    let mut quads = blocks.remainder().chunks_exact(4);
    for quad in &mut quads {
        check_block!(pred, quad, base; 0, 1, 2, 3);
        base += 4;
    }

    for (i, item) in quads.remainder().iter().enumerate() {
        if pred(item) {
            return Some(base + i);
        }
    }
    None
}

/// Highest index whose element satisfies `pred`.
pub fn scan_backward_where<T, P>(items: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    let mut base = items.len();

    let mut blocks = items.rchunks_exact(8);
    for block in &mut blocks {
        base -= 8;
        check_block!(pred, block, base; 7, 6, 5, 4, 3, 2, 1, 0);
    }

    // The remainders of `rchunks_exact` are leading prefixes, so indices
    // from here on are already absolute.
    let mut quads = blocks.remainder().rchunks_exact(4);
    for quad in &mut quads {
        base -= 4;
        check_block!(pred, quad, base; 3, 2, 1, 0);
    }

    quads.remainder().iter().rposition(pred)
}

/// Lowest index of `source` whose element equals `value` under `cmp`.
#[inline]
pub fn scan_forward<S, V, C>(source: &[S], value: &V, cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    scan_forward_where(source, |item| cmp.equals(item, value))
}

/// Highest index of `source` whose element equals `value` under `cmp`.
#[inline]
pub fn scan_backward<S, V, C>(source: &[S], value: &V, cmp: &mut C) -> Option<usize>
where
    C: Comparer<S, V> + ?Sized,
{
    scan_backward_where(source, |item| cmp.equals(item, value))
}
