//! Search and comparison over slices
//!
//! This module provides the search operations of the crate, generic over a
//! source element type `S`, a value element type `V` and a [`Comparer`].
//!
//! ## Features
//!
//! - **Unrolled scans**: forward/backward linear search in blocks of 8 and 4
//! - **Byte scan**: `memchr` for single-byte bit-comparable elements
//! - **Multi-target search**: any-of / none-of with window narrowing
//! - **Subsequence search**: head scan plus tail verification, both directions
//! - **Sequence comparison**: element-wise with a byte-range fast path
//!
//! ## Entry points
//!
//! [`SpanSearchExt`] adds the operations to every slice, resolving the
//! comparer through [`SpanEq`] with the default configuration. The `_with`
//! variants take an explicit comparer, which is used verbatim.
//! [`SpanSearch`] carries a caller-chosen [`SearchConfig`].
//!
//! ```rust
//! use spanscan::{SpanSearchExt, source_first};
//!
//! let data = [10i32, 20, 30, 20, 10];
//! assert_eq!(data.index_of(&20), Some(1));
//! assert_eq!(data.last_index_of(&20), Some(3));
//!
//! let words = ["alpha", "Beta", "gamma"];
//! let hit = words.index_of_with(&"beta", source_first(|s: &&str, v: &&str| s.eq_ignore_ascii_case(v)));
//! assert_eq!(hit, Some(1));
//! ```
//!
//! Results are `Option<usize>`; [`to_sentinel`] gives the `-1` form.

pub mod multi;
pub mod scan;
pub mod sequence;
pub mod subsequence;

use crate::compare::{Comparer, SpanEq};
use crate::config::{Config, SearchConfig};
use crate::error::Result;
use std::any::type_name;

/// Convert a search result to its sentinel form: the index, or `-1`.
///
/// Indices above `isize::MAX` (only reachable in slices of zero-sized
/// elements) saturate to `isize::MAX`, so a hit never reads as a miss.
#[inline]
pub fn to_sentinel(result: Option<usize>) -> isize {
    match result {
        Some(index) => isize::try_from(index).unwrap_or(isize::MAX),
        None => -1,
    }
}

/// Search operations bound to a [`SearchConfig`].
///
/// Stateless apart from the configuration; one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanSearch {
    config: SearchConfig,
}

impl SpanSearch {
    /// Searcher with the default configuration
    pub const DEFAULT: Self = Self {
        config: SearchConfig::DEFAULT,
    };

    /// Create a searcher with the default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Create a searcher with a validated configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("Creating span search with {:?}", config);
        Ok(Self { config })
    }

    /// The configuration in effect
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve the default comparer for the pair `(S, V)`.
    pub fn comparer<S: SpanEq<V>, V>(&self) -> S::Comparer {
        let cmp = S::resolve(&self.config);
        log::trace!(
            "Resolved {} / {} to {:?}",
            type_name::<S>(),
            type_name::<V>(),
            cmp.strategy()
        );
        cmp
    }

    /// Lowest index of `source` equal to `value`.
    pub fn index_of<S: SpanEq<V>, V>(&self, source: &[S], value: &V) -> Option<usize> {
        self.comparer::<S, V>().find_first(source, value)
    }

    /// Highest index of `source` equal to `value`.
    pub fn last_index_of<S: SpanEq<V>, V>(&self, source: &[S], value: &V) -> Option<usize> {
        self.comparer::<S, V>().find_last(source, value)
    }

    /// Whether `source` holds an element equal to `value`.
    pub fn contains_value<S: SpanEq<V>, V>(&self, source: &[S], value: &V) -> bool {
        self.index_of(source, value).is_some()
    }

    /// Number of elements of `source` equal to `value`.
    pub fn count_of<S: SpanEq<V>, V>(&self, source: &[S], value: &V) -> usize {
        let mut cmp = self.comparer::<S, V>();
        source.iter().filter(|item| cmp.equals(item, value)).count()
    }

    /// Lowest index of `source` equal to any of `values`.
    pub fn index_of_any<S: SpanEq<V>, V>(&self, source: &[S], values: &[V]) -> Option<usize> {
        multi::first_of_any(source, values, &mut self.comparer::<S, V>())
    }

    /// Highest index of `source` equal to any of `values`.
    pub fn last_index_of_any<S: SpanEq<V>, V>(&self, source: &[S], values: &[V]) -> Option<usize> {
        multi::last_of_any(source, values, &mut self.comparer::<S, V>())
    }

    /// Lowest index of `source` equal to none of `values`.
    pub fn index_of_any_except<S: SpanEq<V>, V>(
        &self,
        source: &[S],
        values: &[V],
    ) -> Option<usize> {
        multi::first_not_equal_to_all(source, values, &mut self.comparer::<S, V>())
    }

    /// Highest index of `source` equal to none of `values`.
    pub fn last_index_of_any_except<S: SpanEq<V>, V>(
        &self,
        source: &[S],
        values: &[V],
    ) -> Option<usize> {
        multi::last_not_equal_to_all(source, values, &mut self.comparer::<S, V>())
    }

    /// Lowest index at which `needle` occurs in `haystack`.
    pub fn index_of_subsequence<S: SpanEq<V>, V>(
        &self,
        haystack: &[S],
        needle: &[V],
    ) -> Option<usize> {
        subsequence::index_of_subsequence(haystack, needle, &mut self.comparer::<S, V>())
    }

    /// Highest index at which `needle` occurs in `haystack`.
    pub fn last_index_of_subsequence<S: SpanEq<V>, V>(
        &self,
        haystack: &[S],
        needle: &[V],
    ) -> Option<usize> {
        subsequence::last_index_of_subsequence(haystack, needle, &mut self.comparer::<S, V>())
    }

    /// Non-overlapping occurrences of `needle` in `haystack`.
    pub fn count_subsequence<S: SpanEq<V>, V>(&self, haystack: &[S], needle: &[V]) -> usize {
        subsequence::count_subsequence(haystack, needle, &mut self.comparer::<S, V>())
    }

    /// Whether `a` and `b` hold equal elements.
    pub fn sequence_equal<S: SpanEq<V>, V>(&self, a: &[S], b: &[V]) -> bool {
        sequence::sequence_equal(a, b, &mut self.comparer::<S, V>())
    }

    /// Whether the first `length` elements of `a` and `b` are equal.
    pub fn sequence_equal_len<S: SpanEq<V>, V>(
        &self,
        a: &[S],
        b: &[V],
        length: usize,
    ) -> Result<bool> {
        sequence::sequence_equal_len(a, b, length, &mut self.comparer::<S, V>())
    }

    /// Whether `source` begins with `prefix`.
    pub fn starts_with_seq<S: SpanEq<V>, V>(&self, source: &[S], prefix: &[V]) -> bool {
        sequence::starts_with(source, prefix, &mut self.comparer::<S, V>())
    }

    /// Whether `source` ends with `suffix`.
    pub fn ends_with_seq<S: SpanEq<V>, V>(&self, source: &[S], suffix: &[V]) -> bool {
        sequence::ends_with(source, suffix, &mut self.comparer::<S, V>())
    }

    /// Length of the longest common prefix of `a` and `b`.
    pub fn common_prefix_len<S: SpanEq<V>, V>(&self, a: &[S], b: &[V]) -> usize {
        sequence::common_prefix_len(a, b, &mut self.comparer::<S, V>())
    }
}

/// Search operations on slices.
///
/// Methods without a suffix resolve their comparer through [`SpanEq`] using
/// [`SearchConfig::DEFAULT`]. The `_with` variants use the given comparer and
/// nothing else; pass `&mut cmp` to keep hold of a stateful comparer.
pub trait SpanSearchExt<S> {
    /// Lowest index equal to `value`.
    fn index_of<V>(&self, value: &V) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Lowest index equal to `value` under `cmp`.
    fn index_of_with<V, C: Comparer<S, V>>(&self, value: &V, cmp: C) -> Option<usize>;

    /// Highest index equal to `value`.
    fn last_index_of<V>(&self, value: &V) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Highest index equal to `value` under `cmp`.
    fn last_index_of_with<V, C: Comparer<S, V>>(&self, value: &V, cmp: C) -> Option<usize>;

    /// Whether any element equals `value`.
    fn contains_value<V>(&self, value: &V) -> bool
    where
        S: SpanEq<V>;

    /// Number of elements equal to `value`.
    fn count_of<V>(&self, value: &V) -> usize
    where
        S: SpanEq<V>;

    /// Lowest index equal to any of `values`.
    fn index_of_any<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Lowest index equal to any of `values` under `cmp`.
    fn index_of_any_with<V, C: Comparer<S, V>>(&self, values: &[V], cmp: C) -> Option<usize>;

    /// Highest index equal to any of `values`.
    fn last_index_of_any<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Highest index equal to any of `values` under `cmp`.
    fn last_index_of_any_with<V, C: Comparer<S, V>>(
        &self,
        values: &[V],
        cmp: C,
    ) -> Option<usize>;

    /// Lowest index equal to none of `values`.
    fn index_of_any_except<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Lowest index equal to none of `values` under `cmp`.
    fn index_of_any_except_with<V, C: Comparer<S, V>>(
        &self,
        values: &[V],
        cmp: C,
    ) -> Option<usize>;

    /// Highest index equal to none of `values`.
    fn last_index_of_any_except<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Highest index equal to none of `values` under `cmp`.
    fn last_index_of_any_except_with<V, C: Comparer<S, V>>(
        &self,
        values: &[V],
        cmp: C,
    ) -> Option<usize>;

    /// Lowest index at which `needle` occurs.
    fn index_of_subsequence<V>(&self, needle: &[V]) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Lowest index at which `needle` occurs under `cmp`.
    fn index_of_subsequence_with<V, C: Comparer<S, V>>(
        &self,
        needle: &[V],
        cmp: C,
    ) -> Option<usize>;

    /// Highest index at which `needle` occurs.
    fn last_index_of_subsequence<V>(&self, needle: &[V]) -> Option<usize>
    where
        S: SpanEq<V>;

    /// Highest index at which `needle` occurs under `cmp`.
    fn last_index_of_subsequence_with<V, C: Comparer<S, V>>(
        &self,
        needle: &[V],
        cmp: C,
    ) -> Option<usize>;

    /// Non-overlapping occurrences of `needle`.
    fn count_subsequence<V>(&self, needle: &[V]) -> usize
    where
        S: SpanEq<V>;

    /// Whether `other` holds equal elements.
    fn sequence_equal<V>(&self, other: &[V]) -> bool
    where
        S: SpanEq<V>;

    /// Whether `other` holds equal elements under `cmp`.
    fn sequence_equal_with<V, C: Comparer<S, V>>(&self, other: &[V], cmp: C) -> bool;

    /// Whether the slice begins with `prefix`.
    fn starts_with_seq<V>(&self, prefix: &[V]) -> bool
    where
        S: SpanEq<V>;

    /// Whether the slice ends with `suffix`.
    fn ends_with_seq<V>(&self, suffix: &[V]) -> bool
    where
        S: SpanEq<V>;

    /// Length of the longest common prefix with `other`.
    fn common_prefix_len<V>(&self, other: &[V]) -> usize
    where
        S: SpanEq<V>;
}

impl<S> SpanSearchExt<S> for [S] {
    fn index_of<V>(&self, value: &V) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.index_of(self, value)
    }

    fn index_of_with<V, C: Comparer<S, V>>(&self, value: &V, mut cmp: C) -> Option<usize> {
        cmp.find_first(self, value)
    }

    fn last_index_of<V>(&self, value: &V) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.last_index_of(self, value)
    }

    fn last_index_of_with<V, C: Comparer<S, V>>(&self, value: &V, mut cmp: C) -> Option<usize> {
        cmp.find_last(self, value)
    }

    fn contains_value<V>(&self, value: &V) -> bool
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.contains_value(self, value)
    }

    fn count_of<V>(&self, value: &V) -> usize
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.count_of(self, value)
    }

    fn index_of_any<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.index_of_any(self, values)
    }

    fn index_of_any_with<V, C: Comparer<S, V>>(&self, values: &[V], mut cmp: C) -> Option<usize> {
        multi::first_of_any(self, values, &mut cmp)
    }

    fn last_index_of_any<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.last_index_of_any(self, values)
    }

    fn last_index_of_any_with<V, C: Comparer<S, V>>(
        &self,
        values: &[V],
        mut cmp: C,
    ) -> Option<usize> {
        multi::last_of_any(self, values, &mut cmp)
    }

    fn index_of_any_except<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.index_of_any_except(self, values)
    }

    fn index_of_any_except_with<V, C: Comparer<S, V>>(
        &self,
        values: &[V],
        mut cmp: C,
    ) -> Option<usize> {
        multi::first_not_equal_to_all(self, values, &mut cmp)
    }

    fn last_index_of_any_except<V>(&self, values: &[V]) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.last_index_of_any_except(self, values)
    }

    fn last_index_of_any_except_with<V, C: Comparer<S, V>>(
        &self,
        values: &[V],
        mut cmp: C,
    ) -> Option<usize> {
        multi::last_not_equal_to_all(self, values, &mut cmp)
    }

    fn index_of_subsequence<V>(&self, needle: &[V]) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.index_of_subsequence(self, needle)
    }

    fn index_of_subsequence_with<V, C: Comparer<S, V>>(
        &self,
        needle: &[V],
        mut cmp: C,
    ) -> Option<usize> {
        subsequence::index_of_subsequence(self, needle, &mut cmp)
    }

    fn last_index_of_subsequence<V>(&self, needle: &[V]) -> Option<usize>
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.last_index_of_subsequence(self, needle)
    }

    fn last_index_of_subsequence_with<V, C: Comparer<S, V>>(
        &self,
        needle: &[V],
        mut cmp: C,
    ) -> Option<usize> {
        subsequence::last_index_of_subsequence(self, needle, &mut cmp)
    }

    fn count_subsequence<V>(&self, needle: &[V]) -> usize
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.count_subsequence(self, needle)
    }

    fn sequence_equal<V>(&self, other: &[V]) -> bool
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.sequence_equal(self, other)
    }

    fn sequence_equal_with<V, C: Comparer<S, V>>(&self, other: &[V], mut cmp: C) -> bool {
        sequence::sequence_equal(self, other, &mut cmp)
    }

    fn starts_with_seq<V>(&self, prefix: &[V]) -> bool
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.starts_with_seq(self, prefix)
    }

    fn ends_with_seq<V>(&self, suffix: &[V]) -> bool
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.ends_with_seq(self, suffix)
    }

    fn common_prefix_len<V>(&self, other: &[V]) -> usize
    where
        S: SpanEq<V>,
    {
        SpanSearch::DEFAULT.common_prefix_len(self, other)
    }
}
