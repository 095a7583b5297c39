//! Comparers produced by resolution (rules 2 to 5).

use super::{Comparer, InvocationOrder, Strategy};
use crate::config::SearchConfig;
use crate::search::{scan, sequence};
use crate::span::{self, BitComparable, bits};
use std::any::Any;
use std::fmt;

/// Byte-level comparer for identical bit-comparable element types.
///
/// Single-byte element types are searched with `memchr` once the haystack
/// reaches `byte_scan_min_len` bytes, and equal-length buffers are
/// compared as one byte range. Below the thresholds, or with the fast path
/// disabled, it answers through the unrolled engines with identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitwise {
    config: SearchConfig,
}

impl Bitwise {
    /// Create a bitwise comparer tuned by `config`.
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in effect
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    fn memchr_byte<T: BitComparable>(&self, source: &[T], value: &T) -> Option<u8> {
        if self.config.bitwise_fast_path && source.len() >= self.config.byte_scan_min_len {
            bits::single_byte(value)
        } else {
            None
        }
    }
}

impl Default for Bitwise {
    fn default() -> Self {
        Self::new(SearchConfig::DEFAULT)
    }
}

impl<T: BitComparable> Comparer<T, T> for Bitwise {
    #[inline]
    fn equals(&mut self, source: &T, value: &T) -> bool {
        source == value
    }

    fn strategy(&self) -> Strategy {
        Strategy::Bitwise
    }

    fn find_first(&mut self, source: &[T], value: &T) -> Option<usize> {
        match self.memchr_byte(source, value) {
            Some(byte) => memchr::memchr(byte, span::as_bytes(source)),
            None => scan::scan_forward(source, value, self),
        }
    }

    fn find_last(&mut self, source: &[T], value: &T) -> Option<usize> {
        match self.memchr_byte(source, value) {
            Some(byte) => memchr::memrchr(byte, span::as_bytes(source)),
            None => scan::scan_backward(source, value, self),
        }
    }

    fn all_equal(&mut self, source: &[T], values: &[T]) -> bool {
        if source.len() != values.len() {
            return false;
        }
        if self.config.bitwise_fast_path && source.len() >= self.config.byte_compare_min_len {
            return span::as_bytes(source) == span::as_bytes(values);
        }
        sequence::equal_elementwise(source, values, self)
    }
}

/// `value == source`, through `V: PartialEq<S>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEquality;

impl<S, V> Comparer<S, V> for ValueEquality
where
    V: PartialEq<S>,
{
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        value == source
    }

    fn strategy(&self) -> Strategy {
        Strategy::ValueEquality
    }

    fn order(&self) -> InvocationOrder {
        InvocationOrder::ValueFirst
    }
}

/// `source == value`, through `S: PartialEq<V>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceEquality;

impl<S, V> Comparer<S, V> for SourceEquality
where
    S: PartialEq<V>,
{
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        source == value
    }

    fn strategy(&self) -> Strategy {
        Strategy::SourceEquality
    }
}

/// Fallback equality for pairs with no equality relation of their own.
///
/// The value only matches when it is, at runtime, of the source type, in
/// which case the source type's own `==` decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericEquality;

/// Source-typed equality after a runtime type check of the value.
#[inline]
pub(crate) fn generic_equals<S, V>(source: &S, value: &V) -> bool
where
    S: PartialEq + 'static,
    V: 'static,
{
    (value as &dyn Any)
        .downcast_ref::<S>()
        .is_some_and(|value| source == value)
}

impl<S, V> Comparer<S, V> for GenericEquality
where
    S: PartialEq + 'static,
    V: 'static,
{
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        generic_equals(source, value)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Generic
    }
}

/// Comparer chosen at compile time by [`span_eq!`](crate::span_eq).
///
/// Holds the selected equality as a function pointer together with the rule
/// and invocation order that produced it.
pub struct Resolved<S, V> {
    strategy: Strategy,
    order: InvocationOrder,
    eq: fn(&S, &V) -> bool,
}

impl<S, V> Resolved<S, V> {
    /// Bundle an equality function with its provenance.
    pub const fn new(strategy: Strategy, order: InvocationOrder, eq: fn(&S, &V) -> bool) -> Self {
        Self { strategy, order, eq }
    }
}

impl<S, V> Clone for Resolved<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for Resolved<S, V> {}

impl<S, V> fmt::Debug for Resolved<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("strategy", &self.strategy)
            .field("order", &self.order)
            .finish()
    }
}

impl<S, V> Comparer<S, V> for Resolved<S, V> {
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        (self.eq)(source, value)
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn order(&self) -> InvocationOrder {
        self.order
    }
}
