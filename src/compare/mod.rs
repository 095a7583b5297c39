//! Comparator resolution
//!
//! Every search in this crate compares a *source* element (from the buffer
//! being searched) against a *value* element (the target). The two types may
//! differ and equality between them may be asymmetric. A [`Comparer`] owns
//! that decision, and the engines in [`crate::search`] only ever talk to one.
//!
//! ## Resolution order
//!
//! When a caller does not supply a comparer, one is resolved through
//! [`SpanEq`] in this priority order:
//!
//! 1. An explicit predicate ([`SourceFirst`] / [`ValueFirst`]) always wins
//!    and is never replaced by a fast path.
//! 2. Identical [`BitComparable`](crate::span::BitComparable) types use
//!    [`Bitwise`], which may scan and compare raw bytes.
//! 3. `V: PartialEq<S>` uses [`ValueEquality`], invoked as `value == source`.
//! 4. `S: PartialEq<V>` uses [`SourceEquality`], invoked as `source == value`.
//! 5. Otherwise [`GenericEquality`], invoked as `source == value` once the
//!    value is known to be of the source type.
//!
//! Rule 2 is a blanket impl over `BitComparable`. Rules 3 to 5 are chosen at
//! compile time for concrete type pairs by [`span_eq!`](crate::span_eq).
//!
//! ## Invocation order
//!
//! Predicates may record or depend on argument position, so both orders are
//! first-class: [`SourceFirst`] calls `f(source, value)` and [`ValueFirst`]
//! calls `f(value, source)`. Both run through the same engines.

mod equality;
mod resolve;

pub use equality::{Bitwise, GenericEquality, Resolved, SourceEquality, ValueEquality};
pub use resolve::{SpanEq, probe, resolved_strategy};

use crate::search::{scan, sequence};
use std::fmt;

/// Which rule produced a comparer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Caller-supplied predicate, used verbatim
    Explicit,
    /// Raw byte comparison of identical bit-comparable types
    Bitwise,
    /// `value == source` through `V: PartialEq<S>`
    ValueEquality,
    /// `source == value` through `S: PartialEq<V>`
    SourceEquality,
    /// Type-checked fallback equality on the source type
    Generic,
}

/// Argument order used when the underlying equality is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvocationOrder {
    /// `f(source, value)`
    SourceFirst,
    /// `f(value, source)`
    ValueFirst,
}

/// Equality between a source element `S` and a value element `V`.
///
/// Only [`equals`](Comparer::equals) is required. The bulk hooks default to
/// the unrolled engines, which call `equals` exactly once per inspected
/// element. Fast-path comparers override the hooks; explicit predicates
/// never do.
pub trait Comparer<S, V> {
    /// Compare one source element with one value element.
    fn equals(&mut self, source: &S, value: &V) -> bool;

    /// The resolution rule this comparer implements.
    fn strategy(&self) -> Strategy;

    /// The argument order used when invoking the underlying equality.
    fn order(&self) -> InvocationOrder {
        InvocationOrder::SourceFirst
    }

    /// Lowest index in `source` equal to `value`.
    fn find_first(&mut self, source: &[S], value: &V) -> Option<usize> {
        scan::scan_forward(source, value, self)
    }

    /// Highest index in `source` equal to `value`.
    fn find_last(&mut self, source: &[S], value: &V) -> Option<usize> {
        scan::scan_backward(source, value, self)
    }

    /// Pairwise equality of two buffers; false when the lengths differ.
    fn all_equal(&mut self, source: &[S], values: &[V]) -> bool {
        sequence::equal_elementwise(source, values, self)
    }
}

impl<S, V, C> Comparer<S, V> for &mut C
where
    C: Comparer<S, V> + ?Sized,
{
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        (**self).equals(source, value)
    }

    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }

    fn order(&self) -> InvocationOrder {
        (**self).order()
    }

    fn find_first(&mut self, source: &[S], value: &V) -> Option<usize> {
        (**self).find_first(source, value)
    }

    fn find_last(&mut self, source: &[S], value: &V) -> Option<usize> {
        (**self).find_last(source, value)
    }

    fn all_equal(&mut self, source: &[S], values: &[V]) -> bool {
        (**self).all_equal(source, values)
    }
}

/// Explicit predicate invoked as `f(source, value)`.
#[derive(Clone, Copy)]
pub struct SourceFirst<F>(pub F);

impl<S, V, F> Comparer<S, V> for SourceFirst<F>
where
    F: FnMut(&S, &V) -> bool,
{
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        (self.0)(source, value)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Explicit
    }
}

impl<F> fmt::Debug for SourceFirst<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SourceFirst(..)")
    }
}

/// Explicit predicate invoked as `f(value, source)`.
#[derive(Clone, Copy)]
pub struct ValueFirst<F>(pub F);

impl<S, V, F> Comparer<S, V> for ValueFirst<F>
where
    F: FnMut(&V, &S) -> bool,
{
    #[inline]
    fn equals(&mut self, source: &S, value: &V) -> bool {
        (self.0)(value, source)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Explicit
    }

    fn order(&self) -> InvocationOrder {
        InvocationOrder::ValueFirst
    }
}

impl<F> fmt::Debug for ValueFirst<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFirst(..)")
    }
}

/// Wrap `f` as a comparer called as `f(source, value)`.
///
/// The bound pins the closure signature so argument types are inferred
/// from the call site.
pub fn source_first<S, V, F>(f: F) -> SourceFirst<F>
where
    F: FnMut(&S, &V) -> bool,
{
    SourceFirst(f)
}

/// Wrap `f` as a comparer called as `f(value, source)`.
pub fn value_first<S, V, F>(f: F) -> ValueFirst<F>
where
    F: FnMut(&V, &S) -> bool,
{
    ValueFirst(f)
}

/// Swaps the buffer roles of a comparer.
///
/// `Flipped(c)` is a `Comparer<V, S>` for any `c: Comparer<S, V>`: when an
/// engine scans a buffer of values for a source element, each call is routed
/// back to `c` with the source element first, so the wrapped comparer always
/// sees the roles it was written for.
#[derive(Debug, Clone, Copy)]
pub struct Flipped<C>(pub C);

impl<S, V, C> Comparer<V, S> for Flipped<C>
where
    C: Comparer<S, V>,
{
    #[inline]
    fn equals(&mut self, source: &V, value: &S) -> bool {
        self.0.equals(value, source)
    }

    fn strategy(&self) -> Strategy {
        self.0.strategy()
    }

    fn order(&self) -> InvocationOrder {
        self.0.order()
    }
}
