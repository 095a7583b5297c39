//! Default comparer resolution for element pairs.

use super::{Bitwise, Comparer, Strategy, ValueEquality};
use crate::config::SearchConfig;
use crate::span::BitComparable;

/// Element pairs that can be compared without an explicit predicate.
///
/// `S: SpanEq<V>` names the comparer used when a source buffer of `S` is
/// searched for values of `V`. Identical bit-comparable types resolve to
/// [`Bitwise`] through a blanket impl; other pairs are declared with
/// [`span_eq!`](crate::span_eq), which applies the remaining rules in
/// priority order.
///
/// Value equality is built in for `f32`, `f64`, `String`, `&str`, `Vec<T>`,
/// `Option<T>`, float arrays and tuples of up to four elements. Reference
/// and `Box` elements have no default resolution, since a downstream crate
/// may make `&Local` or `Box<Local>` bit-comparable; search them through the
/// `_with` methods and an explicit comparer such as
/// [`ValueEquality`](super::ValueEquality).
pub trait SpanEq<V = Self>: Sized {
    /// Comparer produced by resolution
    type Comparer: Comparer<Self, V>;

    /// Build the comparer for this pair.
    fn resolve(config: &SearchConfig) -> Self::Comparer;
}

impl<T: BitComparable> SpanEq<T> for T {
    type Comparer = Bitwise;

    #[inline]
    fn resolve(config: &SearchConfig) -> Bitwise {
        Bitwise::new(*config)
    }
}

/// Rule a pair resolves to under the default configuration.
pub fn resolved_strategy<S: SpanEq<V>, V>() -> Strategy {
    S::resolve(&SearchConfig::DEFAULT).strategy()
}

/// Compile-time probing used by [`span_eq!`](crate::span_eq).
///
/// Method resolution tries receivers in autoref order, so a call on
/// `&&&Probe<S, V>` selects the first applicable impl among `&&Probe`
/// (value equality), `&Probe` (source equality) and `Probe` (generic). Only
/// meaningful for concrete types; generic code should name a comparer.
#[doc(hidden)]
pub mod probe {
    use super::super::equality::generic_equals;
    use super::super::{InvocationOrder, Resolved, Strategy};
    use std::marker::PhantomData;

    /// Zero-sized stand-in for an element pair.
    pub struct Probe<S, V>(PhantomData<fn(&S, &V)>);

    impl<S, V> Probe<S, V> {
        /// Create a probe for the pair `(S, V)`.
        pub const fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<S, V> Default for Probe<S, V> {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Rule 3: `V: PartialEq<S>`.
    pub trait ValueEqualityKind {
        /// Source element type
        type Source;
        /// Value element type
        type Value;
        /// The comparer for this rule
        fn resolved(&self) -> Resolved<Self::Source, Self::Value>;
    }

    impl<S, V: PartialEq<S>> ValueEqualityKind for &&Probe<S, V> {
        type Source = S;
        type Value = V;

        fn resolved(&self) -> Resolved<S, V> {
            Resolved::new(Strategy::ValueEquality, InvocationOrder::ValueFirst, |s, v| v == s)
        }
    }

    /// Rule 4: `S: PartialEq<V>`.
    pub trait SourceEqualityKind {
        /// Source element type
        type Source;
        /// Value element type
        type Value;
        /// The comparer for this rule
        fn resolved(&self) -> Resolved<Self::Source, Self::Value>;
    }

    impl<S: PartialEq<V>, V> SourceEqualityKind for &Probe<S, V> {
        type Source = S;
        type Value = V;

        fn resolved(&self) -> Resolved<S, V> {
            Resolved::new(Strategy::SourceEquality, InvocationOrder::SourceFirst, |s, v| s == v)
        }
    }

    /// Rule 5: source-typed equality after a runtime type check.
    pub trait GenericEqualityKind {
        /// Source element type
        type Source;
        /// Value element type
        type Value;
        /// The comparer for this rule
        fn resolved(&self) -> Resolved<Self::Source, Self::Value>;
    }

    impl<S: PartialEq + 'static, V: 'static> GenericEqualityKind for Probe<S, V> {
        type Source = S;
        type Value = V;

        fn resolved(&self) -> Resolved<S, V> {
            Resolved::new(Strategy::Generic, InvocationOrder::SourceFirst, generic_equals::<S, V>)
        }
    }
}

/// Implement [`SpanEq`](crate::compare::SpanEq) for concrete element pairs.
///
/// `span_eq!(A, B)` declares each type comparable with itself;
/// `span_eq!(S => V)` declares a source/value pair. The comparer is picked at
/// compile time: `V: PartialEq<S>` first, then `S: PartialEq<V>`, then the
/// type-checked generic fallback.
///
/// Bit-comparable types already resolve to the bitwise comparer and must not
/// be declared here.
///
/// ```rust
/// use spanscan::{SpanSearchExt, span_eq};
/// use spanscan::compare::{Strategy, resolved_strategy};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(i32);
/// struct Reading(i32);
///
/// impl PartialEq<Reading> for Celsius {
///     fn eq(&self, other: &Reading) -> bool {
///         self.0 == other.0
///     }
/// }
///
/// span_eq!(Celsius);
/// span_eq!(Celsius => Reading);
///
/// assert_eq!(resolved_strategy::<Celsius, Celsius>(), Strategy::ValueEquality);
/// assert_eq!(resolved_strategy::<Celsius, Reading>(), Strategy::SourceEquality);
///
/// let temps = [Celsius(18), Celsius(21), Celsius(25)];
/// assert_eq!(temps.index_of(&Reading(21)), Some(1));
/// ```
#[macro_export]
macro_rules! span_eq {
    (@pair $s:ty => $v:ty) => {
        impl $crate::compare::SpanEq<$v> for $s {
            type Comparer = $crate::compare::Resolved<$s, $v>;

            fn resolve(_config: &$crate::config::SearchConfig) -> Self::Comparer {
                #[allow(unused_imports)]
                use $crate::compare::probe::{
                    GenericEqualityKind as _, SourceEqualityKind as _, ValueEqualityKind as _,
                };
                (&&&$crate::compare::probe::Probe::<$s, $v>::new()).resolved()
            }
        }
    };
    ($s:ty => $v:ty) => {
        $crate::span_eq!(@pair $s => $v);
    };
    ($($t:ty),+ $(,)?) => {
        $( $crate::span_eq!(@pair $t => $t); )+
    };
}

span_eq!(f32, f64, String);

impl<'a> SpanEq<&'a str> for String {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

impl<'a> SpanEq<String> for &'a str {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

impl<'a, 'b> SpanEq<&'b str> for &'a str {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

impl<T: PartialEq> SpanEq for Vec<T> {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

impl<T: PartialEq> SpanEq for Option<T> {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

impl<const N: usize> SpanEq for [f32; N] {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

impl<const N: usize> SpanEq for [f64; N] {
    type Comparer = ValueEquality;

    fn resolve(_config: &SearchConfig) -> ValueEquality {
        ValueEquality
    }
}

macro_rules! impl_tuple_span_eq {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name: PartialEq),+> SpanEq for ($($name,)+) {
                type Comparer = ValueEquality;

                fn resolve(_config: &SearchConfig) -> ValueEquality {
                    ValueEquality
                }
            }
        )+
    };
}

impl_tuple_span_eq!((A), (A, B), (A, B, C), (A, B, C, D));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::InvocationOrder;

    #[derive(Debug, PartialEq)]
    struct Meters(u32);

    struct Feet(u32);

    struct Tag(u8);

    impl PartialEq<Feet> for Meters {
        fn eq(&self, other: &Feet) -> bool {
            self.0 * 3 == other.0
        }
    }

    span_eq!(Meters => Feet);
    span_eq!(Feet => Meters);
    span_eq!(Meters => Tag);

    #[test]
    fn test_bit_comparable_resolves_bitwise() {
        assert_eq!(resolved_strategy::<u8, u8>(), Strategy::Bitwise);
        assert_eq!(resolved_strategy::<i64, i64>(), Strategy::Bitwise);
        assert_eq!(resolved_strategy::<char, char>(), Strategy::Bitwise);
        assert_eq!(resolved_strategy::<[u16; 4], [u16; 4]>(), Strategy::Bitwise);
    }

    #[test]
    fn test_floats_are_not_bitwise() {
        assert_eq!(resolved_strategy::<f32, f32>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<f64, f64>(), Strategy::ValueEquality);

        let mut cmp = <f64 as SpanEq>::resolve(&SearchConfig::DEFAULT);
        assert!(!cmp.equals(&f64::NAN, &f64::NAN));
        assert!(cmp.equals(&0.0, &-0.0));
    }

    #[test]
    fn test_string_pairs() {
        assert_eq!(resolved_strategy::<String, String>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<String, &str>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<&str, String>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<&str, &str>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<Vec<u8>, Vec<u8>>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<Option<i32>, Option<i32>>(), Strategy::ValueEquality);
    }

    #[test]
    fn test_tuple_and_float_array_pairs() {
        assert_eq!(resolved_strategy::<(u8, String), (u8, String)>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<(i32,), (i32,)>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<[f32; 2], [f32; 2]>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<[f64; 3], [f64; 3]>(), Strategy::ValueEquality);
        assert_eq!(resolved_strategy::<[u8; 4], [u8; 4]>(), Strategy::Bitwise);

        let mut cmp = <[f32; 2] as SpanEq>::resolve(&SearchConfig::DEFAULT);
        assert!(Comparer::<[f32; 2], [f32; 2]>::equals(&mut cmp, &[0.0, 1.5], &[-0.0, 1.5]));
        assert!(!Comparer::<[f32; 2], [f32; 2]>::equals(
            &mut cmp,
            &[f32::NAN, 1.5],
            &[f32::NAN, 1.5]
        ));
    }

    #[test]
    fn test_macro_priority_order() {
        // Only Meters: PartialEq<Feet> exists.
        let mut source_side = <Meters as SpanEq<Feet>>::resolve(&SearchConfig::DEFAULT);
        assert_eq!(source_side.strategy(), Strategy::SourceEquality);
        assert_eq!(source_side.order(), InvocationOrder::SourceFirst);
        assert!(source_side.equals(&Meters(2), &Feet(6)));

        // Reversed roles: the value type now owns the equality.
        let mut value_side = <Feet as SpanEq<Meters>>::resolve(&SearchConfig::DEFAULT);
        assert_eq!(value_side.strategy(), Strategy::ValueEquality);
        assert_eq!(value_side.order(), InvocationOrder::ValueFirst);
        assert!(value_side.equals(&Feet(6), &Meters(2)));
        assert!(!value_side.equals(&Feet(7), &Meters(2)));
    }

    #[test]
    fn test_macro_generic_fallback() {
        let mut cmp = <Meters as SpanEq<Tag>>::resolve(&SearchConfig::DEFAULT);
        assert_eq!(cmp.strategy(), Strategy::Generic);
        assert!(!cmp.equals(&Meters(1), &Tag(1)));
    }
}
