//! # spanscan: Comparator-Driven Search over Slices
//!
//! This crate provides generic search and comparison algorithms over
//! contiguous buffers, where the searched elements and the targets may be of
//! different types and equality between them may be asymmetric.
//!
//! ## Key Features
//!
//! - **Comparator Resolution**: explicit predicates, a bitwise fast path for
//!   bit-comparable types, and either side's `PartialEq`, in that order
//! - **Unrolled Scans**: forward/backward search in blocks of 8 and 4
//! - **Multi-Target Search**: first/last element equal to any, or to none, of
//!   a target set
//! - **Subsequence Search**: forward and backward, plus non-overlapping counts
//! - **Sequence Comparison**: element-wise equality with a byte-range fast path
//! - **Exactly-Once Predicates**: each inspected element is compared once, so
//!   stateful predicates observe a documented number of calls
//! - **Bounds-Checked Views**: [`Span`] / [`SpanMut`] windows that fail instead
//!   of clamping
//!
//! ## Quick Start
//!
//! ```rust
//! use spanscan::{SpanSearch, SpanSearchExt, SearchConfig, source_first, value_first};
//!
//! // Default comparer, resolved from the element types
//! let data = [10u32, 20, 30, 20, 10];
//! assert_eq!(data.index_of(&20), Some(1));
//! assert_eq!(data.last_index_of(&20), Some(3));
//! assert_eq!(data.index_of_any(&[30, 10]), Some(0));
//! assert_eq!(data.index_of_any_except(&[10, 20]), Some(2));
//!
//! // Subsequences
//! assert_eq!(b"banana".index_of_subsequence(b"ana"), Some(1));
//! assert_eq!(b"banana".last_index_of_subsequence(b"ana"), Some(3));
//!
//! // Mixed element types through PartialEq
//! let owned = vec![String::from("x"), String::from("y")];
//! assert_eq!(owned.index_of(&"y"), Some(1));
//!
//! // Explicit predicates, in either argument order
//! let tens = data.index_of_with(&3, source_first(|s: &u32, v: &u32| s / 10 == *v));
//! assert_eq!(tens, Some(2));
//! let tens = data.last_index_of_with(&1, value_first(|v: &u32, s: &u32| s / 10 == *v));
//! assert_eq!(tens, Some(4));
//!
//! // A configured searcher
//! let search = SpanSearch::with_config(SearchConfig::new().with_byte_scan_min_len(64)).unwrap();
//! assert!(search.sequence_equal(&data, &[10u32, 20, 30, 20, 10]));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod compare;
pub mod config;
pub mod error;
pub mod search;
pub mod span;

// Re-export core types
pub use compare::{
    Bitwise, Comparer, Flipped, GenericEquality, InvocationOrder, Resolved, SourceEquality,
    SourceFirst, SpanEq, Strategy, ValueEquality, ValueFirst, source_first, value_first,
};
pub use config::{Config, SearchConfig, ValidationError};
pub use error::{Result, SpanError};
pub use search::{SpanSearch, SpanSearchExt, to_sentinel};
pub use span::{BitComparable, Span, SpanMut};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op beyond logging)
pub fn init() {
    log::debug!("Initializing spanscan v{}", VERSION);
}
