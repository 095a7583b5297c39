//! Integration tests for single-target scans

mod common;

use common::{GuardedEq, Recording, guarded, sample_bytes, window};
use spanscan::search::scan::{scan_backward, scan_forward};
use spanscan::{SearchConfig, SpanSearch, SpanSearchExt, source_first, value_first};

#[test]
fn test_forward_and_backward_scenario() {
    let buffer = [10u32, 20, 30, 20, 10];
    assert_eq!(buffer.index_of(&20), Some(1));
    assert_eq!(buffer.last_index_of(&20), Some(3));

    let mut cmp = Recording::default();
    assert_eq!(scan_forward(&buffer, &20, &mut cmp), Some(1));
    assert_eq!(scan_backward(&buffer, &20, &mut cmp), Some(3));
    assert_eq!(cmp.pairs, vec![(10, 20), (20, 20), (10, 20), (20, 20)]);
}

#[test]
fn test_empty_buffer_returns_none() {
    let empty: [u32; 0] = [];
    let mut cmp = Recording::default();
    assert_eq!(empty.index_of_with(&1, &mut cmp), None);
    assert_eq!(empty.last_index_of_with(&1, &mut cmp), None);
    assert_eq!(cmp.calls(), 0);
    assert_eq!(empty.index_of(&1), None);
}

#[test]
fn test_single_occurrence_found_both_ways() {
    for len in 1..70u32 {
        for k in 0..len {
            let mut buffer = vec![0u32; len as usize];
            buffer[k as usize] = 1;
            assert_eq!(buffer.index_of(&1), Some(k as usize));
            assert_eq!(buffer.last_index_of(&1), Some(k as usize));
        }
    }
}

#[test]
fn test_full_miss_calls_once_per_element() {
    for len in 0..100u32 {
        let buffer: Vec<u32> = (0..len).collect();

        let mut forward = Recording::default();
        assert_eq!(buffer.index_of_with(&u32::MAX, &mut forward), None);
        assert_eq!(forward.calls(), len as usize);
        let mut visited: Vec<u32> = forward.pairs.iter().map(|&(s, _)| s).collect();
        visited.sort_unstable();
        assert_eq!(visited, buffer);

        let mut backward = Recording::default();
        assert_eq!(buffer.last_index_of_with(&u32::MAX, &mut backward), None);
        assert_eq!(backward.calls(), len as usize);
    }
}

#[test]
fn test_guard_elements_never_touched() {
    for len in 0..40u32 {
        let values: Vec<u32> = (100..100 + len).collect();
        // Guards carry the target, so any escape would be observed as a hit.
        let slots = guarded(&values, 7);
        let inner = window(&slots);

        let mut cmp = GuardedEq::default();
        assert_eq!(inner.index_of_with(&7, &mut cmp), None);
        assert_eq!(inner.last_index_of_with(&7, &mut cmp), None);
        assert_eq!(cmp.calls, 2 * len as usize);
    }
}

#[test]
fn test_all_match_returns_extremes() {
    for len in 1..40usize {
        let buffer = vec![5u16; len];
        assert_eq!(buffer.index_of(&5), Some(0));
        assert_eq!(buffer.last_index_of(&5), Some(len - 1));
    }
}

#[test]
fn test_argument_order_is_observable() {
    let buffer = ['a', 'b', 'c'];
    let mut seen = Vec::new();
    let hit = buffer.index_of_with(
        &2u8,
        value_first(|v: &u8, s: &char| {
            seen.push((*v, *s));
            *s as u8 - b'a' == *v
        }),
    );
    assert_eq!(hit, Some(2));
    assert_eq!(seen, vec![(2, 'a'), (2, 'b'), (2, 'c')]);

    let mut seen = Vec::new();
    let hit = buffer.last_index_of_with(
        &0u8,
        source_first(|s: &char, v: &u8| {
            seen.push((*s, *v));
            *s as u8 - b'a' == *v
        }),
    );
    assert_eq!(hit, Some(0));
    assert_eq!(seen, vec![('c', 0), ('b', 0), ('a', 0)]);
}

#[test]
fn test_byte_fast_path_agrees_with_engine() {
    let data = sample_bytes(1000, 37);
    let fast = SpanSearch::with_config(SearchConfig::new().with_byte_scan_min_len(8)).unwrap();
    let slow =
        SpanSearch::with_config(SearchConfig::new().with_bitwise_fast_path(false)).unwrap();
    for len in [0usize, 5, 8, 31, 32, 33, 100, 1000] {
        let hay = &data[..len];
        for byte in 0..40u8 {
            let expected = hay.iter().position(|&b| b == byte);
            assert_eq!(fast.index_of(hay, &byte), expected);
            assert_eq!(slow.index_of(hay, &byte), expected);
            let expected = hay.iter().rposition(|&b| b == byte);
            assert_eq!(fast.last_index_of(hay, &byte), expected);
            assert_eq!(slow.last_index_of(hay, &byte), expected);
        }
    }
}

#[test]
fn test_signed_and_bool_bytes() {
    let signed: Vec<i8> = (-64..64).collect();
    assert_eq!(signed.index_of(&-1), Some(63));
    assert_eq!(signed.last_index_of(&-64), Some(0));

    let mut flags = vec![false; 64];
    flags[40] = true;
    assert_eq!(flags.index_of(&true), Some(40));
    assert_eq!(flags.last_index_of(&false), Some(63));
    assert_eq!(flags.count_of(&true), 1);
}

#[test]
#[should_panic(expected = "predicate failure")]
fn test_predicate_panic_propagates() {
    let buffer = [1u32, 2, 3];
    buffer.index_of_with(
        &3,
        source_first(|s: &u32, _: &u32| {
            if *s == 2 {
                panic!("predicate failure");
            }
            false
        }),
    );
}
