//! Shared predicates and buffers for the integration tests

#![allow(dead_code)]

use spanscan::{Comparer, Strategy};

/// Element of a guarded buffer; poisoned elements sit outside the window
/// under test and must never reach a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub value: u32,
    pub poisoned: bool,
}

/// Number of poisoned slots on each side of a guarded buffer
pub const GUARD: usize = 3;

/// `values` flanked by poisoned slots carrying `poison` as their value.
pub fn guarded(values: &[u32], poison: u32) -> Vec<Slot> {
    let guard = Slot {
        value: poison,
        poisoned: true,
    };
    let mut slots = vec![guard; GUARD];
    slots.extend(values.iter().map(|&value| Slot {
        value,
        poisoned: false,
    }));
    slots.extend(std::iter::repeat_n(guard, GUARD));
    slots
}

/// The unpoisoned window of a buffer built by [`guarded`].
pub fn window(slots: &[Slot]) -> &[Slot] {
    &slots[GUARD..slots.len() - GUARD]
}

/// Explicit comparer that counts its calls and panics on poisoned slots.
#[derive(Debug, Default)]
pub struct GuardedEq {
    pub calls: usize,
}

impl Comparer<Slot, u32> for GuardedEq {
    fn equals(&mut self, source: &Slot, value: &u32) -> bool {
        assert!(!source.poisoned, "predicate touched a guard slot");
        self.calls += 1;
        source.value == *value
    }

    fn strategy(&self) -> Strategy {
        Strategy::Explicit
    }
}

/// Explicit comparer over `u32` that counts calls and records each argument
/// pair as `(source, value)`.
#[derive(Debug, Default)]
pub struct Recording {
    pub pairs: Vec<(u32, u32)>,
}

impl Recording {
    pub fn calls(&self) -> usize {
        self.pairs.len()
    }
}

impl Comparer<u32, u32> for Recording {
    fn equals(&mut self, source: &u32, value: &u32) -> bool {
        self.pairs.push((*source, *value));
        source == value
    }

    fn strategy(&self) -> Strategy {
        Strategy::Explicit
    }
}

/// Reproducible pseudo-random bytes over a small alphabet.
pub fn sample_bytes(len: usize, alphabet: u8) -> Vec<u8> {
    (0..len)
        .map(|i| ((i * 7919 + 13) % alphabet as usize) as u8)
        .collect()
}
