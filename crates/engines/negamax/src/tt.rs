use std::collections::HashMap;

use gyroad_core::Action;

use crate::eval::WIN_BOUND;

/// How a stored value relates to the true score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Fail-high: the true score is at least `value`.
    Lower,
    /// Fail-low: the true score is at most `value`.
    Upper,
}

#[derive(Debug, Clone)]
pub struct TtEntry {
    pub depth: u8,
    pub value: i32,
    pub bound: Bound,
    pub best: Option<Action>,
}

/// Win scores are stored as distance from the storing node rather than from
/// the root, so an entry stays valid at any ply it is found again.
pub fn value_to_tt(value: i32, ply: u32) -> i32 {
    let ply = ply as i32;
    if value >= WIN_BOUND {
        value + ply
    } else if value <= -WIN_BOUND {
        value - ply
    } else {
        value
    }
}

/// Inverse of [`value_to_tt`] for a node at `ply`.
pub fn value_from_tt(value: i32, ply: u32) -> i32 {
    let ply = ply as i32;
    if value >= WIN_BOUND {
        value - ply
    } else if value <= -WIN_BOUND {
        value + ply
    } else {
        value
    }
}

/// Zobrist-keyed cache of searched positions.
#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    capacity: usize,
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        self.entries.get(&key)
    }

    /// Keep the deeper of the old and new entry. New keys are dropped once
    /// the table is full.
    pub fn store(&mut self, key: u64, entry: TtEntry) {
        match self.entries.get_mut(&key) {
            Some(old) => {
                if entry.depth >= old.depth {
                    *old = entry;
                }
            }
            None => {
                if self.entries.len() < self.capacity {
                    self.entries.insert(key, entry);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
