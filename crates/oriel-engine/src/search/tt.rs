//! Transposition table: cached score bounds and best actions per position.
//!
//! The table is private to one driver invocation and written from a single
//! call stack, so a plain map suffices; its payoff is reuse across the
//! sibling root searches of one multi-PV pass.

use std::collections::HashMap;

use oriel_core::{Action, StateKey};

/// Bound type stored in a TT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact.
    Exact,
    /// The stored score is a lower bound (failed high).
    LowerBound,
    /// The stored score is an upper bound (failed low).
    UpperBound,
}

/// A cached search result for one position.
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    /// Score in the AI side's frame.
    pub score: i32,
    /// Remaining depth the entry was searched to.
    pub depth: u8,
    /// How the score relates to the true value.
    pub bound: Bound,
    /// Best action found, if the node completed with one.
    pub best_action: Option<Action>,
}

/// Key-addressed cache of [`TtEntry`] values.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<StateKey, TtEntry>,
}

impl TranspositionTable {
    /// Create an empty table.
    pub fn new() -> TranspositionTable {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Probe the table for a position.
    pub fn probe(&self, key: StateKey) -> Option<TtEntry> {
        self.entries.get(&key).copied()
    }

    /// Store an entry for `key`.
    ///
    /// An existing entry of greater or equal remaining depth is kept in
    /// preference to the new one.
    pub fn store(&mut self, key: StateKey, entry: TtEntry) {
        match self.entries.get(&key) {
            Some(existing) if existing.depth >= entry.depth => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Number of cached positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
