//! A deliberately simple transposition table: a board-hash to cached
//! heuristic-value map. No depth, no best-move, no aging, no eviction, no
//! collision check — a hash collision silently returns the wrong cached
//! value. Unlike a full search-bound transposition table, this one only
//! ever caches leaf heuristic evaluations, so reusing it across depths and
//! branches is sound.

use std::collections::HashMap;

#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, i32>,
    hits: u64,
    misses: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, hash: u64) -> Option<i32> {
        match self.entries.get(&hash) {
            Some(&value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, hash: u64, value: i32) {
        self.entries.insert(hash, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit_tracks_stats() {
        let mut tt = TranspositionTable::new();
        assert_eq!(tt.get(1), None);
        tt.insert(1, 42);
        assert_eq!(tt.get(1), Some(42));
        assert_eq!(tt.hits(), 1);
        assert_eq!(tt.misses(), 1);
    }

    #[test]
    fn clear_resets_entries_and_stats() {
        let mut tt = TranspositionTable::new();
        tt.insert(1, 42);
        tt.get(1);
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.hits(), 0);
        assert_eq!(tt.misses(), 0);
    }
}
