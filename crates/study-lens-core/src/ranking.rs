//! Insertion-ordered score accumulation with stable ranking.
//!
//! Subject classification, style recommendation, and keyword extraction all
//! pick winners the same way: highest score first, ties resolved in favour
//! of the key that entered the board first. [`ScoreBoard`] is the single
//! place that rule lives.

use std::collections::HashMap;
use std::hash::Hash;

/// Scores accumulated over one analysis pass.
///
/// A key enters the board the first time it receives a non-zero number of
/// points. Keys that never score are absent, so an empty board means no
/// signal fired.
#[derive(Debug, Clone)]
pub struct ScoreBoard<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for ScoreBoard<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> ScoreBoard<K> {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to `key`. Zero points leave the board untouched.
    pub fn add(&mut self, key: K, points: usize) {
        if points == 0 {
            return;
        }
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 += points;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, points));
        }
    }

    /// Current score for `key`, zero if it never scored.
    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Returns `true` if nothing has scored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys that scored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The first key to reach the maximum score.
    pub fn leader(&self) -> Option<&K> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key)
    }

    /// All entries by descending score, ties kept in insertion order.
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The first `n` keys of [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<K> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(key, _)| key)
            .collect()
    }
}
