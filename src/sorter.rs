//! Pair enumeration, preference recording, and undo over a fixed name set.
//!
//! The pending-pair cursor and round-grouped undo log here are modeled
//! after the bookkeeping conventions of bracket/pairing code such as
//! `other_examples/ab5c91d4_*_tournament.rs.rs` and the Squire pairing
//! family (`squire_lib-src-pairings*.rs`), generalized to a flat
//! all-pairs universe instead of round-by-round bracket advancement.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::model::{NameId, Pair, Preference};

/// One undo-grouped batch of preference entries, recorded against the pair
/// they resolved.
#[derive(Debug, Clone)]
struct LogGroup {
    pair_index: usize,
    entries: Vec<Preference>,
    prior_cursor: usize,
}

/// Enumerates the canonical pair universe for a name set, records
/// preferences against it, and tracks the cursor undo needs to stay
/// coherent with.
///
/// Constructed once from an ordered id sequence; the pair list
/// (`i < j` iteration over that order) never changes afterwards.
#[derive(Debug, Clone)]
pub struct PreferenceSorter {
    pairs: Vec<Pair>,
    index_of: HashMap<(NameId, NameId), usize>,
    resolved: Vec<bool>,
    cursor: usize,
    log: Vec<LogGroup>,
}

impl PreferenceSorter {
    /// Build a sorter over `ids` in their given order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TooFewNames`] if fewer than two ids are
    /// supplied, and [`EngineError::DuplicateName`] if any id repeats.
    pub fn new(ids: &[NameId]) -> Result<Self, EngineError> {
        if ids.len() < 2 {
            return Err(EngineError::TooFewNames { count: ids.len() });
        }

        let mut seen = std::collections::HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(EngineError::DuplicateName { id: id.clone() });
            }
        }

        let mut pairs = Vec::with_capacity(ids.len() * (ids.len() - 1) / 2);
        let mut index_of = HashMap::new();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let idx = pairs.len();
                let pair = (ids[i].clone(), ids[j].clone());
                index_of.insert((pair.0.clone(), pair.1.clone()), idx);
                index_of.insert((pair.1.clone(), pair.0.clone()), idx);
                pairs.push(pair);
            }
        }

        let resolved = vec![false; pairs.len()];

        Ok(Self {
            pairs,
            index_of,
            resolved,
            cursor: 0,
            log: Vec::new(),
        })
    }

    /// Total number of pairs in the canonical universe (`n * (n - 1) / 2`).
    pub fn total_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// The pair at canonical index `index`, if any.
    pub fn pair_at(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// Whether the pair at canonical index `index` already has a preference
    /// recorded in either direction.
    pub fn is_resolved(&self, index: usize) -> bool {
        self.resolved.get(index).copied().unwrap_or(true)
    }

    /// The cursor's current canonical index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to an arbitrary canonical index.
    ///
    /// Used by [`crate::scheduler::MatchScheduler`] when it adaptively picks
    /// a pair other than the one at the current cursor, so that a
    /// subsequent `add_preference`/`undo_last` pair stays coherent.
    pub(crate) fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.pairs.len());
    }

    /// The first unresolved pair at or after the cursor, without advancing it.
    pub fn next_pair(&self) -> Option<&Pair> {
        (self.cursor..self.pairs.len())
            .find(|&i| !self.resolved[i])
            .and_then(|i| self.pairs.get(i))
    }

    fn first_unresolved_from(&self, start: usize) -> usize {
        (start..self.pairs.len())
            .find(|&i| !self.resolved[i])
            .unwrap_or(self.pairs.len())
    }

    /// Record one preference entry for the pair `(a, b)`.
    ///
    /// Callers record a `Both`/`Neither` verdict as two calls with
    /// `weight = 0` (once for each orientation); two consecutive calls
    /// against the same pair are coalesced into a single undo group.
    /// `weight = 1` means `a` is preferred over `b`.
    ///
    /// After the call, the cursor advances to the first unresolved pair at
    /// or beyond its current position.
    pub fn add_preference(&mut self, a: &str, b: &str, weight: u8) {
        let pair_index = match self.index_of.get(&(a.to_string(), b.to_string())) {
            Some(&idx) => idx,
            None => return, // unknown pair; nothing to record against
        };

        let entry = Preference {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        };

        let continuing = self
            .log
            .last()
            .map(|g| g.pair_index == pair_index && self.resolved[pair_index])
            .unwrap_or(false);

        if continuing {
            self.log.last_mut().unwrap().entries.push(entry);
            return;
        }

        let prior_cursor = self.cursor;
        self.resolved[pair_index] = true;
        self.log.push(LogGroup {
            pair_index,
            entries: vec![entry],
            prior_cursor,
        });
        self.cursor = self.first_unresolved_from(self.cursor);
    }

    /// Undo the most recently recorded verdict's preference entries.
    ///
    /// A no-op if no preferences have been recorded yet.
    pub fn undo_last(&mut self) {
        if let Some(group) = self.log.pop() {
            self.resolved[group.pair_index] = false;
            self.cursor = group.prior_cursor;
        }
    }

    /// Whether any preference has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
