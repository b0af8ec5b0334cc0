//! Adaptive pair selection wrapping [`PreferenceSorter`].
//!
//! Shaped after `examples/Atsuyo64-ai-tournament/src/tournament_scheduler.rs`'s
//! `TournamentScheduler<S>`, which wraps a `TournamentStrategy` and exposes
//! a single "what's next" entry point over resource-constrained process
//! matches. Here the wrapped strategy is always adaptive pairwise
//! selection rather than a pluggable bracket format, and "resources" are
//! rating proximity and comparison counts instead of CPU/RAM.

use std::collections::HashMap;

use tracing::trace;

use crate::model::{rating_or_default, MatchRecord, NameId, Pair, Ratings};
use crate::sorter::PreferenceSorter;

/// Wraps a [`PreferenceSorter`] with an information-gain-vs-proximity
/// pair selector.
#[derive(Debug, Clone)]
pub struct MatchScheduler {
    sorter: PreferenceSorter,
}

impl MatchScheduler {
    /// Wrap an already-constructed sorter.
    pub fn new(sorter: PreferenceSorter) -> Self {
        Self { sorter }
    }

    /// Borrow the wrapped sorter.
    pub fn sorter(&self) -> &PreferenceSorter {
        &self.sorter
    }

    /// Mutably borrow the wrapped sorter — used by
    /// [`crate::session::TournamentSession`] to record preferences and
    /// perform undo.
    pub fn sorter_mut(&mut self) -> &mut PreferenceSorter {
        &mut self.sorter
    }

    /// Pick the next match, or `None` if the tournament is complete.
    ///
    /// For each unresolved pair `(a, b)` at or beyond the cursor, computes
    /// `score = |rating_a - rating_b| - 50 * (1/(1+cmp_a) + 1/(1+cmp_b))`
    /// and picks the minimum, ties broken toward the earlier canonical
    /// index. A small rating gap maximizes information per vote; the
    /// uncertainty bonus pulls toward under-compared names.
    pub fn next_match(&mut self, ratings: &Ratings, comparison_counts: &HashMap<NameId, u32>) -> Option<Pair> {
        if self.sorter.total_pairs() == 0 {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for idx in self.sorter.cursor()..self.sorter.total_pairs() {
            if self.sorter.is_resolved(idx) {
                continue;
            }
            let (a, b) = self.sorter.pair_at(idx).expect("index in range").clone();

            let rating_a = rating_or_default(ratings, &a).rating;
            let rating_b = rating_or_default(ratings, &b).rating;
            let cmp_a = *comparison_counts.get(&a).unwrap_or(&0) as f64;
            let cmp_b = *comparison_counts.get(&b).unwrap_or(&0) as f64;

            let score =
                (rating_a - rating_b).abs() - 50.0 * (1.0 / (1.0 + cmp_a) + 1.0 / (1.0 + cmp_b));

            best = match best {
                Some((_, best_score)) if score >= best_score => best,
                _ => Some((idx, score)),
            };
        }

        let chosen_index = match best {
            Some((idx, score)) => {
                trace!(idx, score, "adaptive scheduler picked pair");
                idx
            }
            None => {
                return self.sorter.next_pair().cloned();
            }
        };

        self.sorter.set_cursor(chosen_index);
        self.sorter.pair_at(chosen_index).cloned()
    }
}

/// Compute `{id -> number of match records in which id appeared as winner
/// or loser}` from a session's history, for use as scheduler input.
/// `Both`/`Neither` verdicts contribute to both ids via
/// `left`/`right` instead of `winner`/`loser`.
pub fn comparison_counts(history: &[MatchRecord]) -> HashMap<NameId, u32> {
    let mut counts = HashMap::new();
    for record in history {
        *counts.entry(record.left.id.clone()).or_insert(0) += 1;
        *counts.entry(record.right.id.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn ids(names: &[&str]) -> Vec<NameId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn rating(r: f64) -> Rating {
        Rating {
            rating: r,
            wins: 0,
            losses: 0,
        }
    }

    #[test]
    fn adaptive_selection_matches_scenario_6() {
        let sorter = PreferenceSorter::new(&ids(&["A", "B", "C"])).unwrap();
        let mut scheduler = MatchScheduler::new(sorter);

        let mut ratings = Ratings::new();
        ratings.insert("A".into(), rating(1500.0));
        ratings.insert("B".into(), rating(1500.0));
        ratings.insert("C".into(), rating(1800.0));

        let mut counts = HashMap::new();
        counts.insert("A".to_string(), 0);
        counts.insert("B".to_string(), 0);
        counts.insert("C".to_string(), 5);

        let chosen = scheduler.next_match(&ratings, &counts).unwrap();
        assert_eq!(chosen, ("A".to_string(), "B".to_string()));
    }

    #[test]
    fn next_match_returns_none_once_all_pairs_resolved() {
        let sorter = PreferenceSorter::new(&ids(&["A", "B"])).unwrap();
        let mut scheduler = MatchScheduler::new(sorter);
        scheduler.sorter_mut().add_preference("A", "B", 1);

        let ratings = Ratings::new();
        let counts = HashMap::new();
        assert_eq!(scheduler.next_match(&ratings, &counts), None);
    }

    #[test]
    fn comparison_counts_counts_both_sides_for_every_record() {
        use crate::model::{NameItem, Verdict};
        let record = MatchRecord {
            left: NameItem::new("A", "A"),
            right: NameItem::new("B", "B"),
            winner: None,
            loser: None,
            verdict: Verdict::Both,
            match_number: 1,
            round_number: 1,
            timestamp: 0,
        };
        let counts = comparison_counts(&[record]);
        assert_eq!(counts.get("A"), Some(&1));
        assert_eq!(counts.get("B"), Some(&1));
    }
}
