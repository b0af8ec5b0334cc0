//! Round derivation and round-grouped projection of match history.
//!
//! `round_of` is the single canonical round-number formula, the one other
//! modules (`session`, `store`) call into rather than re-deriving. Grounded
//! on the score-grouped round advance in
//! `examples/Atsuyo64-ai-tournament/src/tournament_strategy.rs`'s
//! `SwissTournament`, generalized from "advance when a round's matches all
//! finish" to a pure function of match index.

use crate::model::{MatchRecord, Verdict};

/// Round number for a given 1-based `match_number`, in a name set of size
/// `n`: `floor((match_number - 1) / max(1, n)) + 1`.
///
/// A pure function — any stored `round_number` is a cache of this.
pub fn round_of(match_number: u32, n: usize) -> u32 {
    let divisor = n.max(1) as u32;
    (match_number - 1) / divisor + 1
}

/// The outcome of one bracket entry, derived from a [`MatchRecord`]'s verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The left item won.
    LeftWin,
    /// The right item won.
    RightWin,
    /// Both items were accepted.
    Both,
    /// Neither item was accepted.
    Neither,
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Left => Outcome::LeftWin,
            Verdict::Right => Outcome::RightWin,
            Verdict::Both => Outcome::Both,
            Verdict::Neither => Outcome::Neither,
        }
    }
}

/// One row of the round-grouped bracket view.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketEntry {
    /// The match's canonical id: its `match_number`.
    pub id: u32,
    /// The round this match belongs to.
    pub round: u32,
    /// Display name of the left item.
    pub left_name: String,
    /// Display name of the right item.
    pub right_name: String,
    /// The resolved outcome.
    pub outcome: Outcome,
}

/// Pure projection of a session's match history into a round-grouped,
/// UI-facing view. Has no state of its own and performs no I/O.
pub struct BracketProjection;

impl BracketProjection {
    /// Project `history` (for a name set of size `n`) into bracket entries.
    pub fn project(history: &[MatchRecord], n: usize) -> Vec<BracketEntry> {
        history
            .iter()
            .map(|record| BracketEntry {
                id: record.match_number,
                round: round_of(record.match_number, n),
                left_name: record.left.name.clone(),
                right_name: record.right.name.clone(),
                outcome: record.verdict.into(),
            })
            .collect()
    }

    /// Group `history`'s bracket entries by round, in ascending round order.
    pub fn project_by_round(history: &[MatchRecord], n: usize) -> Vec<(u32, Vec<BracketEntry>)> {
        let mut rounds: Vec<(u32, Vec<BracketEntry>)> = Vec::new();
        for entry in Self::project(history, n) {
            match rounds.last_mut() {
                Some((round, entries)) if *round == entry.round => entries.push(entry),
                _ => rounds.push((entry.round, vec![entry])),
            }
        }
        rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NameItem;

    fn record(match_number: u32, verdict: Verdict) -> MatchRecord {
        MatchRecord {
            left: NameItem::new("a", "Alpha"),
            right: NameItem::new("b", "Beta"),
            winner: None,
            loser: None,
            verdict,
            match_number,
            round_number: round_of(match_number, 3),
            timestamp: 0,
        }
    }

    #[test]
    fn round_of_matches_the_canonical_formula() {
        assert_eq!(round_of(1, 3), 1);
        assert_eq!(round_of(3, 3), 1);
        assert_eq!(round_of(4, 3), 2);
        assert_eq!(round_of(1, 0), 1); // n clamped to 1
    }

    #[test]
    fn project_maps_verdict_to_outcome() {
        let history = vec![record(1, Verdict::Left), record(2, Verdict::Both)];
        let projected = BracketProjection::project(&history, 3);
        assert_eq!(projected[0].outcome, Outcome::LeftWin);
        assert_eq!(projected[1].outcome, Outcome::Both);
    }

    #[test]
    fn project_by_round_groups_consecutive_same_round_entries() {
        let history = vec![
            record(1, Verdict::Left),
            record(2, Verdict::Right),
            record(3, Verdict::Both),
            record(4, Verdict::Neither),
        ];
        let grouped = BracketProjection::project_by_round(&history, 3);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, 1);
        assert_eq!(grouped[0].1.len(), 3);
        assert_eq!(grouped[1].0, 2);
        assert_eq!(grouped[1].1.len(), 1);
    }
}
