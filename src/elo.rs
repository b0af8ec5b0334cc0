//! The Elo rating update.
//!
//! Pure and stateless: one function maps two ratings and an outcome to new
//! ratings and win/loss deltas. Cross-checked against the Elo
//! implementations scattered through the wider pack (e.g.
//! `other_examples/e479dc21_*_elo.rs.rs`, `other_examples/8201a3dc_*_elo.rs.rs`)
//! to confirm the standard logistic-expectation formulation is what's
//! wanted here.

use crate::model::{Rating, Verdict, DEFAULT_RATING};

/// Score assigned to each side for a given [`Verdict`].
fn scores(verdict: Verdict) -> (f64, f64) {
    match verdict {
        Verdict::Left => (1.0, 0.0),
        Verdict::Right => (0.0, 1.0),
        Verdict::Both | Verdict::Neither => (0.5, 0.5),
    }
}

/// Expected score for `a` against `b` under the standard logistic curve.
fn expected(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

/// Reject a non-finite rating by resetting it to the default rating.
fn sanitize(rating: f64) -> f64 {
    if rating.is_finite() {
        rating
    } else {
        DEFAULT_RATING
    }
}

/// Pure Elo update, fixed at K=32 by default; overridden via
/// [`EloRater::with_k_factor`] for callers that built one from
/// [`crate::configuration::Configuration`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EloRater {
    k_factor: f64,
}

impl EloRater {
    /// Build a rater with the default K=32.
    pub fn new() -> Self {
        Self { k_factor: 32.0 }
    }

    /// Build a rater with an explicit K-factor.
    pub fn with_k_factor(k_factor: f64) -> Self {
        Self { k_factor }
    }

    /// Update two ratings for one match outcome.
    ///
    /// Never fails: a non-finite input rating is clamped to 1500.0 before
    /// the update runs. Win/loss counters are incremented for
    /// `Left`/`Right` verdicts only; `Both`/`Neither` leave them unchanged.
    pub fn update(&self, a: Rating, b: Rating, verdict: Verdict) -> (Rating, Rating) {
        let ra = sanitize(a.rating);
        let rb = sanitize(b.rating);

        let (score_a, score_b) = scores(verdict);
        let expected_a = expected(ra, rb);
        let expected_b = 1.0 - expected_a;

        let new_a = ra + self.k_factor * (score_a - expected_a);
        let new_b = rb + self.k_factor * (score_b - expected_b);

        let (wins_a, losses_a, wins_b, losses_b) = match verdict {
            Verdict::Left => (a.wins + 1, a.losses, b.wins, b.losses + 1),
            Verdict::Right => (a.wins, a.losses + 1, b.wins + 1, b.losses),
            Verdict::Both | Verdict::Neither => (a.wins, a.losses, b.wins, b.losses),
        };

        (
            Rating {
                rating: new_a,
                wins: wins_a,
                losses: losses_a,
            },
            Rating {
                rating: new_b,
                wins: wins_b,
                losses: losses_b,
            },
        )
    }
}

impl Default for EloRater {
    fn default() -> Self {
        Self::new()
    }
}
