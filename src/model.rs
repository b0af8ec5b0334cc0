//! Data types shared across the engine: names, ratings, preferences, match
//! records, and the two persisted snapshot shapes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identity for an item entered into a tournament.
pub type NameId = String;

/// An item that can be ranked against its peers.
///
/// Identity for equality and hashing purposes is [`NameItem::id`] alone —
/// two items with the same id are the same item even if `name` or
/// `description` differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameItem {
    /// Stable, caller-assigned identity.
    pub id: NameId,
    /// Display name, shown to the user.
    pub name: String,
    /// Optional free-text description, searched by [`crate::catalog`].
    pub description: Option<String>,
    /// Optional pronunciation hint.
    pub pronunciation: Option<String>,
    /// Whether this item is hidden from non-admin catalog views.
    pub is_hidden: bool,
    /// Optional baseline rating to seed with, instead of the default 1500.0.
    pub rating: Option<f64>,
}

impl PartialEq for NameItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for NameItem {}

impl NameItem {
    /// Build a minimal item with no description, pronunciation, or hidden flag.
    pub fn new(id: impl Into<NameId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            pronunciation: None,
            is_hidden: false,
            rating: None,
        }
    }
}

/// Default Elo rating assigned to an item on first reference.
pub const DEFAULT_RATING: f64 = 1500.0;

/// One item's Elo state: rating plus win/loss counters.
///
/// Created lazily with [`Rating::default`] the first time an id is
/// referenced by [`crate::elo::EloRater`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Current Elo rating.
    pub rating: f64,
    /// Number of matches this id won outright (`Left`/`Right` verdicts only).
    pub wins: u32,
    /// Number of matches this id lost outright.
    pub losses: u32,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            wins: 0,
            losses: 0,
        }
    }
}

/// Map of name id to its current [`Rating`], with lazy default creation.
pub type Ratings = HashMap<NameId, Rating>;

/// Look up a rating, returning the default triple if the id has not been
/// referenced yet.
pub fn rating_or_default(ratings: &Ratings, id: &str) -> Rating {
    ratings.get(id).copied().unwrap_or_default()
}

/// The user's verdict for a single match.
///
/// `Both` and `Neither` score identically in [`crate::elo::EloRater`] (both
/// map to the 0.5/0.5 expected-score table) but are kept as distinct tags
/// here so [`crate::bracket::BracketProjection`] can render them
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The left item is preferred.
    Left,
    /// The right item is preferred.
    Right,
    /// Both items are acceptable — no preference between them.
    Both,
    /// Neither item is acceptable — no preference between them.
    Neither,
}

/// An unordered pair of distinct name ids considered for comparison.
///
/// Ordering between `(a, b)` and `(b, a)` is preserved as given; callers
/// that need canonical pair identity should compare both orientations.
pub type Pair = (NameId, NameId);

/// A single recorded preference entry.
///
/// `weight` is `1` for an outright preference (`a` over `b`) and `0` for a
/// no-preference entry, two of which are recorded per `Both`/`Neither`
/// verdict for symmetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    /// The preferred (or, for weight 0, first-named) item.
    pub a: NameId,
    /// The other item.
    pub b: NameId,
    /// `1` if `a` is preferred over `b`, `0` for a no-preference entry.
    pub weight: u8,
}

/// An immutable record of one resolved match.
///
/// Appended once by [`crate::session::TournamentSession::vote`] and never
/// mutated afterwards; undo truncates the tail of the history rather than
/// editing a record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The left-hand item shown to the user.
    pub left: NameItem,
    /// The right-hand item shown to the user.
    pub right: NameItem,
    /// The winning id, or `None` for `Both`/`Neither`.
    pub winner: Option<NameId>,
    /// The losing id, or `None` for `Both`/`Neither`.
    pub loser: Option<NameId>,
    /// The verdict the user gave.
    pub verdict: Verdict,
    /// 1-based position of this match in the session.
    pub match_number: u32,
    /// Round this match belongs to, derived from [`crate::bracket::round_of`].
    pub round_number: u32,
    /// Milliseconds since the Unix epoch, from the [`crate::ports::Clock`] port.
    pub timestamp: u64,
}

/// Persisted, per-`(user, name-set)` session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Every resolved match so far, in ascending `match_number` order.
    pub match_history: Vec<MatchRecord>,
    /// The round the next match (if any) belongs to.
    pub current_round: u32,
    /// 1-based index of the next match to be played; `current_match >
    /// total_matches` once the session is complete.
    pub current_match: u32,
    /// Fixed at construction: `n * (n - 1) / 2`.
    pub total_matches: u32,
    /// The identity this session was created under; used to detect
    /// identity drift on restoration.
    pub user_name: String,
    /// Milliseconds since the Unix epoch of the last successful write.
    pub last_updated: u64,
    /// Sorted, `-`-joined concatenation of input ids — the session's
    /// content key.
    pub names_key: String,
}

/// Persisted list of selected ids for a user.
pub type SelectionSnapshot = Vec<NameId>;

/// Build the canonical `names_key` for a name set: ids sorted and joined by
/// `-`. Used both as the snapshot's content key and as half of the
/// `SessionStore` storage key.
pub fn names_key(ids: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let mut sorted: Vec<String> = ids.into_iter().map(|s| s.as_ref().to_string()).collect();
    sorted.sort();
    sorted.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_key_is_order_independent() {
        assert_eq!(names_key(["b", "a", "c"]), names_key(["c", "b", "a"]));
        assert_eq!(names_key(["a", "b", "c"]), "a-b-c");
    }

    #[test]
    fn rating_default_is_lazy() {
        let ratings: Ratings = HashMap::new();
        assert_eq!(rating_or_default(&ratings, "unknown"), Rating::default());
    }

    #[test]
    fn name_item_equality_is_identity_only() {
        let mut a = NameItem::new("1", "Alpha");
        let b = NameItem::new("1", "Beta");
        assert_eq!(a, b);
        a.name = "Gamma".into();
        assert_eq!(a, b);
    }
}
