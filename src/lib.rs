//! # Preference Tournament
//!
//! An embeddable engine for ranking a user-chosen set of named items by
//! staging a sequence of pairwise comparisons. For each match the caller
//! supplies one of four verdicts — prefer-left, prefer-right, prefer-both,
//! prefer-neither — and the engine updates an Elo-style rating alongside a
//! preference-pair record consulted by an adaptive match scheduler, so that
//! the comparisons most likely to resolve ambiguity are asked first.
//!
//! The crate does not render anything: it is handed storage and clock
//! ports by the embedder and exposes a synchronous, single-threaded API.
//!
//! # Documentation Overview
//!
//! - For the state machine driving one ranking session — voting, undo,
//!   restoration, completion — see [`session`].
//! - For the two coupled per-match models, see [`elo`] (rating update) and
//!   [`sorter`] (pair bookkeeping and undo).
//! - For adaptive pair selection over the sorter, see [`scheduler`].
//! - For the candidate pool the user builds before starting a session, see
//!   [`selection`] and [`catalog`].
//! - For persisted state and its storage keys, see [`store`].
//! - For the external collaborators the engine expects to be handed, see
//!   [`ports`].
//! - For tunable constants (K-factor, debounce windows, vote cooldown), see
//!   [`configuration`].
//!
//! # Usage Example
//!
//! ```no_run
//! use preference_tournament::prelude::*;
//!
//! # fn run(store: &dyn KeyValueStore, clock: &dyn Clock) -> Result<(), EngineError> {
//! let items = vec![
//!     NameItem::new("a", "Alpha"),
//!     NameItem::new("b", "Beta"),
//!     NameItem::new("c", "Gamma"),
//! ];
//!
//! let config = Configuration::from_env();
//! let session_store = SessionStore::new(store);
//! let rater = EloRater::with_k_factor(config.k_factor());
//!
//! let mut session = TournamentSession::new(
//!     items,
//!     Ratings::new(),
//!     "alice",
//!     session_store,
//!     rater,
//!     config.vote_cooldown_ms(),
//!     config.session_debounce_ms(),
//!     clock,
//! )?
//! .with_completion_callback(|results| {
//!     for entry in results {
//!         println!("{}: {}", entry.name, entry.rating);
//!     }
//! });
//!
//! while session.state() == State::Active {
//!     session.vote(Verdict::Left, clock);
//! }
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

/// Re-exported for callers who want to match on glue-level errors the same
/// way the engine's internals do.
pub use anyhow;

pub mod bracket;
pub mod catalog;
pub mod configuration;
pub mod debounce;
pub mod elo;
pub mod error;
pub mod logging;
pub mod model;
pub mod ports;
pub mod scheduler;
pub mod selection;
pub mod session;
pub mod sorter;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

/// Commonly used types and traits for quick access.
///
/// ```rust
/// use preference_tournament::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bracket::{BracketEntry, BracketProjection, Outcome};
    pub use crate::catalog::{CatalogView, FilterConfig, SelectionFilter, VisibilityFilter};
    pub use crate::configuration::Configuration;
    pub use crate::elo::EloRater;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::model::{
        MatchRecord, NameId, NameItem, Pair, Preference, Rating, Ratings, SelectionSnapshot,
        SessionSnapshot, Verdict,
    };
    pub use crate::ports::{
        CatalogMode, CatalogSource, Clock, KeyValueStore, Notifier, RemoteTournamentStore, Severity,
    };
    pub use crate::scheduler::MatchScheduler;
    pub use crate::selection::SelectionManager;
    pub use crate::session::{Progress, ResultEntry, State, TournamentSession, VoteEvent};
    pub use crate::sorter::PreferenceSorter;
    pub use crate::store::SessionStore;
}
