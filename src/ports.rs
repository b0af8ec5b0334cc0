//! External collaborators the engine is handed rather than constructing
//! itself.
//!
//! One trait per external responsibility, implemented by the embedder and
//! handed in — each port here is a trait the engine only calls through,
//! never implements for production use.

use crate::model::{NameId, Ratings};

/// Authority on an item catalog's visibility and ownership.
///
/// Out of scope for this crate: the catalog's storage, identity/login, and
/// network transport are all external to the engine.
pub trait CatalogSource {
    /// Which mode the catalog is being fetched for.
    fn fetch(&self, user: &str, mode: CatalogMode) -> (Vec<crate::model::NameItem>, Vec<NameId>);

    /// Flip an item's hidden flag.
    fn toggle_visibility(&self, id: &str);

    /// Remove an item from the catalog entirely.
    fn delete(&self, id: &str);
}

/// Which surface a [`CatalogSource::fetch`] call is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    /// Items are being fetched to seed a tournament.
    Tournament,
    /// Items are being fetched for a profile/management view.
    Profile,
}

/// Best-effort remote mirror of ratings and selections.
///
/// Failures are logged and never fatal — the engine treats every call as
/// fire-and-forget (see [`crate::error::EngineError::RemoteUnavailable`]).
pub trait RemoteTournamentStore {
    /// Mirror the current ratings map for `user`.
    fn save_ratings(&self, user: &str, ratings: &Ratings) -> Result<(), String>;

    /// Mirror the current selection for `user` under the given tournament id.
    fn save_selections(&self, user: &str, names: &[NameId], tournament_id: &str)
        -> Result<(), String>;
}

/// Synchronous keyed storage backing [`crate::store::SessionStore`] and
/// [`crate::selection::SelectionManager`].
///
/// Implementations must persist durably and return the last successfully
/// written value on `get` — reads never block on a pending debounced write.
pub trait KeyValueStore {
    /// Fetch the raw JSON value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` (already-serialized JSON) under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    /// Remove whatever is stored under `key`.
    fn remove(&self, key: &str);
}

/// Wall-clock access, required for `timestamp` fields and debounce windows.
///
/// Kept as a port rather than calling `std::time` directly so tests can
/// supply a deterministic fake — see [`crate::testkit::FixedClock`].
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// The system wall clock, backed by [`std::time::SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Non-blocking user-visible messages. Optional — the engine never requires
/// one to function.
pub trait Notifier {
    /// Show a message to the user at the given severity.
    fn show(&self, message: &str, severity: Severity);
}

/// Severity level for a [`Notifier::show`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, no action required.
    Info,
    /// Something recoverable went wrong; a retry affordance is appropriate.
    Warning,
    /// Something unrecoverable went wrong; a restart affordance is appropriate.
    Error,
}
