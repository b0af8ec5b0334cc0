//! The engine's typed error taxonomy.
//!
//! This engine sits at a library boundary where an embedder needs to match
//! on a closed set of recoverable vs. fatal conditions, so the public type
//! here is a `thiserror`-derived enum rather than a blanket `anyhow::Error`.
//! `anyhow` is still kept as a dependency and re-exported from the crate
//! root, for embedders that want it for their own glue around the engine.

use thiserror::Error;

/// The engine's error taxonomy.
///
/// `TooFewNames` and `CorruptSnapshot` are raised synchronously from
/// constructors. `PersistenceUnavailable` and `RemoteUnavailable` are
/// logged and retried, never surfaced as a hard failure of the call that
/// triggered them. `Corrupt` is fatal: once latched,
/// [`crate::session::TournamentSession`] rejects all further operations
/// until `Reset`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// A session or sorter was constructed with fewer than two names.
    #[error("a tournament requires at least two names, got {count}")]
    TooFewNames {
        /// The number of names actually supplied.
        count: usize,
    },

    /// A duplicate id was supplied in the input name set.
    #[error("duplicate name id in input: {id}")]
    DuplicateName {
        /// The id that appeared more than once.
        id: String,
    },

    /// A loaded [`crate::model::SessionSnapshot`] failed its restoration
    /// invariants.
    #[error("stored session snapshot is corrupt: {reason}")]
    CorruptSnapshot {
        /// Human-readable description of which invariant failed.
        reason: String,
    },

    /// A [`crate::ports::KeyValueStore`] write failed.
    ///
    /// Logged and retried on the next change; never fatal.
    #[error("persistence write failed for key {key}: {reason}")]
    PersistenceUnavailable {
        /// The storage key the write targeted.
        key: String,
        /// The underlying failure description.
        reason: String,
    },

    /// A [`crate::ports::RemoteTournamentStore`] call failed.
    ///
    /// Logged and treated as best-effort; never fatal.
    #[error("remote store call failed: {reason}")]
    RemoteUnavailable {
        /// The underlying failure description.
        reason: String,
    },

    /// An internal invariant was violated at runtime.
    ///
    /// Fatal: the session latches into a state that rejects all further
    /// input until `Reset`.
    #[error("internal invariant violated: {reason}")]
    Corrupt {
        /// Which invariant or condition was violated.
        reason: String,
    },
}

/// Convenience alias for engine operations that can fail with [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
