//! Keyed persistence for session snapshots.
//!
//! `SessionStore` wraps a [`KeyValueStore`] port with a fixed JSON shape and
//! key naming scheme, plus malformed-value handling on load: a value that
//! doesn't parse as the expected object shape is treated as absent rather
//! than propagated as an error.

use tracing::{debug, warn};

use crate::error::EngineError;
use crate::model::SessionSnapshot;
use crate::ports::KeyValueStore;

/// Build the storage key for a user's session over a given `names_key`:
/// `tournament-{user}-{names_key}`.
pub fn session_key(user: &str, names_key: &str) -> String {
    format!("tournament-{user}-{names_key}")
}

/// Persistent, per-`(user, name-set)` snapshot storage.
///
/// Reads are synchronous and always return the last successfully written
/// value; writes are the caller's responsibility to debounce (see
/// [`crate::debounce::Debouncer`] and [`crate::session::TournamentSession`]).
pub struct SessionStore<'a> {
    backing: &'a dyn KeyValueStore,
}

impl<'a> SessionStore<'a> {
    /// Wrap a backing [`KeyValueStore`].
    pub fn new(backing: &'a dyn KeyValueStore) -> Self {
        Self { backing }
    }

    /// Load the snapshot stored under `key`, if any.
    ///
    /// A value that fails to parse as an object — in particular, a bare
    /// JSON array, a legacy shape some callers may still have on disk — is
    /// treated as absent rather than propagated as an error: the caller
    /// initializes a fresh session instead.
    pub fn load(&self, key: &str) -> Option<SessionSnapshot> {
        let raw = self.backing.get(key)?;

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(_)) => {
                warn!(key, "stored session snapshot is a bare array, discarding");
                None
            }
            Ok(value) => match serde_json::from_value::<SessionSnapshot>(value) {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    warn!(key, %err, "stored session snapshot failed to deserialize, discarding");
                    None
                }
            },
            Err(err) => {
                warn!(key, %err, "stored session snapshot is not valid JSON, discarding");
                None
            }
        }
    }

    /// Persist `snapshot` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PersistenceUnavailable`] if the backing store
    /// rejects the write. This is never fatal: callers log it and retry on
    /// the next debounced write.
    pub fn save(&self, key: &str, snapshot: &SessionSnapshot) -> Result<(), EngineError> {
        let json = serde_json::to_string(snapshot).map_err(|err| EngineError::PersistenceUnavailable {
            key: key.to_string(),
            reason: err.to_string(),
        })?;

        self.backing.set(key, &json).map_err(|reason| {
            EngineError::PersistenceUnavailable {
                key: key.to_string(),
                reason,
            }
        })?;
        debug!(key, "session snapshot saved");
        Ok(())
    }

    /// Remove whatever snapshot is stored under `key`.
    pub fn clear(&self, key: &str) {
        self.backing.remove(key);
    }
}
