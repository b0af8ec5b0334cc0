//! In-memory test doubles for the engine's ports.
//!
//! Minimal, deterministic stand-ins for the traits real embedders implement,
//! kept in the crate so every module's unit tests can share them instead of
//! redefining ad hoc fakes per file.

#![cfg(any(test, feature = "testkit"))]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::{NameId, Ratings};
use crate::ports::{Clock, KeyValueStore, RemoteTournamentStore};

/// A [`KeyValueStore`] backed by an in-process map.
///
/// Every value ever `set` survives for the lifetime of the store; there is
/// no simulated I/O failure mode here (see [`FailingStore`] for that).
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Build an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.data.lock().unwrap().remove(key);
    }
}

/// A [`KeyValueStore`] whose `set` calls always fail, for exercising the
/// [`crate::error::EngineError::PersistenceUnavailable`] path.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("simulated write failure".to_string())
    }

    fn remove(&self, _key: &str) {}
}

/// A [`Clock`] that only advances when told to, for deterministic debounce
/// and cooldown tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: RefCell<u64>,
}

impl FixedClock {
    /// Build a clock starting at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms: RefCell::new(now_ms),
        }
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        *self.now_ms.borrow_mut() += delta_ms;
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, now_ms: u64) {
        *self.now_ms.borrow_mut() = now_ms;
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        *self.now_ms.borrow()
    }
}

/// A [`RemoteTournamentStore`] that records every call it receives, for
/// asserting the engine mirrors ratings/selections best-effort without
/// standing up a real remote.
#[derive(Debug, Default)]
pub struct RecordingRemote {
    ratings_calls: Mutex<Vec<(String, Ratings)>>,
    selection_calls: Mutex<Vec<(String, Vec<NameId>, String)>>,
}

impl RecordingRemote {
    /// Build a remote with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times [`RemoteTournamentStore::save_ratings`] was called.
    pub fn ratings_call_count(&self) -> usize {
        self.ratings_calls.lock().unwrap().len()
    }

    /// How many times [`RemoteTournamentStore::save_selections`] was called.
    pub fn selection_call_count(&self) -> usize {
        self.selection_calls.lock().unwrap().len()
    }
}

impl RemoteTournamentStore for RecordingRemote {
    fn save_ratings(&self, user: &str, ratings: &Ratings) -> Result<(), String> {
        self.ratings_calls
            .lock()
            .unwrap()
            .push((user.to_string(), ratings.clone()));
        Ok(())
    }

    fn save_selections(
        &self,
        user: &str,
        names: &[NameId],
        tournament_id: &str,
    ) -> Result<(), String> {
        self.selection_calls
            .lock()
            .unwrap()
            .push((user.to_string(), names.to_vec(), tournament_id.to_string()));
        Ok(())
    }
}
