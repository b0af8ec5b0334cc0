//! Candidate pool maintenance with debounced, deduplicated persistence.
//!
//! No direct counterpart elsewhere in this crate's lineage — the original
//! agent-evaluation tool has no notion of a user-curated pool, only a fixed
//! roster. Built plainly, reusing [`crate::debounce::Debouncer`] for the
//! write-coalescing half.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::debounce::Debouncer;
use crate::error::EngineError;
use crate::model::{NameId, SelectionSnapshot};
use crate::ports::{Clock, KeyValueStore, RemoteTournamentStore};

/// Build the storage key for a user's selection snapshot:
/// `tournament_selection_{user}`.
pub fn selection_key(user: &str) -> String {
    format!("tournament_selection_{user}")
}

/// Maintains the set of selected ids for one user, persisting a debounced
/// snapshot on every change.
pub struct SelectionManager<'a> {
    backing: &'a dyn KeyValueStore,
    key: String,
    user: String,
    selected: Vec<NameId>,
    debouncer: Debouncer<SelectionSnapshot>,
    last_written_hash: Option<String>,
    remote: Option<&'a dyn RemoteTournamentStore>,
}

impl<'a> SelectionManager<'a> {
    /// Construct a manager for `user`, rehydrating from `backing` if a
    /// prior snapshot exists.
    ///
    /// Cross-session reconciliation: the rehydrated selection is
    /// intersected with `visible_catalog` so ids no longer present are
    /// dropped silently.
    pub fn new(
        backing: &'a dyn KeyValueStore,
        user: &str,
        visible_catalog: &[NameId],
        debounce_ms: u64,
    ) -> Self {
        let key = selection_key(user);
        let visible: HashSet<&NameId> = visible_catalog.iter().collect();

        let selected = backing
            .get(&key)
            .and_then(|raw| serde_json::from_str::<SelectionSnapshot>(&raw).ok())
            .map(|snapshot| {
                snapshot
                    .into_iter()
                    .filter(|id| visible.contains(id))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            backing,
            key,
            user: user.to_string(),
            selected,
            debouncer: Debouncer::new(debounce_ms),
            last_written_hash: None,
            remote: None,
        }
    }

    /// Attach a best-effort remote mirror, called after every write that
    /// actually changes the stored selection.
    ///
    /// Failures are logged as [`EngineError::RemoteUnavailable`] and never
    /// propagated — the local selection remains the source of truth.
    pub fn with_remote_store(mut self, remote: &'a dyn RemoteTournamentStore) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Whether `id` is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|existing| existing == id)
    }

    /// Number of currently selected ids.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// The current selection, in insertion order.
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selected.clone()
    }

    /// Flip `id`'s membership in the selection.
    pub fn toggle(&mut self, id: &str, clock: &dyn Clock) {
        let desired = !self.is_selected(id);
        self.toggle_by_id(id, desired, clock);
    }

    /// Set `id`'s membership to exactly `desired`.
    pub fn toggle_by_id(&mut self, id: &str, desired: bool, clock: &dyn Clock) {
        let currently = self.is_selected(id);
        if currently == desired {
            return;
        }
        if desired {
            self.selected.push(id.to_string());
        } else {
            self.selected.retain(|existing| existing != id);
        }
        self.schedule_write(clock);
    }

    /// Replace the selection with all of `candidates`.
    pub fn select_all(&mut self, candidates: &[NameId], clock: &dyn Clock) {
        self.selected = candidates.to_vec();
        self.schedule_write(clock);
    }

    /// Empty the selection.
    pub fn clear(&mut self, clock: &dyn Clock) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.schedule_write(clock);
    }

    fn schedule_write(&mut self, clock: &dyn Clock) {
        self.debouncer.schedule(self.selected.clone(), clock.now_ms());
    }

    /// Flush a due debounced write, if any, deduplicating by content hash:
    /// skip the write if the hash is unchanged since the last one.
    pub fn poll(&mut self, clock: &dyn Clock) {
        if let Some(snapshot) = self.debouncer.poll(clock.now_ms()) {
            self.write(&snapshot);
        }
    }

    /// Force a final synchronous flush, ignoring the debounce window.
    ///
    /// Used on destruction; failures are swallowed.
    pub fn flush(&mut self) {
        if let Some(snapshot) = self.debouncer.flush() {
            self.write(&snapshot);
        }
    }

    fn write(&mut self, snapshot: &SelectionSnapshot) {
        let hash = content_hash(snapshot);
        if self.last_written_hash.as_deref() == Some(hash.as_str()) {
            debug!(key = %self.key, "selection snapshot unchanged, skipping write");
            return;
        }

        match serde_json::to_string(snapshot) {
            Ok(json) => {
                if let Err(reason) = self.backing.set(&self.key, &json) {
                    warn!(key = %self.key, reason, "selection snapshot write failed");
                    return;
                }
                self.last_written_hash = Some(hash);
                self.mirror_selection(snapshot);
            }
            Err(err) => warn!(key = %self.key, %err, "failed to serialize selection snapshot"),
        }
    }

    fn mirror_selection(&self, snapshot: &SelectionSnapshot) {
        let Some(remote) = self.remote else { return };
        if let Err(reason) = remote.save_selections(&self.user, snapshot, &self.key) {
            let err = EngineError::RemoteUnavailable { reason };
            warn!(key = %self.key, %err, "remote selection mirror failed");
        }
    }
}

/// Content hash used for write deduplication: sorted, comma-joined ids.
/// Reuses the same sort as [`crate::model::names_key`] but joins with `,`.
fn content_hash(snapshot: &SelectionSnapshot) -> String {
    let mut sorted = snapshot.clone();
    sorted.sort();
    sorted.join(",")
}
