//! The tournament session state machine.
//!
//! Grounded on `examples/Atsuyo64-ai-tournament/src/server.rs`'s
//! `Evaluator::evaluate` main loop shape — drive a scheduler until it has
//! nothing left, dispatch a callback on completion — recast from a
//! multi-process match runner into a single synchronous state machine that
//! owns its `MatchScheduler` outright, with no back-pointers up the
//! ownership tree.

use tracing::{info, instrument, trace, warn};

use crate::bracket::round_of;
use crate::debounce::Debouncer;
use crate::elo::EloRater;
use crate::error::EngineError;
use crate::model::{
    names_key, rating_or_default, MatchRecord, NameId, NameItem, Ratings, SessionSnapshot, Verdict,
};
use crate::ports::{Clock, RemoteTournamentStore};
use crate::scheduler::{comparison_counts, MatchScheduler};
use crate::sorter::PreferenceSorter;
use crate::store::SessionStore;

/// The session's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No name set has been committed yet.
    Uninitialized,
    /// Matches are being played.
    Active,
    /// The scheduler has no pair left and `current_match > total_matches`.
    Complete,
    /// An internal invariant was violated; rejects all further operations
    /// until `reset()`.
    Fatal,
}

/// One entry of the completion/current-results payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    /// Display name.
    pub name: String,
    /// Stable id.
    pub id: NameId,
    /// Final Elo rating.
    pub rating: f64,
    /// Outright wins.
    pub wins: u32,
    /// Outright losses.
    pub losses: u32,
}

/// Progress snapshot for UI observables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based index of the next match to be played.
    pub current_match: u32,
    /// Fixed total number of matches for this session.
    pub total_matches: u32,
    /// The round the next match belongs to.
    pub round_number: u32,
    /// `current_match / total_matches`, clamped to `[0.0, 1.0]`.
    pub percent: f64,
}

/// Per-vote observer payload.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteEvent {
    /// The match just resolved.
    pub left: NameId,
    /// The other side of the match just resolved.
    pub right: NameId,
    /// The verdict the user gave.
    pub verdict: Verdict,
    /// Ratings immediately after this vote's update.
    pub ratings_snapshot: Ratings,
    /// When the vote was accepted.
    pub timestamp: u64,
}

/// The central state machine orchestrating EloRater, PreferenceSorter
/// (via MatchScheduler), and SessionStore over one committed name set.
pub struct TournamentSession<'a> {
    state: State,
    items: Vec<NameItem>,
    ratings: Ratings,
    history: Vec<MatchRecord>,
    current_match: u32,
    total_matches: u32,
    round_number: u32,
    current_pair: Option<(NameId, NameId)>,
    user_name: String,
    names_key: String,
    rater: EloRater,
    scheduler: MatchScheduler,
    store: SessionStore<'a>,
    store_key: String,
    debouncer: Debouncer<SessionSnapshot>,
    vote_cooldown_ms: u64,
    last_vote_at_ms: Option<u64>,
    is_transitioning: bool,
    completion_callback: Option<Box<dyn FnMut(Vec<ResultEntry>) + 'a>>,
    completion_dispatched: bool,
    remote: Option<&'a dyn RemoteTournamentStore>,
}

impl<'a> TournamentSession<'a> {
    /// Construct a session over `items` (already filtered to visible and
    /// selected) for `user_name`, restoring from `store` if a compatible
    /// snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TooFewNames`] if `items.len() < 2`.
    #[instrument(skip(items, prior_ratings, store, clock))]
    pub fn new(
        items: Vec<NameItem>,
        prior_ratings: Ratings,
        user_name: impl Into<String>,
        store: SessionStore<'a>,
        rater: EloRater,
        vote_cooldown_ms: u64,
        session_debounce_ms: u64,
        clock: &dyn Clock,
    ) -> Result<Self, EngineError> {
        let user_name = user_name.into();
        if items.len() < 2 {
            return Err(EngineError::TooFewNames { count: items.len() });
        }

        let ids: Vec<NameId> = items.iter().map(|item| item.id.clone()).collect();
        let key = names_key(&ids);
        let store_key = crate::store::session_key(&user_name, &key);
        let total_matches = (ids.len() * (ids.len().saturating_sub(1)) / 2) as u32;

        let sorter = PreferenceSorter::new(&ids)?;
        let scheduler = MatchScheduler::new(sorter);

        let mut session = Self {
            state: State::Uninitialized,
            items,
            ratings: prior_ratings,
            history: Vec::new(),
            current_match: 1,
            total_matches,
            round_number: 1,
            current_pair: None,
            user_name,
            names_key: key,
            rater,
            scheduler,
            store,
            store_key,
            debouncer: Debouncer::new(session_debounce_ms),
            vote_cooldown_ms,
            last_vote_at_ms: None,
            is_transitioning: false,
            completion_callback: None,
            completion_dispatched: false,
            remote: None,
        };

        match session.store.load(&session.store_key) {
            Some(snapshot)
                if snapshot.names_key == session.names_key
                    && snapshot.user_name == session.user_name =>
            {
                if let Err(err) = session.restore(snapshot) {
                    warn!(user = %session.user_name, %err, "stored session snapshot failed validation, starting fresh");
                }
            }
            Some(_) => {
                info!(user = %session.user_name, "stored snapshot identity diverged, starting fresh");
            }
            None => {}
        }

        session.advance(clock);
        Ok(session)
    }

    /// Attach a best-effort remote mirror of ratings, called after every
    /// accepted vote and undo.
    ///
    /// Failures are logged as [`EngineError::RemoteUnavailable`] and never
    /// propagated — the local session remains the source of truth.
    pub fn with_remote_store(mut self, remote: &'a dyn RemoteTournamentStore) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Register a completion callback, invoked exactly once with the final
    /// ranked results the moment this session transitions to `Complete`.
    ///
    /// If the session is already `Complete` at registration time (e.g. it
    /// was restored from a snapshot whose last match was the final one),
    /// the callback fires immediately.
    pub fn with_completion_callback(mut self, callback: impl FnMut(Vec<ResultEntry>) + 'a) -> Self {
        self.completion_callback = Some(Box::new(callback));
        self.dispatch_completion_if_due();
        self
    }

    fn dispatch_completion_if_due(&mut self) {
        if self.state == State::Complete && !self.completion_dispatched {
            if let Some(callback) = self.completion_callback.as_mut() {
                let results = self.current_results_inner();
                callback(results);
                self.completion_dispatched = true;
            }
        }
    }

    fn current_results_inner(&self) -> Vec<ResultEntry> {
        let mut entries: Vec<ResultEntry> = self
            .items
            .iter()
            .map(|item| {
                let rating = rating_or_default(&self.ratings, &item.id);
                ResultEntry {
                    name: item.name.clone(),
                    id: item.id.clone(),
                    rating: rating.rating,
                    wins: rating.wins,
                    losses: rating.losses,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        entries
    }

    /// Replay a compatible snapshot's history to rebuild ratings and sorter
    /// state.
    ///
    /// The full sequence is validated before anything is applied, so a
    /// snapshot that fails validation leaves the session untouched — the
    /// caller discards it and starts fresh instead of construction
    /// aborting partway through a replay.
    fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), EngineError> {
        for (expected, record) in (1u32..).zip(snapshot.match_history.iter()) {
            if record.match_number != expected {
                return Err(EngineError::CorruptSnapshot {
                    reason: format!(
                        "match_number {} out of sequence at position {expected}",
                        record.match_number
                    ),
                });
            }
        }

        for record in &snapshot.match_history {
            self.apply_replay(record);
        }
        self.history = snapshot.match_history;
        self.current_match = self.history.len() as u32 + 1;
        self.round_number = round_of(self.current_match, self.items.len());
        Ok(())
    }

    fn apply_replay(&mut self, record: &MatchRecord) {
        let left = rating_or_default(&self.ratings, &record.left.id);
        let right = rating_or_default(&self.ratings, &record.right.id);
        let (new_left, new_right) = self.rater.update(left, right, record.verdict);
        self.ratings.insert(record.left.id.clone(), new_left);
        self.ratings.insert(record.right.id.clone(), new_right);

        match record.verdict {
            Verdict::Left | Verdict::Right => {
                self.scheduler
                    .sorter_mut()
                    .add_preference(&record.left.id, &record.right.id, 1);
            }
            Verdict::Both | Verdict::Neither => {
                self.scheduler
                    .sorter_mut()
                    .add_preference(&record.left.id, &record.right.id, 0);
                self.scheduler
                    .sorter_mut()
                    .add_preference(&record.right.id, &record.left.id, 0);
            }
        }
    }

    /// Ask the scheduler for the next pair; transition to `Complete` if none
    /// remains.
    fn advance(&mut self, clock: &dyn Clock) {
        if self.state == State::Fatal {
            return;
        }

        let counts = comparison_counts(&self.history);
        self.current_pair = self.scheduler.next_match(&self.ratings, &counts);

        if self.current_pair.is_none() && self.current_match > self.total_matches {
            self.state = State::Complete;
            trace!(user = %self.user_name, "session complete");
            self.checkpoint(clock);
            self.dispatch_completion_if_due();
        } else if self.current_pair.is_none() {
            warn!(
                user = %self.user_name,
                current_match = self.current_match,
                total_matches = self.total_matches,
                "scheduler exhausted before total_matches reached"
            );
            self.state = State::Fatal;
        } else {
            self.state = State::Active;
            self.checkpoint(clock);
        }
    }

    fn checkpoint(&mut self, clock: &dyn Clock) {
        let snapshot = SessionSnapshot {
            match_history: self.history.clone(),
            current_round: self.round_number,
            current_match: self.current_match,
            total_matches: self.total_matches,
            user_name: self.user_name.clone(),
            last_updated: clock.now_ms(),
            names_key: self.names_key.clone(),
        };
        self.debouncer.schedule(snapshot, clock.now_ms());
    }

    /// Flush a due debounced session write, if any.
    ///
    /// The embedder's cooperative loop is expected to call this
    /// periodically, the same way [`crate::selection::SelectionManager::poll`]
    /// is driven.
    pub fn poll(&mut self, clock: &dyn Clock) {
        if let Some(snapshot) = self.debouncer.poll(clock.now_ms()) {
            self.persist(&snapshot);
        }
    }

    /// Force a final synchronous flush of any pending session write,
    /// ignoring the debounce window. Intended for use on shutdown.
    pub fn flush(&mut self) {
        if let Some(snapshot) = self.debouncer.flush() {
            self.persist(&snapshot);
        }
    }

    fn persist(&self, snapshot: &SessionSnapshot) {
        if let Err(err) = self.store.save(&self.store_key, snapshot) {
            warn!(user = %self.user_name, %err, "session checkpoint failed");
        }
    }

    fn mirror_ratings(&self) {
        let Some(remote) = self.remote else { return };
        if let Err(reason) = remote.save_ratings(&self.user_name, &self.ratings) {
            let err = EngineError::RemoteUnavailable { reason };
            warn!(user = %self.user_name, %err, "remote rating mirror failed");
        }
    }

    fn item(&self, id: &str) -> &NameItem {
        self.items
            .iter()
            .find(|item| item.id == id)
            .expect("scheduler only proposes ids from the committed name set")
    }

    /// Accept a verdict for the currently proposed pair.
    ///
    /// A no-op outside `Active`, while `is_transitioning`, or within the
    /// configured cooldown of the previous accepted vote — a stale UI
    /// double-tap is simply dropped.
    #[instrument(skip(self, clock), fields(user = %self.user_name))]
    pub fn vote(&mut self, verdict: Verdict, clock: &dyn Clock) -> Option<VoteEvent> {
        if self.state != State::Active || self.is_transitioning {
            return None;
        }
        let now = clock.now_ms();
        if let Some(last) = self.last_vote_at_ms {
            if now.saturating_sub(last) < self.vote_cooldown_ms {
                return None;
            }
        }
        let (left_id, right_id) = self.current_pair.clone()?;

        self.is_transitioning = true;
        self.last_vote_at_ms = Some(now);

        let left_rating = rating_or_default(&self.ratings, &left_id);
        let right_rating = rating_or_default(&self.ratings, &right_id);
        let (new_left, new_right) = self.rater.update(left_rating, right_rating, verdict);
        self.ratings.insert(left_id.clone(), new_left);
        self.ratings.insert(right_id.clone(), new_right);

        let (winner, loser) = match verdict {
            Verdict::Left => (Some(left_id.clone()), Some(right_id.clone())),
            Verdict::Right => (Some(right_id.clone()), Some(left_id.clone())),
            Verdict::Both | Verdict::Neither => (None, None),
        };

        match verdict {
            Verdict::Left | Verdict::Right => {
                self.scheduler.sorter_mut().add_preference(&left_id, &right_id, 1);
            }
            Verdict::Both | Verdict::Neither => {
                self.scheduler.sorter_mut().add_preference(&left_id, &right_id, 0);
                self.scheduler.sorter_mut().add_preference(&right_id, &left_id, 0);
            }
        }

        let record = MatchRecord {
            left: self.item(&left_id).clone(),
            right: self.item(&right_id).clone(),
            winner,
            loser,
            verdict,
            match_number: self.current_match,
            round_number: self.round_number,
            timestamp: now,
        };
        self.history.push(record);
        self.current_match += 1;

        self.round_number = round_of(self.current_match, self.items.len());
        self.mirror_ratings();
        self.advance(clock);

        self.is_transitioning = false;

        Some(VoteEvent {
            left: left_id,
            right: right_id,
            verdict,
            ratings_snapshot: self.ratings.clone(),
            timestamp: now,
        })
    }

    /// Undo the most recent vote. A no-op if the history is empty or the
    /// session is not currently `Active`.
    #[instrument(skip(self, clock), fields(user = %self.user_name))]
    pub fn undo(&mut self, clock: &dyn Clock) {
        if self.state != State::Active {
            return;
        }
        let Some(popped) = self.history.pop() else {
            return;
        };

        self.scheduler.sorter_mut().undo_last();
        self.current_match = popped.match_number;
        self.round_number = round_of(self.current_match, self.items.len());

        self.ratings.clear();
        for record in &self.history {
            let left = rating_or_default(&self.ratings, &record.left.id);
            let right = rating_or_default(&self.ratings, &record.right.id);
            let (new_left, new_right) = self.rater.update(left, right, record.verdict);
            self.ratings.insert(record.left.id.clone(), new_left);
            self.ratings.insert(record.right.id.clone(), new_right);
        }

        self.mirror_ratings();
        self.advance(clock);
    }

    /// Discard this session's snapshot and transition back to
    /// `Uninitialized`.
    pub fn reset(&mut self) {
        self.store.clear(&self.store_key);
        self.debouncer.cancel();
        self.state = State::Uninitialized;
        self.history.clear();
        self.ratings.clear();
        self.current_match = 1;
        self.round_number = 1;
        self.current_pair = None;
        self.completion_dispatched = false;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The pair currently awaiting a verdict, if any.
    pub fn current_pair(&self) -> Option<&(NameId, NameId)> {
        self.current_pair.as_ref()
    }

    /// Progress snapshot.
    pub fn progress(&self) -> Progress {
        let percent = if self.total_matches == 0 {
            1.0
        } else {
            (f64::from(self.current_match.saturating_sub(1)) / f64::from(self.total_matches))
                .clamp(0.0, 1.0)
        };
        Progress {
            current_match: self.current_match,
            total_matches: self.total_matches,
            round_number: self.round_number,
            percent,
        }
    }

    /// Ranked results: `{name, id, rating, wins, losses}` sorted by rating
    /// descending, ties broken by ascending id.
    pub fn current_results(&self) -> Vec<ResultEntry> {
        self.current_results_inner()
    }

    /// The full match history so far, in ascending `match_number` order.
    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{FixedClock, InMemoryStore};

    fn items(names: &[&str]) -> Vec<NameItem> {
        names
            .iter()
            .map(|n| NameItem::new(n.to_lowercase(), *n))
            .collect()
    }

    #[test]
    fn minimal_tournament_matches_scenario_1() {
        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let mut session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            300,
            0,
            &clock,
        )
        .unwrap();

        assert_eq!(session.state(), State::Active);
        session.vote(Verdict::Left, &clock);

        assert_eq!(session.state(), State::Complete);
        let results = session.current_results();
        assert_eq!(results[0].id, "a");
        assert!((results[0].rating - 1516.0).abs() < 0.01);
        assert!((results[1].rating - 1484.0).abs() < 0.01);
        assert_eq!(results[0].wins, 1);
        assert_eq!(results[1].losses, 1);
    }

    #[test]
    fn undo_restores_prior_ratings_and_cursor_matches_scenario_3() {
        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let mut session = TournamentSession::new(
            items(&["A", "B", "C"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap();

        session.vote(Verdict::Left, &clock);
        clock.advance(1);
        session.vote(Verdict::Left, &clock);
        clock.advance(1);
        session.undo(&clock);

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_results().len(), 3);

        let pair = session.current_pair().unwrap().clone();
        assert_ne!(pair, ("a".to_string(), "b".to_string()));
    }

    #[test]
    fn vote_cooldown_drops_rapid_second_vote() {
        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let mut session = TournamentSession::new(
            items(&["A", "B", "C"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            300,
            0,
            &clock,
        )
        .unwrap();

        assert!(session.vote(Verdict::Left, &clock).is_some());
        assert!(session.vote(Verdict::Left, &clock).is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn restoration_reproduces_pre_destruction_state_matches_scenario_4() {
        let backing = InMemoryStore::new();
        let clock = FixedClock::new(0);
        {
            let store = SessionStore::new(&backing);
            let mut session = TournamentSession::new(
                items(&["A", "B", "C", "D"]),
                Ratings::new(),
                "alice",
                store,
                EloRater::new(),
                0,
                0,
                &clock,
            )
            .unwrap();
            session.vote(Verdict::Left, &clock);
            clock.advance(1);
            session.vote(Verdict::Right, &clock);
            clock.advance(1);
            session.vote(Verdict::Both, &clock);
            session.flush();
        }

        let store = SessionStore::new(&backing);
        let restored = TournamentSession::new(
            items(&["A", "B", "C", "D"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap();

        assert_eq!(restored.history().len(), 3);
        assert_eq!(restored.current_match, 4);
    }

    #[test]
    fn too_few_names_rejected() {
        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let err = TournamentSession::new(
            items(&["A"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            300,
            0,
            &clock,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::TooFewNames { count: 1 }));
    }

    #[test]
    fn completion_callback_fires_exactly_once() {
        use std::cell::RefCell;

        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let fired = RefCell::new(0);

        let mut session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap()
        .with_completion_callback(|_results| *fired.borrow_mut() += 1);

        session.vote(Verdict::Left, &clock);
        assert_eq!(session.state(), State::Complete);
        assert_eq!(*fired.borrow(), 1);

        session.dispatch_completion_if_due();
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn corrupt_snapshot_is_discarded_and_session_starts_fresh() {
        let backing = InMemoryStore::new();
        let clock = FixedClock::new(0);
        let key = crate::store::session_key("alice", &names_key(["a", "b"]));
        let corrupt = SessionSnapshot {
            match_history: vec![MatchRecord {
                left: NameItem::new("a", "A"),
                right: NameItem::new("b", "B"),
                winner: Some("a".to_string()),
                loser: Some("b".to_string()),
                verdict: Verdict::Left,
                match_number: 2, // out of sequence: the first record must be 1
                round_number: 1,
                timestamp: 0,
            }],
            current_round: 1,
            current_match: 2,
            total_matches: 1,
            user_name: "alice".to_string(),
            last_updated: 0,
            names_key: names_key(["a", "b"]),
        };
        backing
            .set(&key, &serde_json::to_string(&corrupt).unwrap())
            .unwrap();

        let store = SessionStore::new(&backing);
        let session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap();

        assert_eq!(session.state(), State::Active);
        assert!(session.history().is_empty());
    }

    #[test]
    fn identity_drift_on_user_name_discards_snapshot() {
        let backing = InMemoryStore::new();
        let clock = FixedClock::new(0);
        let key = crate::store::session_key("alice", &names_key(["a", "b"]));
        let foreign = SessionSnapshot {
            match_history: vec![],
            current_round: 1,
            current_match: 1,
            total_matches: 1,
            user_name: "mallory".to_string(),
            last_updated: 0,
            names_key: names_key(["a", "b"]),
        };
        backing
            .set(&key, &serde_json::to_string(&foreign).unwrap())
            .unwrap();

        let store = SessionStore::new(&backing);
        let session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap();

        assert_eq!(session.state(), State::Active);
        assert!(session.history().is_empty());
    }

    #[test]
    fn undo_is_a_noop_once_the_session_is_complete() {
        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let mut session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap();

        session.vote(Verdict::Left, &clock);
        assert_eq!(session.state(), State::Complete);

        session.undo(&clock);
        assert_eq!(session.state(), State::Complete);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn session_writes_are_debounced_until_polled_or_flushed() {
        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let key = crate::store::session_key("alice", &names_key(["a", "b"]));
        let mut session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            1000,
            &clock,
        )
        .unwrap();

        assert!(backing.get(&key).is_none());

        session.vote(Verdict::Left, &clock);
        session.poll(&clock);
        assert!(backing.get(&key).is_none());

        clock.advance(1000);
        session.poll(&clock);
        assert!(backing.get(&key).is_some());
    }

    #[test]
    fn remote_store_mirrors_ratings_after_each_vote() {
        use crate::testkit::RecordingRemote;

        let backing = InMemoryStore::new();
        let store = SessionStore::new(&backing);
        let clock = FixedClock::new(0);
        let remote = RecordingRemote::new();
        let mut session = TournamentSession::new(
            items(&["A", "B"]),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap()
        .with_remote_store(&remote);

        session.vote(Verdict::Left, &clock);
        assert_eq!(remote.ratings_call_count(), 1);
    }
}
