use preference_tournament::prelude::*;
use preference_tournament::testkit::{FixedClock, InMemoryStore};

fn items(names: &[&str]) -> Vec<NameItem> {
    names
        .iter()
        .map(|n| NameItem::new(n.to_lowercase(), *n))
        .collect()
}

/// Spec scenario 1: minimal two-name tournament.
#[test]
fn minimal_tournament_completes_after_one_vote() {
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

    assert_eq!(session.state(), State::Active);
    session.vote(Verdict::Left, &clock);
    assert_eq!(session.state(), State::Complete);

    let results = session.current_results();
    assert_eq!(results[0].id, "a");
    assert!((results[0].rating - 1516.0).abs() < 0.01);
}

/// Spec scenario 4: a session restored from a snapshot reproduces the
/// pre-destruction state exactly, across a full four-name tournament.
#[test]
fn full_tournament_survives_restart_and_produces_a_total_order() {
    let backing = InMemoryStore::new();
    let clock = FixedClock::new(0);
    let names = items(&["A", "B", "C", "D"]);

    let verdicts = [
        Verdict::Left,
        Verdict::Right,
        Verdict::Both,
        Verdict::Left,
        Verdict::Neither,
        Verdict::Right,
    ];

    for (step, verdict) in verdicts.iter().enumerate() {
        let store = SessionStore::new(&backing);
        let mut session = TournamentSession::new(
            names.clone(),
            Ratings::new(),
            "alice",
            store,
            EloRater::new(),
            0,
            0,
            &clock,
        )
        .unwrap();

        assert_eq!(session.history().len(), step);
        session.vote(*verdict, &clock);
        session.flush();
        clock.advance(1);
    }

    let store = SessionStore::new(&backing);
    let finished = TournamentSession::new(
        names,
        Ratings::new(),
        "alice",
        store,
        EloRater::new(),
        0,
        0,
        &clock,
    )
    .unwrap();

    assert_eq!(finished.state(), State::Complete);
    assert_eq!(finished.history().len(), 6);

    let results = finished.current_results();
    assert_eq!(results.len(), 4);
    for pair in results.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

/// Spec scenario 5: toggling a selection repeatedly within the debounce
/// window yields exactly one write, with the final set.
#[test]
fn selection_toggles_coalesce_into_one_debounced_write() {
    let backing = InMemoryStore::new();
    let clock = FixedClock::new(0);
    let catalog: Vec<NameId> = vec!["a".into(), "b".into(), "c".into()];

    let mut manager = SelectionManager::new(&backing, "alice", &catalog, 800);
    for id in &catalog {
        manager.toggle(id, &clock);
        clock.advance(100);
    }
    manager.poll(&clock);
    assert!(backing.get("tournament_selection_alice").is_none());

    clock.advance(800);
    manager.poll(&clock);

    let stored = backing.get("tournament_selection_alice").unwrap();
    let selected: Vec<NameId> = serde_json::from_str(&stored).unwrap();
    assert_eq!(selected.len(), 3);
}

/// A fresh candidate pool commits straight into an active session whose
/// bracket projection groups matches by round from the start.
#[test]
fn committing_a_selection_spawns_a_session_whose_bracket_reflects_rounds() {
    let backing = InMemoryStore::new();
    let clock = FixedClock::new(0);
    let catalog: Vec<NameId> = vec!["a".into(), "b".into(), "c".into()];

    let mut manager = SelectionManager::new(&backing, "alice", &catalog, 800);
    manager.select_all(&catalog, &clock);
    manager.flush();

    let pool = manager.snapshot();
    let selected_items: Vec<NameItem> = pool
        .iter()
        .map(|id| NameItem::new(id.clone(), id.to_uppercase()))
        .collect();

    let store = SessionStore::new(&backing);
    let mut session = TournamentSession::new(
        selected_items,
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
    session.vote(Verdict::Left, &clock);
    session.vote(Verdict::Left, &clock);

    let bracket = BracketProjection::project(session.history(), 3);
    assert_eq!(bracket.len(), 3);
    assert!(bracket.iter().all(|entry| entry.round == 1));
}
