//! Tests for the session registry lifecycle.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;
use twisty::{MoveOutcome, SessionError, SessionRegistry, SessionStatus};
use twisty_cube::{Color, CubeEngine, CubeState, Faces, Move, MoveError, StateError};

fn scrambled_with(token: &str) -> CubeState {
    let mut engine = CubeEngine::new();
    engine.execute_token(token).unwrap();
    engine.state()
}

#[test]
fn test_create_with_zero_scramble_is_active_and_solved() {
    let registry = SessionRegistry::new();
    let mut rng = StdRng::seed_from_u64(1);
    let session = registry
        .create_scrambled("zero".to_string(), 0, &mut rng)
        .unwrap();

    assert_eq!(*session.status(), SessionStatus::Active);
    assert!(session.cube_state().solved());
    assert!(session.cube_state().move_history().is_empty());
    assert_eq!(*session.scramble_moves(), None);
}

#[test]
fn test_create_scrambled_records_depth() {
    let registry = SessionRegistry::new();
    let mut rng = StdRng::seed_from_u64(9);
    let session = registry
        .create_scrambled("deep".to_string(), 25, &mut rng)
        .unwrap();

    assert_eq!(session.scramble_moves().map(|n| n.get()), Some(25));
    assert_eq!(session.cube_state().move_history().len(), 25);
    assert_eq!(registry.get("deep").unwrap(), session);
}

#[test]
fn test_duplicate_id_is_rejected() {
    let registry = SessionRegistry::new();
    registry
        .create("dup".to_string(), CubeState::new(), None)
        .unwrap();
    registry.apply_token("dup", "F").unwrap();

    let err = registry
        .create("dup".to_string(), CubeState::new(), None)
        .unwrap_err();
    assert_eq!(err, SessionError::AlreadyExists("dup".to_string()));
    assert_eq!(
        registry.get("dup").unwrap().cube_state().move_history().len(),
        1
    );
}

#[test]
fn test_impossible_initial_state_is_rejected() {
    let mut faces = Faces::solved();
    faces.front.set(1, 1, Color::Red);
    let registry = SessionRegistry::new();

    let err = registry
        .create("bad".to_string(), CubeState::from_parts(faces, Vec::new()), None)
        .unwrap_err();
    assert!(matches!(err, SessionError::State(StateError::StickerCount { .. })));
    assert!(registry.is_empty());
}

#[test]
fn test_solving_move_completes_session() {
    let registry = SessionRegistry::new();
    registry
        .create("solve".to_string(), scrambled_with("R"), Some(1))
        .unwrap();

    let applied = registry.apply_token("solve", "R'").unwrap();
    assert_eq!(*applied.outcome(), MoveOutcome::Applied);
    assert!(applied.state().solved());

    let session = registry.get("solve").unwrap();
    assert_eq!(*session.status(), SessionStatus::Completed);
    assert!(session.last_activity() >= session.created_at());
}

#[test]
fn test_moves_on_completed_session_are_ignored() {
    let registry = SessionRegistry::new();
    registry
        .create("done".to_string(), scrambled_with("U"), None)
        .unwrap();
    registry.finish("done").unwrap();
    let before = registry.get("done").unwrap();

    let applied = registry.apply_move("done", Move::ALL[0]).unwrap();
    assert_eq!(*applied.outcome(), MoveOutcome::IgnoredCompleted);
    assert_eq!(applied.state(), before.cube_state());

    // Completed sessions ignore moves before the token is even parsed.
    let applied = registry.apply_token("done", "nonsense").unwrap();
    assert_eq!(*applied.outcome(), MoveOutcome::IgnoredCompleted);

    assert_eq!(registry.get("done").unwrap(), before);
}

#[test]
fn test_finish_keeps_unsolved_state() {
    let registry = SessionRegistry::new();
    let initial = scrambled_with("B");
    registry
        .create("quit".to_string(), initial.clone(), None)
        .unwrap();

    let session = registry.finish("quit").unwrap();
    assert_eq!(*session.status(), SessionStatus::Completed);
    assert_eq!(session.cube_state(), &initial);
    assert!(!session.cube_state().solved());
}

#[test]
fn test_unknown_id_reports_not_found() {
    let registry = SessionRegistry::new();
    let missing = SessionError::NotFound("ghost".to_string());

    assert!(registry.get("ghost").is_none());
    assert_eq!(registry.apply_token("ghost", "R").unwrap_err(), missing);
    assert_eq!(
        registry.apply_move("ghost", Move::ALL[3]).unwrap_err(),
        missing
    );
    assert_eq!(registry.finish("ghost").unwrap_err(), missing);
}

#[test]
fn test_invalid_token_leaves_session_untouched() {
    let registry = SessionRegistry::new();
    registry
        .create("typo".to_string(), CubeState::new(), None)
        .unwrap();
    let before = registry.get("typo").unwrap();

    let err = registry.apply_token("typo", "Q2").unwrap_err();
    assert_eq!(err, SessionError::Move(MoveError::InvalidMove("Q2".to_string())));
    assert_eq!(registry.get("typo").unwrap(), before);
}

#[test]
fn test_list_is_sorted() {
    let registry = SessionRegistry::new();
    for id in ["charlie", "alpha", "bravo"] {
        registry
            .create(id.to_string(), CubeState::new(), None)
            .unwrap();
    }
    assert_eq!(registry.list(), ["alpha", "bravo", "charlie"]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_concurrent_moves_are_not_lost() {
    let registry = SessionRegistry::new();
    registry
        .create("shared".to_string(), scrambled_with("D"), None)
        .unwrap();

    // U has order four, so 8 threads x 4 turns never solves the D-scrambled cube.
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || {
                for _ in 0..4 {
                    registry.apply_token("shared", "U").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let session = registry.get("shared").unwrap();
    assert_eq!(session.cube_state().move_history().len(), 33);
    assert_eq!(session.cube_state().faces(), scrambled_with("D").faces());
    assert_eq!(*session.status(), SessionStatus::Active);
}

#[test]
fn test_sessions_are_independent() {
    let registry = SessionRegistry::new();
    registry
        .create("a".to_string(), CubeState::new(), None)
        .unwrap();
    registry
        .create("b".to_string(), CubeState::new(), None)
        .unwrap();

    registry.apply_token("a", "L").unwrap();
    assert_eq!(registry.get("a").unwrap().cube_state().move_history().len(), 1);
    assert!(registry.get("b").unwrap().cube_state().move_history().is_empty());
}
