//! Cube session management.
//!
//! A session pairs one cube with its lifecycle metadata. The registry is an
//! explicit store object: callers hold (or clone) a [`SessionRegistry`] and
//! every read hands back a value copy.

use crate::error::SessionError;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};
use twisty_cube::{CubeEngine, CubeState, Move, MoveError};

/// Opaque session identifier. Callers are responsible for generating them.
pub type SessionId = String;

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Moves are accepted.
    Active,
    /// Terminal: the cube was solved or the session was finished.
    Completed,
}

/// A cube plus its session metadata.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Session id.
    id: SessionId,
    /// Latest cube snapshot.
    cube_state: CubeState,
    /// When the session was created.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    /// When the session last accepted a move or was finished.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    last_activity: DateTime<Utc>,
    /// Lifecycle status.
    status: SessionStatus,
    /// Scramble depth the session was initialized with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scramble_moves: Option<NonZeroUsize>,
}

impl GameSession {
    fn new(id: SessionId, cube_state: CubeState, scramble_moves: Option<NonZeroUsize>) -> Self {
        let now = Utc::now();
        Self {
            id,
            cube_state,
            created_at: now,
            last_activity: now,
            status: SessionStatus::Active,
            scramble_moves,
        }
    }

    /// True once the session reached its terminal status.
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

/// Whether a move request changed the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The move was executed.
    Applied,
    /// The session is completed; the move was not executed.
    IgnoredCompleted,
}

/// Result of a move request: the session's cube after the call.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct AppliedMove {
    /// Cube state after the request.
    state: CubeState,
    /// Whether the move was executed.
    outcome: MoveOutcome,
}

type Entry = Arc<Mutex<GameSession>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registry of cube sessions keyed by id.
///
/// The outer lock only guards the map. Each session has its own lock, so
/// mutating operations on one id are serialized without blocking others.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, Entry>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session registry");
        Self::default()
    }

    fn entry(&self, id: &str) -> Result<Entry, SessionError> {
        lock(&self.sessions).get(id).cloned().ok_or_else(|| {
            warn!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })
    }

    /// Inserts a new active session holding `initial_state`.
    ///
    /// A `scramble_moves` of zero is recorded as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyExists`] for a duplicate id and
    /// [`SessionError::State`] if `initial_state` is not a possible cube.
    #[instrument(skip(self, initial_state))]
    pub fn create(
        &self,
        id: SessionId,
        initial_state: CubeState,
        scramble_moves: Option<usize>,
    ) -> Result<GameSession, SessionError> {
        let state = CubeEngine::from_state(initial_state)?.state();
        let session = GameSession::new(
            id.clone(),
            state,
            scramble_moves.and_then(NonZeroUsize::new),
        );

        let mut sessions = lock(&self.sessions);
        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }
        sessions.insert(id.clone(), Arc::new(Mutex::new(session.clone())));

        info!(session_id = %id, solved = session.cube_state.solved(), "Created new session");
        Ok(session)
    }

    /// Creates a session whose cube is scrambled with `moves` random turns.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyExists`] for a duplicate id.
    #[instrument(skip(self, rng))]
    pub fn create_scrambled<R: Rng + ?Sized>(
        &self,
        id: SessionId,
        moves: usize,
        rng: &mut R,
    ) -> Result<GameSession, SessionError> {
        let mut engine = CubeEngine::new();
        engine.scramble(moves, rng);
        self.create(id, engine.state(), Some(moves))
    }

    /// Gets a copy of a session by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<GameSession> {
        let session = lock(&self.sessions)
            .get(id)
            .map(|entry| lock(entry).clone());
        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }
        session
    }

    /// Applies one move to an active session.
    ///
    /// On a completed session the move is not executed and the unchanged
    /// state comes back with [`MoveOutcome::IgnoredCompleted`]. Otherwise the
    /// move is executed, the session's snapshot and activity time are
    /// refreshed, and the session completes if the cube is now solved.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    #[instrument(skip(self), fields(token = %mv))]
    pub fn apply_move(&self, id: &str, mv: Move) -> Result<AppliedMove, SessionError> {
        self.apply(id, Ok(mv))
    }

    /// Parses `token` and applies it like [`SessionRegistry::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id and
    /// [`SessionError::Move`] for an unrecognized token on an active session.
    #[instrument(skip(self))]
    pub fn apply_token(&self, id: &str, token: &str) -> Result<AppliedMove, SessionError> {
        self.apply(id, token.parse())
    }

    fn apply(&self, id: &str, mv: Result<Move, MoveError>) -> Result<AppliedMove, SessionError> {
        let entry = self.entry(id)?;
        let mut session = lock(&entry);

        if session.is_completed() {
            debug!(session_id = id, "Session completed, move ignored");
            return Ok(AppliedMove::new(
                session.cube_state.clone(),
                MoveOutcome::IgnoredCompleted,
            ));
        }

        let mv = mv?;
        let mut engine = CubeEngine::from_state(session.cube_state.clone())?;
        engine.execute_move(mv);
        let state = engine.state();

        session.cube_state = state.clone();
        session.touch();
        if state.solved() {
            session.status = SessionStatus::Completed;
            info!(
                session_id = id,
                moves = state.move_history().len(),
                "Cube solved, session completed"
            );
        } else {
            debug!(session_id = id, token = %mv, "Move applied");
        }

        Ok(AppliedMove::new(state, MoveOutcome::Applied))
    }

    /// Ends a session regardless of whether its cube is solved.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    #[instrument(skip(self))]
    pub fn finish(&self, id: &str) -> Result<GameSession, SessionError> {
        let entry = self.entry(id)?;
        let mut session = lock(&entry);
        session.status = SessionStatus::Completed;
        session.touch();
        info!(
            session_id = id,
            solved = session.cube_state.solved(),
            "Session finished"
        );
        Ok(session.clone())
    }

    /// Lists all session ids, sorted.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = lock(&self.sessions).keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    /// True when no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_scramble_is_recorded_as_absent() {
        let registry = SessionRegistry::new();
        let session = registry
            .create("s".to_string(), CubeState::new(), Some(0))
            .unwrap();
        assert_eq!(*session.scramble_moves(), None);
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("scrambleMoves").is_none());
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let registry = SessionRegistry::new();
        let session = registry
            .create("wire".to_string(), CubeState::new(), Some(5))
            .unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["id"], "wire");
        assert_eq!(json["status"], "active");
        assert_eq!(json["scrambleMoves"], 5);
        assert!(json["createdAt"].is_i64());
        assert_eq!(json["createdAt"], json["lastActivity"]);
        assert_eq!(json["cubeState"]["solved"], true);

        let back: GameSession = serde_json::from_value(json).unwrap();
        assert_eq!(back.id(), "wire");
        assert_eq!(*back.status(), SessionStatus::Active);
    }
}
