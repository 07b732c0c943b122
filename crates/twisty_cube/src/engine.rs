//! The cube engine: owns one live cube state and applies moves to it.

use crate::invariants::{
    Invariant, SolvedFlagConsistent, StateError, StickerCountInvariant, check_sticker_counts,
};
use crate::moves::{Move, MoveError};
use crate::turns::quarter_turn;
use crate::types::CubeState;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Scramble length used when the caller does not pick one.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 20;

/// Owns a cube and applies face turns to it.
///
/// Snapshots handed out by [`CubeEngine::state`] are value copies and
/// snapshots passed to [`CubeEngine::set_state`] are taken by value, so
/// engine state is never aliased.
#[derive(Debug, Clone, Default)]
pub struct CubeEngine {
    state: CubeState,
}

impl CubeEngine {
    /// Creates an engine holding a solved cube with an empty history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: CubeState::new(),
        }
    }

    /// Creates an engine from a snapshot, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the snapshot fails the sticker-count check.
    #[instrument(skip(snapshot))]
    pub fn from_state(snapshot: CubeState) -> Result<Self, StateError> {
        let mut engine = Self::new();
        engine.set_state(snapshot)?;
        Ok(engine)
    }

    /// Returns a value copy of the current state.
    pub fn state(&self) -> CubeState {
        self.state.clone()
    }

    /// Replaces the whole state with `snapshot`.
    ///
    /// The snapshot must carry nine stickers of each color. Its `solved`
    /// flag is not trusted and is recomputed from the faces. On error the
    /// engine is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::StickerCount`] for an impossible sticker count.
    #[instrument(skip(self, snapshot), fields(history = snapshot.move_history().len()))]
    pub fn set_state(&mut self, mut snapshot: CubeState) -> Result<(), StateError> {
        check_sticker_counts(snapshot.faces())?;
        snapshot.refresh_solved();
        debug!(solved = snapshot.solved(), "State replaced");
        self.state = snapshot;
        Ok(())
    }

    /// Applies a single move.
    ///
    /// Counter-clockwise and half turns are three and two clockwise quarter
    /// turns of the same face. The move is appended to the history and the
    /// solved flag recomputed.
    #[instrument(skip(self), fields(token = %mv))]
    pub fn execute_move(&mut self, mv: Move) {
        for _ in 0..mv.quarter_turns() {
            quarter_turn(self.state.faces_mut(), mv.face());
        }
        self.state.record(mv);

        debug_assert!(
            <StickerCountInvariant as Invariant<CubeState>>::holds(&self.state),
            "{}",
            <StickerCountInvariant as Invariant<CubeState>>::description()
        );
        debug_assert!(
            SolvedFlagConsistent::holds(&self.state),
            "{}",
            SolvedFlagConsistent::description()
        );
        debug!(solved = self.state.solved(), "Move applied");
    }

    /// Parses and applies a single move token.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the token is not one of the 18
    /// recognized moves; the state is not touched.
    #[instrument(skip(self))]
    pub fn execute_token(&mut self, token: &str) -> Result<(), MoveError> {
        let mv: Move = token.parse()?;
        self.execute_move(mv);
        Ok(())
    }

    /// Applies a sequence of already-parsed moves in order.
    pub fn execute_sequence(&mut self, moves: &[Move]) {
        for mv in moves {
            self.execute_move(*mv);
        }
    }

    /// True iff every face is uniformly one color.
    pub fn is_solved(&self) -> bool {
        self.state.faces().all_uniform()
    }

    /// Applies `count` moves drawn uniformly, with replacement, from the
    /// twelve quarter turns. Returns the moves applied.
    ///
    /// Every draw goes through [`CubeEngine::execute_move`], so history and
    /// the solved flag update per move. A short scramble may leave the cube
    /// solved.
    #[instrument(skip(self, rng))]
    pub fn scramble<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Move> {
        let pool = &Move::SCRAMBLE_POOL;
        let moves: Vec<Move> = (0..count)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();
        self.execute_sequence(&moves);
        info!(count, solved = self.state.solved(), "Cube scrambled");
        moves
    }

    /// Scrambles with [`DEFAULT_SCRAMBLE_MOVES`] moves.
    pub fn scramble_default<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Move> {
        self.scramble(DEFAULT_SCRAMBLE_MOVES, rng)
    }

    /// Renders the current state as an unfolded net.
    pub fn render_text(&self) -> String {
        self.state.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_engine_is_solved() {
        let engine = CubeEngine::new();
        assert!(engine.is_solved());
        assert!(engine.state().solved());
        assert!(engine.state().move_history().is_empty());
    }

    #[test]
    fn test_invalid_token_leaves_state_untouched() {
        let mut engine = CubeEngine::new();
        engine.execute_token("R").unwrap();
        let before = engine.state();
        assert_eq!(
            engine.execute_token("X2"),
            Err(MoveError::InvalidMove("X2".to_string()))
        );
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_scramble_is_reproducible_with_seed() {
        let mut a = CubeEngine::new();
        let mut b = CubeEngine::new();
        let moves_a = a.scramble(25, &mut StdRng::seed_from_u64(7));
        let moves_b = b.scramble(25, &mut StdRng::seed_from_u64(7));
        assert_eq!(moves_a, moves_b);
        assert_eq!(a.state(), b.state());
        assert_eq!(a.state().move_history(), moves_a.as_slice());
    }

    #[test]
    fn test_scramble_draws_only_quarter_turns() {
        let mut engine = CubeEngine::new();
        let moves = engine.scramble_default(&mut StdRng::seed_from_u64(99));
        assert_eq!(moves.len(), DEFAULT_SCRAMBLE_MOVES);
        assert!(moves.iter().all(|m| Move::SCRAMBLE_POOL.contains(m)));
    }

    #[test]
    fn test_zero_move_scramble_stays_solved() {
        let mut engine = CubeEngine::new();
        assert!(engine.scramble(0, &mut StdRng::seed_from_u64(1)).is_empty());
        assert!(engine.is_solved());
    }

    #[test]
    fn test_set_state_recomputes_solved_flag() {
        let mut scrambled = CubeEngine::new();
        scrambled.execute_token("F").unwrap();
        let mut json = serde_json::to_value(scrambled.state()).unwrap();
        json["solved"] = serde_json::Value::Bool(true);
        let snapshot: CubeState = serde_json::from_value(json).unwrap();

        let mut engine = CubeEngine::new();
        engine.set_state(snapshot).unwrap();
        assert!(!engine.state().solved());
        assert!(!engine.is_solved());
    }
}
