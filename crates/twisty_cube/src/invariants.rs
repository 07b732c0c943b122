//! First-class invariants for cube state.
//!
//! Moves only ever permute stickers, so a reachable state always carries nine
//! stickers of each color, and the solved flag must agree with the faces.
//! These are checked on snapshot ingestion and asserted in debug builds after
//! every move.

use crate::types::{Color, CubeState, Faces};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Every color appears on exactly nine stickers.
pub struct StickerCountInvariant;

impl Invariant<Faces> for StickerCountInvariant {
    fn holds(faces: &Faces) -> bool {
        Color::iter().all(|color| faces.count(color) == 9)
    }

    fn description() -> &'static str {
        "Each of the six colors appears on exactly nine stickers"
    }
}

impl Invariant<CubeState> for StickerCountInvariant {
    fn holds(state: &CubeState) -> bool {
        <Self as Invariant<Faces>>::holds(state.faces())
    }

    fn description() -> &'static str {
        <Self as Invariant<Faces>>::description()
    }
}

/// The solved flag equals per-face uniformity.
pub struct SolvedFlagConsistent;

impl Invariant<CubeState> for SolvedFlagConsistent {
    fn holds(state: &CubeState) -> bool {
        state.solved() == state.faces().all_uniform()
    }

    fn description() -> &'static str {
        "Solved flag matches face uniformity"
    }
}

/// Checks the sticker-count invariant, naming the first color that breaks it.
///
/// # Errors
///
/// Returns [`StateError::StickerCount`] if any color is not on exactly nine
/// stickers.
#[instrument(skip(faces))]
pub fn check_sticker_counts(faces: &Faces) -> Result<(), StateError> {
    for color in Color::iter() {
        let count = faces.count(color);
        if count != 9 {
            warn!(%color, count, "Sticker count invariant violated");
            return Err(StateError::StickerCount { color, count });
        }
    }
    Ok(())
}

/// Error raised when a snapshot describes an impossible cube.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// A color is present on the wrong number of stickers.
    #[display("Color {} appears on {} stickers, expected 9", color, count)]
    StickerCount {
        /// The offending color.
        color: Color,
        /// How many stickers show it.
        count: usize,
    },
}

impl std::error::Error for StateError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CubeState, StickerGrid};

    #[test]
    fn test_solved_state_satisfies_invariants() {
        let state = CubeState::new();
        assert!(<StickerCountInvariant as Invariant<CubeState>>::holds(&state));
        assert!(SolvedFlagConsistent::holds(&state));
        assert_eq!(check_sticker_counts(state.faces()), Ok(()));
    }

    #[test]
    fn test_recolored_sticker_is_reported() {
        let mut faces = Faces::solved();
        faces.front.set(1, 1, Color::Red);
        assert_eq!(
            check_sticker_counts(&faces),
            Err(StateError::StickerCount {
                color: Color::Green,
                count: 8
            })
        );
    }

    #[test]
    fn test_uniform_but_wrong_counts_fails() {
        let mut faces = Faces::solved();
        faces.back = StickerGrid::filled(Color::Green);
        assert!(faces.all_uniform());
        assert!(!<StickerCountInvariant as Invariant<Faces>>::holds(&faces));
    }
}
