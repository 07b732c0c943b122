//! Pure 3x3x3 twisting puzzle logic.
//!
//! This crate holds a cube's sticker state, applies the 18 face turns as
//! sticker permutations, and detects the solved condition. It knows nothing
//! about sessions, networking or time.
//!
//! # Example
//!
//! ```
//! use twisty_cube::{CubeEngine, parse_sequence};
//!
//! let mut engine = CubeEngine::new();
//! let moves = parse_sequence("R U R' U'").unwrap();
//! engine.execute_sequence(&moves);
//! assert!(!engine.is_solved());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod invariants;
mod moves;
mod render;
mod turns;
mod types;

pub use engine::{CubeEngine, DEFAULT_SCRAMBLE_MOVES};
pub use invariants::{
    Invariant, SolvedFlagConsistent, StateError, StickerCountInvariant, check_sticker_counts,
};
pub use moves::{Move, MoveError, Turn, parse_sequence};
pub use render::render_net;
pub use turns::{Strip, edge_cycle};
pub use types::{Color, CubeState, Face, Faces, Line, StickerGrid};
