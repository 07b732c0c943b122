//! Move tokens for face turns.
//!
//! A move names one face and how far it turns. Moves are plain values:
//! they can be parsed from standard notation, validated before any state is
//! touched, serialized into a history and inverted.

use crate::types::Face;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::instrument;

/// How far a face turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Quarter turn clockwise (plain token, e.g. `R`).
    Clockwise,
    /// Quarter turn counter-clockwise (apostrophe token, e.g. `R'`).
    CounterClockwise,
    /// Half turn (`2` token, e.g. `R2`).
    Half,
}

impl Turn {
    /// Number of clockwise quarter turns this turn is defined as.
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::CounterClockwise => 3,
            Turn::Half => 2,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// A single face turn such as `U`, `F'` or `R2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    face: Face,
    turn: Turn,
}

const fn mv(face: Face, turn: Turn) -> Move {
    Move { face, turn }
}

impl Move {
    /// All 18 moves, in token order `U D L R F B`, then primes, then halves.
    pub const ALL: [Move; 18] = [
        mv(Face::Top, Turn::Clockwise),
        mv(Face::Bottom, Turn::Clockwise),
        mv(Face::Left, Turn::Clockwise),
        mv(Face::Right, Turn::Clockwise),
        mv(Face::Front, Turn::Clockwise),
        mv(Face::Back, Turn::Clockwise),
        mv(Face::Top, Turn::CounterClockwise),
        mv(Face::Bottom, Turn::CounterClockwise),
        mv(Face::Left, Turn::CounterClockwise),
        mv(Face::Right, Turn::CounterClockwise),
        mv(Face::Front, Turn::CounterClockwise),
        mv(Face::Back, Turn::CounterClockwise),
        mv(Face::Top, Turn::Half),
        mv(Face::Bottom, Turn::Half),
        mv(Face::Left, Turn::Half),
        mv(Face::Right, Turn::Half),
        mv(Face::Front, Turn::Half),
        mv(Face::Back, Turn::Half),
    ];

    /// The twelve quarter turns scrambles draw from. Half turns are excluded.
    pub const SCRAMBLE_POOL: [Move; 12] = [
        mv(Face::Top, Turn::Clockwise),
        mv(Face::Bottom, Turn::Clockwise),
        mv(Face::Left, Turn::Clockwise),
        mv(Face::Right, Turn::Clockwise),
        mv(Face::Front, Turn::Clockwise),
        mv(Face::Back, Turn::Clockwise),
        mv(Face::Top, Turn::CounterClockwise),
        mv(Face::Bottom, Turn::CounterClockwise),
        mv(Face::Left, Turn::CounterClockwise),
        mv(Face::Right, Turn::CounterClockwise),
        mv(Face::Front, Turn::CounterClockwise),
        mv(Face::Back, Turn::CounterClockwise),
    ];

    /// Creates a new move.
    pub fn new(face: Face, turn: Turn) -> Self {
        mv(face, turn)
    }

    /// Returns the turning face.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the turn amount.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Number of clockwise quarter turns this move applies.
    pub fn quarter_turns(&self) -> usize {
        self.turn.quarter_turns()
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        let turn = match self.turn {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        };
        mv(self.face, turn)
    }

    /// Face letter in standard notation.
    pub fn letter(&self) -> char {
        match self.face {
            Face::Top => 'U',
            Face::Bottom => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let face = match chars.next() {
            Some('U') => Face::Top,
            Some('D') => Face::Bottom,
            Some('L') => Face::Left,
            Some('R') => Face::Right,
            Some('F') => Face::Front,
            Some('B') => Face::Back,
            _ => return Err(MoveError::InvalidMove(token.to_string())),
        };
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Half,
            _ => return Err(MoveError::InvalidMove(token.to_string())),
        };
        Ok(mv(face, turn))
    }
}

impl TryFrom<String> for Move {
    type Error = MoveError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

impl JsonSchema for Move {
    fn schema_name() -> Cow<'static, str> {
        "Move".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        let tokens: Vec<String> = Move::ALL.iter().map(ToString::to_string).collect();
        schemars::json_schema!({
            "type": "string",
            "enum": tokens,
        })
    }
}

/// Parses a whitespace-separated algorithm such as `R U R' U'`.
///
/// Fails on the first unrecognized token. Empty input is an empty sequence.
#[instrument]
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, MoveError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|_| MoveError::InvalidSequence {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Error raised when a move token cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The token is not one of the 18 recognized moves.
    #[display("Invalid move: {:?}", _0)]
    InvalidMove(String),

    /// A token inside an algorithm is not a recognized move.
    #[display("Invalid move {:?} at position {}", token, index)]
    InvalidSequence {
        /// Zero-based position of the bad token.
        index: usize,
        /// The bad token.
        token: String,
    },
}

impl std::error::Error for MoveError {}
