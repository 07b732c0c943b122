//! Core domain types for the cube: colors, faces, sticker grids and state.

use crate::moves::Move;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the six sticker colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
pub enum Color {
    /// White, the solved color of the top face.
    #[serde(rename = "W")]
    White,
    /// Yellow, the solved color of the bottom face.
    #[serde(rename = "Y")]
    Yellow,
    /// Green, the solved color of the front face.
    #[serde(rename = "G")]
    Green,
    /// Blue, the solved color of the back face.
    #[serde(rename = "B")]
    Blue,
    /// Orange, the solved color of the left face.
    #[serde(rename = "O")]
    Orange,
    /// Red, the solved color of the right face.
    #[serde(rename = "R")]
    Red,
}

impl Color {
    /// Single-character color code used on the wire and in rendering.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the six faces of the cube.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Front face (center of the net).
    Front,
    /// Back face (right of the right face in the net).
    Back,
    /// Left face.
    Left,
    /// Right face.
    Right,
    /// Top face (above front in the net).
    Top,
    /// Bottom face (below front in the net).
    Bottom,
}

impl Face {
    /// Color this face carries on a freshly created cube.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Top => Color::White,
            Face::Bottom => Color::Yellow,
        }
    }
}

/// A row or column of a sticker grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Row index 0-2, read left to right.
    Row(usize),
    /// Column index 0-2, read top to bottom.
    Col(usize),
}

/// 3x3 sticker grid for one face, row-major.
///
/// Row 0 is the edge nearest the upper neighbour in the unfolded net and
/// column 0 the edge nearest the left neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct StickerGrid([[Color; 3]; 3]);

impl StickerGrid {
    /// Creates a grid filled with a single color.
    pub fn filled(color: Color) -> Self {
        Self([[color; 3]; 3])
    }

    /// Creates a grid from explicit rows.
    pub fn from_rows(rows: [[Color; 3]; 3]) -> Self {
        Self(rows)
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Color; 3]; 3] {
        &self.0
    }

    /// Gets the sticker at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.0[row][col]
    }

    /// Sets the sticker at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.0[row][col] = color;
    }

    /// Iterates every sticker in row-major order.
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flatten().copied()
    }

    /// True when all nine stickers match the first one.
    pub fn is_uniform(&self) -> bool {
        let first = self.0[0][0];
        self.stickers().all(|c| c == first)
    }

    /// Rotates the grid 90° clockwise in place (transpose, then mirror each row).
    pub fn rotate_clockwise(&mut self) {
        for r in 0..3 {
            for c in (r + 1)..3 {
                let tmp = self.0[r][c];
                self.0[r][c] = self.0[c][r];
                self.0[c][r] = tmp;
            }
        }
        for row in &mut self.0 {
            row.reverse();
        }
    }

    /// Reads the three stickers of a row or column.
    pub fn read(&self, line: Line) -> [Color; 3] {
        match line {
            Line::Row(r) => self.0[r],
            Line::Col(c) => [self.0[0][c], self.0[1][c], self.0[2][c]],
        }
    }

    /// Overwrites the three stickers of a row or column.
    pub fn write(&mut self, line: Line, strip: [Color; 3]) {
        match line {
            Line::Row(r) => self.0[r] = strip,
            Line::Col(c) => {
                for (r, color) in strip.into_iter().enumerate() {
                    self.0[r][c] = color;
                }
            }
        }
    }
}

/// The six sticker grids of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Faces {
    /// Front face.
    pub front: StickerGrid,
    /// Back face.
    pub back: StickerGrid,
    /// Left face.
    pub left: StickerGrid,
    /// Right face.
    pub right: StickerGrid,
    /// Top face.
    pub top: StickerGrid,
    /// Bottom face.
    pub bottom: StickerGrid,
}

impl Faces {
    /// Canonical solved arrangement: every face filled with its own color.
    pub fn solved() -> Self {
        Self {
            front: StickerGrid::filled(Face::Front.solved_color()),
            back: StickerGrid::filled(Face::Back.solved_color()),
            left: StickerGrid::filled(Face::Left.solved_color()),
            right: StickerGrid::filled(Face::Right.solved_color()),
            top: StickerGrid::filled(Face::Top.solved_color()),
            bottom: StickerGrid::filled(Face::Bottom.solved_color()),
        }
    }

    /// Returns the grid for `face`.
    pub fn grid(&self, face: Face) -> &StickerGrid {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
        }
    }

    /// Returns the grid for `face` mutably.
    pub fn grid_mut(&mut self, face: Face) -> &mut StickerGrid {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
        }
    }

    /// True when every face is a single color.
    pub fn all_uniform(&self) -> bool {
        Face::iter().all(|face| self.grid(face).is_uniform())
    }

    /// Number of stickers showing `color` across all faces.
    pub fn count(&self, color: Color) -> usize {
        Face::iter()
            .flat_map(|face| self.grid(face).stickers())
            .filter(|c| *c == color)
            .count()
    }
}

impl Default for Faces {
    fn default() -> Self {
        Self::solved()
    }
}

/// Complete cube snapshot.
///
/// This is a plain value: cloning it yields an independent copy, and
/// nothing handed out by [`crate::CubeEngine`] aliases engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CubeState {
    /// Sticker grids.
    faces: Faces,
    /// Whether every face is uniform.
    solved: bool,
    /// Moves applied since creation, oldest first.
    move_history: Vec<Move>,
}

impl CubeState {
    /// Creates a solved cube with an empty history.
    pub fn new() -> Self {
        Self {
            faces: Faces::solved(),
            solved: true,
            move_history: Vec::new(),
        }
    }

    /// Builds a snapshot from parts. `solved` is derived from the faces.
    pub fn from_parts(faces: Faces, move_history: Vec<Move>) -> Self {
        Self {
            solved: faces.all_uniform(),
            faces,
            move_history,
        }
    }

    /// Returns the sticker grids.
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Returns the solved flag.
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Formats the cube as an unfolded net.
    pub fn display(&self) -> String {
        crate::render::render_net(&self.faces)
    }

    pub(crate) fn faces_mut(&mut self) -> &mut Faces {
        &mut self.faces
    }

    pub(crate) fn record(&mut self, mv: Move) {
        self.move_history.push(mv);
        self.solved = self.faces.all_uniform();
    }

    pub(crate) fn refresh_solved(&mut self) {
        self.solved = self.faces.all_uniform();
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
