//! Face-turn transform: own-face rotation plus the four-strip edge cycle.
//!
//! The net is laid out with front in the middle, top above it, bottom below,
//! left and right beside it, and back to the right of right. Every face is
//! read as seen from outside the cube. Under that layout each clockwise
//! quarter turn moves four edge strips around the turning face; the table
//! below lists them in flow order, so the stickers of strip `k` (read in
//! order) land on strip `k + 1` (read in order).

use crate::types::{Color, Face, Faces, Line};
use tracing::trace;

/// A three-sticker edge strip on one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    face: Face,
    line: Line,
    reversed: bool,
}

impl Strip {
    const fn new(face: Face, line: Line, reversed: bool) -> Self {
        Self {
            face,
            line,
            reversed,
        }
    }

    /// Face the strip lies on.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Row or column of that face.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Whether the strip is read end-to-start.
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    fn read(&self, faces: &Faces) -> [Color; 3] {
        let mut strip = faces.grid(self.face).read(self.line);
        if self.reversed {
            strip.reverse();
        }
        strip
    }

    fn write(&self, faces: &mut Faces, mut strip: [Color; 3]) {
        if self.reversed {
            strip.reverse();
        }
        faces.grid_mut(self.face).write(self.line, strip);
    }
}

const TOP_CYCLE: [Strip; 4] = [
    Strip::new(Face::Front, Line::Row(0), false),
    Strip::new(Face::Left, Line::Row(0), false),
    Strip::new(Face::Back, Line::Row(0), false),
    Strip::new(Face::Right, Line::Row(0), false),
];

const BOTTOM_CYCLE: [Strip; 4] = [
    Strip::new(Face::Front, Line::Row(2), false),
    Strip::new(Face::Right, Line::Row(2), false),
    Strip::new(Face::Back, Line::Row(2), false),
    Strip::new(Face::Left, Line::Row(2), false),
];

const LEFT_CYCLE: [Strip; 4] = [
    Strip::new(Face::Top, Line::Col(0), false),
    Strip::new(Face::Front, Line::Col(0), false),
    Strip::new(Face::Bottom, Line::Col(0), false),
    Strip::new(Face::Back, Line::Col(2), true),
];

const RIGHT_CYCLE: [Strip; 4] = [
    Strip::new(Face::Top, Line::Col(2), false),
    Strip::new(Face::Back, Line::Col(0), true),
    Strip::new(Face::Bottom, Line::Col(2), false),
    Strip::new(Face::Front, Line::Col(2), false),
];

const FRONT_CYCLE: [Strip; 4] = [
    Strip::new(Face::Top, Line::Row(2), false),
    Strip::new(Face::Right, Line::Col(0), false),
    Strip::new(Face::Bottom, Line::Row(0), true),
    Strip::new(Face::Left, Line::Col(2), true),
];

const BACK_CYCLE: [Strip; 4] = [
    Strip::new(Face::Top, Line::Row(0), false),
    Strip::new(Face::Left, Line::Col(0), true),
    Strip::new(Face::Bottom, Line::Row(2), true),
    Strip::new(Face::Right, Line::Col(2), false),
];

/// Edge strips cycled by a clockwise quarter turn of `face`, in flow order.
pub fn edge_cycle(face: Face) -> &'static [Strip; 4] {
    match face {
        Face::Top => &TOP_CYCLE,
        Face::Bottom => &BOTTOM_CYCLE,
        Face::Left => &LEFT_CYCLE,
        Face::Right => &RIGHT_CYCLE,
        Face::Front => &FRONT_CYCLE,
        Face::Back => &BACK_CYCLE,
    }
}

/// Applies one clockwise quarter turn of `face`.
pub(crate) fn quarter_turn(faces: &mut Faces, face: Face) {
    trace!(?face, "Quarter turn");
    faces.grid_mut(face).rotate_clockwise();

    let cycle = edge_cycle(face);
    let old: [[Color; 3]; 4] = std::array::from_fn(|k| cycle[k].read(faces));
    for (k, strip) in cycle.iter().enumerate() {
        strip.write(faces, old[(k + 3) % 4]);
    }
}
