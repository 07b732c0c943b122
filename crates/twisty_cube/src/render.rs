//! Plain-text rendering of the unfolded net.

use crate::types::{Face, Faces};

const INDENT: &str = "      ";

fn row_text(faces: &Faces, face: Face, row: usize) -> String {
    faces.grid(face).rows()[row]
        .iter()
        .map(|c| c.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the cube as a cross-shaped net:
///
/// ```text
///       W W W
///       W W W
///       W W W
/// O O O G G G R R R B B B
/// O O O G G G R R R B B B
/// O O O G G G R R R B B B
///       Y Y Y
///       Y Y Y
///       Y Y Y
/// ```
pub fn render_net(faces: &Faces) -> String {
    let mut lines = Vec::with_capacity(9);
    for row in 0..3 {
        lines.push(format!("{INDENT}{}", row_text(faces, Face::Top, row)));
    }
    for row in 0..3 {
        let band: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
            .into_iter()
            .map(|face| row_text(faces, face, row))
            .collect();
        lines.push(band.join(" "));
    }
    for row in 0..3 {
        lines.push(format!("{INDENT}{}", row_text(faces, Face::Bottom, row)));
    }
    lines.join("\n")
}
