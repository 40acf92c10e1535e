//! Text rendering of the board.
//!
//! The drawn area is the board's bounds padded on every side. The first line
//! holds the x coordinates; every following line starts with its y coordinate
//! and lists the cells left to right. Rows go from the smallest y to the largest.
//! Each field is right-aligned in three columns.

use crate::board::Board;
use crate::constants::EMPTY;

/// Width of one column in the rendered grid.
const CELL_WIDTH: usize = 3;

/// Render `board` into lines of text, padded by `pad` cells.
///
/// The output grows with the area of the bounds, and the bounds always contain
/// the origin. A single piece far from `(0, 0)` therefore produces a grid
/// spanning the whole distance: a first move at `(1000000, 1000000)` renders
/// about a million rows of a million cells each.
pub fn render_lines(board: &Board, pad: i64) -> Vec<String> {
    let b = board.get_bounds(pad);
    let mut lines = Vec::new();

    let mut header = " ".repeat(CELL_WIDTH);
    for x in b.min_x..=b.max_x {
        header.push_str(&format!("{x:>CELL_WIDTH$}"));
    }
    lines.push(header);

    for y in b.min_y..=b.max_y {
        let mut row = format!("{y:>CELL_WIDTH$}");
        for x in b.min_x..=b.max_x {
            let ch = board.get(x, y).unwrap_or(EMPTY);
            row.push_str(&format!("{ch:>CELL_WIDTH$}"));
        }
        lines.push(row);
    }
    lines
}
