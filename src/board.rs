//! Sparse board on an unbounded plane.
//!
//! Pieces live in a map from cell to player symbol, so the board has no edges:
//! a cell missing from the map is empty. Alongside the map the board keeps the
//! smallest rectangle enclosing every occupied cell, which the renderer uses to
//! decide what to draw.
//!
//! The board never validates on its own. The turn controller asks
//! [`Board::is_valid_move`] first, then calls [`Board::place_piece`], then
//! [`Board::check_win`] for the piece it just placed.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::constants::{DEFAULT_PAD, DIRECTIONS};
use crate::render::render_lines;
use crate::rules::Rules;

/// A cell on the plane, `(x, y)`.
pub type Cell = (i64, i64);

/// An axis-aligned rectangle, inclusive on all sides.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Grow the rectangle by `pad` cells on every side.
    pub fn padded(self, pad: i64) -> Bounds {
        Bounds {
            min_x: self.min_x.saturating_sub(pad),
            max_x: self.max_x.saturating_add(pad),
            min_y: self.min_y.saturating_sub(pad),
            max_y: self.max_y.saturating_add(pad),
        }
    }

    /// Extend the rectangle so it contains `(x, y)`.
    fn include(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

impl From<Bounds> for (i64, i64, i64, i64) {
    fn from(b: Bounds) -> Self {
        (b.min_x, b.max_x, b.min_y, b.max_y)
    }
}

/// Game board: occupied cells plus their bounding rectangle.
///
/// Bounds start as the single point at the origin, so the origin is always
/// inside them even if play happens far away.
#[derive(Clone, Debug, Default)]
pub struct Board {
    occupied: HashMap<Cell, char>,
    bounds: Bounds,
    rules: Rules,
}

impl Board {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            occupied: HashMap::new(),
            bounds: Bounds::default(),
            rules,
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Symbol at `(x, y)`, or `None` if the cell is empty.
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.occupied.get(&(x, y)).copied()
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Iterate over occupied cells in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.occupied.iter().map(|(&cell, &symbol)| (cell, symbol))
    }

    /// Unpadded bounding rectangle of play.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Record `symbol` at `(x, y)` and grow the bounds to include it.
    ///
    /// The move is assumed to have passed [`Board::is_valid_move`]; placing on
    /// an occupied cell overwrites it.
    pub fn place_piece(&mut self, x: i64, y: i64, symbol: char) {
        debug!(x, y, %symbol, "placing piece");
        self.occupied.insert((x, y), symbol);
        self.bounds.include(x, y);
    }

    /// Check whether a piece may be placed at `(x, y)`.
    ///
    /// A move is legal when the cell is empty and either the board is empty
    /// or some occupied cell lies within the move radius (Manhattan distance).
    pub fn is_valid_move(&self, x: i64, y: i64) -> bool {
        if self.occupied.contains_key(&(x, y)) {
            return false;
        }
        if self.occupied.is_empty() {
            return true;
        }
        let radius = self.rules.move_radius;
        self.occupied
            .keys()
            .any(|&(px, py)| px.abs_diff(x).saturating_add(py.abs_diff(y)) <= radius)
    }

    /// Check whether the piece of `symbol` just placed at `(x, y)` completes a
    /// winning line.
    ///
    /// For each direction the run through `(x, y)` is counted outward both
    /// ways until the first cell not holding `symbol`.
    pub fn check_win(&self, x: i64, y: i64, symbol: char) -> bool {
        for (dx, dy) in DIRECTIONS {
            let count = 1
                + self.run_length(x, y, dx, dy, symbol)
                + self.run_length(x, y, -dx, -dy, symbol);
            trace!(x, y, dx, dy, count, "line length");
            if count >= self.rules.win_length {
                return true;
            }
        }
        false
    }

    /// Bounding rectangle of play padded by `pad` on every side.
    pub fn get_bounds(&self, pad: i64) -> Bounds {
        self.bounds.padded(pad)
    }

    /// Count consecutive `symbol` cells starting one step from `(x, y)`.
    fn run_length(&self, x: i64, y: i64, dx: i64, dy: i64, symbol: char) -> usize {
        let mut count = 0;
        let (mut nx, mut ny) = (x, y);
        loop {
            match (nx.checked_add(dx), ny.checked_add(dy)) {
                (Some(cx), Some(cy)) => {
                    nx = cx;
                    ny = cy;
                }
                _ => break,
            }
            if self.get(nx, ny) != Some(symbol) {
                break;
            }
            count += 1;
        }
        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_lines(self, DEFAULT_PAD) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
