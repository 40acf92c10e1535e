//! Rule parameters consulted by the board.

use crate::constants::{MOVE_RADIUS, WIN_LENGTH};

/// How long a winning line is and how far a move may land from existing play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Pieces in a row needed to win.
    pub win_length: usize,
    /// Maximum Manhattan distance from some occupied cell.
    pub move_radius: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_length: WIN_LENGTH,
            move_radius: MOVE_RADIUS,
        }
    }
}
