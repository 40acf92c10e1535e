//! Rule constants, line directions, symbols and the console palette.
//!
//! The board itself has no size: every coordinate is a signed integer pair.
//! What is fixed is how many pieces make a winning line and how far from
//! existing play a new piece may land.

// =============================================================================
// Rules
// =============================================================================

/// Number of same-symbol pieces in a line needed to win.
pub const WIN_LENGTH: usize = 5;

/// Maximum Manhattan distance from an occupied cell for a new piece.
pub const MOVE_RADIUS: u64 = 3;

/// Default number of empty cells drawn around the occupied area.
pub const DEFAULT_PAD: i64 = 3;

// =============================================================================
// Line Directions
// =============================================================================

/// The four undirected lines checked for a win.
/// Order: horizontal, vertical, diagonal, anti-diagonal
pub const DIRECTIONS: [(i64, i64); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

// =============================================================================
// Symbols
// =============================================================================

/// Symbol of the first player.
pub const SYMBOL_FIRST: char = 'X';

/// Symbol of the second player.
pub const SYMBOL_SECOND: char = 'O';

/// Marker drawn for an empty cell.
pub const EMPTY: char = '.';

// =============================================================================
// Console Palette
// =============================================================================

/// ANSI colours cycled by the printer, one per line.
/// Order: red, orange, yellow, green, blue, indigo, violet
pub const RAINBOW: [&str; 7] = [
    "\x1b[91m",
    "\x1b[38;5;208m",
    "\x1b[93m",
    "\x1b[32m",
    "\x1b[94m",
    "\x1b[95m",
    "\x1b[96m",
];

/// ANSI sequence restoring the terminal's default colour.
pub const RESET: &str = "\x1b[0m";
