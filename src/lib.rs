//! N-Row: connect five on an unbounded grid.
//!
//! Two players take turns placing `X` and `O` anywhere on an infinite plane,
//! as long as each new piece lands within three steps (Manhattan distance)
//! of a piece already on the board. Five in a row in any of the four line
//! directions wins.
//!
//! ## Modules
//!
//! - [`constants`] - Rule constants, line directions, symbols, palette
//! - [`rules`] - Rule parameters consulted by the board
//! - [`board`] - Sparse board: placement, move legality, win detection
//! - [`render`] - Text grid of the occupied area
//! - [`printer`] - Rainbow line printer for the console
//! - [`input`] - Coordinate parsing
//! - [`player`] - Players and turn order
//! - [`game`] - Console turn controller
//! - [`interrupt`] - Ctrl-C message and exit
//! - [`playout`] - Seeded random self-play
//!
//! ## Example
//!
//! ```
//! use nrow::board::Board;
//!
//! let mut board = Board::new();
//! for x in 0..5 {
//!     assert!(board.is_valid_move(x, 0));
//!     board.place_piece(x, 0, 'X');
//! }
//! assert!(board.check_win(4, 0, 'X'));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod input;
pub mod interrupt;
pub mod player;
pub mod playout;
pub mod printer;
pub mod render;
pub mod rules;
