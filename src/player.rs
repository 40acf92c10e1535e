//! Players and turn order.

use crate::constants::{SYMBOL_FIRST, SYMBOL_SECOND};

/// A named player and the symbol their pieces show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub symbol: char,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// The two seats of a game. The first player moves first.
#[derive(Clone, Debug)]
pub struct Players {
    seats: [Player; 2],
    current: usize,
}

impl Players {
    /// Seat `first` as `X` and `second` as `O`.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            seats: [
                Player::new(first, SYMBOL_FIRST),
                Player::new(second, SYMBOL_SECOND),
            ],
            current: 0,
        }
    }

    /// Player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.seats[self.current]
    }

    pub fn switch_turns(&mut self) {
        self.current = (self.current + 1) % 2;
    }
}
