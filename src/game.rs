//! Turn controller for a console game between two people.
//!
//! The controller reads one line per prompt from any [`BufRead`] and writes
//! through a [`ColorPrinter`], so a whole game can be scripted for tests.
//!
//! ## Turn
//!
//! 1. Prompt the current player for coordinates
//! 2. Re-prompt on malformed input or an illegal move
//! 3. Place the piece, redraw the board
//! 4. Stop on a win, otherwise hand the turn over
//!
//! `exit`, `quit` or end of input ends the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::input::{Command, parse_command};
use crate::player::{Player, Players};
use crate::printer::ColorPrinter;
use crate::render::render_lines;

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `player` completed a line with the piece at `at`.
    Won { player: Player, at: Cell },
    /// A player typed an exit word or input ran out.
    Exited,
}

/// One game: the board, the two seats, and the console.
pub struct Game<R: BufRead, W: Write> {
    board: Board,
    players: Players,
    input: R,
    printer: ColorPrinter<W>,
    pad: i64,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(players: Players, input: R, printer: ColorPrinter<W>, pad: i64) -> Self {
        Self {
            board: Board::new(),
            players,
            input,
            printer,
            pad,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run turns until someone wins or the session is abandoned.
    pub fn play(&mut self) -> Result<Outcome> {
        info!("game started");
        self.say("Welcome to N-Row Game!")?;
        self.say("Get 5 in a row (horizontal, vertical, or diagonal) to win!")?;
        self.say(&"=".repeat(50))?;
        self.say("\nInitial board:")?;
        self.render()?;

        loop {
            let Some((x, y)) = self.get_player_move()? else {
                info!("game exited");
                return Ok(Outcome::Exited);
            };

            let player = self.players.current().clone();
            self.board.place_piece(x, y, player.symbol);

            self.say(&format!("\nBoard after {}'s move:", player.name))?;
            self.render()?;

            if self.board.check_win(x, y, player.symbol) {
                info!(name = %player.name, x, y, "game won");
                self.say(&format!("\n🎉 Congratulations! {} wins! 🎉", player.name))?;
                self.say("Thanks for playing!")?;
                return Ok(Outcome::Won {
                    player,
                    at: (x, y),
                });
            }

            self.players.switch_turns();
            self.say(&"-".repeat(30))?;
        }
    }

    /// Prompt until the current player gives a legal move.
    /// Returns `None` when the player quits or input ends.
    fn get_player_move(&mut self) -> Result<Option<Cell>> {
        loop {
            let player = self.players.current();
            let turn = format!("\n{}'s turn ({})", player.name, player.symbol);
            self.say(&turn)?;
            self.say("Enter coordinates (x,y): ")?;

            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Move((x, y))) if self.board.is_valid_move(x, y) => {
                    return Ok(Some((x, y)));
                }
                Ok(Command::Move((x, y))) => {
                    debug!(x, y, "rejected move");
                    self.say("Invalid move! Remember:")?;
                    self.say("- Can't place on occupied space")?;
                    self.say("- Must be within 3 moves of existing piece (except first move)")?;
                }
                Err(err) => {
                    debug!(%err, "unparsable coordinates");
                    self.say("Please enter coordinates as 'x,y' or 'x y' (e.g., '3,4' or '3 4')")?;
                }
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        for line in render_lines(&self.board, self.pad) {
            self.say(&line)?;
        }
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.printer
            .print_colored(message)
            .context("failed to write to console")
    }

    /// Give back the printer, e.g. to print a farewell.
    pub fn into_printer(self) -> ColorPrinter<W> {
        self.printer
    }
}

/// Prompt for a player's name. Returns `None` if input ends first.
pub fn ask_name<R: BufRead, W: Write>(
    input: &mut R,
    printer: &mut ColorPrinter<W>,
    seat: usize,
) -> Result<Option<String>> {
    printer
        .print_colored(&format!("Enter name for Player {seat}: "))
        .context("failed to write to console")?;
    Ok(read_line(input)?.map(|name| name.trim().to_string()))
}

/// Read one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read player input")?;
    Ok((n > 0).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Game<Cursor<Vec<u8>>, Vec<u8>> {
        Game::new(
            Players::new("Ann", "Bob"),
            Cursor::new(input.as_bytes().to_vec()),
            ColorPrinter::plain(Vec::new()),
            3,
        )
    }

    fn output(game: Game<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(game.into_printer().into_inner()).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let mut game = scripted("quit\n");
        assert_eq!(game.play().unwrap(), Outcome::Exited);
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_eof_exits() {
        let mut game = scripted("0,0\n");
        assert_eq!(game.play().unwrap(), Outcome::Exited);
        assert_eq!(game.board().get(0, 0), Some('X'));
    }

    #[test]
    fn test_reprompt_on_bad_input() {
        let mut game = scripted("hello\n0 0\n0 0\n9 9\nexit\n");
        assert_eq!(game.play().unwrap(), Outcome::Exited);
        assert_eq!(game.board().len(), 1);
        let out = output(game);
        assert!(out.contains("Please enter coordinates as 'x,y' or 'x y'"));
        assert_eq!(out.matches("Invalid move! Remember:").count(), 2);
        assert!(out.contains("Bob's turn (O)"));
    }

    #[test]
    fn test_ask_name_trims() {
        let mut input = Cursor::new(b"  Ann  \n".to_vec());
        let mut printer = ColorPrinter::plain(Vec::new());
        let name = ask_name(&mut input, &mut printer, 1).unwrap();
        assert_eq!(name.as_deref(), Some("Ann"));
        assert_eq!(printer.into_inner(), b"Enter name for Player 1: \n");
        assert_eq!(ask_name(&mut input, &mut ColorPrinter::plain(Vec::new()), 2).unwrap(), None);
    }
}
