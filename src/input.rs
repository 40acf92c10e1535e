//! Parsing of what a player types at the coordinate prompt.
//!
//! Accepted forms are `x,y` and `x y`. The words `exit` and `quit` end the
//! session.

use std::num::ParseIntError;

use derive_more::{Display, Error};

use crate::board::Cell;

/// Words that end the session.
pub const EXIT_WORDS: &[&str] = &["exit", "quit"];

/// What a line of player input asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a piece at this cell.
    Move(Cell),
    /// Leave the game.
    Quit,
}

/// Why a line could not be read as coordinates.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseError {
    #[display("no coordinates given")]
    Empty,
    #[display("need exactly 2 coordinates, got {found}")]
    WrongArity { found: usize },
    #[display("'{text}' is not an integer")]
    NotAnInteger { text: String, source: ParseIntError },
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if EXIT_WORDS.contains(&line) {
        return Ok(Command::Quit);
    }
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (x, y) = match line.split_once(',') {
        Some(pair) => pair,
        None => {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[..] {
                [x, y] => (x, y),
                _ => return Err(ParseError::WrongArity { found: parts.len() }),
            }
        }
    };
    Ok(Command::Move((parse_int(x)?, parse_int(y)?)))
}

fn parse_int(text: &str) -> Result<i64, ParseError> {
    let text = text.trim();
    text.parse().map_err(|source| ParseError::NotAnInteger {
        text: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_form() {
        assert_eq!(parse_command("3,4"), Ok(Command::Move((3, 4))));
        assert_eq!(parse_command(" -3 , 12 "), Ok(Command::Move((-3, 12))));
    }

    #[test]
    fn test_space_form() {
        assert_eq!(parse_command("3 4"), Ok(Command::Move((3, 4))));
        assert_eq!(parse_command("-7\t-8"), Ok(Command::Move((-7, -8))));
    }

    #[test]
    fn test_exit_words() {
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(parse_command("  quit\n"), Ok(Command::Quit));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse_command("1 2 3"),
            Err(ParseError::WrongArity { found: 3 })
        );
        assert_eq!(parse_command("5"), Err(ParseError::WrongArity { found: 1 }));
    }

    #[test]
    fn test_not_an_integer() {
        let err = parse_command("a,1").unwrap_err();
        assert!(matches!(err, ParseError::NotAnInteger { ref text, .. } if text == "a"));
        assert_eq!(err.to_string(), "'a' is not an integer");
    }

    #[test]
    fn test_comma_splits_once() {
        // "1,2,3" splits into "1" and "2,3", which does not parse
        assert!(matches!(
            parse_command("1,2,3"),
            Err(ParseError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_command("1,"),
            Err(ParseError::NotAnInteger { .. })
        ));
    }
}
