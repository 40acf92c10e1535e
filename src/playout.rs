//! Random self-play.
//!
//! A playout places uniformly random legal moves for `X` and `O` in turn until
//! one of them completes a line or the move cap is reached. It drives the board
//! the same way the turn controller does: validate, place, check for a win.
//! Playouts are seeded, so the same seed always gives the same game.

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{Board, Cell};
use crate::constants::{SYMBOL_FIRST, SYMBOL_SECOND};

/// Result of a random game.
#[derive(Clone, Debug)]
pub struct Playout {
    pub board: Board,
    /// Moves in the order they were played, with their symbol.
    pub moves: Vec<(Cell, char)>,
    /// Symbol that completed a line, if any.
    pub winner: Option<char>,
}

/// Play a random game from an empty board.
pub fn random_game(seed: u64, max_moves: usize) -> Playout {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut winner = None;

    let symbols = [SYMBOL_FIRST, SYMBOL_SECOND];
    while moves.len() < max_moves {
        let symbol = symbols[moves.len() % 2];
        let candidates = candidate_moves(&board);
        let Some(&(x, y)) = candidates.get(rng.usize(..candidates.len().max(1))) else {
            break;
        };
        debug_assert!(board.is_valid_move(x, y));

        board.place_piece(x, y, symbol);
        moves.push(((x, y), symbol));
        if board.check_win(x, y, symbol) {
            winner = Some(symbol);
            break;
        }
    }

    debug!(seed, moves = moves.len(), ?winner, "playout finished");
    Playout {
        board,
        moves,
        winner,
    }
}

/// All legal cells, sorted. The origin alone on an empty board.
pub fn candidate_moves(board: &Board) -> Vec<Cell> {
    if board.is_empty() {
        return vec![(0, 0)];
    }
    let r = i64::try_from(board.rules().move_radius).unwrap_or(i64::MAX);
    let mut cells = BTreeSet::new();
    for ((px, py), _) in board.pieces() {
        for dx in -r..=r {
            let span = r - dx.abs();
            for dy in -span..=span {
                let (x, y) = (px.saturating_add(dx), py.saturating_add(dy));
                if board.is_valid_move(x, y) {
                    cells.insert((x, y));
                }
            }
        }
    }
    cells.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;

    #[test]
    fn test_candidates_empty_board() {
        assert_eq!(candidate_moves(&Board::new()), vec![(0, 0)]);
    }

    #[test]
    fn test_candidates_single_piece() {
        let mut board = Board::new();
        board.place_piece(0, 0, 'X');
        let cells = candidate_moves(&board);
        // diamond of radius 3 has 25 cells, minus the occupied centre
        assert_eq!(cells.len(), 24);
        assert!(!cells.contains(&(0, 0)));
        assert!(cells.contains(&(3, 0)));
        assert!(!cells.contains(&(2, 2)));
    }

    #[test]
    fn test_candidates_match_legality() {
        for radius in [0, 1, 2, 3] {
            let mut board = Board::with_rules(Rules {
                move_radius: radius,
                ..Rules::default()
            });
            board.place_piece(0, 0, 'X');
            board.place_piece(2, 1, 'O');
            let expected: Vec<Cell> = (-6..=6)
                .flat_map(|x| (-6..=6).map(move |y| (x, y)))
                .filter(|&(x, y)| board.is_valid_move(x, y))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            assert_eq!(candidate_moves(&board), expected, "radius {radius}");
        }
    }

    #[test]
    fn test_zero_radius_has_no_candidates() {
        let mut board = Board::with_rules(Rules {
            move_radius: 0,
            ..Rules::default()
        });
        board.place_piece(0, 0, 'X');
        assert!(candidate_moves(&board).is_empty());
        assert!(!board.is_valid_move(1, 0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = random_game(42, 60);
        let b = random_game(42, 60);
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn test_move_cap() {
        let p = random_game(7, 3);
        assert!(p.moves.len() <= 3);
        assert_eq!(p.board.len(), p.moves.len());
    }

    #[test]
    fn test_zero_moves() {
        let p = random_game(1, 0);
        assert!(p.moves.is_empty());
        assert!(p.winner.is_none());
    }
}
