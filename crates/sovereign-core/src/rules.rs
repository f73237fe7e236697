//! The interface both variants expose to perft and to outer layers.

use std::fmt;
use std::str::FromStr;

use crate::chess_move::Move;
use crate::counters::MoveClass;
use crate::error::{ControlError, FenError, MoveError};

/// A chess variant: a board type plus its move generation and application.
pub trait Rules {
    /// Board state. `Display` writes FEN; `FromStr` parses it.
    type Board: Clone + fmt::Display + FromStr<Err = FenError>;

    /// Board width and height.
    const BOARD_SIZE: usize;

    /// Return every legal move for the side to move.
    fn legal_moves(board: &Self::Board) -> Result<Vec<Move>, ControlError>;

    /// Apply `mv` without checking it against the legal move set.
    ///
    /// Only cheap preconditions are checked (the source holds a piece of the
    /// side to move, the destination is on the board).
    fn make_move(board: &mut Self::Board, mv: Move) -> Result<MoveClass, MoveError>;

    /// Apply `mv` after verifying it is one of [`legal_moves`](Rules::legal_moves).
    fn play(board: &mut Self::Board, mv: Move) -> Result<MoveClass, MoveError> {
        for square in [mv.src(), mv.dest()] {
            if !square.in_bounds(Self::BOARD_SIZE) {
                return Err(MoveError::OffBoard { square });
            }
        }
        if !Self::legal_moves(board)?.contains(&mv) {
            return Err(MoveError::Illegal {
                text: mv.to_string(),
            });
        }
        Self::make_move(board, mv)
    }
}
