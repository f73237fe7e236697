//! Classical 8x8 chess with castling, en passant, and promotion.

mod board;
mod castle_rights;
mod color;
mod fen;
mod legality;
mod make_move;
mod movegen;

pub use board::{Board, Piece, SIZE};
pub use castle_rights::{CastleRights, CastleSide};
pub use color::Color;
pub use fen::STARTING_FEN;
pub use legality::{captures_king, is_in_check, legal_moves, move_into_check};
pub use movegen::pseudo_legal_moves;

use crate::chess_move::Move;
use crate::counters::MoveClass;
use crate::error::{ControlError, MoveError};
use crate::rules::Rules;

/// Classical chess rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classical;

impl Rules for Classical {
    type Board = Board;

    const BOARD_SIZE: usize = SIZE;

    fn legal_moves(board: &Board) -> Result<Vec<Move>, ControlError> {
        Ok(legal_moves(board))
    }

    fn make_move(board: &mut Board, mv: Move) -> Result<MoveClass, MoveError> {
        board.make_move(mv)
    }
}
