//! Sovereign Chess: a 16x16 board where colored squares decide which
//! player commands each of twelve piece colors.
//!
//! Only movement, capture and color control are modelled. Check, castling,
//! and a king changing color on capture are not: the legal move set is the
//! pseudo-legal one.

mod board;
mod color;
mod control;
mod fen;
mod layout;
mod make_move;
mod movegen;

pub use board::{Board, Piece, SIZE};
pub use color::{Color, Player};
pub use control::ControlMap;
pub use fen::STARTING_FEN;
pub use layout::{color_squares, partner, square_color};
pub use movegen::{color_rule_allows, pseudo_legal_moves};

use crate::chess_move::Move;
use crate::counters::MoveClass;
use crate::error::{ControlError, MoveError};
use crate::rules::Rules;

/// Every move the player to move may make. No king-safety filter is applied.
pub fn legal_moves(board: &Board) -> Result<Vec<Move>, ControlError> {
    pseudo_legal_moves(board)
}

/// Sovereign Chess rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sovereign;

impl Rules for Sovereign {
    type Board = Board;

    const BOARD_SIZE: usize = SIZE;

    fn legal_moves(board: &Board) -> Result<Vec<Move>, ControlError> {
        legal_moves(board)
    }

    fn make_move(board: &mut Board, mv: Move) -> Result<MoveClass, MoveError> {
        board.make_move(mv)
    }
}
