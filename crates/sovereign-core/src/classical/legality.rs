//! Legal move filtering: drop pseudo-legal moves that leave the king capturable.

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

use super::board::Board;
use super::movegen::pseudo_legal_moves;

/// Return `true` if any pseudo-legal move of the side to move lands on a king.
pub fn captures_king(board: &Board) -> bool {
    pseudo_legal_moves(board)
        .iter()
        .any(|mv| board.piece_at(mv.dest()).is_some_and(|p| p.kind() == PieceKind::King))
}

/// Return `true` if the side to move's king is attacked.
pub fn is_in_check(board: &Board) -> bool {
    let mut opponent_view = *board;
    opponent_view.set_side_to_move(!board.side_to_move());
    captures_king(&opponent_view)
}

/// Return `true` if playing `mv` would let the opponent capture a king.
pub fn move_into_check(board: &Board, mv: Move) -> bool {
    let mut child = *board;
    child.apply(mv);
    captures_king(&child)
}

/// Generate every legal move for the side to move.
///
/// Castling is additionally refused while in check, or when the king's
/// first step toward the rook would already be attacked.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = pseudo_legal_moves(board);
    let mut in_check = None;

    moves.retain(|&mv| {
        if board.is_castle(mv) {
            if *in_check.get_or_insert_with(|| is_in_check(board)) {
                return false;
            }
            let step = if mv.dest().file > mv.src().file { 1 } else { -1 };
            let through = Move::new(mv.src(), mv.src() + Coord::new(0, step));
            if move_into_check(board, through) {
                return false;
            }
        }
        !move_into_check(board, mv)
    });

    moves
}
