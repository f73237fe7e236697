//! Pseudo-legal move generation for classical chess.
//!
//! Moves here obey piece movement and occupancy but may leave the mover's
//! king capturable; [`legal_moves`](super::legal_moves) filters those out.

use crate::chess_move::Move;
use crate::coord::{Coord, DIAGONAL_STEPS, KNIGHT_STEPS, ORTHOGONAL_STEPS};
use crate::piece_kind::PieceKind;

use super::board::{Board, Piece, SIZE};
use super::castle_rights::{CastleSide, KING_FILE};
use super::color::Color;

/// Generate every pseudo-legal move for the side to move.
///
/// Squares are visited rank 1 first, files a to h.
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut moves = Vec::with_capacity(64);

    for (src, piece) in board.pieces() {
        if piece.color() != us {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, src, us, &mut moves),
            PieceKind::Knight => gen_steps(board, src, &KNIGHT_STEPS, &mut moves),
            PieceKind::Bishop => gen_rays(board, src, &DIAGONAL_STEPS, &mut moves),
            PieceKind::Rook => gen_rays(board, src, &ORTHOGONAL_STEPS, &mut moves),
            PieceKind::Queen => {
                gen_rays(board, src, &ORTHOGONAL_STEPS, &mut moves);
                gen_rays(board, src, &DIAGONAL_STEPS, &mut moves);
            }
            PieceKind::King => {
                gen_steps(board, src, &DIAGONAL_STEPS, &mut moves);
                gen_steps(board, src, &ORTHOGONAL_STEPS, &mut moves);
                gen_castles(board, src, us, &mut moves);
            }
        }
    }

    moves
}

/// Single jumps (knight, king): any on-board target not holding a friendly piece.
fn gen_steps(board: &Board, src: Coord, steps: &[Coord], moves: &mut Vec<Move>) {
    let us = board.side_to_move();
    for &step in steps {
        let dest = src + step;
        if dest.in_bounds(SIZE) && board.piece_at(dest).is_none_or(|p| p.color() != us) {
            moves.push(Move::new(src, dest));
        }
    }
}

/// Sliding rays (bishop, rook, queen): run until the edge, a friendly piece, or a capture.
fn gen_rays(board: &Board, src: Coord, directions: &[Coord], moves: &mut Vec<Move>) {
    let us = board.side_to_move();
    for &step in directions {
        let mut dest = src + step;
        while dest.in_bounds(SIZE) {
            match board.piece_at(dest) {
                None => moves.push(Move::new(src, dest)),
                Some(p) if p.color() == us => break,
                Some(_) => {
                    moves.push(Move::new(src, dest));
                    break;
                }
            }
            dest = dest + step;
        }
    }
}

fn gen_pawn(board: &Board, src: Coord, us: Color, moves: &mut Vec<Move>) {
    let forward = Coord::new(us.pawn_direction(), 0);

    let single = src + forward;
    if single.in_bounds(SIZE) && board.piece_at(single).is_none() {
        push_pawn_move(src, single, moves);

        let double = single + forward;
        if src.rank == us.pawn_start_rank() && double.in_bounds(SIZE) && board.piece_at(double).is_none() {
            moves.push(Move::new(src, double));
        }
    }

    for side in [-1, 1] {
        let dest = single + Coord::new(0, side);
        if !dest.in_bounds(SIZE) {
            continue;
        }
        let enemy = board.piece_at(dest).is_some_and(|p| p.color() != us);
        if enemy || board.en_passant() == Some(dest) {
            push_pawn_move(src, dest, moves);
        }
    }
}

/// Push a pawn move, expanded into one move per promotion piece on the last rank.
fn push_pawn_move(src: Coord, dest: Coord, moves: &mut Vec<Move>) {
    if dest.rank == 0 || dest.rank == SIZE as i8 - 1 {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::new_promotion(src, dest, kind));
        }
    } else {
        moves.push(Move::new(src, dest));
    }
}

/// Castling as a two-file king move, gated on rights and empty squares between
/// king and rook. Whether the king passes through check is left to the legality filter.
fn gen_castles(board: &Board, src: Coord, us: Color, moves: &mut Vec<Move>) {
    let rank = us.back_rank();
    if src != Coord::new(rank, KING_FILE) {
        return;
    }

    for side in CastleSide::ALL {
        if !board.castling().has(us, side) {
            continue;
        }
        let rook_sq = side.rook_origin(us);
        if board.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }

        let (lo, hi) = if rook_sq.file > src.file {
            (src.file + 1, rook_sq.file)
        } else {
            (rook_sq.file + 1, src.file)
        };
        if (lo..hi).all(|file| board.piece_at(Coord::new(rank, file)).is_none()) {
            moves.push(Move::new(src, Coord::new(rank, side.king_dest_file())));
        }
    }
}
