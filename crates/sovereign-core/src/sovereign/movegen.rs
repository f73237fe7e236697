//! Move generation for Sovereign Chess.
//!
//! A player moves every piece whose color they control. Colored squares
//! restrict destinations through [`color_rule_allows`].

use crate::chess_move::Move;
use crate::coord::{Coord, DIAGONAL_STEPS, KNIGHT_STEPS, ORTHOGONAL_STEPS};
use crate::error::ControlError;
use crate::piece_kind::PieceKind;

use super::board::{Board, Piece, SIZE};
use super::color::Player;
use super::control::ControlMap;
use super::layout::{partner, square_color};

/// Return `true` if `piece` may land on `dest`.
///
/// A plain square is always allowed. A colored square is never allowed to a
/// piece of that same color. An occupied colored square may be captured on;
/// an empty one may be entered only while its partner square is empty.
pub fn color_rule_allows(board: &Board, piece: Piece, dest: Coord) -> bool {
    let Some(color) = square_color(dest) else {
        return true;
    };
    if color == piece.color() {
        return false;
    }
    if board.piece_at(dest).is_some() {
        return true;
    }
    partner(dest).is_none_or(|other| board.piece_at(other).is_none())
}

/// Generate every pseudo-legal move for the player to move.
///
/// Squares are visited rank 1 first, files a to p.
pub fn pseudo_legal_moves(board: &Board) -> Result<Vec<Move>, ControlError> {
    let generator = Generator {
        board,
        control: ControlMap::of(board)?,
        us: board.player_to_move(),
    };
    let mut moves = Vec::with_capacity(64);

    for (src, piece) in board.pieces() {
        if generator.control.controller(piece.color()) != Some(generator.us) {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => generator.pawn(src, piece, &mut moves),
            PieceKind::Knight => generator.steps(src, piece, &KNIGHT_STEPS, &mut moves),
            PieceKind::Bishop => generator.rays(src, piece, &DIAGONAL_STEPS, &mut moves),
            PieceKind::Rook => generator.rays(src, piece, &ORTHOGONAL_STEPS, &mut moves),
            PieceKind::Queen => {
                generator.rays(src, piece, &ORTHOGONAL_STEPS, &mut moves);
                generator.rays(src, piece, &DIAGONAL_STEPS, &mut moves);
            }
            PieceKind::King => {
                generator.steps(src, piece, &DIAGONAL_STEPS, &mut moves);
                generator.steps(src, piece, &ORTHOGONAL_STEPS, &mut moves);
            }
        }
    }

    Ok(moves)
}

struct Generator<'a> {
    board: &'a Board,
    control: ControlMap,
    us: Player,
}

impl Generator<'_> {
    fn is_friendly(&self, piece: Piece) -> bool {
        self.control.controller(piece.color()) == Some(self.us)
    }

    fn is_opponent(&self, piece: Piece) -> bool {
        self.control.controller(piece.color()) == Some(!self.us)
    }

    fn steps(&self, src: Coord, piece: Piece, steps: &[Coord], moves: &mut Vec<Move>) {
        for &step in steps {
            let dest = src + step;
            if !dest.in_bounds(SIZE) {
                continue;
            }
            if self.board.piece_at(dest).is_some_and(|p| self.is_friendly(p)) {
                continue;
            }
            if color_rule_allows(self.board, piece, dest) {
                moves.push(Move::new(src, dest));
            }
        }
    }

    /// Slide outward. An empty square refused by the color rule is passed over, not a blocker.
    fn rays(&self, src: Coord, piece: Piece, directions: &[Coord], moves: &mut Vec<Move>) {
        for &step in directions {
            let mut dest = src + step;
            while dest.in_bounds(SIZE) {
                match self.board.piece_at(dest) {
                    None => {
                        if color_rule_allows(self.board, piece, dest) {
                            moves.push(Move::new(src, dest));
                        }
                    }
                    Some(p) if self.is_friendly(p) => break,
                    Some(_) => {
                        if color_rule_allows(self.board, piece, dest) {
                            moves.push(Move::new(src, dest));
                        }
                        break;
                    }
                }
                dest = dest + step;
            }
        }
    }

    /// Pawns move toward the center: a step qualifies if it brings the pawn
    /// closer to the middle along at least one axis.
    fn pawn(&self, src: Coord, piece: Piece, moves: &mut Vec<Move>) {
        for &step in &ORTHOGONAL_STEPS {
            if !approaches_center(src, step) {
                continue;
            }
            let one = src + step;
            if !one.in_bounds(SIZE) || self.board.piece_at(one).is_some() {
                continue;
            }
            if color_rule_allows(self.board, piece, one) {
                moves.push(Move::new(src, one));
            }

            if on_outer_rings(src) && approaches_center(one, step) {
                let two = one + step;
                if two.in_bounds(SIZE)
                    && self.board.piece_at(two).is_none()
                    && color_rule_allows(self.board, piece, two)
                {
                    moves.push(Move::new(src, two));
                }
            }
        }

        for &step in &DIAGONAL_STEPS {
            if !approaches_center(src, step) {
                continue;
            }
            let dest = src + step;
            let Some(target) = self.board.piece_at(dest) else {
                continue;
            };
            if self.is_opponent(target) && color_rule_allows(self.board, piece, dest) {
                moves.push(Move::new(src, dest));
            }
        }
    }
}

/// Whether moving one unit along `delta` (-1, 0 or 1) from `x` lands nearer the middle line.
///
/// Distances are doubled so the center of a 16-wide board sits on an integer (15).
fn axis_closer(x: i8, delta: i8) -> bool {
    let center = SIZE as i8 - 1;
    delta != 0 && (2 * (x + delta) - center).abs() < (2 * x - center).abs()
}

fn approaches_center(src: Coord, step: Coord) -> bool {
    axis_closer(src.rank, step.rank) || axis_closer(src.file, step.file)
}

/// Double steps start from the two outermost rings only.
fn on_outer_rings(c: Coord) -> bool {
    let last = SIZE as i8 - 1;
    c.rank.min(c.file).min(last - c.rank).min(last - c.file) <= 1
}
