//! The classical board: piece grid, side to move, castling rights, and en passant target.

use std::fmt;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::piece_kind::PieceKind;

use super::castle_rights::{CastleRights, CastleSide, KING_FILE};
use super::color::Color;

/// Board width and height.
pub const SIZE: usize = 8;

/// A classical chess piece.
pub type Piece = crate::piece::Piece<Color>;

/// Back-rank piece order, file a to file h.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete classical position state.
///
/// A plain value: copy it to branch a search, mutate it in place to advance a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid<Piece, SIZE>,
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// Square a pawn skipped over on the previous move, if any.
    en_passant: Option<Coord>,
}

impl Board {
    /// An empty board, White to move, with every castling right still set.
    ///
    /// Rights stay inert until a king and rook stand on their origin squares.
    pub const fn empty() -> Board {
        Board {
            grid: Grid::empty(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as i8;
            for color in Color::ALL {
                board.place_piece(Coord::new(color.back_rank(), file), Some(Piece::new(kind, color)));
                board.place_piece(
                    Coord::new(color.pawn_start_rank(), file),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Return the piece on `coord`, if any. Off-board coordinates are empty.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.grid.get(coord)
    }

    /// Put `piece` on `coord`, or clear the square with `None`.
    ///
    /// No validation: callers are responsible for well-formed placements.
    #[inline]
    pub fn place_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        self.grid.set(coord, piece);
    }

    /// Iterate over occupied squares, rank 1 first, files a to h.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.grid.occupied()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Drop the given rights. Rights can never be regained.
    #[inline]
    pub(crate) fn revoke_castling(&mut self, rights: CastleRights) {
        self.castling = self.castling.remove(rights);
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Coord> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, coord: Option<Coord>) {
        self.en_passant = coord;
    }

    /// Clear every castling right whose king or rook is missing from its origin square.
    pub(crate) fn infer_castling_rights(&mut self) {
        for color in Color::ALL {
            let king_home = Coord::new(color.back_rank(), KING_FILE);
            if self.piece_at(king_home) != Some(Piece::new(PieceKind::King, color)) {
                self.revoke_castling(CastleRights::flag(color, CastleSide::KingSide));
                self.revoke_castling(CastleRights::flag(color, CastleSide::QueenSide));
            }
            for side in CastleSide::ALL {
                if self.piece_at(side.rook_origin(color)) != Some(Piece::new(PieceKind::Rook, color)) {
                    self.revoke_castling(CastleRights::flag(color, side));
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Piece};
    use crate::classical::castle_rights::CastleRights;
    use crate::classical::color::Color;
    use crate::coord::Coord;
    use crate::piece_kind::PieceKind;

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn starting_position_piece_at() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(Coord::new(0, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Coord::new(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(Coord::new(6, 5)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.piece_at(Coord::new(3, 4)), None);
        assert_eq!(board.castling(), CastleRights::ALL);
    }

    #[test]
    fn place_and_clear() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        board.place_piece(Coord::new(4, 4), Some(knight));
        assert_eq!(board.piece_at(Coord::new(4, 4)), Some(knight));
        board.place_piece(Coord::new(4, 4), None);
        assert_eq!(board.piece_at(Coord::new(4, 4)), None);
    }

    #[test]
    fn infer_castling_rights_clears_missing_rooks_and_kings() {
        let mut board = Board::empty();
        board.place_piece(Coord::new(0, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.place_piece(Coord::new(0, 7), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.place_piece(Coord::new(7, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.infer_castling_rights();
        assert_eq!(board.castling(), CastleRights::WHITE_KING);
    }

    #[test]
    fn side_to_move_mutator() {
        let mut board = Board::empty();
        board.set_side_to_move(Color::Black);
        assert_eq!(board.side_to_move(), Color::Black);
    }
}
