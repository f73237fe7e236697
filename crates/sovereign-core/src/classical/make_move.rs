//! Move application for the classical board.

use tracing::trace;

use crate::chess_move::Move;
use crate::counters::MoveClass;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::piece_kind::PieceKind;

use super::board::{Board, Piece, SIZE};
use super::castle_rights::{CastleRights, CastleSide};

impl Board {
    /// Apply `mv` in place and report what kind of move it was.
    ///
    /// The move is not checked against the legal move set; only the source
    /// square and the destination bounds are validated.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveClass, MoveError> {
        if !mv.src().in_bounds(SIZE) {
            return Err(MoveError::OffBoard { square: mv.src() });
        }
        if !mv.dest().in_bounds(SIZE) {
            return Err(MoveError::OffBoard { square: mv.dest() });
        }
        let piece = self
            .piece_at(mv.src())
            .ok_or(MoveError::EmptySource { square: mv.src() })?;
        if piece.color() != self.side_to_move() {
            return Err(MoveError::NotOwnPiece { square: mv.src() });
        }

        let class = self.apply(mv);
        trace!(%mv, ?class, "applied classical move");
        Ok(class)
    }

    /// Return `true` if `mv` is a king moving two files.
    pub fn is_castle(&self, mv: Move) -> bool {
        self.piece_at(mv.src()).is_some_and(|p| p.kind() == PieceKind::King)
            && (mv.dest().file - mv.src().file).abs() == 2
    }

    /// Return `true` if `mv` is a pawn moving diagonally onto an empty square.
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.piece_at(mv.src()).is_some_and(|p| p.kind() == PieceKind::Pawn)
            && mv.src().file != mv.dest().file
            && self.piece_at(mv.dest()).is_none()
    }

    /// Classify `mv` against the current position without applying it.
    pub fn classify(&self, mv: Move) -> MoveClass {
        if mv.promotion().is_some() {
            MoveClass::Promotion
        } else if self.is_castle(mv) {
            MoveClass::Castle
        } else if self.is_en_passant(mv) {
            MoveClass::EnPassant
        } else if self.piece_at(mv.dest()).is_some() {
            MoveClass::Capture
        } else {
            MoveClass::Quiet
        }
    }

    /// Apply `mv` with no validation. The source square must hold a piece.
    pub(crate) fn apply(&mut self, mv: Move) -> MoveClass {
        let (src, dest) = (mv.src(), mv.dest());
        let Some(piece) = self.piece_at(src) else {
            debug_assert!(false, "apply: no piece on {src}");
            return MoveClass::Quiet;
        };
        let us = piece.color();
        let class = self.classify(mv);

        self.update_castling(piece, src, dest);

        let double_step = piece.kind() == PieceKind::Pawn && (dest.rank - src.rank).abs() == 2;
        self.set_en_passant(double_step.then(|| Coord::new((src.rank + dest.rank) / 2, src.file)));

        match class {
            MoveClass::Promotion => {
                let kind = mv.promotion().unwrap_or(PieceKind::Queen);
                self.place_piece(dest, Some(piece.with_kind(kind)));
            }
            MoveClass::Castle => {
                let side = if dest.file > src.file {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                let rook_from = side.rook_origin(us);
                let rook = self.piece_at(rook_from);
                self.place_piece(rook_from, None);
                self.place_piece(Coord::new(src.rank, side.rook_dest_file()), rook);
                self.revoke_castling(CastleRights::flag(us, side));
                self.place_piece(dest, Some(piece));
            }
            MoveClass::EnPassant => {
                self.place_piece(Coord::new(dest.rank - us.pawn_direction(), dest.file), None);
                self.place_piece(dest, Some(piece));
            }
            MoveClass::Capture | MoveClass::Quiet => {
                self.place_piece(dest, Some(piece));
            }
        }

        self.place_piece(src, None);
        self.set_side_to_move(!us);
        class
    }

    /// Drop rights invalidated by a piece leaving `src` for `dest`.
    fn update_castling(&mut self, piece: Piece, src: Coord, dest: Coord) {
        let us = piece.color();
        if piece.kind() == PieceKind::King {
            self.revoke_castling(CastleRights::flag(us, CastleSide::KingSide));
            self.revoke_castling(CastleRights::flag(us, CastleSide::QueenSide));
        }
        for side in CastleSide::ALL {
            if piece.kind() == PieceKind::Rook && src == side.rook_origin(us) {
                self.revoke_castling(CastleRights::flag(us, side));
            }
            if dest == side.rook_origin(!us) {
                self.revoke_castling(CastleRights::flag(!us, side));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_move::Move;
    use crate::classical::board::{Board, Piece};
    use crate::classical::castle_rights::CastleRights;
    use crate::classical::color::Color;
    use crate::coord::Coord;
    use crate::counters::MoveClass;
    use crate::error::MoveError;
    use crate::piece_kind::PieceKind;

    fn parse(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn mv(text: &str) -> Move {
        Move::parse(text, 8).unwrap()
    }

    #[test]
    fn quiet_double_push_sets_en_passant() {
        let mut board = Board::starting_position();
        assert_eq!(board.make_move(mv("e2e4")), Ok(MoveClass::Quiet));
        assert_eq!(board.en_passant(), Some(Coord::new(2, 4)));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.piece_at(Coord::new(1, 4)), None);
        assert_eq!(
            board.piece_at(Coord::new(3, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );

        board.make_move(mv("g8f6")).unwrap();
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn capture_is_classified() {
        let mut board = parse("8/8/8/3p4/4P3/8/8/8 w - - 0 1");
        assert_eq!(board.make_move(mv("e4d5")), Ok(MoveClass::Capture));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let mut board = parse("8/8/8/3pP3/8/8/8/8 w - d6 0 1");
        assert_eq!(board.make_move(mv("e5d6")), Ok(MoveClass::EnPassant));
        assert_eq!(board.piece_at(Coord::new(4, 3)), None);
        assert_eq!(
            board.piece_at(Coord::new(5, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn black_en_passant() {
        let mut board = parse("8/8/8/8/3Pp3/8/8/8 b - d3 0 1");
        assert_eq!(board.make_move(mv("e4d3")), Ok(MoveClass::EnPassant));
        assert_eq!(board.piece_at(Coord::new(3, 3)), None);
    }

    #[test]
    fn promotion_replaces_pawn() {
        let mut board = parse("1r6/P7/8/8/8/8/8/8 w - - 0 1");
        assert_eq!(board.make_move(mv("a7b8n")), Ok(MoveClass::Promotion));
        assert_eq!(
            board.piece_at(Coord::new(7, 1)),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(board.piece_at(Coord::new(6, 0)), None);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let mut board = parse("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(board.make_move(mv("e1g1")), Ok(MoveClass::Castle));
        assert_eq!(
            board.piece_at(Coord::new(0, 5)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(board.piece_at(Coord::new(0, 7)), None);
        assert_eq!(board.castling().to_string(), "kq");
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let mut board = parse("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(board.make_move(mv("e8c8")), Ok(MoveClass::Castle));
        assert_eq!(
            board.piece_at(Coord::new(7, 3)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            board.piece_at(Coord::new(7, 2)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(board.castling().to_string(), "KQ");
    }

    #[test]
    fn rook_moves_and_captures_revoke_rights() {
        let mut board = parse("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        board.make_move(mv("a1a8")).unwrap();
        assert!(!board.castling().contains(CastleRights::WHITE_QUEEN));
        assert!(!board.castling().contains(CastleRights::BLACK_QUEEN));
        assert!(board.castling().contains(CastleRights::WHITE_KING));
        assert!(board.castling().contains(CastleRights::BLACK_KING));
    }

    #[test]
    fn rejects_empty_source_and_wrong_side() {
        let mut board = Board::starting_position();
        assert!(matches!(
            board.make_move(mv("e4e5")),
            Err(MoveError::EmptySource { .. })
        ));
        assert!(matches!(
            board.make_move(mv("e7e5")),
            Err(MoveError::NotOwnPiece { .. })
        ));
        assert_eq!(board, Board::starting_position());
    }
}
