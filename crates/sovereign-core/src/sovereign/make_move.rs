//! Move application for the Sovereign Chess board.

use tracing::trace;

use crate::chess_move::Move;
use crate::counters::MoveClass;
use crate::error::MoveError;

use super::board::{Board, SIZE};

impl Board {
    /// Apply `mv` in place and report what kind of move it was.
    ///
    /// The source must hold a piece whose color the player to move controls.
    /// The move is not checked against the generated move set.
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
        if self.controlling_player(piece.color())? != Some(self.player_to_move()) {
            return Err(MoveError::NotOwnPiece { square: mv.src() });
        }

        let class = self.apply(mv);
        trace!(%mv, ?class, "applied sovereign move");
        Ok(class)
    }

    /// Classify `mv` against the current position without applying it.
    pub fn classify(&self, mv: Move) -> MoveClass {
        if mv.promotion().is_some() {
            MoveClass::Promotion
        } else if self.piece_at(mv.dest()).is_some() {
            MoveClass::Capture
        } else {
            MoveClass::Quiet
        }
    }

    /// Apply `mv` with no validation.
    pub(crate) fn apply(&mut self, mv: Move) -> MoveClass {
        let class = self.classify(mv);
        let piece = self.piece_at(mv.src());
        let landed = match mv.promotion() {
            Some(kind) => piece.map(|p| p.with_kind(kind)),
            None => piece,
        };
        self.place_piece(mv.dest(), landed);
        self.place_piece(mv.src(), None);
        self.set_player_to_move(!self.player_to_move());
        class
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_move::Move;
    use crate::coord::Coord;
    use crate::counters::MoveClass;
    use crate::error::MoveError;
    use crate::piece_kind::PieceKind;
    use crate::sovereign::board::{Board, Piece};
    use crate::sovereign::color::{Color, Player};
    use crate::sovereign::layout::color_squares;

    fn mv(text: &str) -> Move {
        Move::parse(text, 16).unwrap()
    }

    #[test]
    fn pawn_push_is_quiet() {
        let mut board = Board::starting_position();
        assert_eq!(board.make_move(mv("h2h4")), Ok(MoveClass::Quiet));
        assert_eq!(board.player_to_move(), Player::Player2);
        assert_eq!(board.piece_at(Coord::new(1, 7)), None);
        assert_eq!(
            board.piece_at(Coord::new(3, 7)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn capturing_a_neutral_piece() {
        let mut board = Board::starting_position();
        assert_eq!(board.make_move(mv("e1d1")), Ok(MoveClass::Capture));
        assert_eq!(
            board.piece_at(Coord::new(0, 3)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(board.pieces().count(), 4 * 16 + 4 * 12 - 1);
    }

    #[test]
    fn explicit_promotion_is_honored() {
        let mut board = Board::empty();
        board.place_piece(Coord::new(7, 2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.make_move(mv("c8d8q")), Ok(MoveClass::Promotion));
        assert_eq!(
            board.piece_at(Coord::new(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn occupying_a_colored_square_changes_control() {
        let mut board = Board::empty();
        let [green_sq, _] = color_squares(Color::Green);
        let from = green_sq + Coord::new(-2, -1);
        board.place_piece(from, Some(Piece::new(PieceKind::Knight, Color::Black)));
        board.set_player_to_move(Player::Player2);
        board.make_move(Move::new(from, green_sq)).unwrap();
        assert_eq!(board.controlling_player(Color::Green), Ok(Some(Player::Player2)));
    }

    #[test]
    fn rejects_uncontrolled_pieces() {
        let mut board = Board::starting_position();
        assert!(matches!(
            board.make_move(mv("d1d3")),
            Err(MoveError::NotOwnPiece { .. })
        ));
        assert!(matches!(
            board.make_move(mv("eFeE")),
            Err(MoveError::NotOwnPiece { .. })
        ));
        assert!(matches!(
            board.make_move(mv("h8h9")),
            Err(MoveError::EmptySource { .. })
        ));
        assert_eq!(board, Board::starting_position());
    }
}
