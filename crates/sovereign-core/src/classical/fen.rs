//! FEN string parsing and serialization for the classical [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::FenError;
use crate::piece_kind::PieceKind;

use super::board::{Board, Piece, SIZE};
use super::color::Color;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string.
    ///
    /// Only the placement field is required. The side-to-move field defaults
    /// to White and the en passant field to none. The castling field is
    /// accepted but not read: rights are inferred from whether each king and
    /// rook still stands on its origin square. Move counters are ignored.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != SIZE {
            return Err(FenError::WrongRankCount {
                expected: SIZE,
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN ranks go from 8 to 1 (top to bottom)
            let rank = (SIZE - 1 - rank_index) as i8;
            let mut file_index = 0usize;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as usize;
                } else {
                    let kind = PieceKind::from_fen_char(c).ok_or(FenError::InvalidPieceChar {
                        character: c,
                    })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };

                    if file_index >= SIZE {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file_index + 1,
                            expected: SIZE,
                        });
                    }

                    board.place_piece(Coord::new(rank, file_index as i8), Some(Piece::new(kind, color)));
                    file_index += 1;
                }
            }

            if file_index != SIZE {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index,
                    expected: SIZE,
                });
            }
        }

        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                });
            }
        };
        board.set_side_to_move(side_to_move);

        // Castling field: rights come from placement instead.
        let _ = fields.next();

        let en_passant = match fields.next() {
            None | Some("-") => None,
            Some(s) => Some(Coord::from_algebraic(s, SIZE).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: s.to_string(),
                }
            })?),
        };
        board.set_en_passant(en_passant);

        board.infer_castling_rights();
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Write placement, side to move, castling rights, and en passant target.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..SIZE as i8).rev() {
            let mut empty_count = 0u8;

            for file in 0..SIZE as i8 {
                match self.piece_at(Coord::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        let c = match piece.color() {
                            Color::White => piece.kind().fen_char().to_ascii_uppercase(),
                            Color::Black => piece.kind().fen_char(),
                        };
                        write!(f, "{c}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}
