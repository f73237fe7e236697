//! Moves and their text encoding.

use std::fmt;

use crate::coord::Coord;
use crate::error::MoveTextError;
use crate::piece_kind::PieceKind;

/// A move from one square to another, with an optional promotion piece.
///
/// Moves carry no classification: whether a move is a castle, an en passant
/// capture or a plain capture is decided against the board it is played on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    src: Coord,
    dest: Coord,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    pub const fn new(src: Coord, dest: Coord) -> Move {
        Move {
            src,
            dest,
            promotion: None,
        }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(src: Coord, dest: Coord, kind: PieceKind) -> Move {
        Move {
            src,
            dest,
            promotion: Some(kind),
        }
    }

    /// Source square.
    #[inline]
    pub const fn src(self) -> Coord {
        self.src
    }

    /// Destination square.
    #[inline]
    pub const fn dest(self) -> Coord {
        self.dest
    }

    /// Promotion piece, if this move promotes.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Parse `<src><dest>[promotion]` on a board of the given size.
    ///
    /// Squares use the algebraic form of [`Coord`]; the optional promotion
    /// letter is one of `n`, `b`, `r`, `q`.
    pub fn parse(text: &str, size: usize) -> Result<Move, MoveTextError> {
        let malformed = || MoveTextError::Malformed {
            text: text.to_string(),
        };

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(malformed());
        }

        let square = |s: &str| {
            Coord::from_algebraic(s, size).ok_or_else(|| MoveTextError::InvalidSquare {
                square: s.to_string(),
                size,
            })
        };
        let src = square(&text[0..2])?;
        let dest = square(&text[2..4])?;

        match text[4..].chars().next() {
            None => Ok(Move::new(src, dest)),
            Some(c) => match PieceKind::from_fen_char(c) {
                Some(kind) if kind.is_promotable() && c.is_ascii_lowercase() => {
                    Ok(Move::new_promotion(src, dest, kind))
                }
                _ => Err(MoveTextError::InvalidPromotion { character: c }),
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.src, self.dest)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
