//! Colored chess pieces.

use std::fmt;

use crate::piece_kind::PieceKind;

/// A piece of some kind owned by some color.
///
/// `C` is the variant's color type: two colors in classical chess,
/// twelve in Sovereign Chess.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece<C> {
    kind: PieceKind,
    color: C,
}

impl<C: Copy> Piece<C> {
    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: C) -> Piece<C> {
        Piece { kind, color }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(self) -> C {
        self.color
    }

    /// Return the same-colored piece of another kind.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Piece<C> {
        Piece {
            kind,
            color: self.color,
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Piece<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({:?} {:?})", self.color, self.kind)
    }
}
