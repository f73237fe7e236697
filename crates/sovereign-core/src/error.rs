//! Error types for FEN parsing, move text, color control, and move application.

use crate::coord::Coord;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string has no piece placement field.
    #[error("empty FEN")]
    Empty,
    /// The piece placement section has the wrong number of ranks.
    #[error("expected {expected} ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Ranks on the board.
        expected: usize,
        /// Ranks found.
        found: usize,
    },
    /// A rank describes more or fewer squares than the board is wide.
    #[error("rank {rank_index} describes {length} squares, expected {expected}")]
    BadRankLength {
        /// Zero-based index within the placement field (0 = top rank).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
        /// Board width.
        expected: usize,
    },
    /// An unrecognized character appeared where a piece letter was expected.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// An unrecognized character appeared where a color letter was expected.
    #[error("invalid color character: '{character}'")]
    InvalidColorChar {
        /// The invalid character.
        character: char,
    },
    /// A color letter was not followed by a piece letter.
    #[error("color letter without a piece in rank {rank_index}")]
    DanglingColor {
        /// Zero-based index within the placement field (0 = top rank).
        rank_index: usize,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSideToMove {
        /// The invalid field.
        found: String,
    },
    /// The en passant field is not "-" or a square on the board.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field.
        found: String,
    },
}

/// Errors that occur when parsing move text such as `e2e4` or `a7a8q`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveTextError {
    /// The text is not 4 or 5 ASCII characters.
    #[error("malformed move: \"{text}\"")]
    Malformed {
        /// The offending text.
        text: String,
    },
    /// A square is not on the board.
    #[error("square \"{square}\" is not on a {size}x{size} board")]
    InvalidSquare {
        /// The offending square text.
        square: String,
        /// Board width.
        size: usize,
    },
    /// The trailing character is not a promotion letter.
    #[error("invalid promotion piece: '{character}'")]
    InvalidPromotion {
        /// The invalid character.
        character: char,
    },
}

/// Structural errors in Sovereign Chess color control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// Resolving control of `color` revisited a color already on the chain.
    #[error("control of {color} is cyclic")]
    Cycle {
        /// Name of the color whose resolution was requested.
        color: &'static str,
    },
}

/// Errors from applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square holds no piece.
    #[error("no piece on {square}")]
    EmptySource {
        /// The source square.
        square: Coord,
    },
    /// The piece on the source square does not belong to the side to move.
    #[error("piece on {square} does not belong to the side to move")]
    NotOwnPiece {
        /// The source square.
        square: Coord,
    },
    /// The source or destination square is off the board.
    #[error("square {square} is off the board")]
    OffBoard {
        /// The offending square.
        square: Coord,
    },
    /// The move is not in the legal move set of the position.
    #[error("illegal move: {text}")]
    Illegal {
        /// The move in text form.
        text: String,
    },
    /// Color control could not be resolved.
    #[error(transparent)]
    Control(#[from] ControlError),
}
