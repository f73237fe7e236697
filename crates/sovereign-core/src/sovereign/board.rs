//! The Sovereign Chess board: a 16x16 piece grid, the player to move, and
//! which color each player owns.

use std::fmt;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::piece_kind::PieceKind;

use super::color::{Color, Player};

/// Board width and height.
pub const SIZE: usize = 16;

/// A Sovereign Chess piece.
pub type Piece = crate::piece::Piece<Color>;

/// Piece kinds on the top and bottom edge ranks, file a to file p.
const EDGE_RANK: [PieceKind; SIZE] = [
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Queen,
];

/// Colors along rank 1 and rank 2, file a to file p.
const BOTTOM_COLORS: [Color; SIZE] = {
    use Color::*;
    [Slate, Slate, Pink, Pink, White, White, White, White, White, White, White, White, Green, Green, Ash, Ash]
};

/// Colors along rank 16 and rank 15, file a to file p.
const TOP_COLORS: [Color; SIZE] = {
    use Color::*;
    [Ash, Ash, Violet, Violet, Black, Black, Black, Black, Black, Black, Black, Black, Yellow, Yellow, Slate, Slate]
};

/// Piece kinds on the a and p files, rank 3 to rank 14.
const SIDE_FILE: [PieceKind; SIZE - 4] = [
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::Bishop,
];

/// Colors along files a and b, rank 3 to rank 14.
const LEFT_COLORS: [Color; SIZE - 4] = {
    use Color::*;
    [Red, Red, Orange, Orange, Yellow, Yellow, Green, Green, Cyan, Cyan, Navy, Navy]
};

/// Colors along files o and p, rank 3 to rank 14.
const RIGHT_COLORS: [Color; SIZE - 4] = {
    use Color::*;
    [Cyan, Cyan, Navy, Navy, Violet, Violet, Pink, Pink, Red, Red, Orange, Orange]
};

/// Complete Sovereign Chess position state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid<Piece, SIZE>,
    player_to_move: Player,
    /// Color owned by each player, indexed by [`Player::index`].
    owned: [Color; 2],
}

impl Board {
    /// An empty board, Player 1 to move, Player 1 owning white and Player 2 black.
    pub const fn empty() -> Board {
        Board {
            grid: Grid::empty(),
            player_to_move: Player::Player1,
            owned: [Color::White, Color::Black],
        }
    }

    /// Return the standard starting position: pieces around the two outer
    /// rings, every colored square empty.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        let last = SIZE as i8 - 1;

        for file in 0..SIZE {
            let f = file as i8;
            let (kind, bottom, top) = (EDGE_RANK[file], BOTTOM_COLORS[file], TOP_COLORS[file]);
            let second = match file {
                0 | 15 => PieceKind::Rook,
                1 | 14 => PieceKind::Knight,
                _ => PieceKind::Pawn,
            };
            board.place_piece(Coord::new(0, f), Some(Piece::new(kind, bottom)));
            board.place_piece(Coord::new(1, f), Some(Piece::new(second, bottom)));
            board.place_piece(Coord::new(last - 1, f), Some(Piece::new(second, top)));
            board.place_piece(Coord::new(last, f), Some(Piece::new(kind, top)));
        }

        for (i, kind) in SIDE_FILE.into_iter().enumerate() {
            let rank = i as i8 + 2;
            let (left, right) = (LEFT_COLORS[i], RIGHT_COLORS[i]);
            board.place_piece(Coord::new(rank, 0), Some(Piece::new(kind, left)));
            board.place_piece(Coord::new(rank, 1), Some(Piece::new(PieceKind::Pawn, left)));
            board.place_piece(Coord::new(rank, last - 1), Some(Piece::new(PieceKind::Pawn, right)));
            board.place_piece(Coord::new(rank, last), Some(Piece::new(kind, right)));
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
    /// No validation: in particular, nothing stops both squares of a color
    /// pair from being filled here.
    #[inline]
    pub fn place_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        self.grid.set(coord, piece);
    }

    /// Iterate over occupied squares, rank 1 first, files a to p.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.grid.occupied()
    }

    #[inline]
    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    #[inline]
    pub fn set_player_to_move(&mut self, player: Player) {
        self.player_to_move = player;
    }

    /// The color `player` owns outright.
    #[inline]
    pub fn owned_color(&self, player: Player) -> Color {
        self.owned[player.index()]
    }

    /// The player owning `color` outright, if either does.
    pub fn owner_of(&self, color: Color) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&player| self.owned_color(player) == color)
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
