//! Board coordinates shared by both variants.

use std::fmt;
use std::ops::Add;

/// A `(rank, file)` pair. Rank 0 is the bottom of the board, file 0 the left edge.
///
/// Coordinates are signed so that step offsets and off-board intermediate
/// positions can be represented; use [`Coord::in_bounds`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub rank: i8,
    pub file: i8,
}

/// Knight jumps.
pub(crate) const KNIGHT_STEPS: [Coord; 8] = [
    Coord::new(1, 2),
    Coord::new(-1, 2),
    Coord::new(1, -2),
    Coord::new(-1, -2),
    Coord::new(2, 1),
    Coord::new(2, -1),
    Coord::new(-2, 1),
    Coord::new(-2, -1),
];

/// Unit steps along ranks and files.
pub(crate) const ORTHOGONAL_STEPS: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(0, -1),
    Coord::new(-1, 0),
];

/// Unit steps along diagonals.
pub(crate) const DIAGONAL_STEPS: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(-1, -1),
];

impl Coord {
    /// Create a coordinate from a rank and a file.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Coord {
        Coord { rank, file }
    }

    /// Return `true` if the coordinate lies on a `size` x `size` board.
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.rank >= 0 && self.file >= 0 && (self.rank as usize) < size && (self.file as usize) < size
    }

    /// Parse a two-character algebraic square (e.g. `"e4"`, `"pG"`) on a board of the given size.
    ///
    /// Files are `a`.. and ranks `1`-`9` followed by `A`-`G` for ranks 10-16.
    pub fn from_algebraic(s: &str, size: usize) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file = match bytes[0] {
            b @ b'a'..=b'z' => (b - b'a') as i8,
            _ => return None,
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'9' => (b - b'1') as i8,
            b @ b'A'..=b'G' => (b - b'A') as i8 + 9,
            _ => return None,
        };

        let coord = Coord::new(rank, file);
        coord.in_bounds(size).then_some(coord)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.rank + rhs.rank, self.file + rhs.file)
    }
}

impl fmt::Display for Coord {
    /// Algebraic form. Coordinates with no algebraic name print as `(rank,file)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !(0..16).contains(&self.rank) || !(0..26).contains(&self.file) {
            return write!(f, "({},{})", self.rank, self.file);
        }
        let file = (b'a' + self.file as u8) as char;
        let rank = if self.rank < 9 {
            (b'1' + self.rank as u8) as char
        } else {
            (b'A' + (self.rank - 9) as u8) as char
        };
        write!(f, "{file}{rank}")
    }
}
