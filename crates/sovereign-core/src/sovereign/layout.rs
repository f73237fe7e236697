//! The fixed colored-square layout of the Sovereign Chess board.
//!
//! Each color marks two squares, point-symmetric about the board center:
//! `(r, f)` pairs with `(15 - r, 15 - f)`.

use crate::coord::Coord;

use super::color::Color;

const SIZE: usize = 16;

/// One square per color; its partner is the reflection through the center.
const PAIRS: [(Color, Coord); Color::COUNT] = [
    (Color::White, Coord::new(5, 5)),
    (Color::Black, Coord::new(5, 10)),
    (Color::Ash, Coord::new(4, 7)),
    (Color::Slate, Coord::new(4, 8)),
    (Color::Pink, Coord::new(7, 4)),
    (Color::Red, Coord::new(8, 4)),
    (Color::Orange, Coord::new(6, 6)),
    (Color::Yellow, Coord::new(6, 9)),
    (Color::Green, Coord::new(7, 7)),
    (Color::Navy, Coord::new(7, 8)),
    (Color::Cyan, Coord::new(4, 4)),
    (Color::Violet, Coord::new(4, 11)),
];

const SQUARE_COLORS: [[Option<Color>; SIZE]; SIZE] = {
    let mut table = [[None; SIZE]; SIZE];
    let mut i = 0;
    while i < PAIRS.len() {
        let (color, c) = PAIRS[i];
        let m = mirror(c);
        table[c.rank as usize][c.file as usize] = Some(color);
        table[m.rank as usize][m.file as usize] = Some(color);
        i += 1;
    }
    table
};

const PRIMARY_SQUARE: [Coord; Color::COUNT] = {
    let mut table = [Coord::new(0, 0); Color::COUNT];
    let mut i = 0;
    while i < PAIRS.len() {
        table[PAIRS[i].0.index()] = PAIRS[i].1;
        i += 1;
    }
    table
};

const fn mirror(c: Coord) -> Coord {
    Coord::new(SIZE as i8 - 1 - c.rank, SIZE as i8 - 1 - c.file)
}

/// Color assigned to `coord`, or `None` for a plain square or off-board coordinate.
#[inline]
pub fn square_color(coord: Coord) -> Option<Color> {
    if !coord.in_bounds(SIZE) {
        return None;
    }
    SQUARE_COLORS[coord.rank as usize][coord.file as usize]
}

/// The two squares marked with `color`.
pub fn color_squares(color: Color) -> [Coord; 2] {
    let c = PRIMARY_SQUARE[color.index()];
    [c, mirror(c)]
}

/// The other square of the same color as `coord`, if `coord` is colored.
#[inline]
pub fn partner(coord: Coord) -> Option<Coord> {
    square_color(coord).map(|_| mirror(coord))
}
