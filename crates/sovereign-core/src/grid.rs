//! Square-indexed storage for `N` x `N` boards.

use crate::coord::Coord;

/// An `N` x `N` grid of optional values, indexed by [`Coord`].
///
/// Row-major with rank 0 first. Empty squares hold `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Grid<T: Copy, const N: usize>([[Option<T>; N]; N]);

impl<T: Copy, const N: usize> Grid<T, N> {
    /// A grid with every square empty.
    pub(crate) const fn empty() -> Self {
        Grid([[None; N]; N])
    }

    /// Return the value on `coord`, or `None` if the square is empty or off the grid.
    #[inline]
    pub(crate) fn get(&self, coord: Coord) -> Option<T> {
        if coord.in_bounds(N) {
            self.0[coord.rank as usize][coord.file as usize]
        } else {
            None
        }
    }

    /// Overwrite the square at `coord`. Off-grid coordinates are ignored.
    #[inline]
    pub(crate) fn set(&mut self, coord: Coord, value: Option<T>) {
        debug_assert!(coord.in_bounds(N), "{coord:?} is off a {N}x{N} grid");
        if coord.in_bounds(N) {
            self.0[coord.rank as usize][coord.file as usize] = value;
        }
    }

    /// Iterate over occupied squares, rank 0 first, files left to right.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.0.iter().enumerate().flat_map(|(rank, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(file, v)| v.map(|v| (Coord::new(rank as i8, file as i8), v)))
        })
    }
}
