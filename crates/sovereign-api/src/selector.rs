//! Move selection strategies for "pick and apply a move".

use sovereign_core::Move;

/// Chooses one move out of a position's legal moves.
pub trait MoveSelector {
    /// Pick a move from `moves`, or `None` if there is nothing to pick.
    fn select(&mut self, moves: &[Move]) -> Option<Move>;
}

/// Always plays the first move in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMove;

impl MoveSelector for FirstMove {
    fn select(&mut self, moves: &[Move]) -> Option<Move> {
        moves.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{FirstMove, MoveSelector};
    use sovereign_core::{Coord, Move};

    #[test]
    fn first_move_picks_head() {
        let moves = [
            Move::new(Coord::new(1, 0), Coord::new(2, 0)),
            Move::new(Coord::new(1, 1), Coord::new(2, 1)),
        ];
        assert_eq!(FirstMove.select(&moves), Some(moves[0]));
        assert_eq!(FirstMove.select(&[]), None);
    }
}
