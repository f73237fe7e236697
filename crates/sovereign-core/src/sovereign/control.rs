//! Color control: which player, if any, commands the pieces of each color.
//!
//! A player controls the color they own, plus any color whose colored
//! square holds a piece of a color they control, transitively.

use crate::error::ControlError;

use super::board::Board;
use super::color::{Color, Player};
use super::layout::color_squares;

impl Board {
    /// Resolve the player controlling `color` by following occupied colored squares.
    ///
    /// Returns `Ok(None)` for a neutral color and [`ControlError::Cycle`] if
    /// the chain returns to a color already visited.
    pub fn controlling_player(&self, color: Color) -> Result<Option<Player>, ControlError> {
        let mut visited = [false; Color::COUNT];
        let mut current = color;

        loop {
            if let Some(owner) = self.owner_of(current) {
                return Ok(Some(owner));
            }
            if visited[current.index()] {
                return Err(ControlError::Cycle { color: color.name() });
            }
            visited[current.index()] = true;

            let occupant = color_squares(current)
                .into_iter()
                .find_map(|sq| self.piece_at(sq));
            match occupant {
                Some(piece) => current = piece.color(),
                None => return Ok(None),
            }
        }
    }

    /// Every color `player` controls, owned color included, in color index order.
    pub fn controlled_colors(&self, player: Player) -> Result<Vec<Color>, ControlError> {
        let map = ControlMap::of(self)?;
        Ok(Color::ALL
            .into_iter()
            .filter(|&color| map.controller(color) == Some(player))
            .collect())
    }
}

/// The controlling player of every color, resolved once per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlMap([Option<Player>; Color::COUNT]);

impl ControlMap {
    pub fn of(board: &Board) -> Result<ControlMap, ControlError> {
        let mut map = [None; Color::COUNT];
        for color in Color::ALL {
            map[color.index()] = board.controlling_player(color)?;
        }
        Ok(ControlMap(map))
    }

    #[inline]
    pub fn controller(&self, color: Color) -> Option<Player> {
        self.0[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::ControlMap;
    use crate::coord::Coord;
    use crate::error::ControlError;
    use crate::piece_kind::PieceKind;
    use crate::sovereign::board::{Board, Piece};
    use crate::sovereign::color::{Color, Player};
    use crate::sovereign::layout::color_squares;

    fn put(board: &mut Board, coord: Coord, kind: PieceKind, color: Color) {
        board.place_piece(coord, Some(Piece::new(kind, color)));
    }

    #[test]
    fn owned_colors_resolve_directly() {
        let board = Board::starting_position();
        assert_eq!(board.controlling_player(Color::White), Ok(Some(Player::Player1)));
        assert_eq!(board.controlling_player(Color::Black), Ok(Some(Player::Player2)));
        assert_eq!(board.controlling_player(Color::Red), Ok(None));
    }

    #[test]
    fn occupying_a_colored_square_grants_control() {
        let mut board = Board::empty();
        let [green_sq, _] = color_squares(Color::Green);
        put(&mut board, green_sq, PieceKind::Knight, Color::White);
        assert_eq!(board.controlling_player(Color::Green), Ok(Some(Player::Player1)));
    }

    #[test]
    fn control_is_transitive() {
        let mut board = Board::empty();
        // Black holds a red square, a red piece holds a pink square.
        let [red_sq, _] = color_squares(Color::Red);
        let [_, pink_sq] = color_squares(Color::Pink);
        put(&mut board, red_sq, PieceKind::Rook, Color::Black);
        put(&mut board, pink_sq, PieceKind::Pawn, Color::Red);
        assert_eq!(board.controlling_player(Color::Red), Ok(Some(Player::Player2)));
        assert_eq!(board.controlling_player(Color::Pink), Ok(Some(Player::Player2)));
        assert_eq!(
            board.controlled_colors(Player::Player2),
            Ok(vec![Color::Black, Color::Pink, Color::Red])
        );
        assert_eq!(board.controlled_colors(Player::Player1), Ok(vec![Color::White]));
    }

    #[test]
    fn chain_ending_in_a_neutral_color_is_neutral() {
        let mut board = Board::empty();
        let [navy_sq, _] = color_squares(Color::Navy);
        put(&mut board, navy_sq, PieceKind::Bishop, Color::Cyan);
        assert_eq!(board.controlling_player(Color::Navy), Ok(None));
    }

    #[test]
    fn two_color_cycle_is_an_error() {
        let mut board = Board::empty();
        let [red_sq, _] = color_squares(Color::Red);
        let [green_sq, _] = color_squares(Color::Green);
        put(&mut board, red_sq, PieceKind::Pawn, Color::Green);
        put(&mut board, green_sq, PieceKind::Pawn, Color::Red);
        assert_eq!(
            board.controlling_player(Color::Red),
            Err(ControlError::Cycle { color: "red" })
        );
        assert!(ControlMap::of(&board).is_err());
        assert!(board.controlled_colors(Player::Player1).is_err());
    }

    #[test]
    fn piece_on_its_own_color_is_a_cycle() {
        let mut board = Board::empty();
        let [_, yellow_sq] = color_squares(Color::Yellow);
        put(&mut board, yellow_sq, PieceKind::Queen, Color::Yellow);
        assert!(board.controlling_player(Color::Yellow).is_err());
    }

    #[test]
    fn control_map_matches_single_queries() {
        let mut board = Board::starting_position();
        let [ash_sq, _] = color_squares(Color::Ash);
        put(&mut board, ash_sq, PieceKind::Knight, Color::White);
        let map = ControlMap::of(&board).unwrap();
        for color in Color::ALL {
            assert_eq!(Some(map.controller(color)), board.controlling_player(color).ok());
        }
        assert_eq!(map.controller(Color::Ash), Some(Player::Player1));
    }
}
