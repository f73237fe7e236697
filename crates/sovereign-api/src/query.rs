//! String-in, string-out queries over either variant.

use std::fmt;
use std::str::FromStr;

use sovereign_core::classical::{self, Classical};
use sovereign_core::sovereign::{self, Color, Player, Sovereign};
use sovereign_core::{Move, Rules};

use crate::error::ApiError;
use crate::selector::MoveSelector;

/// Which rule set a query runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Classical,
    #[default]
    Sovereign,
}

impl Variant {
    /// FEN of this variant's starting position.
    pub const fn starting_fen(self) -> &'static str {
        match self {
            Variant::Classical => classical::STARTING_FEN,
            Variant::Sovereign => sovereign::STARTING_FEN,
        }
    }
}

impl FromStr for Variant {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Variant, ApiError> {
        match s.to_ascii_lowercase().as_str() {
            "classical" => Ok(Variant::Classical),
            "sovereign" => Ok(Variant::Sovereign),
            _ => Err(ApiError::UnknownVariant {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classical => write!(f, "classical"),
            Variant::Sovereign => write!(f, "sovereign"),
        }
    }
}

/// Parse `p1`/`p2` (or `1`/`2`).
pub fn parse_player(s: &str) -> Result<Player, ApiError> {
    match s {
        "p1" | "1" => Ok(Player::Player1),
        "p2" | "2" => Ok(Player::Player2),
        _ => Err(ApiError::InvalidPlayer {
            value: s.to_string(),
        }),
    }
}

/// A move picked by a [`MoveSelector`] and the position after playing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub mv: String,
    pub fen: String,
}

/// List the legal moves of `fen` in move text form.
pub fn legal_moves(variant: Variant, fen: &str) -> Result<Vec<String>, ApiError> {
    match variant {
        Variant::Classical => legal_moves_with::<Classical>(fen),
        Variant::Sovereign => legal_moves_with::<Sovereign>(fen),
    }
}

/// Play `mv` on `fen` and return the resulting FEN. The move must be legal.
pub fn apply_move(variant: Variant, fen: &str, mv: &str) -> Result<String, ApiError> {
    match variant {
        Variant::Classical => apply_move_with::<Classical>(fen, mv),
        Variant::Sovereign => apply_move_with::<Sovereign>(fen, mv),
    }
}

/// Let `selector` pick a legal move of `fen`, play it, and report both.
pub fn select_and_play<S: MoveSelector + ?Sized>(
    variant: Variant,
    fen: &str,
    selector: &mut S,
) -> Result<Selection, ApiError> {
    match variant {
        Variant::Classical => select_and_play_with::<Classical, S>(fen, selector),
        Variant::Sovereign => select_and_play_with::<Sovereign, S>(fen, selector),
    }
}

/// The color `player` owns in the Sovereign Chess position `fen`.
pub fn owned_color(fen: &str, player: Player) -> Result<Color, ApiError> {
    let board: sovereign::Board = fen.parse()?;
    Ok(board.owned_color(player))
}

/// Every color `player` controls in the Sovereign Chess position `fen`.
pub fn controlled_colors(fen: &str, player: Player) -> Result<Vec<Color>, ApiError> {
    let board: sovereign::Board = fen.parse()?;
    Ok(board.controlled_colors(player)?)
}

fn legal_moves_with<R: Rules>(fen: &str) -> Result<Vec<String>, ApiError> {
    let board: R::Board = fen.parse()?;
    Ok(R::legal_moves(&board)?.iter().map(Move::to_string).collect())
}

fn apply_move_with<R: Rules>(fen: &str, text: &str) -> Result<String, ApiError> {
    let mut board: R::Board = fen.parse()?;
    let mv = Move::parse(text, R::BOARD_SIZE)?;
    R::play(&mut board, mv)?;
    Ok(board.to_string())
}

fn select_and_play_with<R: Rules, S: MoveSelector + ?Sized>(
    fen: &str,
    selector: &mut S,
) -> Result<Selection, ApiError> {
    let mut board: R::Board = fen.parse()?;
    let moves = R::legal_moves(&board)?;
    let mv = selector.select(&moves).ok_or(ApiError::NoLegalMoves)?;
    R::make_move(&mut board, mv)?;
    Ok(Selection {
        mv: mv.to_string(),
        fen: board.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FirstMove;

    #[test]
    fn variant_parsing() {
        assert_eq!("classical".parse::<Variant>().unwrap(), Variant::Classical);
        assert_eq!("Sovereign".parse::<Variant>().unwrap(), Variant::Sovereign);
        assert!("shogi".parse::<Variant>().is_err());
        assert_eq!(Variant::default(), Variant::Sovereign);
    }

    #[test]
    fn player_parsing() {
        assert_eq!(parse_player("p1").unwrap(), Player::Player1);
        assert_eq!(parse_player("2").unwrap(), Player::Player2);
        assert!(matches!(parse_player("p3"), Err(ApiError::InvalidPlayer { .. })));
    }

    #[test]
    fn classical_legal_moves() {
        let moves = legal_moves(Variant::Classical, classical::STARTING_FEN).unwrap();
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&"e2e4".to_string()));
    }

    #[test]
    fn sovereign_legal_moves() {
        let moves = legal_moves(Variant::Sovereign, sovereign::STARTING_FEN).unwrap();
        assert_eq!(moves.len(), 24);
        assert_eq!(moves[0], "e1d1");
    }

    #[test]
    fn apply_returns_new_fen() {
        let fen = apply_move(Variant::Classical, classical::STARTING_FEN, "e2e4").unwrap();
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3");
    }

    #[test]
    fn apply_rejects_illegal_move() {
        let result = apply_move(Variant::Classical, classical::STARTING_FEN, "e2e5");
        assert!(matches!(result, Err(ApiError::Move(_))));
        let result = apply_move(Variant::Classical, classical::STARTING_FEN, "e2");
        assert!(matches!(result, Err(ApiError::MoveText(_))));
        let result = apply_move(Variant::Classical, "not a fen", "e2e4");
        assert!(matches!(result, Err(ApiError::Fen(_))));
    }

    #[test]
    fn apply_sovereign_move() {
        let fen = apply_move(Variant::Sovereign, sovereign::STARTING_FEN, "h2h4").unwrap();
        assert!(fen.ends_with(" b"));
        assert!(fen.contains("/rqrp5wp6cpcq/"));
    }

    #[test]
    fn select_plays_first_move() {
        let selection = select_and_play(Variant::Classical, classical::STARTING_FEN, &mut FirstMove).unwrap();
        // Squares are scanned from a1, so the b1 knight comes first.
        assert_eq!(selection.mv, "b1c3");
        assert_eq!(selection.fen, "rnbqkbnr/pppppppp/8/8/8/2N5/PPPPPPPP/R1BQKBNR b KQkq -");
    }

    #[test]
    fn select_without_moves() {
        let result = select_and_play(Variant::Classical, "7k/5Q2/6K1/8/8/8/8/8 b", &mut FirstMove);
        assert!(matches!(result, Err(ApiError::NoLegalMoves)));
    }

    #[test]
    fn ownership_queries() {
        let fen = sovereign::STARTING_FEN;
        assert_eq!(owned_color(fen, Player::Player2).unwrap(), Color::Black);
        assert_eq!(controlled_colors(fen, Player::Player1).unwrap(), vec![Color::White]);
    }
}
