//! FEN parsing and serialization for the Sovereign Chess [`Board`].
//!
//! Each occupied square takes two characters, a color letter then a piece
//! letter (`wk` is the white king). Runs of empty squares are written as a
//! decimal number, which may need two digits on a 16-file board.

use std::fmt;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::FenError;
use crate::piece_kind::PieceKind;

use super::board::{Board, Piece, SIZE};
use super::color::{Color, Player};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "aqabvrvnbrbnbbbqbkbbbnbrynyrsbsq/aranvpvpbpbpbpbpbpbpbpbpypypsnsr/nbnp12opob/nqnp12opoq/crcp12rprr/cncp12rprn/gbgp12pppb/gqgp12pppq/yqyp12vpvq/ybyp12vpvb/onop12npnn/orop12npnr/rqrp12cpcq/rbrp12cpcb/srsnppppwpwpwpwpwpwpwpwpgpgpanar/sqsbprpnwrwnwbwqwkwbwnwrgngrabaq w";

impl FromStr for Board {
    type Err = FenError;

    /// Parse placement and an optional side-to-move field (`w` or `b`).
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != SIZE {
            return Err(FenError::WrongRankCount {
                expected: SIZE,
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = (SIZE - 1 - rank_index) as i8;
            parse_rank(&mut board, rank, rank_index, rank_str)?;
        }

        let player = match fields.next() {
            None | Some("w") => Player::Player1,
            Some("b") => Player::Player2,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                });
            }
        };
        board.set_player_to_move(player);

        Ok(board)
    }
}

fn parse_rank(board: &mut Board, rank: i8, rank_index: usize, text: &str) -> Result<(), FenError> {
    let overflow = |length: usize| FenError::BadRankLength {
        rank_index,
        length,
        expected: SIZE,
    };

    let mut file = 0usize;
    let mut skip = 0usize;
    let mut pending: Option<Color> = None;

    for c in text.chars() {
        if let Some(digit) = c.to_digit(10) {
            if pending.is_some() {
                return Err(FenError::DanglingColor { rank_index });
            }
            skip = skip * 10 + digit as usize;
            if skip > SIZE {
                return Err(overflow(file + skip));
            }
            continue;
        }

        file += skip;
        skip = 0;

        match pending.take() {
            None => {
                let color = Color::from_letter(c).ok_or(FenError::InvalidColorChar { character: c })?;
                pending = Some(color);
            }
            Some(color) => {
                let kind = c
                    .is_ascii_lowercase()
                    .then(|| PieceKind::from_fen_char(c))
                    .flatten()
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                if file >= SIZE {
                    return Err(overflow(file + 1));
                }
                board.place_piece(Coord::new(rank, file as i8), Some(Piece::new(kind, color)));
                file += 1;
            }
        }
    }

    if pending.is_some() {
        return Err(FenError::DanglingColor { rank_index });
    }
    file += skip;
    if file != SIZE {
        return Err(overflow(file));
    }
    Ok(())
}

impl fmt::Display for Board {
    /// Write placement and side to move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..SIZE as i8).rev() {
            let mut empty_count = 0usize;

            for file in 0..SIZE as i8 {
                match self.piece_at(Coord::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}{}", piece.color().letter(), piece.kind().fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        match self.player_to_move() {
            Player::Player1 => write!(f, " w"),
            Player::Player2 => write!(f, " b"),
        }
    }
}
