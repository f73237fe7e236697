//! Chess rules engine for classical chess and Sovereign Chess: boards, FEN
//! codecs, move generation, legality filtering, and move application.

pub mod classical;
pub mod sovereign;

mod chess_move;
mod coord;
mod counters;
mod error;
mod grid;
mod perft;
mod piece;
mod piece_kind;
mod rules;

pub use chess_move::Move;
pub use coord::Coord;
pub use counters::{Counters, MoveClass};
pub use error::{ControlError, FenError, MoveError, MoveTextError};
pub use perft::{divide, perft, perft_with_counters};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rules::Rules;
