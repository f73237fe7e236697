//! Query API and host session protocol for the Sovereign Chess rules engine.

pub mod command;
pub mod error;
pub mod query;
pub mod selector;
pub mod session;

pub use command::{Command, Position, SessionOption, parse_command};
pub use error::ApiError;
pub use query::{
    Selection, Variant, apply_move, controlled_colors, legal_moves, owned_color, parse_player,
    select_and_play,
};
pub use selector::{FirstMove, MoveSelector};
pub use session::{Session, SessionConfig};
