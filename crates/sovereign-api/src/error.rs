//! Errors surfaced by the query API and the session protocol.

use sovereign_core::{ControlError, FenError, MoveError, MoveTextError};

/// Errors that can occur while answering a query or reading a session command.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The position could not be parsed.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),

    /// The move text could not be parsed.
    #[error("invalid move text: {0}")]
    MoveText(#[from] MoveTextError),

    /// The move could not be applied.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Color control could not be resolved.
    #[error(transparent)]
    Control(#[from] ControlError),

    /// The position has no legal move to select.
    #[error("no legal moves in position")]
    NoLegalMoves,

    /// The variant name is not `classical` or `sovereign`.
    #[error("unknown variant: {value}")]
    UnknownVariant {
        /// The unrecognized variant name.
        value: String,
    },

    /// The player is not `p1` or `p2`.
    #[error("invalid player: {value}")]
    InvalidPlayer {
        /// The unrecognized player token.
        value: String,
    },

    /// The query only exists for another variant.
    #[error("{query} is not available for {variant} chess")]
    UnsupportedQuery {
        /// The command name.
        query: &'static str,
        /// The active variant.
        variant: String,
    },

    /// The command lacks a `startpos` or `fen <fen>` position.
    #[error("{command}: missing startpos or fen keyword")]
    MissingPosition {
        /// The command name.
        command: &'static str,
    },

    /// The command lacks a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// `setoption` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use sovereign_core::{FenError, MoveError};

    #[test]
    fn wraps_core_errors() {
        let err: ApiError = FenError::Empty.into();
        assert_eq!(err.to_string(), "invalid FEN: empty FEN");

        let err: ApiError = MoveError::Illegal {
            text: "e2e5".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "illegal move: e2e5");
    }

    #[test]
    fn unsupported_query_display() {
        let err = ApiError::UnsupportedQuery {
            query: "owned",
            variant: "classical".to_string(),
        };
        assert_eq!(err.to_string(), "owned is not available for classical chess");
    }
}
