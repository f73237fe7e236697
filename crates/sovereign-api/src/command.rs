//! Session command parsing.

use sovereign_core::sovereign::Player;

use crate::error::ApiError;
use crate::query::{Variant, parse_player};

/// Where a command's position comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// The active variant's starting position.
    StartPos,
    /// An explicit FEN, all remaining fields joined by single spaces.
    Fen(String),
}

/// An option settable with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `setoption name Variant value <classical|sovereign>`
    Variant(Variant),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- reset the session configuration.
    NewGame,
    /// `setoption name <name> value <value>`
    SetOption(SessionOption),
    /// `moves <position>` -- list the legal moves.
    Moves(Position),
    /// `apply <move> <position>` -- play a legal move.
    Apply { mv: String, position: Position },
    /// `select <position>` -- let the session pick a move and play it.
    Select(Position),
    /// `owned <player> <position>` -- the color a player owns.
    Owned { player: Player, position: Position },
    /// `controlled <player> <position>` -- every color a player controls.
    Controlled { player: Player, position: Position },
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command, ignored by the session.
    Unknown(String),
}

/// Parse a single line of session input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ApiError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "quit" => Ok(Command::Quit),
        "setoption" => parse_setoption(&tokens[1..]),
        "moves" => Ok(Command::Moves(parse_position("moves", &tokens[1..])?)),
        "select" => Ok(Command::Select(parse_position("select", &tokens[1..])?)),
        "apply" => {
            let (mv, rest) = split_argument("apply", "move", &tokens[1..])?;
            Ok(Command::Apply {
                mv: mv.to_string(),
                position: parse_position("apply", rest)?,
            })
        }
        "owned" => {
            let (player, rest) = split_argument("owned", "player", &tokens[1..])?;
            Ok(Command::Owned {
                player: parse_player(player)?,
                position: parse_position("owned", rest)?,
            })
        }
        "controlled" => {
            let (player, rest) = split_argument("controlled", "player", &tokens[1..])?;
            Ok(Command::Controlled {
                player: parse_player(player)?,
                position: parse_position("controlled", rest)?,
            })
        }
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn split_argument<'a, 'b>(
    command: &'static str,
    argument: &'static str,
    tokens: &'b [&'a str],
) -> Result<(&'a str, &'b [&'a str]), ApiError> {
    match tokens.split_first() {
        Some((first, rest)) => Ok((first, rest)),
        None => Err(ApiError::MissingArgument { command, argument }),
    }
}

/// Parse `startpos` or `fen <fields...>`.
fn parse_position(command: &'static str, tokens: &[&str]) -> Result<Position, ApiError> {
    match tokens.first() {
        Some(&"startpos") => Ok(Position::StartPos),
        Some(&"fen") if tokens.len() > 1 => Ok(Position::Fen(tokens[1..].join(" "))),
        Some(&"fen") => Err(ApiError::MissingArgument {
            command,
            argument: "FEN",
        }),
        _ => Err(ApiError::MissingPosition { command }),
    }
}

/// Parse `name <name> value <value>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ApiError> {
    let name_pos = tokens.iter().position(|&t| t == "name");
    let value_pos = tokens.iter().position(|&t| t == "value");

    let name = match (name_pos, value_pos) {
        (Some(n), Some(v)) if v > n + 1 => tokens[n + 1..v].join(" "),
        (Some(n), None) if tokens.len() > n + 1 => tokens[n + 1..].join(" "),
        _ => {
            return Err(ApiError::MissingArgument {
                command: "setoption",
                argument: "name",
            });
        }
    };

    let value = match value_pos {
        Some(v) if tokens.len() > v + 1 => tokens[v + 1..].join(" "),
        _ => {
            return Err(ApiError::MissingArgument {
                command: "setoption",
                argument: "value",
            });
        }
    };

    match name.to_ascii_lowercase().as_str() {
        "variant" => Ok(Command::SetOption(SessionOption::Variant(value.parse()?))),
        _ => Err(ApiError::UnknownOption { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("isready").unwrap(), Command::IsReady);
        assert_eq!(parse_command("newgame").unwrap(), Command::NewGame);
        assert_eq!(parse_command("  quit  ").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
        assert_eq!(
            parse_command("go depth 3").unwrap(),
            Command::Unknown("go".to_string())
        );
    }

    #[test]
    fn parse_moves_startpos() {
        assert_eq!(
            parse_command("moves startpos").unwrap(),
            Command::Moves(Position::StartPos)
        );
    }

    #[test]
    fn parse_moves_fen_joins_fields() {
        let cmd = parse_command("moves fen 7k/8/8/8/8/8/8/K7   w  - -").unwrap();
        assert_eq!(
            cmd,
            Command::Moves(Position::Fen("7k/8/8/8/8/8/8/K7 w - -".to_string()))
        );
    }

    #[test]
    fn parse_apply() {
        let cmd = parse_command("apply e2e4 startpos").unwrap();
        assert_eq!(
            cmd,
            Command::Apply {
                mv: "e2e4".to_string(),
                position: Position::StartPos,
            }
        );
    }

    #[test]
    fn parse_ownership_commands() {
        assert_eq!(
            parse_command("owned p2 startpos").unwrap(),
            Command::Owned {
                player: Player::Player2,
                position: Position::StartPos,
            }
        );
        assert_eq!(
            parse_command("controlled 1 fen 16/16 b").unwrap(),
            Command::Controlled {
                player: Player::Player1,
                position: Position::Fen("16/16 b".to_string()),
            }
        );
    }

    #[test]
    fn parse_setoption_variant() {
        assert_eq!(
            parse_command("setoption name Variant value classical").unwrap(),
            Command::SetOption(SessionOption::Variant(Variant::Classical))
        );
        assert_eq!(
            parse_command("setoption name variant value Sovereign").unwrap(),
            Command::SetOption(SessionOption::Variant(Variant::Sovereign))
        );
    }

    #[test]
    fn parse_setoption_errors() {
        assert!(matches!(
            parse_command("setoption name Hash value 64"),
            Err(ApiError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("setoption name Variant value shogi"),
            Err(ApiError::UnknownVariant { .. })
        ));
        assert!(matches!(
            parse_command("setoption name Variant"),
            Err(ApiError::MissingArgument { argument: "value", .. })
        ));
        assert!(matches!(
            parse_command("setoption value classical"),
            Err(ApiError::MissingArgument { argument: "name", .. })
        ));
    }

    #[test]
    fn parse_missing_position() {
        assert!(matches!(
            parse_command("moves"),
            Err(ApiError::MissingPosition { command: "moves" })
        ));
        assert!(matches!(
            parse_command("select fen"),
            Err(ApiError::MissingArgument { argument: "FEN", .. })
        ));
        assert!(matches!(
            parse_command("apply"),
            Err(ApiError::MissingArgument { argument: "move", .. })
        ));
        assert!(matches!(
            parse_command("owned p3 startpos"),
            Err(ApiError::InvalidPlayer { .. })
        ));
    }
}
