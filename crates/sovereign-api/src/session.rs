//! Line-oriented session loop: one command per input line, one or more reply
//! lines per command.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::command::{Command, Position, SessionOption, parse_command};
use crate::error::ApiError;
use crate::query::{self, Variant};
use crate::selector::{FirstMove, MoveSelector};

/// Settings adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Rule set every query runs under.
    pub variant: Variant,
}

/// A session answering queries for a host, reading commands until `quit` or
/// end of input.
pub struct Session<S = FirstMove> {
    config: SessionConfig,
    selector: S,
}

impl Session {
    /// Create a session that always selects the first legal move.
    pub fn new() -> Self {
        Self::with_selector(FirstMove)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSelector> Session<S> {
    /// Create a session that picks moves for `select` with `selector`.
    pub fn with_selector(selector: S) -> Self {
        Self {
            config: SessionConfig::default(),
            selector,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session. Command errors are reported as `error <message>`
    /// reply lines; only I/O failures end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ApiError> {
        info!(variant = %self.config.variant, "session started");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received session command");

            let reply = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd),
                Err(e) => Err(e),
            };

            match reply {
                Ok(lines) => {
                    for reply_line in lines {
                        writeln!(output, "{reply_line}")?;
                    }
                }
                Err(e) => {
                    warn!(cmd = %trimmed, error = %e, "command failed");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session ended");
        Ok(())
    }

    fn handle(&mut self, cmd: Command) -> Result<Vec<String>, ApiError> {
        let variant = self.config.variant;
        match cmd {
            Command::IsReady => Ok(vec!["readyok".to_string()]),
            Command::NewGame => {
                self.config = SessionConfig::default();
                Ok(Vec::new())
            }
            Command::SetOption(SessionOption::Variant(new_variant)) => {
                info!(variant = %new_variant, "variant changed");
                self.config.variant = new_variant;
                Ok(Vec::new())
            }
            Command::Moves(position) => {
                let moves = query::legal_moves(variant, &self.fen(&position))?;
                let mut reply = String::from("moves");
                for mv in moves {
                    reply.push(' ');
                    reply.push_str(&mv);
                }
                Ok(vec![reply])
            }
            Command::Apply { mv, position } => {
                let fen = query::apply_move(variant, &self.fen(&position), &mv)?;
                Ok(vec![format!("fen {fen}")])
            }
            Command::Select(position) => {
                let selection =
                    query::select_and_play(variant, &self.fen(&position), &mut self.selector)?;
                Ok(vec![
                    format!("selected {}", selection.mv),
                    format!("fen {}", selection.fen),
                ])
            }
            Command::Owned { player, position } => {
                self.require_sovereign("owned")?;
                let color = query::owned_color(&self.fen(&position), player)?;
                Ok(vec![format!("owned {color}")])
            }
            Command::Controlled { player, position } => {
                self.require_sovereign("controlled")?;
                let colors = query::controlled_colors(&self.fen(&position), player)?;
                let mut reply = String::from("controlled");
                for color in colors {
                    reply.push(' ');
                    reply.push_str(color.name());
                }
                Ok(vec![reply])
            }
            Command::Quit => Ok(Vec::new()),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    debug!(cmd = %name, "ignoring unknown command");
                }
                Ok(Vec::new())
            }
        }
    }

    fn fen(&self, position: &Position) -> String {
        match position {
            Position::StartPos => self.config.variant.starting_fen().to_string(),
            Position::Fen(fen) => fen.clone(),
        }
    }

    fn require_sovereign(&self, query: &'static str) -> Result<(), ApiError> {
        match self.config.variant {
            Variant::Sovereign => Ok(()),
            other => Err(ApiError::UnsupportedQuery {
                query,
                variant: other.to_string(),
            }),
        }
    }
}
