//! Parsing of player input lines.

use tracing::instrument;

/// What a line of player input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Submit a guess.
    Guess(i64),
    /// Start a new session with a new secret.
    Reset,
    /// Stop the game.
    Quit,
    /// Nothing was typed.
    Empty,
    /// Input that is neither a number nor a known command.
    Unparsable(String),
}

impl PlayerCommand {
    /// Parses one line of input. Never fails: unknown input becomes
    /// [`PlayerCommand::Unparsable`].
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return PlayerCommand::Empty;
        }
        if let Ok(guess) = trimmed.parse::<i64>() {
            return PlayerCommand::Guess(guess);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "reset" | "r" => PlayerCommand::Reset,
            "quit" | "q" | "exit" => PlayerCommand::Quit,
            _ => PlayerCommand::Unparsable(trimmed.to_string()),
        }
    }
}
