//! Interactive console view.

use std::io::{self, Write};

use draw_number_core::{Comparison, Configuration, DrawResult};
use tracing::warn;

use super::DrawNumberView;

const HELP: &str = "Type a number to guess, `reset` to start over, `quit` to leave.";

/// Friendly console messages for a human player.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the view, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message).and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl TerminalView<io::Stdout> {
    /// Creates a view writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DrawNumberView for TerminalView<W> {
    fn start(&mut self) {
        self.say("Draw Number");
        self.say(HELP);
    }

    fn new_game(&mut self, configuration: &Configuration) {
        self.say(&format!(
            "I'm thinking of a number between {} and {} ({} possibilities). You have {} attempts.",
            configuration.min(),
            configuration.max(),
            configuration.range_len(),
            configuration.attempts()
        ));
    }

    fn result(&mut self, result: &DrawResult) {
        let hint = match result.comparison() {
            Comparison::Equal => {
                self.say("You guessed it! Type `reset` for a new game.");
                return;
            }
            Comparison::Lower => "Too low",
            Comparison::Higher => "Too high",
        };
        if result.is_loss() {
            self.say(&format!("{}. No attempts left, you lost. Type `reset` to try again.", hint));
        } else {
            self.say(&format!("{}. Attempts left: {}", hint, result.remaining_attempts()));
        }
    }

    fn number_incorrect(&mut self) {
        self.say("That is not a valid number for this game.");
    }

    fn display_error(&mut self, message: &str) {
        self.say(&format!("Error: {}", message));
    }
}
