//! Transcript view writing one line per event to any [`Write`] sink.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use draw_number_core::{Comparison, Configuration, DrawResult};
use serde::Serialize;
use tracing::{instrument, warn};

use super::DrawNumberView;

/// Line format of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TranscriptFormat {
    /// Human-readable sentences.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// A transcript event as serialized in [`TranscriptFormat::Json`].
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum TranscriptEvent<'a> {
    NewGame { configuration: &'a Configuration },
    Result { result: &'a DrawResult },
    NumberIncorrect,
    Error { message: &'a str },
}

/// Writes a transcript of results and errors.
///
/// Write failures are logged and otherwise ignored, so a broken sink never
/// interrupts the game.
#[derive(Debug)]
pub struct PrintStreamView<W: Write> {
    out: W,
    format: TranscriptFormat,
}

impl<W: Write> PrintStreamView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W, format: TranscriptFormat) -> Self {
        Self { out, format }
    }

    /// Consumes the view, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: TranscriptEvent<'_>) {
        let written = match self.format {
            TranscriptFormat::Text => writeln!(self.out, "{}", describe(&event)),
            TranscriptFormat::Json => serde_json::to_writer(&mut self.out, &event)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(self.out)),
        };
        if let Err(e) = written.and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write transcript line");
        }
    }
}

impl PrintStreamView<io::Stdout> {
    /// Creates a view writing to standard output.
    pub fn stdout(format: TranscriptFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl PrintStreamView<BufWriter<File>> {
    /// Creates a view writing to a new file at `path`, truncating any
    /// existing one.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be created.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>, format: TranscriptFormat) -> io::Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file), format))
    }
}

fn describe(event: &TranscriptEvent<'_>) -> String {
    match event {
        TranscriptEvent::NewGame { configuration } => format!("New game: {}", configuration),
        TranscriptEvent::Result { result } => {
            let left = result.remaining_attempts();
            match result.comparison() {
                Comparison::Equal => format!("You won! Attempts left: {}", left),
                Comparison::Lower if left == 0 => "Your number is too small. You lost!".to_string(),
                Comparison::Higher if left == 0 => "Your number is too big. You lost!".to_string(),
                Comparison::Lower => format!("Your number is too small, attempts left: {}", left),
                Comparison::Higher => format!("Your number is too big, attempts left: {}", left),
            }
        }
        TranscriptEvent::NumberIncorrect => "Incorrect number, try again".to_string(),
        TranscriptEvent::Error { message } => format!("Error: {}", message),
    }
}

impl<W: Write> DrawNumberView for PrintStreamView<W> {
    fn new_game(&mut self, configuration: &Configuration) {
        self.emit(TranscriptEvent::NewGame { configuration });
    }

    fn result(&mut self, result: &DrawResult) {
        self.emit(TranscriptEvent::Result { result });
    }

    fn number_incorrect(&mut self) {
        self.emit(TranscriptEvent::NumberIncorrect);
    }

    fn display_error(&mut self, message: &str) {
        self.emit(TranscriptEvent::Error { message });
    }
}
