//! Display surfaces that observe a game.
//!
//! A view is told about every event the driver produces. It never talks to
//! the engine and never decides game flow; it only renders.

mod print_stream;
mod terminal;

pub use print_stream::{PrintStreamView, TranscriptFormat};
pub use terminal::TerminalView;

use draw_number_core::{Configuration, DrawResult};

/// Observer contract for anything that displays a game.
///
/// The driver calls these in attachment order, once per view per event.
pub trait DrawNumberView {
    /// Called once, before any other notification.
    fn start(&mut self) {}

    /// A session started or was reset with this configuration.
    fn new_game(&mut self, _configuration: &Configuration) {}

    /// A guess was accepted and classified.
    fn result(&mut self, result: &DrawResult);

    /// The input was not a legal guess: out of range or not a number.
    fn number_incorrect(&mut self);

    /// A free-form problem to show the user, such as a configuration error.
    fn display_error(&mut self, message: &str);
}
