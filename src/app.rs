//! The driver connecting player input, the engine and the views.

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use draw_number_core::{Configuration, DrawError, DrawNumber, GamePhase};
use tracing::{debug, info, instrument, warn};

use crate::config_source::Resolved;
use crate::input::PlayerCommand;
use crate::views::DrawNumberView;

/// Cloneable request to stop the driver loop.
///
/// Any holder can ask for shutdown; the loop stops once the current line is
/// handled. Nothing here exits the process.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal(Arc<AtomicBool>);

impl ShutdownSignal {
    /// Creates a signal that has not been requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the driver to stop.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// True once any clone has called [`request`](Self::request).
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owns one engine and broadcasts every event to the attached views.
pub struct DrawNumberApp {
    model: DrawNumber,
    views: Vec<Box<dyn DrawNumberView>>,
    shutdown: ShutdownSignal,
}

impl DrawNumberApp {
    /// Starts the views, reports configuration problems, and begins a session.
    ///
    /// # Errors
    ///
    /// Fails only if the resolved configuration cannot start an engine.
    #[instrument(skip_all, fields(views = views.len()))]
    pub fn new(resolved: Resolved, views: Vec<Box<dyn DrawNumberView>>) -> Result<Self, DrawError> {
        Self::start_with(resolved, views, DrawNumber::new)
    }

    /// Like [`new`](Self::new), but secrets come from a seeded generator.
    ///
    /// # Errors
    ///
    /// Fails only if the resolved configuration cannot start an engine.
    #[instrument(skip(resolved, views))]
    pub fn seeded(
        resolved: Resolved,
        views: Vec<Box<dyn DrawNumberView>>,
        seed: u64,
    ) -> Result<Self, DrawError> {
        Self::start_with(resolved, views, |configuration| {
            DrawNumber::seeded(configuration, seed)
        })
    }

    /// Drives an existing engine. Views are started and told about the game.
    #[instrument(skip_all)]
    pub fn with_engine(model: DrawNumber, views: Vec<Box<dyn DrawNumberView>>) -> Self {
        let mut app = Self {
            model,
            views,
            shutdown: ShutdownSignal::new(),
        };
        app.start_views();
        app.announce_game();
        app
    }

    fn start_with(
        resolved: Resolved,
        views: Vec<Box<dyn DrawNumberView>>,
        engine: impl FnOnce(Configuration) -> Result<DrawNumber, DrawError>,
    ) -> Result<Self, DrawError> {
        let (configuration, errors) = resolved.into_parts();
        let model = engine(configuration)?;
        let mut app = Self {
            model,
            views,
            shutdown: ShutdownSignal::new(),
        };
        app.start_views();
        for error in &errors {
            app.display_error(error);
        }
        app.announce_game();
        Ok(app)
    }

    fn start_views(&mut self) {
        for view in &mut self.views {
            view.start();
        }
    }

    fn announce_game(&mut self) {
        let configuration = *self.model.configuration();
        for view in &mut self.views {
            view.new_game(&configuration);
        }
    }

    /// Shows a free-form error on every view.
    #[instrument(skip(self))]
    pub fn display_error(&mut self, message: &str) {
        for view in &mut self.views {
            view.display_error(message);
        }
    }

    /// Submits a guess and notifies every view of the outcome.
    #[instrument(skip(self))]
    pub fn new_attempt(&mut self, guess: i64) {
        match self.model.attempt(guess) {
            Ok(result) => {
                for view in &mut self.views {
                    view.result(&result);
                }
            }
            Err(e) if e.is_invalid_guess() => self.number_incorrect(),
            Err(e) => {
                warn!(error = %e, "Attempt refused");
                self.display_error(&e.to_string());
            }
        }
    }

    fn number_incorrect(&mut self) {
        for view in &mut self.views {
            view.number_incorrect();
        }
    }

    /// Starts a new session and announces it.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.model.reset();
        self.announce_game();
    }

    /// Requests shutdown of the driver loop.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        info!("Quit requested");
        self.shutdown.request();
    }

    /// Applies one player command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Guess(guess) => self.new_attempt(guess),
            PlayerCommand::Reset => self.reset_game(),
            PlayerCommand::Quit => self.quit(),
            PlayerCommand::Empty => {}
            PlayerCommand::Unparsable(raw) => {
                debug!(raw = %raw, "Unparsable input");
                self.number_incorrect();
            }
        }
    }

    /// Reads commands line by line until quit, shutdown or end of input.
    ///
    /// A shutdown requested from elsewhere is noticed after the line being
    /// read completes. Returns the number of lines handled.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if reading `input` fails.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead) -> std::io::Result<usize> {
        let mut handled = 0;
        if self.shutdown.is_requested() {
            return Ok(handled);
        }
        for line in input.lines() {
            let line = line?;
            self.handle(PlayerCommand::parse(&line));
            handled += 1;
            if self.shutdown.is_requested() {
                break;
            }
        }
        info!(handled, phase = %self.model.phase(), "Driver loop finished");
        Ok(handled)
    }

    /// A handle that stops [`run`](Self::run) when requested.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Phase of the current session.
    pub fn phase(&self) -> GamePhase {
        self.model.phase()
    }

    /// Attempts left in the current session.
    pub fn remaining_attempts(&self) -> u32 {
        self.model.remaining_attempts()
    }

    /// Number of attached views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }
}

impl std::fmt::Debug for DrawNumberApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawNumberApp")
            .field("model", &self.model)
            .field("views", &self.views.len())
            .field("shutdown", &self.shutdown)
            .finish()
    }
}
