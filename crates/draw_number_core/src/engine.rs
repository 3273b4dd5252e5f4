//! The game-state engine.
//!
//! [`DrawNumber`] owns the configuration, the secret and the attempt counter.
//! It performs no I/O and no synchronization; callers that share it across
//! threads must serialize access themselves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::configuration::Configuration;
use crate::error::DrawError;
use crate::result::{Comparison, DrawResult};

/// Phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    /// Attempts remain and the secret has not been found.
    Active,
    /// A guess matched the secret.
    Won,
    /// Every attempt was used without a match.
    Exhausted,
}

/// A guess-the-number session.
pub struct DrawNumber {
    configuration: Configuration,
    secret: i64,
    remaining_attempts: u32,
    phase: GamePhase,
    rng: StdRng,
}

impl DrawNumber {
    /// Starts a session with an OS-seeded random secret.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InconsistentConfiguration`] if the configuration
    /// fails [`Configuration::is_consistent`].
    #[instrument(fields(
        min = configuration.min(),
        max = configuration.max(),
        attempts = configuration.attempts()
    ))]
    pub fn new(configuration: Configuration) -> Result<Self, DrawError> {
        Self::with_rng(configuration, StdRng::from_entropy())
    }

    /// Starts a session whose secrets are drawn from a seeded generator.
    ///
    /// Two sessions with the same configuration and seed draw the same
    /// sequence of secrets across resets.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InconsistentConfiguration`] for an inconsistent
    /// configuration.
    #[instrument(fields(min = configuration.min(), max = configuration.max()))]
    pub fn seeded(configuration: Configuration, seed: u64) -> Result<Self, DrawError> {
        Self::with_rng(configuration, StdRng::seed_from_u64(seed))
    }

    /// Starts a session with a fixed secret.
    ///
    /// Later resets draw from an OS-seeded generator as usual.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InconsistentConfiguration`] for an inconsistent
    /// configuration, or [`DrawError::SecretOutOfRange`] if `secret` is not in
    /// `[min, max]`.
    #[instrument(skip(secret), fields(min = configuration.min(), max = configuration.max()))]
    pub fn with_secret(configuration: Configuration, secret: i64) -> Result<Self, DrawError> {
        let mut game = Self::new(configuration)?;
        if !configuration.contains(secret) {
            return Err(DrawError::SecretOutOfRange {
                secret,
                min: configuration.min(),
                max: configuration.max(),
            });
        }
        game.secret = secret;
        Ok(game)
    }

    fn with_rng(configuration: Configuration, mut rng: StdRng) -> Result<Self, DrawError> {
        let configuration = configuration.validate()?;
        let secret = rng.gen_range(configuration.min()..=configuration.max());
        info!(attempts = configuration.attempts(), "New game session");
        Ok(Self {
            configuration,
            secret,
            remaining_attempts: configuration.attempts(),
            phase: GamePhase::Active,
            rng,
        })
    }

    /// Submits a guess.
    ///
    /// A legal guess consumes one attempt and yields a [`DrawResult`] holding
    /// the comparison and the attempts left afterwards. Once the secret is
    /// found the phase stays [`GamePhase::Won`] until [`reset`](Self::reset),
    /// even if further guesses are submitted.
    ///
    /// # Errors
    ///
    /// - [`DrawError::GameOver`] if no attempts are left.
    /// - [`DrawError::InvalidGuess`] if `guess` is outside `[min, max]`.
    ///
    /// Neither error changes the session.
    #[instrument(skip(self), fields(remaining = self.remaining_attempts, phase = %self.phase))]
    pub fn attempt(&mut self, guess: i64) -> Result<DrawResult, DrawError> {
        if self.remaining_attempts == 0 {
            warn!("Attempt after the last one was used");
            return Err(DrawError::GameOver);
        }

        if !self.configuration.contains(guess) {
            debug!("Guess rejected");
            return Err(DrawError::InvalidGuess {
                guess,
                min: self.configuration.min(),
                max: self.configuration.max(),
            });
        }

        self.remaining_attempts -= 1;
        let comparison = match guess.cmp(&self.secret) {
            std::cmp::Ordering::Less => Comparison::Lower,
            std::cmp::Ordering::Greater => Comparison::Higher,
            std::cmp::Ordering::Equal => Comparison::Equal,
        };

        if comparison == Comparison::Equal {
            self.phase = GamePhase::Won;
        } else if self.remaining_attempts == 0 {
            self.phase = GamePhase::Exhausted;
        }

        debug!(
            %comparison,
            remaining = self.remaining_attempts,
            phase = %self.phase,
            "Attempt accepted"
        );
        Ok(DrawResult::new(comparison, self.remaining_attempts))
    }

    /// Draws a new secret and restores the full attempt budget.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) {
        self.secret = self
            .rng
            .gen_range(self.configuration.min()..=self.configuration.max());
        self.remaining_attempts = self.configuration.attempts();
        self.phase = GamePhase::Active;
        info!("Game reset");
    }

    /// The configuration this session was started with.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Attempts left in the current session.
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Attempts consumed since the session started or was last reset.
    pub fn attempts_used(&self) -> u32 {
        self.configuration.attempts() - self.remaining_attempts
    }

    /// Current phase of the session.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }
}

impl std::fmt::Debug for DrawNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawNumber")
            .field("configuration", &self.configuration)
            .field("remaining_attempts", &self.remaining_attempts)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
