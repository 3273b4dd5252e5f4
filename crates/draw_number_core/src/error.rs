//! Error types for the draw-number engine.

use derive_more::{Display, Error};

/// Error returned by engine and configuration operations.
///
/// Every variant is recoverable: none of them leaves the engine with a
/// corrupted counter or secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DrawError {
    /// The guess lies outside the configured inclusive range.
    #[display("Guess {guess} is outside the range {min}..={max}")]
    InvalidGuess {
        /// The rejected guess.
        guess: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// No attempts are left; the session must be reset.
    #[display("No attempts left, reset the game to play again")]
    GameOver,

    /// The configuration does not satisfy `min < max` and `attempts > 0`.
    #[display("Inconsistent configuration: min={min}, max={max}, attempts={attempts}")]
    InconsistentConfiguration {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
        /// Configured attempt budget.
        attempts: u32,
    },

    /// A fixed secret was supplied that the configuration cannot produce.
    #[display("Secret {secret} is outside the range {min}..={max}")]
    SecretOutOfRange {
        /// The rejected secret.
        secret: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

impl DrawError {
    /// Returns true if this error is an input-domain violation.
    pub fn is_invalid_guess(&self) -> bool {
        matches!(self, DrawError::InvalidGuess { .. })
    }
}
