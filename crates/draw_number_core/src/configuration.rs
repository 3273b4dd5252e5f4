//! Game configuration and its builder.
//!
//! Building is two-phase: [`ConfigurationBuilder::build`] only substitutes
//! defaults, and [`Configuration::is_consistent`] is the separate check a
//! caller runs before handing the configuration to the engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::DrawError;

/// Lower bound used when none is configured.
pub const DEFAULT_MIN: i64 = 0;

/// Upper bound used when none is configured.
pub const DEFAULT_MAX: i64 = 100;

/// Attempt budget used when none is configured.
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Immutable range and attempt budget for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    min: i64,
    max: i64,
    attempts: u32,
}

impl Configuration {
    /// Inclusive lower bound of the secret's range.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Inclusive upper bound of the secret's range.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Maximum number of guesses per session.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns true iff `min < max` and `attempts > 0`.
    pub fn is_consistent(&self) -> bool {
        self.min < self.max && self.attempts > 0
    }

    /// Returns this configuration if it is consistent.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InconsistentConfiguration`] otherwise.
    #[instrument]
    pub fn validate(self) -> Result<Self, DrawError> {
        if self.is_consistent() {
            Ok(self)
        } else {
            debug!("Configuration rejected");
            Err(DrawError::InconsistentConfiguration {
                min: self.min,
                max: self.max,
                attempts: self.attempts,
            })
        }
    }

    /// Returns true if `guess` lies within `[min, max]`.
    pub fn contains(&self, guess: i64) -> bool {
        (self.min..=self.max).contains(&guess)
    }

    /// Number of distinct legal guesses, or zero for an empty range.
    ///
    /// Saturates at `u64::MAX` for the full `i64` range.
    pub fn range_len(&self) -> u64 {
        if self.min > self.max {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigurationBuilder::new().build()
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "range {}..={}, {} attempts",
            self.min, self.max, self.attempts
        )
    }
}

/// Accumulates optional settings and produces a [`Configuration`].
///
/// Unset fields stay `None` until [`build`](Self::build), so callers can tell
/// a user-specified value from a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationBuilder {
    min: Option<i64>,
    max: Option<i64>,
    attempts: Option<u32>,
}

impl ConfigurationBuilder {
    /// Creates a builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower bound, overwriting any previous value.
    pub fn set_min(&mut self, min: i64) -> &mut Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound, overwriting any previous value.
    pub fn set_max(&mut self, max: i64) -> &mut Self {
        self.max = Some(max);
        self
    }

    /// Sets the attempt budget, overwriting any previous value.
    pub fn set_attempts(&mut self, attempts: u32) -> &mut Self {
        self.attempts = Some(attempts);
        self
    }

    /// The lower bound, if one was set.
    pub fn min(&self) -> Option<i64> {
        self.min
    }

    /// The upper bound, if one was set.
    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// The attempt budget, if one was set.
    pub fn attempts(&self) -> Option<u32> {
        self.attempts
    }

    /// Overlays every field set in `other` onto this builder.
    pub fn merge(&mut self, other: &ConfigurationBuilder) -> &mut Self {
        if let Some(min) = other.min {
            self.min = Some(min);
        }
        if let Some(max) = other.max {
            self.max = Some(max);
        }
        if let Some(attempts) = other.attempts {
            self.attempts = Some(attempts);
        }
        self
    }

    /// Produces a configuration, substituting defaults for unset fields.
    ///
    /// No validation happens here; see [`Configuration::is_consistent`].
    #[instrument(skip(self), fields(min = ?self.min, max = ?self.max, attempts = ?self.attempts))]
    pub fn build(&self) -> Configuration {
        Configuration {
            min: self.min.unwrap_or(DEFAULT_MIN),
            max: self.max.unwrap_or(DEFAULT_MAX),
            attempts: self.attempts.unwrap_or(DEFAULT_ATTEMPTS),
        }
    }
}
