//! Outcome of a single attempt.

use serde::{Deserialize, Serialize};

/// Position of a guess relative to the secret.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Comparison {
    /// The guess is below the secret.
    Lower,
    /// The guess is above the secret.
    Higher,
    /// The guess is the secret.
    Equal,
}

/// Immutable snapshot of one accepted attempt.
///
/// Only the engine constructs these. A result with `remaining_attempts == 0`
/// can still be a win, so check [`DrawResult::is_win`] before treating it as a
/// loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawResult {
    comparison: Comparison,
    remaining_attempts: u32,
}

impl DrawResult {
    pub(crate) fn new(comparison: Comparison, remaining_attempts: u32) -> Self {
        Self {
            comparison,
            remaining_attempts,
        }
    }

    /// How the guess compared to the secret.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Attempts left after this guess was consumed.
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// True if the guess matched the secret.
    pub fn is_win(&self) -> bool {
        self.comparison == Comparison::Equal
    }

    /// True if this guess used the last attempt without matching.
    pub fn is_loss(&self) -> bool {
        !self.is_win() && self.remaining_attempts == 0
    }

    /// True if no further guess can change the outcome of the session.
    pub fn is_final(&self) -> bool {
        self.is_win() || self.is_loss()
    }
}
