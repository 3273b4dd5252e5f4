//! Pure guess-the-number game logic.
//!
//! A [`Configuration`] fixes an inclusive range and an attempt budget. A
//! [`DrawNumber`] session picks a secret in that range and classifies each
//! guess as a [`DrawResult`], until the secret is found, the budget runs out,
//! or the session is reset.
//!
//! ```
//! use draw_number_core::{Comparison, ConfigurationBuilder, DrawNumber};
//!
//! let config = ConfigurationBuilder::new().set_min(0).set_max(100).set_attempts(2).build();
//! assert!(config.is_consistent());
//!
//! let mut game = DrawNumber::with_secret(config, 50)?;
//! let result = game.attempt(50)?;
//! assert_eq!(result.comparison(), Comparison::Equal);
//! assert_eq!(result.remaining_attempts(), 1);
//! # Ok::<(), draw_number_core::DrawError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod configuration;
mod engine;
mod error;
mod result;

pub use configuration::{
    Configuration, ConfigurationBuilder, DEFAULT_ATTEMPTS, DEFAULT_MAX, DEFAULT_MIN,
};
pub use engine::{DrawNumber, GamePhase};
pub use error::DrawError;
pub use result::{Comparison, DrawResult};
