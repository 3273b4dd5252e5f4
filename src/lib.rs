//! Draw Number - guess-the-number game with pluggable views.
//!
//! # Architecture
//!
//! - **Core** ([`draw_number_core`]): configuration, engine and results
//! - **Config source**: `key: value` or TOML files resolved into a
//!   consistent configuration
//! - **Views**: observers that render results and errors
//! - **App**: the driver that feeds input to the engine and broadcasts
//!   every outcome to the views
//!
//! # Example
//!
//! ```
//! use draw_number::{
//!     Configuration, DrawNumberApp, DrawNumberView, PrintStreamView, Resolved, TranscriptFormat,
//! };
//!
//! let views: Vec<Box<dyn DrawNumberView>> =
//!     vec![Box::new(PrintStreamView::new(Vec::new(), TranscriptFormat::Text))];
//! let mut app = DrawNumberApp::new(Resolved::from_configuration(Configuration::default()), views)?;
//! app.run("50\nquit\n".as_bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config_source;
mod input;
mod views;

// Crate-level exports - Driver
pub use app::{DrawNumberApp, ShutdownSignal};

// Crate-level exports - Configuration ingestion
pub use config_source::{
    ConfigError, INCONSISTENT_CONFIGURATION, Resolved, load_settings, parse_settings, resolve,
};

// Crate-level exports - Input
pub use input::PlayerCommand;

// Crate-level exports - Views
pub use views::{DrawNumberView, PrintStreamView, TerminalView, TranscriptFormat};

// Crate-level exports - Core game types
pub use draw_number_core::{
    Comparison, Configuration, ConfigurationBuilder, DrawError, DrawNumber, DrawResult, GamePhase,
};
