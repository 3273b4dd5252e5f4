//! Configuration ingestion from `key: value` files.
//!
//! Recognised keys are `minimum`, `maximum` and `attempts`. Files ending in
//! `.toml` are read as TOML with the same keys. Whatever goes wrong, the
//! caller ends up with a usable [`Configuration`] plus a list of displayable
//! error messages.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use draw_number_core::{Configuration, ConfigurationBuilder};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// Message surfaced when the configured values fail the consistency check.
pub const INCONSISTENT_CONFIGURATION: &str = "Error in configuration";

/// Configuration ingestion error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Settings as written in a TOML file.
#[derive(Debug, Default, Deserialize)]
struct TomlSettings {
    minimum: Option<i64>,
    maximum: Option<i64>,
    attempts: Option<u32>,
}

impl From<TomlSettings> for ConfigurationBuilder {
    fn from(settings: TomlSettings) -> Self {
        let mut builder = ConfigurationBuilder::new();
        if let Some(min) = settings.minimum {
            builder.set_min(min);
        }
        if let Some(max) = settings.maximum {
            builder.set_max(max);
        }
        if let Some(attempts) = settings.attempts {
            builder.set_attempts(attempts);
        }
        builder
    }
}

/// Parses `key: value` lines into a builder.
///
/// Blank lines and lines starting with `#` are skipped. Unknown keys are
/// ignored. A repeated key overwrites the earlier value.
///
/// # Errors
///
/// Returns [`ConfigError`] for a line without `:` or a value that is not a
/// valid number for its key.
#[instrument(skip(text))]
pub fn parse_settings(text: &str) -> Result<ConfigurationBuilder, ConfigError> {
    let mut builder = ConfigurationBuilder::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or_else(|| {
            ConfigError::new(format!("Line {}: expected `key: value`, got `{}`", line_no, line))
        })?;
        let key = key.trim();
        let value = value.trim();

        match key {
            "minimum" => {
                builder.set_min(parse_value(key, value, line_no)?);
            }
            "maximum" => {
                builder.set_max(parse_value(key, value, line_no)?);
            }
            "attempts" => {
                builder.set_attempts(parse_value(key, value, line_no)?);
            }
            other => warn!(key = other, line = line_no, "Ignoring unknown configuration key"),
        }
    }

    debug!(?builder, "Settings parsed");
    Ok(builder)
}

fn parse_value<T: std::str::FromStr>(
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| {
        ConfigError::new(format!(
            "Line {}: invalid value `{}` for `{}`: {}",
            line_no, value, key, e
        ))
    })
}

/// Loads settings from a file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_settings(path: impl AsRef<Path>) -> Result<ConfigurationBuilder, ConfigError> {
    let path = path.as_ref();
    debug!("Loading settings from file");
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let settings: TomlSettings = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(settings.into())
    } else {
        parse_settings(&content)
    }
}

/// A configuration ready for the engine, with any problems met on the way.
#[derive(Debug, Clone, Getters)]
pub struct Resolved {
    /// Always consistent.
    configuration: Configuration,
    /// Displayable messages, in the order they occurred.
    errors: Vec<String>,
}

impl Resolved {
    /// Wraps an already-built configuration, falling back to the default if
    /// it is inconsistent.
    #[instrument]
    pub fn from_configuration(configuration: Configuration) -> Self {
        if configuration.is_consistent() {
            Self {
                configuration,
                errors: Vec::new(),
            }
        } else {
            warn!(%configuration, "Inconsistent configuration, using defaults");
            Self {
                configuration: Configuration::default(),
                errors: vec![INCONSISTENT_CONFIGURATION.to_string()],
            }
        }
    }

    /// True if no fallback or error happened.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes self into its parts.
    pub fn into_parts(self) -> (Configuration, Vec<String>) {
        (self.configuration, self.errors)
    }
}

/// Reads `path`, applies `overrides` on top, and validates the result.
///
/// A missing or malformed file contributes nothing but an error message;
/// the overrides and defaults still apply. An inconsistent result is replaced
/// by [`Configuration::default`].
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn resolve(path: impl AsRef<Path>, overrides: &ConfigurationBuilder) -> Resolved {
    let mut errors = Vec::new();
    let mut builder = match load_settings(path.as_ref()) {
        Ok(builder) => builder,
        Err(e) => {
            warn!(error = %e, "Falling back to default settings");
            errors.push(e.message);
            ConfigurationBuilder::new()
        }
    };
    builder.merge(overrides);

    let mut resolved = Resolved::from_configuration(builder.build());
    errors.append(&mut resolved.errors);
    resolved.errors = errors;

    info!(
        configuration = %resolved.configuration,
        clean = resolved.is_clean(),
        "Configuration resolved"
    );
    resolved
}
