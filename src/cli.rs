//! Command-line interface for draw_number.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use draw_number::{ConfigurationBuilder, TranscriptFormat};

/// Draw Number - guess the secret number within a limited number of attempts
#[derive(Parser, Debug)]
#[command(name = "draw_number")]
#[command(about = "Guess-the-number game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on standard input
    Play {
        /// Configuration file (`key: value` lines, or TOML if it ends in .toml)
        #[arg(short, long, default_value = "config.yml")]
        config: PathBuf,

        /// File receiving a transcript of the game
        #[arg(long, default_value = "logger.txt")]
        transcript: PathBuf,

        /// Do not write a transcript file
        #[arg(long)]
        no_transcript: bool,

        /// Transcript line format
        #[arg(long, value_enum, default_value_t = TranscriptFormat::Text)]
        format: TranscriptFormat,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,

        /// Values overriding the configuration file
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the configuration a game would use, and any problems found
    CheckConfig {
        /// Configuration file (`key: value` lines, or TOML if it ends in .toml)
        #[arg(short, long, default_value = "config.yml")]
        config: PathBuf,

        /// Values overriding the configuration file
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line overrides applied on top of the configuration file.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Inclusive lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Inclusive upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Number of attempts per game
    #[arg(long)]
    pub attempts: Option<u32>,
}

impl Overrides {
    /// Converts the overrides into a builder with only the given fields set.
    pub fn to_builder(&self) -> ConfigurationBuilder {
        let mut builder = ConfigurationBuilder::new();
        if let Some(min) = self.min {
            builder.set_min(min);
        }
        if let Some(max) = self.max {
            builder.set_max(max);
        }
        if let Some(attempts) = self.attempts {
            builder.set_attempts(attempts);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["draw_number", "play"]).unwrap();
        match cli.command {
            Command::Play {
                config,
                transcript,
                no_transcript,
                format,
                seed,
                overrides,
            } => {
                assert_eq!(config, PathBuf::from("config.yml"));
                assert_eq!(transcript, PathBuf::from("logger.txt"));
                assert!(!no_transcript);
                assert_eq!(format, TranscriptFormat::Text);
                assert_eq!(seed, None);
                assert_eq!(overrides.to_builder(), ConfigurationBuilder::new());
            }
            Command::CheckConfig { .. } => panic!("Expected play"),
        }
    }

    #[test]
    fn test_negative_override() {
        let cli = Cli::try_parse_from([
            "draw_number",
            "check-config",
            "--min",
            "-10",
            "--attempts",
            "4",
        ])
        .unwrap();
        match cli.command {
            Command::CheckConfig { overrides, .. } => {
                let builder = overrides.to_builder();
                assert_eq!(builder.min(), Some(-10));
                assert_eq!(builder.max(), None);
                assert_eq!(builder.attempts(), Some(4));
            }
            Command::Play { .. } => panic!("Expected check-config"),
        }
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from(["draw_number", "play", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { format: TranscriptFormat::Json, .. }
        ));
    }
}
