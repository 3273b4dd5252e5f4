//! Draw Number - CLI entry point.

#![warn(missing_docs)]

mod cli;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Overrides};
use draw_number::{
    DrawNumberApp, DrawNumberView, PrintStreamView, TerminalView, TranscriptFormat, resolve,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            transcript,
            no_transcript,
            format,
            seed,
            overrides,
        } => {
            let transcript = (!no_transcript).then_some(transcript);
            play(&config, transcript, format, seed, &overrides)
        }
        Command::CheckConfig { config, overrides } => check_config(&config, &overrides),
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,draw_number=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config, overrides), fields(config = %config.display()))]
fn play(
    config: &Path,
    transcript: Option<PathBuf>,
    format: TranscriptFormat,
    seed: Option<u64>,
    overrides: &Overrides,
) -> Result<()> {
    let resolved = resolve(config, &overrides.to_builder());

    let mut views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(TerminalView::stdout())];
    let mut transcript_error = None;
    if let Some(path) = &transcript {
        match PrintStreamView::create(path, format) {
            Ok(view) => views.push(Box::new(view)),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Transcript disabled");
                transcript_error = Some(format!(
                    "Cannot write transcript to {}: {}",
                    path.display(),
                    e
                ));
            }
        }
    }

    let mut app = match seed {
        Some(seed) => DrawNumberApp::seeded(resolved, views, seed),
        None => DrawNumberApp::new(resolved, views),
    }
    .context("Failed to start game")?;

    if let Some(message) = transcript_error {
        app.display_error(&message);
    }

    info!(views = app.view_count(), "Game ready");
    let handled = app
        .run(io::stdin().lock())
        .context("Failed to read player input")?;
    info!(handled, "Goodbye");
    Ok(())
}

/// Print the resolved configuration
#[instrument(skip(config, overrides), fields(config = %config.display()))]
fn check_config(config: &Path, overrides: &Overrides) -> Result<()> {
    let resolved = resolve(config, &overrides.to_builder());
    println!("{}", resolved.configuration());
    for error in resolved.errors() {
        println!("error: {}", error);
    }
    if !resolved.is_clean() {
        anyhow::bail!("{} problem(s) found in {}", resolved.errors().len(), config.display());
    }
    Ok(())
}
