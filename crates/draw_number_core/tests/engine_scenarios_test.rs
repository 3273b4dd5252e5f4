//! Walkthroughs of complete sessions on a 0..=100 range with two attempts.

use draw_number_core::{
    Comparison, Configuration, ConfigurationBuilder, DrawError, DrawNumber, GamePhase,
};

fn two_attempt_config() -> Configuration {
    ConfigurationBuilder::new()
        .set_min(0)
        .set_max(100)
        .set_attempts(2)
        .build()
}

#[test]
fn test_immediate_win() {
    let mut game = DrawNumber::with_secret(two_attempt_config(), 50).expect("Valid secret");

    let result = game.attempt(50).expect("Legal guess");

    assert_eq!(result.comparison(), Comparison::Equal);
    assert_eq!(result.remaining_attempts(), 1);
    assert_eq!(game.phase(), GamePhase::Won);
}

#[test]
fn test_low_invalid_high_exhausts() {
    let mut game = DrawNumber::with_secret(two_attempt_config(), 50).expect("Valid secret");

    let first = game.attempt(10).expect("Legal guess");
    assert_eq!(first.comparison(), Comparison::Lower);
    assert_eq!(first.remaining_attempts(), 1);
    assert_eq!(game.phase(), GamePhase::Active);

    let rejected = game.attempt(200);
    assert!(matches!(
        rejected,
        Err(DrawError::InvalidGuess { guess: 200, min: 0, max: 100 })
    ));
    assert_eq!(game.remaining_attempts(), 1);

    let last = game.attempt(90).expect("Legal guess");
    assert_eq!(last.comparison(), Comparison::Higher);
    assert_eq!(last.remaining_attempts(), 0);
    assert!(last.is_loss());
    assert_eq!(game.phase(), GamePhase::Exhausted);
}

#[test]
fn test_reset_after_exhaustion() {
    let mut game = DrawNumber::with_secret(two_attempt_config(), 50).expect("Valid secret");
    game.attempt(10).expect("Legal guess");
    game.attempt(90).expect("Legal guess");

    game.reset();

    assert_eq!(game.remaining_attempts(), 2);
    assert_eq!(game.phase(), GamePhase::Active);
    assert!(game.attempt(0).is_ok());
}

#[test]
fn test_inconsistent_configuration_falls_back_to_default() {
    let config = ConfigurationBuilder::new().set_min(5).set_max(3).build();
    assert!(!config.is_consistent());
    assert!(DrawNumber::new(config).is_err());

    let fallback = Configuration::default();
    assert!(fallback.is_consistent());
    let game = DrawNumber::new(fallback).expect("Default config is consistent");
    assert_eq!(game.remaining_attempts(), fallback.attempts());
}
