//! Properties that hold for every consistent configuration.

use draw_number_core::{
    Comparison, Configuration, ConfigurationBuilder, DrawError, DrawNumber, GamePhase,
};
use proptest::prelude::*;

fn consistent_config() -> impl Strategy<Value = Configuration> {
    (-1_000i64..1_000, 1i64..500, 1u32..20).prop_map(|(min, span, attempts)| {
        ConfigurationBuilder::new()
            .set_min(min)
            .set_max(min + span)
            .set_attempts(attempts)
            .build()
    })
}

proptest! {
    #[test]
    fn fresh_session_has_full_budget(config in consistent_config(), seed in any::<u64>()) {
        let game = DrawNumber::seeded(config, seed).unwrap();
        prop_assert_eq!(game.remaining_attempts(), config.attempts());
        prop_assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn out_of_range_guess_changes_nothing(
        config in consistent_config(),
        seed in any::<u64>(),
        offset in 1i64..1_000,
        below in any::<bool>(),
    ) {
        let mut game = DrawNumber::seeded(config, seed).unwrap();
        let guess = if below { config.min() - offset } else { config.max() + offset };

        let err = game.attempt(guess).unwrap_err();

        prop_assert!(err.is_invalid_guess());
        prop_assert_eq!(game.remaining_attempts(), config.attempts());
        prop_assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn legal_guess_consumes_exactly_one_attempt(
        config in consistent_config(),
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..20),
    ) {
        let mut game = DrawNumber::seeded(config, seed).unwrap();
        let span = (config.max() - config.min()) as usize + 1;

        for pick in picks {
            let before = game.remaining_attempts();
            let guess = config.min() + pick.index(span) as i64;
            match game.attempt(guess) {
                Ok(result) => {
                    prop_assert_eq!(result.remaining_attempts(), before - 1);
                    prop_assert_eq!(game.remaining_attempts(), before - 1);
                }
                Err(err) => {
                    prop_assert_eq!(err, DrawError::GameOver);
                    prop_assert_eq!(before, 0);
                }
            }
        }
    }

    #[test]
    fn secret_always_compares_equal(
        config in consistent_config(),
        secret_pick in any::<prop::sample::Index>(),
        misses in 0u32..20,
    ) {
        let span = (config.max() - config.min()) as usize + 1;
        let secret = config.min() + secret_pick.index(span) as i64;
        let mut game = DrawNumber::with_secret(config, secret).unwrap();
        let wrong = if secret == config.min() { config.max() } else { config.min() };

        for _ in 0..misses.min(config.attempts() - 1) {
            game.attempt(wrong).unwrap();
        }

        let result = game.attempt(secret).unwrap();
        prop_assert_eq!(result.comparison(), Comparison::Equal);
        prop_assert_eq!(game.phase(), GamePhase::Won);
    }

    #[test]
    fn exhaustion_without_win(config in consistent_config()) {
        let mut game = DrawNumber::with_secret(config, config.min()).unwrap();
        for _ in 0..config.attempts() {
            game.attempt(config.max()).unwrap();
        }
        prop_assert_eq!(game.remaining_attempts(), 0);
        prop_assert_eq!(game.phase(), GamePhase::Exhausted);
        prop_assert_eq!(game.attempt(config.min()), Err(DrawError::GameOver));
    }

    #[test]
    fn reset_restores_budget(
        config in consistent_config(),
        seed in any::<u64>(),
        used in 0u32..20,
    ) {
        let mut game = DrawNumber::seeded(config, seed).unwrap();
        for _ in 0..used.min(config.attempts()) {
            let _ = game.attempt(config.min());
        }

        game.reset();

        prop_assert_eq!(game.remaining_attempts(), config.attempts());
        prop_assert_eq!(game.phase(), GamePhase::Active);
    }
}
