//! Property tests over random catalogs and choice sequences.

use flag_quiz::{Catalog, InvalidChoiceError, RoundEngine};
use proptest::prelude::*;

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::hash_set("[A-Za-z]{1,8}", 3..20).prop_map(Catalog::new)
}

proptest! {
    #[test]
    fn new_game_draws_distinct_options(catalog in catalog_strategy(), seed in any::<u64>()) {
        let state = RoundEngine::default().new_game_seeded(&catalog, seed).unwrap();
        let options = state.current().options();

        prop_assert_eq!(options.len(), 3);
        prop_assert!(state.current().correct_index() < 3);
        prop_assert_ne!(&options[0], &options[1]);
        prop_assert_ne!(&options[0], &options[2]);
        prop_assert_ne!(&options[1], &options[2]);
        prop_assert!(options.iter().all(|o| catalog.contains(o)));
    }

    #[test]
    fn choices_advance_one_round_at_a_time(
        catalog in catalog_strategy(),
        seed in any::<u64>(),
        choices in prop::collection::vec(0usize..3, 8),
    ) {
        let engine = RoundEngine::default();
        let mut state = engine.new_game_seeded(&catalog, seed).unwrap();

        for (i, &choice) in choices.iter().enumerate() {
            let before = state.rounds_played();
            let result = engine.submit_choice(&state, choice).unwrap();

            prop_assert_eq!(result.state.rounds_played(), before + 1);
            prop_assert!(result.state.score() <= result.state.rounds_played());
            prop_assert_eq!(
                result.state.score() - state.score(),
                u32::from(result.outcome.is_correct())
            );
            prop_assert_eq!(result.state.is_game_over(), i == 7);
            state = result.state;
        }

        prop_assert_eq!(engine.submit_choice(&state, 0), Err(InvalidChoiceError::GameOver));
    }

    #[test]
    fn out_of_range_choice_leaves_state(seed in any::<u64>(), choice in 3usize..100) {
        let engine = RoundEngine::default();
        let state = engine.new_game_seeded(&Catalog::default(), seed).unwrap();
        let before = state.clone();

        prop_assert_eq!(
            engine.submit_choice(&state, choice),
            Err(InvalidChoiceError::OutOfRange { index: choice, options: 3 })
        );
        prop_assert_eq!(state, before);
    }

    #[test]
    fn too_small_catalog_is_rejected(names in prop::collection::hash_set("[a-z]{1,4}", 0..3)) {
        let catalog = Catalog::new(names);
        prop_assert!(RoundEngine::default().new_game(&catalog).is_err());
    }
}
