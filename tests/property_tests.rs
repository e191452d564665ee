//! Invariants that hold for every sequence of commands.
//!
//! Sequences are generated by proptest; the RNG seed is part of the input so
//! failures shrink to a reproducible game.

use proptest::prelude::*;

use hitman::core::{Action, GameConfig, GameError, GameRng, GameState, Phase};
use hitman::games::hitman::HitmanGame;
use hitman::rules::RulesEngine;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Draw), Just(Action::Play)]
}

fn roster_strategy() -> impl Strategy<Value = Vec<String>> {
    (2usize..=6).prop_map(|n| (0..n).map(|i| format!("P{i}")).collect())
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    let alive = state.alive();

    prop_assert!(!alive.is_empty());
    prop_assert_eq!(state.phase() == Phase::GameOver, alive.len() == 1);
    prop_assert_eq!(state.winner().is_some(), state.is_over());
    prop_assert!(alive.windows(2).all(|w| w[0] < w[1]), "alive out of seating order");
    prop_assert!(alive.iter().all(|p| p.index() < state.roster().len()));

    if !state.is_over() {
        prop_assert!(state.current_index() < alive.len());
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        players in roster_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let game = HitmanGame::new(GameConfig::new().with_players(players)).unwrap();
        let mut state = game.reset();
        let mut rng = GameRng::new(seed);

        check_invariants(&state)?;

        for action in actions {
            let before = state.clone();
            let result = game.act(&mut state, action, &mut rng);

            if before.is_over() {
                prop_assert_eq!(result, Err(GameError::GameOver));
                prop_assert_eq!(&state, &before);
                continue;
            }

            let report = result.unwrap();
            prop_assert_eq!(report.record.action, action);
            prop_assert_eq!(report.record.turn, before.turn());
            prop_assert_eq!(Some(report.record.player), before.actor());
            prop_assert_eq!(state.history().len(), before.history().len() + 1);

            match action {
                Action::Draw => prop_assert_eq!(state.deck_size(), before.deck_size() - 1),
                Action::Play => {
                    prop_assert_eq!(state.deck_size(), before.deck_size());
                    prop_assert_eq!(state.alive(), before.alive());
                }
            }

            // The turn counter only ever moves by one, and never after the end
            prop_assert!(state.turn() == before.turn() || state.turn() == before.turn() + 1);
            prop_assert!(state.alive().len() + 1 >= before.alive().len());

            check_invariants(&state)?;
        }
    }

    #[test]
    fn prop_reset_restores_opening(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let game = HitmanGame::default();
        let opening = game.initial_state();
        let mut state = game.reset();
        let mut rng = GameRng::new(seed);

        for action in actions {
            let _ = game.act(&mut state, action, &mut rng);
        }

        prop_assert_eq!(game.reset(), opening);
    }

    #[test]
    fn prop_same_seed_same_game(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..100),
    ) {
        let game = HitmanGame::default();
        let mut a = game.reset();
        let mut b = game.reset();
        let mut rng_a = GameRng::new(seed);
        let mut rng_b = GameRng::new(seed);

        for action in actions {
            prop_assert_eq!(
                game.act(&mut a, action, &mut rng_a),
                game.act(&mut b, action, &mut rng_b)
            );
        }

        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_two_player_elimination_ends_game(seed in any::<u64>()) {
        let game = HitmanGame::default();
        let mut state = game.reset();
        let mut rng = GameRng::new(seed);

        while !state.is_over() {
            let before = state.alive().len();
            game.draw(&mut state, &mut rng).unwrap();
            if state.alive().len() < before {
                prop_assert!(state.is_over());
            }
        }
    }
}
