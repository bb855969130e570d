//! Property-based tests for dealing, cursor movement, combo scoring, and the
//! session state machine.
//!
//! The session properties replay random input scripts (cursor moves, flips,
//! clock advances) and check the invariants after every step.

use std::collections::HashMap;
use std::time::Duration;

use mindflip::grid::{deal, MAX_CARDS};
use mindflip::{
    Clock, Combo, Direction, GameRng, GameSession, GridSize, ManualClock, MemoryHighScoreStore,
    PairKey, Position, SessionConfig, TurnState,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Input {
    Move(Direction),
    Flip,
    Wait(u64),
}

fn arbitrary_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

prop_compose! {
    fn arbitrary_size()(rows in 1usize..=6, cols in 1usize..=6) -> GridSize {
        GridSize::new(rows, cols)
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => arbitrary_direction().prop_map(Input::Move),
        3 => Just(Input::Flip),
        2 => (0u64..3_000).prop_map(Input::Wait),
    ]
}

/// The state invariants that must hold between any two calls.
fn check_invariants(session: &GameSession<MemoryHighScoreStore>) -> Result<(), TestCaseError> {
    let size = session.grid_size();
    prop_assert_eq!(session.cards().len(), size.cells());
    prop_assert!(size.contains(session.cursor()));

    let selection = session.selection();
    prop_assert!(selection.len() <= 2);
    match session.turn_state() {
        TurnState::FirstCard => prop_assert!(selection.is_empty()),
        TurnState::SecondCard => prop_assert_eq!(selection.len(), 1),
        TurnState::Delay | TurnState::LevelComplete => prop_assert_eq!(selection.len(), 2),
    }

    // Face-up cards that are not matched are exactly the selection.
    for (index, card) in session.cards().iter().enumerate() {
        if card.is_matched() {
            prop_assert!(card.is_flipped());
        }
        if card.is_flipped() && !card.is_matched() {
            prop_assert!(selection.as_slice().contains(&index));
        }
    }

    // Matched cards come in whole pairs.
    let mut matched: HashMap<PairKey, usize> = HashMap::new();
    for card in session.cards().iter().filter(|c| c.is_matched()) {
        *matched.entry(card.value()).or_default() += 1;
    }
    prop_assert!(matched.values().all(|&n| n == 2));

    prop_assert_eq!(session.is_level_complete(), session.turn_state() == TurnState::LevelComplete);
    prop_assert_eq!(session.is_game_over(), session.lives() == 0);
    if session.is_game_over() {
        prop_assert!(session.high_score() >= session.score());
    }
    Ok(())
}

proptest! {
    #[test]
    fn deal_pairs_every_key(level in 1u32..200, seed in any::<u64>()) {
        let size = GridSize::for_level(level);
        let cards = deal(size, &mut GameRng::new(seed));

        prop_assert!(size.cells() <= MAX_CARDS);
        prop_assert_eq!(size.cells() % 2, 0);
        prop_assert_eq!(cards.len(), size.cells());

        let mut counts: HashMap<PairKey, usize> = HashMap::new();
        for (index, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.position(), size.position_of(index));
            prop_assert!(card.is_hidden());
            *counts.entry(card.value()).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), size.pairs());
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn grid_grows_with_level(level in 1u32..100) {
        let here = GridSize::for_level(level).cells();
        let next = GridSize::for_level(level + 1).cells();
        prop_assert!(next >= here);
    }

    #[test]
    fn cursor_stays_in_grid(
        size in arbitrary_size(),
        moves in prop::collection::vec(arbitrary_direction(), 0..64),
    ) {
        let mut pos = Position::new(0, 0);
        for direction in moves {
            pos = pos.step(direction, size);
            prop_assert!(size.contains(pos));
        }
    }

    #[test]
    fn cursor_step_reverses(
        size in arbitrary_size(),
        row in 0usize..6,
        col in 0usize..6,
        direction in arbitrary_direction(),
    ) {
        let start = Position::new(row % size.rows, col % size.cols);
        let back = start.step(direction, size).step(direction.opposite(), size);
        prop_assert_eq!(back, start);
    }

    #[test]
    fn cursor_full_lap_returns(size in arbitrary_size(), direction in arbitrary_direction()) {
        let lap = match direction {
            Direction::Up | Direction::Down => size.rows,
            Direction::Left | Direction::Right => size.cols,
        };
        let mut pos = Position::new(0, 0);
        for _ in 0..lap {
            pos = pos.step(direction, size);
        }
        prop_assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn combo_multiplier_monotonic_and_capped(
        matches in 0u32..60,
        bonus in 0.0f64..1.0,
        cap in 1.0f64..4.0,
    ) {
        let mut combo = Combo::new();
        let mut previous = combo.multiplier(bonus, cap);
        prop_assert_eq!(previous, 1.0);

        for i in 0..matches {
            combo.record_match(Duration::from_secs(u64::from(i)));
            let current = combo.multiplier(bonus, cap);
            prop_assert!(current >= previous);
            prop_assert!(current <= cap);
            prop_assert!(current >= 1.0);
            previous = current;
        }
    }

    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        lives in 1u32..5,
        inputs in prop::collection::vec(arbitrary_input(), 0..300),
    ) {
        let clock = ManualClock::new();
        let config = SessionConfig::default().with_initial_lives(lives);
        let mut session = GameSession::new(config.clone(), MemoryHighScoreStore::new(), seed);
        check_invariants(&session)?;

        for input in inputs {
            let score = session.score();
            let lives = session.lives();
            let level = session.level();

            match input {
                Input::Move(direction) => session.move_cursor(direction),
                Input::Flip => {
                    let was_second = session.turn_state() == TurnState::SecondCard;
                    let flipped = session.flip_card(clock.now());

                    if flipped && was_second {
                        let gained = session.score() - score;
                        let bonus = config.level_bonus * level;
                        if gained == 0 {
                            // Mismatch: one life gone, combo broken.
                            prop_assert_eq!(session.lives() + 1, lives);
                            prop_assert_eq!(session.combo_count(), 0);
                        } else {
                            prop_assert!(
                                gained == session.last_match_points()
                                    || gained == session.last_match_points() + bonus
                            );
                            prop_assert!(session.last_match_points() >= config.match_points);
                            prop_assert!(session.lives() >= lives);
                            prop_assert!(session.lives() <= lives + 1);
                        }
                    } else {
                        prop_assert_eq!(session.score(), score);
                        prop_assert_eq!(session.lives(), lives);
                    }
                }
                Input::Wait(millis) => {
                    clock.advance(Duration::from_millis(millis));
                    let events = session.update(clock.now());
                    prop_assert!(!(events.matched && events.mismatched));
                    prop_assert_eq!(events.game_over, session.is_game_over());
                    prop_assert_eq!(session.score(), score);
                    prop_assert_eq!(session.lives(), lives);
                    if events.level_complete {
                        prop_assert_eq!(session.level(), level + 1);
                    } else {
                        prop_assert_eq!(session.level(), level);
                    }
                }
            }

            prop_assert!(session.score() >= score);
            check_invariants(&session)?;
        }
    }

    #[test]
    fn same_seed_same_session(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arbitrary_input(), 0..120),
    ) {
        let clock = ManualClock::new();
        let mut a = GameSession::new(SessionConfig::default(), MemoryHighScoreStore::new(), seed);
        let mut b = GameSession::new(SessionConfig::default(), MemoryHighScoreStore::new(), seed);

        for input in inputs {
            match input {
                Input::Move(direction) => {
                    a.move_cursor(direction);
                    b.move_cursor(direction);
                }
                Input::Flip => {
                    prop_assert_eq!(a.flip_card(clock.now()), b.flip_card(clock.now()));
                }
                Input::Wait(millis) => {
                    clock.advance(Duration::from_millis(millis));
                    prop_assert_eq!(a.update(clock.now()), b.update(clock.now()));
                }
            }
        }

        prop_assert_eq!(a.cards(), b.cards());
        prop_assert_eq!(a.score(), b.score());
        prop_assert_eq!(a.lives(), b.lives());
    }
}
