//! Property tests for the simulation under arbitrary input sequences

use blocks::consts::*;
use blocks::sim::{GameEvent, GameState, Screen, ScreenKind, TickInput, tick};
use proptest::prelude::*;

fn tick_input() -> impl Strategy<Value = TickInput> {
    any::<(bool, bool, bool, bool, bool)>().prop_map(|(left, right, pause, launch, confirm)| {
        TickInput {
            left,
            right,
            pause,
            launch,
            confirm,
        }
    })
}

fn gameplay_state() -> GameState {
    let mut state = GameState::new();
    state.screen = Screen::Gameplay { paused: false };
    state
}

proptest! {
    #[test]
    fn paddle_stays_on_screen(inputs in prop::collection::vec(tick_input(), 1..600)) {
        let mut state = gameplay_state();
        for input in &inputs {
            tick(&mut state, input);
            let x = state.player.position.x;
            prop_assert!(x >= 0.0);
            prop_assert!(x <= SCREEN_WIDTH - state.player.size.x);
            prop_assert_eq!(state.player.bounds.x, x);
        }
    }

    #[test]
    fn at_most_one_brick_per_tick(inputs in prop::collection::vec(tick_input(), 1..1200)) {
        let mut state = gameplay_state();
        for input in &inputs {
            let before = state.bricks.active_count();
            let events = tick(&mut state, input);
            let after = state.bricks.active_count();
            prop_assert!(before - after <= 1);

            let destroyed = events
                .iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .count();
            prop_assert_eq!(destroyed, before - after);
        }
    }

    #[test]
    fn lives_stay_in_range(inputs in prop::collection::vec(tick_input(), 1..2000)) {
        let mut state = gameplay_state();
        for input in &inputs {
            let was = state.screen.kind();
            let events = tick(&mut state, input);
            prop_assert!((0..=PLAYER_LIVES).contains(&state.player.lives));

            let game_over = events.contains(&GameEvent::GameOver);
            let entered_ending = was == ScreenKind::Gameplay
                && state.screen.kind() == ScreenKind::Ending;
            prop_assert_eq!(game_over, entered_ending);
            if game_over {
                prop_assert_eq!(state.player.lives, PLAYER_LIVES);
            }
        }
    }

    #[test]
    fn logo_lasts_121_ticks(inputs in prop::collection::vec(tick_input(), 121)) {
        let mut state = GameState::new();
        for (i, input) in inputs.iter().enumerate() {
            tick(&mut state, input);
            let expected = if i + 1 > LOGO_TICKS as usize {
                ScreenKind::Title
            } else {
                ScreenKind::Logo
            };
            prop_assert_eq!(state.screen.kind(), expected);
        }
    }

    #[test]
    fn resting_ball_follows_paddle(inputs in prop::collection::vec(tick_input(), 1..300)) {
        let mut state = gameplay_state();
        for input in &inputs {
            let input = TickInput { launch: false, ..*input };
            tick(&mut state, &input);
            if !state.screen.is_paused() {
                prop_assert!(!state.ball.active);
                prop_assert_eq!(state.ball.position.x, state.player.center_x());
            }
        }
    }
}
