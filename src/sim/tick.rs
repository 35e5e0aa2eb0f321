//! Fixed timestep simulation tick
//!
//! Core game loop that advances the screen state machine one frame.

use super::collision::check_collision_circle_rect;
use super::state::{GameEvent, GameState, Screen};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Direction keys are "held" state; the rest are press edges and must be
/// true for exactly one tick per key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Pause toggle (P)
    pub pause: bool,
    /// Launch ball (Space)
    pub launch: bool,
    /// Confirm (Enter)
    pub confirm: bool,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    match state.screen {
        Screen::Logo { frames_counter } => {
            let frames_counter = frames_counter + 1;
            if frames_counter > LOGO_TICKS {
                state.screen = Screen::Title { frames_counter: 0 };
                events.push(GameEvent::LogoFinished);
            } else {
                state.screen = Screen::Logo { frames_counter };
            }
        }

        Screen::Title { frames_counter } => {
            if input.confirm {
                state.screen = Screen::Gameplay { paused: false };
                events.push(GameEvent::GameStarted);
            } else {
                state.screen = Screen::Title {
                    frames_counter: frames_counter + 1,
                };
            }
        }

        Screen::Gameplay { paused } => {
            let paused = if input.pause {
                events.push(GameEvent::PauseToggled { paused: !paused });
                !paused
            } else {
                paused
            };
            state.screen = Screen::Gameplay { paused };

            if !paused {
                update_gameplay(state, input, &mut events);
            }
        }

        Screen::Ending { frames_counter } => {
            // Counter keeps running into the title so the prompt blink continues
            let frames_counter = frames_counter + 1;
            if input.confirm {
                state.screen = Screen::Title { frames_counter };
                events.push(GameEvent::ReturnedToTitle);
            } else {
                state.screen = Screen::Ending { frames_counter };
            }
        }
    }

    events
}

/// One unpaused gameplay step: paddle, ball, collisions, lives
fn update_gameplay(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let player = &mut state.player;
    if input.left {
        player.move_by(-player.speed);
    }
    if input.right {
        player.move_by(player.speed);
    }
    player.clamp();
    player.update_bounds();

    let ball = &mut state.ball;
    if !ball.active {
        ball.position.x = player.center_x();
        if input.launch {
            ball.launch();
            events.push(GameEvent::BallLaunched);
        }
        return;
    }

    ball.position += ball.velocity;

    // Screen limits
    if ball.position.x + ball.radius >= SCREEN_WIDTH || ball.position.x - ball.radius <= 0.0 {
        ball.velocity.x *= -1.0;
    }
    if ball.position.y - ball.radius <= 0.0 {
        ball.velocity.y *= -1.0;
    }

    // Paddle: bounce and steer by where the ball struck
    if check_collision_circle_rect(ball.position, ball.radius, &player.bounds) {
        ball.velocity.y *= -1.0;
        ball.velocity.x = (ball.position.x - player.center_x()) / player.size.x * PADDLE_STEER;
        events.push(GameEvent::PaddleBounce);
    }

    // Bricks: first hit in row-major order wins, one per tick
    let hit = state.bricks.iter_mut().find(|(_, _, brick)| {
        brick.active && check_collision_circle_rect(ball.position, ball.radius, &brick.bounds)
    });
    if let Some((row, col, brick)) = hit {
        brick.active = false;
        ball.velocity.y *= -1.0;
        events.push(GameEvent::BrickDestroyed { row, col });
    }

    // Bottom edge: ball lost
    if ball.position.y + ball.radius >= SCREEN_HEIGHT {
        ball.reset_to(player);
        player.lives -= 1;
        events.push(GameEvent::BallLost {
            lives_left: player.lives,
        });
    }

    if player.lives < 0 {
        player.lives = PLAYER_LIVES;
        state.screen = Screen::Ending { frames_counter: 0 };
        events.push(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ScreenKind;
    use glam::Vec2;

    fn gameplay_state() -> GameState {
        let mut state = GameState::new();
        state.screen = Screen::Gameplay { paused: false };
        state
    }

    fn press(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_logo_to_title_after_121_ticks() {
        let mut state = GameState::new();
        let input = TickInput::default();

        for _ in 0..120 {
            tick(&mut state, &input);
        }
        assert_eq!(state.screen, Screen::Logo { frames_counter: 120 });

        let events = tick(&mut state, &input);
        assert_eq!(state.screen, Screen::Title { frames_counter: 0 });
        assert_eq!(events, vec![GameEvent::LogoFinished]);
    }

    #[test]
    fn test_title_confirm_starts_game() {
        let mut state = GameState::new();
        state.screen = Screen::Title { frames_counter: 7 };

        tick(&mut state, &TickInput::default());
        assert_eq!(state.screen, Screen::Title { frames_counter: 8 });

        let events = tick(&mut state, &press(|i| i.confirm = true));
        assert_eq!(state.screen, Screen::Gameplay { paused: false });
        assert_eq!(events, vec![GameEvent::GameStarted]);
    }

    #[test]
    fn test_ending_confirm_returns_to_title() {
        let mut state = GameState::new();
        state.screen = Screen::Ending { frames_counter: 0 };

        tick(&mut state, &TickInput::default());
        assert_eq!(state.screen.kind(), ScreenKind::Ending);

        let events = tick(&mut state, &press(|i| i.confirm = true));
        assert_eq!(state.screen.kind(), ScreenKind::Title);
        assert_eq!(events, vec![GameEvent::ReturnedToTitle]);
    }

    #[test]
    fn test_pause_freezes_gameplay() {
        let mut state = gameplay_state();
        state.ball.launch();
        tick(&mut state, &TickInput::default());
        let frozen = state.ball.position;

        let events = tick(&mut state, &press(|i| i.pause = true));
        assert!(state.screen.is_paused());
        assert_eq!(events, vec![GameEvent::PauseToggled { paused: true }]);
        assert_eq!(state.ball.position, frozen);

        // Movement ignored while paused
        tick(&mut state, &press(|i| i.right = true));
        assert_eq!(state.ball.position, frozen);
        assert_eq!(state.player.position.x, 400.0);

        tick(&mut state, &press(|i| i.pause = true));
        assert!(!state.screen.is_paused());
        assert_ne!(state.ball.position, frozen);
    }

    #[test]
    fn test_inactive_ball_follows_paddle() {
        let mut state = gameplay_state();
        for _ in 0..5 {
            tick(&mut state, &press(|i| i.left = true));
        }
        assert_eq!(state.player.position.x, 360.0);
        assert_eq!(state.ball.position.x, 410.0);
        assert!(!state.ball.active);
    }

    #[test]
    fn test_launch_sets_upward_velocity() {
        let mut state = gameplay_state();
        let events = tick(&mut state, &press(|i| i.launch = true));
        assert!(state.ball.active);
        assert_eq!(state.ball.velocity, Vec2::new(0.0, -5.0));
        assert_eq!(events, vec![GameEvent::BallLaunched]);
    }

    #[test]
    fn test_paddle_clamped_to_screen() {
        let mut state = gameplay_state();
        for _ in 0..100 {
            tick(&mut state, &press(|i| i.right = true));
        }
        assert_eq!(state.player.position.x, 700.0);
        assert_eq!(state.player.bounds.x, 700.0);

        for _ in 0..200 {
            tick(&mut state, &press(|i| i.left = true));
        }
        assert_eq!(state.player.position.x, 0.0);
    }

    #[test]
    fn test_both_keys_at_edge_keep_paddle_still() {
        let both = press(|i| {
            i.left = true;
            i.right = true;
        });

        let mut state = gameplay_state();
        state.player.position.x = 0.0;
        tick(&mut state, &both);
        assert_eq!(state.player.position.x, 0.0);
        assert_eq!(state.ball.position.x, 50.0);

        state.player.position.x = 700.0;
        tick(&mut state, &both);
        assert_eq!(state.player.position.x, 700.0);
        assert_eq!(state.ball.position.x, 750.0);
    }

    #[test]
    fn test_left_wall_reflects_x() {
        let mut state = gameplay_state();
        state.ball.active = true;
        state.ball.position = Vec2::new(5.0, 300.0);
        state.ball.velocity = Vec2::new(3.0, -4.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.velocity, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_top_wall_reflects_y() {
        let mut state = gameplay_state();
        state.bricks.iter_mut().for_each(|(_, _, b)| b.active = false);
        state.ball.active = true;
        state.ball.position = Vec2::new(300.0, 12.0);
        state.ball.velocity = Vec2::new(2.0, -4.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.velocity, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_paddle_bounce_steers_ball() {
        let mut state = gameplay_state();
        state.ball.active = true;
        state.ball.position = Vec2::new(475.0, 380.0);
        state.ball.velocity = Vec2::new(0.0, 5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::PaddleBounce]);
        assert_eq!(state.ball.velocity.y, -5.0);
        // (475 - 450) / 100 * 5
        assert!((state.ball.velocity.x - 1.25).abs() < 1e-5);
    }

    #[test]
    fn test_one_brick_per_tick() {
        let mut state = gameplay_state();
        state.ball.active = true;
        // Lands on the corner shared by (0,0), (0,1), (1,0) and (1,1)
        state.ball.position = Vec2::new(40.0, 75.0);
        state.ball.velocity = Vec2::new(0.0, -5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BrickDestroyed { row: 0, col: 0 }]);
        assert_eq!(state.bricks.active_count(), 99);
        assert!(!state.bricks.get(0, 0).unwrap().active);
        assert!(state.bricks.get(0, 1).unwrap().active);
        assert!(state.bricks.get(1, 0).unwrap().active);
        assert_eq!(state.ball.velocity, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_ball_lost_at_bottom() {
        let mut state = gameplay_state();
        state.ball.active = true;
        state.ball.position = Vec2::new(400.0, 440.0);
        state.ball.velocity = Vec2::new(0.0, 5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BallLost { lives_left: 4 }]);
        assert!(!state.ball.active);
        assert_eq!(state.ball.velocity, Vec2::ZERO);
        assert_eq!(state.ball.position, Vec2::new(450.0, 382.0));
        assert_eq!(state.player.lives, 4);
        assert_eq!(state.screen.kind(), ScreenKind::Gameplay);
    }

    #[test]
    fn test_last_life_ends_game_once() {
        let mut state = gameplay_state();
        state.player.lives = 0;
        state.ball.active = true;
        state.ball.position = Vec2::new(100.0, 445.0);
        state.ball.velocity = Vec2::new(0.0, 5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![GameEvent::BallLost { lives_left: -1 }, GameEvent::GameOver]
        );
        assert_eq!(state.screen, Screen::Ending { frames_counter: 0 });
        assert_eq!(state.player.lives, 5);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.screen, Screen::Ending { frames_counter: 1 });
    }

    #[test]
    fn test_cleared_grid_has_no_win_state() {
        let mut state = gameplay_state();
        state.bricks.iter_mut().for_each(|(_, _, b)| b.active = false);
        tick(&mut state, &press(|i| i.launch = true));
        for _ in 0..300 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.screen.kind(), ScreenKind::Gameplay);
    }

    #[test]
    fn test_bricks_persist_across_runs() {
        let mut state = gameplay_state();
        state.bricks.get_mut(2, 3).unwrap().active = false;
        state.player.lives = 0;
        state.ball.active = true;
        state.ball.position = Vec2::new(100.0, 445.0);
        state.ball.velocity = Vec2::new(0.0, 5.0);
        tick(&mut state, &TickInput::default());

        tick(&mut state, &press(|i| i.confirm = true));
        tick(&mut state, &press(|i| i.confirm = true));
        assert_eq!(state.screen.kind(), ScreenKind::Gameplay);
        assert!(!state.bricks.get(2, 3).unwrap().active);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            press(|i| i.confirm = true),
            press(|i| i.launch = true),
            press(|i| i.left = true),
            TickInput::default(),
            press(|i| i.right = true),
        ];

        let mut state1 = gameplay_state();
        let mut state2 = gameplay_state();
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(
            serde_json::to_string(&state1).unwrap(),
            serde_json::to_string(&state2).unwrap()
        );
    }
}
