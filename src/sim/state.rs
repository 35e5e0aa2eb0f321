//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the shell owns
//! one value of it and hands it to `tick` and the frame builder by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Top-level screen, with the data only that screen needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Splash logo, advances to the title after [`LOGO_TICKS`]
    Logo { frames_counter: u32 },
    /// Title screen, waiting for confirm
    Title { frames_counter: u32 },
    /// Active gameplay
    Gameplay { paused: bool },
    /// Run ended, waiting for confirm
    Ending { frames_counter: u32 },
}

/// Screen discriminant without payload (for logging and comparisons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    Logo,
    Title,
    Gameplay,
    Ending,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Logo { .. } => ScreenKind::Logo,
            Screen::Title { .. } => ScreenKind::Title,
            Screen::Gameplay { .. } => ScreenKind::Gameplay,
            Screen::Ending { .. } => ScreenKind::Ending,
        }
    }

    /// Frames spent on the current screen (gameplay does not count frames)
    pub fn frames_counter(&self) -> u32 {
        match *self {
            Screen::Logo { frames_counter }
            | Screen::Title { frames_counter }
            | Screen::Ending { frames_counter } => frames_counter,
            Screen::Gameplay { .. } => 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Screen::Gameplay { paused: true })
    }
}

/// Something the simulation did that the shell may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Logo timer ran out, title is showing
    LogoFinished,
    /// Confirm pressed on the title screen
    GameStarted,
    /// Pause toggled during gameplay
    PauseToggled { paused: bool },
    /// Ball launched from the paddle
    BallLaunched,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Ball destroyed a brick
    BrickDestroyed { row: usize, col: usize },
    /// Ball fell past the bottom edge
    BallLost { lives_left: i32 },
    /// Lives ran out, ending screen is showing
    GameOver,
    /// Confirm pressed on the ending screen
    ReturnedToTitle,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub position: Vec2,
    /// Horizontal pixels moved per tick while a direction key is held
    pub speed: f32,
    pub size: Vec2,
    pub bounds: Rect,
    pub lives: i32,
}

impl Default for Player {
    fn default() -> Self {
        // Integer arithmetic on purpose: 450 * 7 / 8 lands on 393
        let position = Vec2::new(
            (SCREEN_WIDTH as i32 / 2) as f32,
            (SCREEN_HEIGHT as i32 * 7 / 8) as f32,
        );
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        Self {
            position,
            speed: PADDLE_SPEED,
            size,
            bounds: Rect::from_pos_size(position, size),
            lives: PLAYER_LIVES,
        }
    }
}

impl Player {
    /// Horizontal center of the paddle
    pub fn center_x(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    /// Move horizontally; call [`Player::clamp`] once all moves are applied
    pub fn move_by(&mut self, dx: f32) {
        self.position.x += dx;
    }

    /// Keep the paddle fully on screen
    pub fn clamp(&mut self) {
        if self.position.x <= 0.0 {
            self.position.x = 0.0;
        }
        if self.position.x + self.size.x >= SCREEN_WIDTH {
            self.position.x = SCREEN_WIDTH - self.size.x;
        }
    }

    pub fn update_bounds(&mut self) {
        self.bounds = Rect::from_pos_size(self.position, self.size);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Free flight; inactive means resting on the paddle
    pub active: bool,
}

impl Ball {
    /// A ball resting above the given paddle
    pub fn resting_on(player: &Player) -> Self {
        Self {
            position: Vec2::new(player.center_x(), player.position.y - BALL_RADIUS * 2.0),
            velocity: Vec2::new(4.0, 4.0),
            radius: BALL_RADIUS,
            active: false,
        }
    }

    /// Launch straight up
    pub fn launch(&mut self) {
        self.active = true;
        self.velocity = Vec2::new(0.0, -BALL_LAUNCH_SPEED);
    }

    /// Put the ball back on the paddle after it was lost
    pub fn reset_to(&mut self, player: &Player) {
        self.position = Vec2::new(player.center_x(), player.position.y - self.radius - 1.0);
        self.velocity = Vec2::ZERO;
        self.active = false;
    }
}

/// A single brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub position: Vec2,
    pub size: Vec2,
    pub bounds: Rect,
    /// Hit points; stored but every brick breaks on its first hit
    pub resistance: i32,
    pub active: bool,
}

impl Brick {
    fn at(row: usize, col: usize) -> Self {
        let size = Vec2::new(SCREEN_WIDTH / BRICKS_PER_LINE as f32, BRICK_HEIGHT);
        let position = Vec2::new(
            col as f32 * size.x,
            row as f32 * size.y + BRICKS_POSITION_Y,
        );
        Self {
            position,
            size,
            bounds: Rect::from_pos_size(position, size),
            resistance: 0,
            active: true,
        }
    }
}

/// Fixed grid of bricks stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        let bricks = (0..BRICK_LINES)
            .flat_map(|row| (0..BRICKS_PER_LINE).map(move |col| Brick::at(row, col)))
            .collect();
        Self { bricks }
    }
}

impl BrickGrid {
    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row < BRICK_LINES && col < BRICKS_PER_LINE {
            self.bricks.get(row * BRICKS_PER_LINE + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        if row < BRICK_LINES && col < BRICKS_PER_LINE {
            self.bricks.get_mut(row * BRICKS_PER_LINE + col)
        } else {
            None
        }
    }

    /// Iterate as `(row, col, brick)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.bricks
            .iter()
            .enumerate()
            .map(|(i, b)| (i / BRICKS_PER_LINE, i % BRICKS_PER_LINE, b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        self.bricks
            .iter_mut()
            .enumerate()
            .map(|(i, b)| (i / BRICKS_PER_LINE, i % BRICKS_PER_LINE, b))
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current screen
    pub screen: Screen,
    /// Player paddle and lives
    pub player: Player,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Simulation tick counter (all screens)
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let player = Player::default();
        let ball = Ball::resting_on(&player);
        Self {
            screen: Screen::Logo { frames_counter: 0 },
            player,
            ball,
            bricks: BrickGrid::default(),
            time_ticks: 0,
        }
    }

    /// Force the pause on (used when the window loses focus)
    ///
    /// Returns true if gameplay was running and is now paused.
    pub fn pause(&mut self) -> bool {
        match &mut self.screen {
            Screen::Gameplay { paused } if !*paused => {
                *paused = true;
                true
            }
            _ => false,
        }
    }
}
