//! Blocks - A classic brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Screen state machine, paddle/ball/brick physics and collisions
//! - `renderer`: Draw-command snapshot, bitmap font, WebGPU pipeline
//! - `audio`: Sound effects and the procedural music stream
//! - `input`: Keyboard edge tracking
//! - `session`: Fixed-step driver tying simulation, audio and rendering together
//! - `platform`: Browser/native platform glue

pub mod audio;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod resources;
pub mod session;
pub mod settings;
pub mod sim;

pub use resources::GameResources;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the game runs one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Ticks spent on the logo screen before moving to the title (2 seconds)
    pub const LOGO_TICKS: u32 = 60 * 2;
    /// Blink half-period for "press enter" prompts
    pub const BLINK_TICKS: u32 = 30;

    /// Paddle defaults
    pub const PLAYER_LIVES: i32 = 5;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 24.0;
    /// Horizontal velocity gained per paddle-width of impact offset
    pub const PADDLE_STEER: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_LAUNCH_SPEED: f32 = 5.0;

    /// Brick grid
    pub const BRICK_LINES: usize = 5;
    pub const BRICKS_PER_LINE: usize = 20;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICKS_POSITION_Y: f32 = 50.0;
}
