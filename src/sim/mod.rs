//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering, audio or platform dependencies; side effects leave as events

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision_circle_rect};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GameState, Player, Screen, ScreenKind};
pub use tick::{TickInput, tick};
