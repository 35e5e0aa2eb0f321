//! Collision detection for axis-aligned geometry
//!
//! Everything in the playfield is either a circle (the ball) or an
//! axis-aligned rectangle (paddle, bricks), so a single circle-vs-rectangle
//! overlap test covers every contact the game needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from a top-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Touching edges count as a hit. The test works on distances from the
/// rectangle center so it is symmetric on both axes.
pub fn check_collision_circle_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let rect_center = rect.center();

    let dx = (center.x - rect_center.x).abs();
    let dy = (center.y - rect_center.y).abs();

    if dx > half_w + radius || dy > half_h + radius {
        return false;
    }

    if dx <= half_w || dy <= half_h {
        return true;
    }

    // Only the corner region remains
    let corner_dist_sq = (dx - half_w).powi(2) + (dy - half_h).powi(2);
    corner_dist_sq <= radius * radius
}
