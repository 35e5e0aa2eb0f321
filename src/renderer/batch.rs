//! Frame tessellation
//!
//! Flattens a [`Frame`] into one triangle list in logical screen pixels.
//! The pipeline maps those to device coordinates.

use glam::Vec2;

use super::frame::{DrawCommand, Frame};
use super::vertex::Vertex;
use super::{font, shapes, sprites};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Tessellate every command of a frame, in draw order
pub fn tessellate(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in &frame.commands {
        match command {
            DrawCommand::Clear(color) => {
                // Only the playfield is cleared; the area around it stays letterbox
                vertices.clear();
                vertices.extend(shapes::rect(
                    Vec2::ZERO,
                    Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    *color,
                ));
            }
            DrawCommand::Texture {
                texture,
                position,
                tint,
            } => vertices.extend(sprites::sprite_vertices(texture, *position, *tint)),
            DrawCommand::Text {
                text,
                position,
                size,
                spacing,
                style,
                color,
            } => vertices.extend(font::text_vertices(
                text, *position, *size, *spacing, *style, *color,
            )),
            DrawCommand::Rect {
                position,
                size,
                color,
            } => vertices.extend(shapes::rect(*position, *size, *color)),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::frame::build_frame;
    use crate::renderer::vertex::colors;
    use crate::resources::GameResources;
    use crate::sim::{GameState, Screen};

    #[test]
    fn test_clear_covers_playfield() {
        let frame = Frame {
            commands: vec![DrawCommand::Clear(colors::RAYWHITE)],
        };
        let v = tessellate(&frame);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| v.color == colors::RAYWHITE));
        assert!(v.iter().any(|v| v.position == [800.0, 450.0]));
    }

    #[test]
    fn test_clear_discards_earlier_commands() {
        let frame = Frame {
            commands: vec![
                DrawCommand::Rect {
                    position: Vec2::ZERO,
                    size: Vec2::ONE,
                    color: colors::BLACK,
                },
                DrawCommand::Clear(colors::RAYWHITE),
            ],
        };
        assert_eq!(tessellate(&frame).len(), 6);
    }

    #[test]
    fn test_gameplay_frame_is_triangles() {
        let resources = GameResources::load();
        let mut state = GameState::new();
        state.screen = Screen::Gameplay { paused: true };
        let v = tessellate(&build_frame(&state, &resources));
        assert!(!v.is_empty());
        assert_eq!(v.len() % 3, 0);
    }
}
