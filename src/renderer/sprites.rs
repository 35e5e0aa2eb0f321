//! Procedural sprites
//!
//! Each texture kind is drawn from primitives in its own local box, then
//! tinted. Base colors are near-white so the tint decides the final color,
//! like a grayscale texture would.

use glam::Vec2;

use super::font::{self, FontStyle};
use super::shapes;
use super::vertex::{Color, Vertex, colors, rgb, tinted};
use crate::resources::{Texture, TextureKind};

const CIRCLE_SEGMENTS: u32 = 24;
/// Shade for sprite edges before tinting
const EDGE: Color = rgb(170, 170, 170);

/// Tessellate a sprite with its top-left corner at `pos`
pub fn sprite_vertices(texture: &Texture, pos: Vec2, tint: Color) -> Vec<Vertex> {
    let size = texture.size();
    match texture.kind {
        TextureKind::Ball => {
            let center = pos + size / 2.0;
            let radius = size.x.min(size.y) / 2.0;
            let mut v = shapes::circle(center, radius, tinted(EDGE, tint), CIRCLE_SEGMENTS);
            v.extend(shapes::circle(
                center,
                radius * 0.8,
                tinted(colors::WHITE, tint),
                CIRCLE_SEGMENTS,
            ));
            v
        }
        TextureKind::Paddle => {
            let mut v = shapes::rect(pos, size, tinted(rgb(60, 60, 70), tint));
            v.extend(shapes::rect(
                pos + Vec2::new(2.0, 2.0),
                size - Vec2::new(4.0, 4.0),
                tinted(rgb(110, 110, 125), tint),
            ));
            // Highlight strip along the top
            v.extend(shapes::rect(
                pos + Vec2::new(4.0, 4.0),
                Vec2::new(size.x - 8.0, 4.0),
                tinted(rgb(180, 180, 195), tint),
            ));
            v
        }
        TextureKind::Brick => {
            let mut v = shapes::rect(pos, size, tinted(colors::WHITE, tint));
            v.extend(shapes::rect_outline(pos, size, 1.0, tinted(EDGE, tint)));
            v
        }
        TextureKind::Logo => logo_vertices(pos, size, tint),
    }
}

/// Square frame with the game name in the lower right corner
fn logo_vertices(pos: Vec2, size: Vec2, tint: Color) -> Vec<Vertex> {
    let border = size.x / 16.0;
    let ink = tinted(colors::BLACK, tint);
    let mut v = shapes::rect_outline(pos, size, border, ink);

    let text = "blocks";
    let text_size = size.y / 5.0;
    let spacing = font::default_spacing(text_size);
    let width = font::measure_text_ex(text, text_size, spacing);
    let text_pos = pos + size - Vec2::new(width + border * 2.0, text_size + border * 1.5);
    v.extend(font::text_vertices(
        text,
        text_pos,
        text_size,
        spacing,
        FontStyle::Bold,
        ink,
    ));
    v
}
