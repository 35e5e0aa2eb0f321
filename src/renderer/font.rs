//! Built-in 5x7 bitmap font
//!
//! Provides both halves of text handling: measuring (used by the frame
//! builder to center prompts) and tessellating glyph cells into quads.
//! Lowercase letters render with their uppercase glyphs.

use glam::Vec2;

use super::shapes;
use super::vertex::{Color, Vertex};

/// Glyph width in cells
pub const GLYPH_COLUMNS: usize = 5;
/// Glyph height in cells
pub const GLYPH_ROWS: usize = 7;
/// Font size that maps one cell to one pixel vertically (1 cell padding above, 2 below)
pub const BASE_SIZE: f32 = 10.0;

/// Visual style of a font handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Default UI font: cells drawn slightly inset
    Regular,
    /// Display font: solid cells
    Bold,
}

/// Spacing the default font uses between glyphs at a given size
pub fn default_spacing(size: f32) -> f32 {
    size / BASE_SIZE
}

/// Rows of a glyph, bit 4 is the leftmost column
fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Whether the font can draw this character
pub fn has_glyph(c: char) -> bool {
    glyph(c).is_some()
}

/// Width of `text` at `size` with explicit glyph spacing
pub fn measure_text_ex(text: &str, size: f32, spacing: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let scale = size / BASE_SIZE;
    count as f32 * GLYPH_COLUMNS as f32 * scale + (count - 1) as f32 * spacing
}

/// Width of `text` in the default font
pub fn measure_text(text: &str, size: f32) -> f32 {
    measure_text_ex(text, size, default_spacing(size))
}

/// Tessellate `text` with its top-left corner at `pos`
pub fn text_vertices(
    text: &str,
    pos: Vec2,
    size: f32,
    spacing: f32,
    style: FontStyle,
    color: Color,
) -> Vec<Vertex> {
    let scale = size / BASE_SIZE;
    let inset = match style {
        FontStyle::Regular => scale * 0.1,
        FontStyle::Bold => 0.0,
    };
    let cell = Vec2::splat(scale - 2.0 * inset);
    let advance = GLYPH_COLUMNS as f32 * scale + spacing;

    let mut vertices = Vec::new();
    for (i, c) in text.chars().enumerate() {
        // Unknown characters keep their advance but draw nothing
        let Some(rows) = glyph(c) else { continue };
        let origin = pos + Vec2::new(i as f32 * advance, scale);

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                    let cell_pos =
                        origin + Vec2::new(col as f32 * scale, row as f32 * scale) + inset;
                    vertices.extend(shapes::rect(cell_pos, cell, color));
                }
            }
        }
    }
    vertices
}
