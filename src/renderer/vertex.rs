//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// RGBA color, components in 0-1 (sRGB encoded)
pub type Color = [f32; 4];

/// Build an opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Multiply a color by a tint, channel by channel
pub fn tinted(color: Color, tint: Color) -> Color {
    [
        color[0] * tint[0],
        color[1] * tint[1],
        color[2] * tint[2],
        color[3] * tint[3],
    ]
}

/// sRGB-encoded channel to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Classic palette used by every screen
pub mod colors {
    use super::{Color, rgb};

    pub const WHITE: Color = rgb(255, 255, 255);
    pub const BLACK: Color = rgb(0, 0, 0);
    pub const RAYWHITE: Color = rgb(245, 245, 245);
    pub const LIGHTGRAY: Color = rgb(200, 200, 200);
    pub const GRAY: Color = rgb(130, 130, 130);
    pub const DARKGRAY: Color = rgb(80, 80, 80);
    pub const MAROON: Color = rgb(190, 33, 55);
    /// Letterbox bars around the 800x450 playfield
    pub const LETTERBOX: Color = rgb(16, 16, 20);
}
