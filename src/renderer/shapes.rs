//! Shape generation for 2D primitives
//!
//! All coordinates are logical screen pixels (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle border of the given thickness
pub fn rect_outline(pos: Vec2, size: Vec2, thickness: f32, color: Color) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);

    // Top and bottom span the full width; sides fill the gap between them
    vertices.extend(rect(pos, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x + size.x - t, pos.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), colors::GRAY);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_is_four_bars() {
        let v = rect_outline(Vec2::ZERO, Vec2::new(256.0, 256.0), 16.0, colors::BLACK);
        assert_eq!(v.len(), 24);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(50.0, 50.0);
        let v = circle(center, 10.0, colors::WHITE, 16);
        assert_eq!(v.len(), 48);
        for vert in &v {
            let p = Vec2::from(vert.position);
            assert!(p.distance(center) <= 10.0 + 1e-4);
        }
    }
}
