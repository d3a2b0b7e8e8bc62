//! 2D scene geometry batching.
//!
//! Shapes are tessellated into a flat triangle list in pixel coordinates so
//! the GPU backend only ever sees one vertex buffer per frame. Colors are
//! converted from 8-bit sRGB to linear space here, since the render target
//! is an sRGB surface.

use bytemuck::{Pod, Zeroable};

/// Triangle fan resolution for filled discs (arrowheads)
const DISC_SEGMENTS: u32 = 12;

/// Vertex data for the 2D pipeline (pixel-space position + linear color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// RGBA color in linear space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Convert an 8-bit sRGB triple to linear RGBA.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self([channel(r), channel(g), channel(b), 1.0])
    }
}

/// Per-frame triangle geometry accumulator.
///
/// The drawing contract consumed by the renderer: line segments, polylines
/// and filled discs, plus a background clear color applied by the backend.
#[derive(Default)]
pub struct FrameGeometry {
    pub vertices: Vec<Vertex>,
}

impl FrameGeometry {
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Draw a line segment as a quad of the given pixel width.
    /// Zero-length segments are skipped, never emitted as degenerate quads.
    pub fn segment(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color) {
        let dx = to[0] - from[0];
        let dy = to[1] - from[1];
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            return;
        }

        // Perpendicular offset of half the line width.
        let nx = -dy / len * width * 0.5;
        let ny = dx / len * width * 0.5;

        let a = [from[0] + nx, from[1] + ny];
        let b = [from[0] - nx, from[1] - ny];
        let c = [to[0] - nx, to[1] - ny];
        let d = [to[0] + nx, to[1] + ny];

        self.push_triangle(a, b, c, color);
        self.push_triangle(a, c, d, color);
    }

    /// Draw connected line segments through the given points.
    pub fn polyline(&mut self, points: &[[f32; 2]], width: f32, color: Color) {
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], width, color);
        }
    }

    /// Draw a filled circle as a triangle fan around the center.
    pub fn disc(&mut self, center: [f32; 2], radius: f32, color: Color) {
        let step = std::f32::consts::TAU / DISC_SEGMENTS as f32;
        for i in 0..DISC_SEGMENTS {
            let a0 = i as f32 * step;
            let a1 = (i + 1) as f32 * step;
            self.push_triangle(
                center,
                [center[0] + radius * a0.cos(), center[1] + radius * a0.sin()],
                [center[0] + radius * a1.cos(), center[1] + radius * a1.sin()],
                color,
            );
        }
    }

    fn push_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: Color) {
        for position in [a, b, c] {
            self.vertices.push(Vertex {
                position,
                color: color.0,
            });
        }
    }
}
