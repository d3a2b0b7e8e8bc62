//! Scene composition: maps the simulation-space window to pixels and samples
//! the wave field onto a free-surface polyline and a velocity-arrow lattice.

use crate::params::{RenderConfig, WaveParameters};
use crate::scene::{Color, FrameGeometry};
use crate::wave::WaveField;

const SURFACE_LINE_WIDTH: f32 = 2.0;
const ARROW_LINE_WIDTH: f32 = 2.0;
const ARROWHEAD_RADIUS: f32 = 3.0;

/// Composes one frame of scene geometry from a [`WaveField`].
///
/// The display window is fixed at construction: two wavelengths across
/// horizontally, and from the sea bed up to one margin above the crest
/// vertically. Simulation y grows upward, pixel y grows downward.
pub struct WaveRenderer {
    x_min: f64,
    x_max: f64,
    y_top: f64,
    y_bottom: f64,
    scale_x: f64,
    scale_y: f64,
    arrow_scale: f64,
    grid_x: u32,
    grid_y: u32,
    surface_samples: u32,
}

impl WaveRenderer {
    pub fn new(params: &WaveParameters, config: &RenderConfig) -> Self {
        let x_min = 0.0;
        let x_max = 2.0 * params.wavelength_m;
        let y_top = params.amplitude_m + config.top_margin_m;
        let y_bottom = -params.water_depth_m;

        Self {
            x_min,
            x_max,
            y_top,
            y_bottom,
            scale_x: config.window_width as f64 / (x_max - x_min),
            scale_y: config.window_height as f64 / (y_top - y_bottom),
            arrow_scale: config.arrow_scale,
            // Lattice spacing divides by n - 1.
            grid_x: config.grid_x.max(2),
            grid_y: config.grid_y.max(2),
            surface_samples: config.surface_samples.max(2),
        }
    }

    /// Background color of the scene (sky blue).
    pub fn background() -> Color {
        Color::from_srgb8(135, 206, 250)
    }

    /// Affine map from simulation meters to pixel coordinates, truncated to
    /// integer pixels.
    pub fn sim_to_screen(&self, x: f64, y: f64) -> (i32, i32) {
        let px = (x - self.x_min) * self.scale_x;
        let py = (self.y_top - y) * self.scale_y;
        (px as i32, py as i32)
    }

    /// Rebuild the frame geometry for the field's current time.
    pub fn compose(&self, field: &WaveField, frame: &mut FrameGeometry) {
        frame.clear();
        self.compose_surface(field, frame);
        self.compose_velocity_arrows(field, frame);
    }

    /// Free-surface polyline from evenly spaced elevation samples.
    fn compose_surface(&self, field: &WaveField, frame: &mut FrameGeometry) {
        let n = self.surface_samples;
        let points: Vec<[f32; 2]> = (0..n)
            .map(|i| {
                let x = self.x_min + i as f64 * (self.x_max - self.x_min) / (n - 1) as f64;
                let (px, py) = self.sim_to_screen(x, field.elevation(x));
                [px as f32, py as f32]
            })
            .collect();

        frame.polyline(&points, SURFACE_LINE_WIDTH, Color::from_srgb8(0, 0, 255));
    }

    /// Velocity arrows on the sampling lattice, skipping lattice points
    /// above the instantaneous free surface.
    fn compose_velocity_arrows(&self, field: &WaveField, frame: &mut FrameGeometry) {
        let arrow_color = Color::from_srgb8(255, 0, 0);

        for i in 0..self.grid_x {
            for j in 0..self.grid_y {
                let (x, y) = self.lattice_point(i, j);
                if y > field.elevation(x) {
                    continue;
                }

                let (u, v) = field.velocity(x, y);
                let (sx, sy) = self.sim_to_screen(x, y);

                // Screen y grows downward, so positive v points up as -dy.
                let dx = (u * self.arrow_scale * self.scale_x) as i32;
                let dy = -((v * self.arrow_scale * self.scale_y) as i32);

                let start = [sx as f32, sy as f32];
                let end = [(sx + dx) as f32, (sy + dy) as f32];
                frame.segment(start, end, ARROW_LINE_WIDTH, arrow_color);
                frame.disc(end, ARROWHEAD_RADIUS, arrow_color);
            }
        }
    }

    /// Lattice sample point in simulation space. Columns are uniform in x;
    /// rows use a square-law spacing that concentrates samples toward the
    /// free surface.
    fn lattice_point(&self, i: u32, j: u32) -> (f64, f64) {
        let x = self.x_min + i as f64 * (self.x_max - self.x_min) / (self.grid_x - 1) as f64;
        let p = j as f64 / (self.grid_y - 1) as f64;
        let y = self.y_top - (self.y_top - self.y_bottom) * p * p;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shallow_setup(grid_x: u32, grid_y: u32) -> (WaveField, WaveRenderer) {
        let params = WaveParameters::new(0.5, 10.0, 1.0, 9.81).unwrap();
        let config = RenderConfig {
            grid_x,
            grid_y,
            ..RenderConfig::default()
        };
        let renderer = WaveRenderer::new(&params, &config);
        (WaveField::new(params), renderer)
    }

    #[test]
    fn test_coordinate_map_corners() {
        let params = WaveParameters::default();
        let config = RenderConfig::default();
        let renderer = WaveRenderer::new(&params, &config);

        // Top-left of the window: (x_min, y_top) -> (0, 0).
        let y_top = params.amplitude_m + config.top_margin_m;
        assert_eq!(renderer.sim_to_screen(0.0, y_top), (0, 0));

        // Bottom-right: (2λ, -h) -> (width, height).
        let (px, py) = renderer.sim_to_screen(2.0 * params.wavelength_m, -params.water_depth_m);
        assert_eq!((px, py), (800, 600));
    }

    #[test]
    fn test_vertical_axis_is_inverted() {
        let params = WaveParameters::default();
        let renderer = WaveRenderer::new(&params, &RenderConfig::default());

        let (_, py_high) = renderer.sim_to_screen(0.0, 1.0);
        let (_, py_low) = renderer.sim_to_screen(0.0, -10.0);
        assert!(py_high < py_low);
    }

    #[test]
    fn test_lattice_concentrates_near_surface() {
        let (_, renderer) = shallow_setup(2, 5);

        let ys: Vec<f64> = (0..5).map(|j| renderer.lattice_point(0, j).1).collect();

        // Monotonically descending from the top margin to the bed...
        assert_eq!(ys[0], renderer.y_top);
        assert_eq!(*ys.last().unwrap(), renderer.y_bottom);
        assert!(ys.windows(2).all(|w| w[0] > w[1]));

        // ...with tighter spacing near the top (square-law in j).
        let first_gap = ys[0] - ys[1];
        let last_gap = ys[3] - ys[4];
        assert!(first_gap < last_gap);
    }

    #[test]
    fn test_compose_skips_lattice_points_above_surface() {
        // 2x2 lattice: the top row sits at y_top, which is always above the
        // surface (amplitude + margin), so only the two bed points draw
        // arrows. Shallow water keeps bed velocities large enough that the
        // arrow segment spans whole pixels.
        let (field, renderer) = shallow_setup(2, 2);
        let mut frame = FrameGeometry::default();
        renderer.compose(&field, &mut frame);

        let surface_vertices = (renderer.surface_samples as usize - 1) * 6;
        let arrow_vertices = 2 * (6 + 12 * 3); // segment quad + arrowhead fan
        assert_eq!(frame.vertices.len(), surface_vertices + arrow_vertices);
    }

    #[test]
    fn test_compose_is_repeatable_for_fixed_time() {
        let (mut field, renderer) = shallow_setup(8, 4);
        let mut first = FrameGeometry::default();
        let mut second = FrameGeometry::default();

        field.set_time(2.5);
        renderer.compose(&field, &mut first);
        field.set_time(7.0);
        renderer.compose(&field, &mut second);
        field.set_time(2.5);
        renderer.compose(&field, &mut second);

        assert_eq!(first.vertices.len(), second.vertices.len());
        for (a, b) in first.vertices.iter().zip(&second.vertices) {
            assert_eq!(a.position, b.position);
        }
    }
}
