//! Command-line argument parsing.

use clap::Parser;

use crate::error::WaveError;
use crate::params::{LoopConfig, RenderConfig, WaveParameters};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "airywave")]
#[command(about = "Simulate and display a 1D Airy wave", long_about = None)]
pub struct Args {
    /// Wave amplitude (meters)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub amplitude: f64,

    /// Wavelength (meters)
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub wavelength: f64,

    /// Water depth (meters)
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub water_depth: f64,

    /// Gravitational acceleration (m/s²)
    #[arg(long, default_value_t = 9.81, allow_negative_numbers = true)]
    pub gravity: f64,

    /// Simulation time step per frame (seconds)
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub dt: f64,

    /// Total simulation duration in seconds (0 = run until the window closes)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub duration: f64,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Scaling factor for velocity arrows
    #[arg(long, default_value_t = 0.5)]
    pub arrow_scale: f64,

    /// Velocity lattice columns
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(2..))]
    pub grid_x: u32,

    /// Velocity lattice rows
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..))]
    pub grid_y: u32,

    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,
}

impl Args {
    /// Validate the physical inputs and derive the wave parameters.
    pub fn wave_parameters(&self) -> Result<WaveParameters, WaveError> {
        WaveParameters::new(self.amplitude, self.wavelength, self.water_depth, self.gravity)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            arrow_scale: self.arrow_scale,
            grid_x: self.grid_x,
            grid_y: self.grid_y,
            ..RenderConfig::default()
        }
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            dt_s: self.dt,
            duration_s: self.duration,
            fps: self.fps,
        }
    }
}
