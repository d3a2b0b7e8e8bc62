//! Airywave library - linear (Airy) wave field simulation and 2D visualization

pub mod cli;
pub mod error;
pub mod params;
pub mod renderer;
pub mod rendering;
pub mod scene;
pub mod wave;
