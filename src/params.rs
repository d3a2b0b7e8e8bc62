//! Parameter definitions with physical units and documented semantics.

use std::f64::consts::TAU;

use crate::error::WaveError;

/// Physical parameters of a single monochromatic Airy wave train.
///
/// Construction validates every input and derives the wavenumber and angular
/// frequency once; the struct is immutable afterwards.
#[derive(Debug, Clone)]
pub struct WaveParameters {
    /// Wave amplitude in meters
    pub amplitude_m: f64,

    /// Wavelength in meters
    pub wavelength_m: f64,

    /// Still-water depth in meters
    pub water_depth_m: f64,

    /// Gravitational acceleration (m/s²)
    pub gravity: f64,

    /// Wavenumber k = 2π / wavelength (rad/m)
    pub wavenumber: f64,

    /// Angular frequency from the linear dispersion relation
    /// ω = sqrt(g · k · tanh(k · h)) (rad/s)
    pub omega: f64,
}

impl WaveParameters {
    /// Validate inputs and derive `k` and `ω`.
    ///
    /// Fails with [`WaveError::InvalidParameter`] if any input is non-finite
    /// or not strictly positive; no partial object is created.
    pub fn new(
        amplitude_m: f64,
        wavelength_m: f64,
        water_depth_m: f64,
        gravity: f64,
    ) -> Result<Self, WaveError> {
        let inputs = [
            ("amplitude", amplitude_m),
            ("wavelength", wavelength_m),
            ("water_depth", water_depth_m),
            ("gravity", gravity),
        ];
        for (name, value) in inputs {
            if !value.is_finite() || value <= 0.0 {
                return Err(WaveError::InvalidParameter { name, value });
            }
        }

        let wavenumber = TAU / wavelength_m;
        let omega = (gravity * wavenumber * (wavenumber * water_depth_m).tanh()).sqrt();

        Ok(Self {
            amplitude_m,
            wavelength_m,
            water_depth_m,
            gravity,
            wavenumber,
            omega,
        })
    }
}

impl Default for WaveParameters {
    fn default() -> Self {
        // Defaults are always valid, so the unwrap cannot fire.
        Self::new(1.0, 10.0, 50.0, 9.81).unwrap()
    }
}

/// Scene and window configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Scaling factor for velocity arrows (arrow length = velocity · scale,
    /// converted to pixels per axis)
    pub arrow_scale: f64,

    /// Velocity lattice columns (≥ 2)
    pub grid_x: u32,

    /// Velocity lattice rows (≥ 2)
    pub grid_y: u32,

    /// Number of elevation samples along the free-surface polyline
    pub surface_samples: u32,

    /// Head room above the crest at the top of the window (meters)
    pub top_margin_m: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            arrow_scale: 0.5,
            grid_x: 20,
            grid_y: 10,
            surface_samples: 200,
            top_margin_m: 1.0,
        }
    }
}

/// Fixed-step simulation loop configuration
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Simulation time advanced per frame (seconds)
    pub dt_s: f64,

    /// Total simulation duration (seconds; 0 = run until the window closes)
    pub duration_s: f64,

    /// Target frame rate cap (frames per second)
    pub fps: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            dt_s: 0.1,
            duration_s: 0.0,
            fps: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveError;

    #[test]
    fn test_dispersion_relation_for_defaults() {
        let params = WaveParameters::default();

        let k = TAU / 10.0;
        let omega = (9.81 * k * (k * 50.0_f64).tanh()).sqrt();

        assert!((params.wavenumber - k).abs() < 1e-12);
        assert!((params.omega - omega).abs() < 1e-12);
        assert!(params.omega > 0.0);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(WaveParameters::new(0.0, 10.0, 50.0, 9.81).is_err());
        assert!(WaveParameters::new(1.0, -10.0, 50.0, 9.81).is_err());
        assert!(WaveParameters::new(1.0, 10.0, 0.0, 9.81).is_err());
        assert!(WaveParameters::new(1.0, 10.0, 50.0, -9.81).is_err());
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(WaveParameters::new(f64::NAN, 10.0, 50.0, 9.81).is_err());
        assert!(WaveParameters::new(1.0, f64::INFINITY, 50.0, 9.81).is_err());

        let err = WaveParameters::new(1.0, 10.0, f64::NAN, 9.81).unwrap_err();
        assert!(matches!(
            err,
            WaveError::InvalidParameter {
                name: "water_depth",
                ..
            }
        ));
    }
}
