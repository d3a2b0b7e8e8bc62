//! Linear (Airy) wave kinematics evaluator.
//!
//! Surface elevation follows `η(x, t) = a·cos(k·x − ω·t)`; subsurface
//! particle velocity is the gradient of the first-order velocity potential.
//! Above the instantaneous free surface the fluid model does not apply and
//! velocity is zero by convention.

use crate::error::WaveError;
use crate::params::WaveParameters;

/// Branch switch point for the depth dependence: when `k·h` exceeds this,
/// `cosh(k(y+h))/cosh(kh)` and `sinh(k(y+h))/cosh(kh)` are both replaced by
/// `exp(k·y)` to avoid hyperbolic overflow. The two forms agree to within
/// floating-point noise well below this value; 50 is an approximation
/// threshold, not a physical constant.
pub const DEEP_WATER_KH: f64 = 50.0;

/// Wave field evaluator for one monochromatic wave train.
///
/// The only mutable state is the current simulation time, replaced through
/// [`WaveField::set_time`]. Every query is a pure function of `(x, y, t)` and
/// the fixed parameters; the `*_at` variants take the time explicitly.
#[derive(Debug, Clone)]
pub struct WaveField {
    params: WaveParameters,
    time_s: f64,
}

impl WaveField {
    /// Create a field at `t = 0` from validated parameters.
    pub fn new(params: WaveParameters) -> Self {
        Self {
            params,
            time_s: 0.0,
        }
    }

    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    /// Current simulation time (seconds).
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Replace the stored simulation time. The model is periodic and
    /// time-reversible, so non-monotonic sequences (rewinding) are fine.
    pub fn set_time(&mut self, time_s: f64) {
        self.time_s = time_s;
    }

    /// Free-surface elevation at `x` for the stored time (meters).
    pub fn elevation(&self, x: f64) -> f64 {
        self.elevation_at(x, self.time_s)
    }

    /// Free-surface elevation at `x` for an explicit time.
    pub fn elevation_at(&self, x: f64, t: f64) -> f64 {
        let p = &self.params;
        p.amplitude_m * (p.wavenumber * x - p.omega * t).cos()
    }

    /// Particle velocity `(u, v)` at `(x, y)` for the stored time (m/s).
    ///
    /// Exactly `(0.0, 0.0)` for points strictly above the instantaneous free
    /// surface; the cutoff is a hard boundary, not a smoothed transition.
    pub fn velocity(&self, x: f64, y: f64) -> (f64, f64) {
        self.velocity_at(x, y, self.time_s)
    }

    /// Particle velocity at `(x, y)` for an explicit time.
    pub fn velocity_at(&self, x: f64, y: f64, t: f64) -> (f64, f64) {
        if y > self.elevation_at(x, t) {
            return (0.0, 0.0);
        }

        let p = &self.params;
        let k = p.wavenumber;
        let h = p.water_depth_m;
        let phase = k * x - p.omega * t;
        let scale = p.amplitude_m * p.gravity * k / p.omega;

        let (cosh_ratio, sinh_ratio) = if k * h > DEEP_WATER_KH {
            // Deep-water asymptote: both depth ratios converge to exp(k·y).
            let decay = (k * y).exp();
            (decay, decay)
        } else {
            let cosh_kh = (k * h).cosh();
            (
                (k * (y + h)).cosh() / cosh_kh,
                (k * (y + h)).sinh() / cosh_kh,
            )
        };

        (
            scale * cosh_ratio * phase.cos(),
            scale * sinh_ratio * phase.sin(),
        )
    }

    /// Fluid-induced force on a point mass at `(x, y)`, from a forward finite
    /// difference of velocity over `dt` at the stored time (newtons).
    ///
    /// This is a first-order estimate of local fluid acceleration scaled by
    /// mass, not an added-mass or drag model. Accuracy degrades as `O(dt)`,
    /// and differencing across the free-surface cutoff produces a spike that
    /// is an artifact of the cutoff, not a physical force.
    pub fn force_on_mass(
        &self,
        x: f64,
        y: f64,
        mass_kg: f64,
        dt: f64,
    ) -> Result<(f64, f64), WaveError> {
        if dt == 0.0 {
            return Err(WaveError::InvalidArgument {
                name: "dt",
                reason: "time step for force estimation must be nonzero",
            });
        }

        let (u0, v0) = self.velocity_at(x, y, self.time_s);
        let (u1, v1) = self.velocity_at(x, y, self.time_s + dt);

        Ok((mass_kg * (u1 - u0) / dt, mass_kg * (v1 - v0) / dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn default_field() -> WaveField {
        WaveField::new(WaveParameters::default())
    }

    #[test]
    fn test_elevation_at_origin_equals_amplitude() {
        let field = WaveField::new(WaveParameters::new(2.0, 10.0, 50.0, 9.81).unwrap());
        assert_eq!(field.elevation(0.0), 2.0);
    }

    #[test]
    fn test_elevation_bounded_by_amplitude() {
        let mut field = default_field();
        let a = field.params().amplitude_m;

        for step in 0..200 {
            field.set_time(step as f64 * 0.137);
            for i in 0..50 {
                let x = i as f64 * 0.41;
                assert!(field.elevation(x).abs() <= a + 1e-12);
            }
        }
    }

    #[test]
    fn test_velocity_above_free_surface_is_zero() {
        let field = default_field();
        let surface = field.elevation(0.0);
        assert_eq!(field.velocity(0.0, surface + 0.1), (0.0, 0.0));
        assert_eq!(field.velocity(0.0, surface + 1e-9), (0.0, 0.0));
    }

    #[test]
    fn test_velocity_at_origin_matches_closed_form() {
        let field = default_field();
        let p = field.params();

        // At t=0, x=0, y=0 the depth ratios are 1 and sin(0)=0.
        let (u, v) = field.velocity(0.0, 0.0);
        let expected_u = p.amplitude_m * p.gravity * p.wavenumber / p.omega;
        assert!((u - expected_u).abs() < 1e-9);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_set_time_matches_direct_evaluation() {
        let mut field = default_field();
        let omega = field.params().omega;

        field.set_time(1.0);
        let expected = (-omega).cos();
        assert!((field.elevation(0.0) - expected).abs() < 1e-12);

        // Rewinding is allowed; the model is time-reversible.
        field.set_time(0.0);
        assert_eq!(field.elevation(0.0), 1.0);
    }

    #[test]
    fn test_branches_agree_near_deep_water_threshold() {
        // Same wavenumber, depths straddling k·h = 50. tanh saturates long
        // before that, so ω is identical and only the branch differs.
        let wavelength = 1.0;
        let k = TAU / wavelength;
        let general = WaveField::new(
            WaveParameters::new(0.5, wavelength, (DEEP_WATER_KH - 1.0) / k, 9.81).unwrap(),
        );
        let deep = WaveField::new(
            WaveParameters::new(0.5, wavelength, (DEEP_WATER_KH + 1.0) / k, 9.81).unwrap(),
        );

        for &(x, y) in &[(0.0, -0.1), (0.3, -0.4), (0.7, -1.2)] {
            let (u_g, v_g) = general.velocity(x, y);
            let (u_d, v_d) = deep.velocity(x, y);
            assert!((u_g - u_d).abs() < 1e-9, "u mismatch at ({x}, {y})");
            assert!((v_g - v_d).abs() < 1e-9, "v mismatch at ({x}, {y})");
        }
    }

    #[test]
    fn test_force_rejects_zero_time_step() {
        let field = default_field();
        let err = field.force_on_mass(0.0, -1.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            WaveError::InvalidArgument { name: "dt", .. }
        ));
    }

    #[test]
    fn test_force_converges_to_local_acceleration() {
        let mut field = default_field();
        field.set_time(0.3);

        let p = field.params().clone();
        let (x, y, mass) = (0.0, -5.0, 2.0);

        // Analytic time derivative of the velocity components, well below
        // the free-surface cutoff.
        let k = p.wavenumber;
        let phase = k * x - p.omega * 0.3;
        let scale = p.amplitude_m * p.gravity * k / p.omega;
        let cosh_kh = (k * p.water_depth_m).cosh();
        let cosh_ratio = (k * (y + p.water_depth_m)).cosh() / cosh_kh;
        let sinh_ratio = (k * (y + p.water_depth_m)).sinh() / cosh_kh;
        let du_dt = scale * cosh_ratio * p.omega * phase.sin();
        let dv_dt = -scale * sinh_ratio * p.omega * phase.cos();

        let (fx_coarse, fy_coarse) = field.force_on_mass(x, y, mass, 1e-3).unwrap();
        let (fx_fine, fy_fine) = field.force_on_mass(x, y, mass, 1e-5).unwrap();

        // First-order in dt: the fine estimate should land on the analytic
        // value, and shrinking dt must not diverge.
        assert!((fx_fine - mass * du_dt).abs() < 1e-4);
        assert!((fy_fine - mass * dv_dt).abs() < 1e-4);
        assert!((fx_coarse - fx_fine).abs() < 1e-2);
        assert!((fy_coarse - fy_fine).abs() < 1e-2);
    }

    #[test]
    fn test_force_supports_negative_time_step() {
        let mut field = default_field();
        field.set_time(0.5);

        let (fx_fwd, _) = field.force_on_mass(1.0, -2.0, 1.0, 1e-5).unwrap();
        let (fx_bwd, _) = field.force_on_mass(1.0, -2.0, 1.0, -1e-5).unwrap();
        assert!((fx_fwd - fx_bwd).abs() < 1e-3);
    }
}
