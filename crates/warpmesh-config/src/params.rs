//! Mesh generation parameters with their defaults.

use std::f64::consts::PI;

use glam::UVec2;

use crate::error::ConfigError;

/// Parameters for a single mesh generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpParams {
    /// Grid dimensions. Always odd on both axes, so a centre vertex exists.
    pub resolution: UVec2,
    /// Target field of view, in radians.
    pub output_fov: f64,
    /// Longitudinal offset between the lens and the viewer's head, as a ratio
    /// of the dome radius. Real-valued geometry expects `[0, 1)`.
    pub z_shift_ratio: f64,
    /// Horizontal scale applied to the output x coordinate.
    pub aspect: f64,
    /// Skip the parameter summary and print only the mesh.
    pub silent: bool,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            resolution: UVec2::splat(5),
            output_fov: PI,
            z_shift_ratio: 0.4,
            aspect: 1.0,
            silent: false,
        }
    }
}

impl WarpParams {
    /// Field of view the lens must cover for the requested shift, in radians.
    ///
    /// Depends on the shift ratio alone: this is the lens's native coverage,
    /// not a value derived from the target field of view.
    pub fn input_fov(&self) -> f64 {
        PI + 2.0 * self.z_shift_ratio.atan()
    }

    /// [`input_fov`](Self::input_fov) in degrees.
    pub fn input_fov_degrees(&self) -> f64 {
        self.input_fov().to_degrees()
    }

    /// Set the target field of view from a value in degrees.
    pub fn set_output_fov_degrees(&mut self, degrees: f64) {
        self.output_fov = degrees * PI / 180.0;
    }
}

/// Round a requested resolution to the odd grid dimension actually used.
///
/// Computes `(requested / 2) * 2 + 1` with truncating division, so even
/// values round up and `0` or `-1` collapse to a single vertex.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidResolution`] when the result is below one.
pub fn effective_resolution(requested: i64) -> Result<u32, ConfigError> {
    let dim = (requested / 2)
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .ok_or(ConfigError::InvalidResolution(requested))?;
    u32::try_from(dim)
        .ok()
        .filter(|&d| d >= 1)
        .ok_or(ConfigError::InvalidResolution(requested))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = WarpParams::default();
        assert_eq!(params.resolution, UVec2::new(5, 5));
        assert_eq!(params.output_fov, PI);
        assert_eq!(params.z_shift_ratio, 0.4);
        assert_eq!(params.aspect, 1.0);
        assert!(!params.silent);
    }

    #[test]
    fn test_effective_resolution_forces_odd() {
        assert_eq!(effective_resolution(5).unwrap(), 5);
        assert_eq!(effective_resolution(4).unwrap(), 5);
        assert_eq!(effective_resolution(6).unwrap(), 7);
        assert_eq!(effective_resolution(32).unwrap(), 33);
        for r in 0..200 {
            let dim = effective_resolution(r).unwrap();
            assert_eq!(dim % 2, 1, "resolution {r} gave even dimension {dim}");
        }
    }

    #[test]
    fn test_effective_resolution_degenerate() {
        assert_eq!(effective_resolution(1).unwrap(), 1);
        assert_eq!(effective_resolution(0).unwrap(), 1);
        // Truncating division: -1 / 2 == 0.
        assert_eq!(effective_resolution(-1).unwrap(), 1);
    }

    #[test]
    fn test_effective_resolution_rejects_negative() {
        assert!(matches!(
            effective_resolution(-2),
            Err(ConfigError::InvalidResolution(-2))
        ));
        assert!(effective_resolution(-7).is_err());
        assert!(effective_resolution(i64::MAX).is_err());
    }

    #[test]
    fn test_input_fov_without_shift_is_hemisphere() {
        let params = WarpParams {
            z_shift_ratio: 0.0,
            ..WarpParams::default()
        };
        assert_eq!(params.input_fov(), PI);
        assert!((params.input_fov_degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_input_fov_ignores_output_fov() {
        let a = WarpParams::default();
        let mut b = a;
        b.set_output_fov_degrees(220.0);
        b.resolution = UVec2::splat(33);
        assert_eq!(a.input_fov(), b.input_fov());
        // pi + 2 atan(0.4)
        assert!((a.input_fov_degrees() - 223.602_818_972_703_6).abs() < 1e-9);
    }

    #[test]
    fn test_output_fov_degrees_conversion() {
        let mut params = WarpParams::default();
        params.set_output_fov_degrees(90.0);
        assert!((params.output_fov - PI / 2.0).abs() < 1e-15);
        params.set_output_fov_degrees(180.0);
        assert!((params.output_fov - PI).abs() < 1e-15);
    }
}
