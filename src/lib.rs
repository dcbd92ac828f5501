//! Transit Sim - exoplanet transit photometry simulator
//!
//! Core modules:
//! - `sim`: Deterministic engine (orbit projection, disk overlap, light curves)
//! - `params`: Validated simulation parameters
//! - `settings`: Presentation state owned by front-ends
//! - `error`: Error taxonomy shared by the engine and front-ends

pub mod error;
pub mod params;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{TransitError, TransitResult};
pub use params::SimulationParameters;
pub use settings::ViewSettings;
pub use sim::{LightCurve, LightCurvePoint, OrbitalState, generate, generate_parallel, overlap_area};

use glam::DVec2;

/// Simulation constants and reference slider bounds
pub mod consts {
    /// Normalized stellar radius, the reference length unit
    pub const STAR_RADIUS: f64 = 10.0;
    /// Phase samples per orbit used by the reference animation
    pub const DEFAULT_STEP_COUNT: u32 = 70;

    /// Planet radius / star radius
    pub const DEFAULT_RADIUS_RATIO: f64 = 0.1;
    pub const RADIUS_RATIO_MIN: f64 = 0.01;
    pub const RADIUS_RATIO_MAX: f64 = 0.4;

    /// Orbital radius / star radius
    pub const DEFAULT_ORBITAL_RADIUS_RATIO: f64 = 5.0;
    pub const ORBITAL_RADIUS_RATIO_MIN: f64 = 2.0;
    pub const ORBITAL_RADIUS_RATIO_MAX: f64 = 10.0;

    /// Inclination in degrees (0 = edge-on)
    pub const DEFAULT_INCLINATION_DEG: f64 = 0.0;
    pub const INCLINATION_DEG_MIN: f64 = -90.0;
    pub const INCLINATION_DEG_MAX: f64 = 90.0;

    /// Orbit view half-size as a multiple of the orbital radius
    pub const VIEW_EXTENT_FACTOR: f64 = 1.5;

    /// Full brightness, in percent
    pub const FULL_BRIGHTNESS: f64 = 100.0;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_phase(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_normalize_phase() {
        assert!((normalize_phase(TAU + 0.5) - 0.5).abs() < 1e-12);
        assert!((normalize_phase(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert_eq!(normalize_phase(0.0), 0.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(5.0, PI / 3.0);
        assert!((p.x - 2.5).abs() < 1e-12);
        assert!((p.y - 5.0 * 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((p.length() - 5.0).abs() < 1e-12);
    }
}
