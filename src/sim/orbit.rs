//! Orbital position model
//!
//! A circular orbit sampled at evenly spaced phases and projected onto the
//! observer's sky plane:
//! - x: along the orbit's line of nodes
//! - y: foreshortened by the inclination
//! - z: line of sight, positive pointing away from the observer

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::params::SimulationParameters;
use crate::{normalize_phase, polar_to_cartesian};

/// Projected planet position at one phase sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    pub frame: u32,
    /// Orbital phase (radians, [0, 2π))
    pub phase_angle: f64,
    pub position: DVec3,
}

impl OrbitalState {
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Position on the sky plane
    #[inline]
    pub fn sky_position(&self) -> DVec2 {
        self.position.truncate()
    }

    /// Projected distance from the stellar center
    #[inline]
    pub fn separation(&self) -> f64 {
        self.sky_position().length()
    }

    /// On the far side of the star, so nothing can be eclipsed
    #[inline]
    pub fn is_behind_star(&self) -> bool {
        self.position.z > 0.0
    }
}

/// Phase angle of a frame; frames past `step_count` wrap into the next orbit
#[inline]
pub fn phase_angle(frame: u32, step_count: u32) -> f64 {
    normalize_phase(TAU * f64::from(frame) / f64::from(step_count))
}

/// Project the planet at `frame`
///
/// Pure in `frame` and `params`; frames are independent of each other.
pub fn position(frame: u32, params: &SimulationParameters) -> OrbitalState {
    let theta = phase_angle(frame, params.step_count);
    let orbit = params.orbital_radius();

    let in_plane = polar_to_cartesian(orbit, theta);
    let position = DVec3::new(
        in_plane.x,
        in_plane.y * params.inclination_rad().cos(),
        in_plane.y,
    );

    OrbitalState {
        frame,
        phase_angle: theta,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn params() -> SimulationParameters {
        SimulationParameters::new(0.1, 5.0, 0.0, 100).unwrap()
    }

    #[test]
    fn test_phase_angle() {
        assert_eq!(phase_angle(0, 100), 0.0);
        assert!((phase_angle(25, 100) - PI / 2.0).abs() < 1e-12);
        assert!((phase_angle(75, 100) - 1.5 * PI).abs() < 1e-12);
        let wrapped = phase_angle(100, 100);
        assert!(wrapped < 1e-12 || TAU - wrapped < 1e-12);
        assert!((phase_angle(125, 100) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_far_side_quarter() {
        let state = position(25, &params());
        assert!((state.z() - 50.0).abs() < 1e-9);
        assert!(state.x().abs() < 1e-9);
        assert!(state.is_behind_star());
    }

    #[test]
    fn test_near_side_quarter_edge_on() {
        let state = position(75, &params());
        assert!((state.z() + 50.0).abs() < 1e-9);
        assert!(state.x().abs() < 1e-9);
        assert!(state.y().abs() < 1e-9);
        assert!(!state.is_behind_star());
        assert!(state.separation() < 1e-9);
    }

    #[test]
    fn test_inclination_scales_y() {
        let tilted = params().with_inclination_deg(60.0);
        let state = position(75, &tilted);
        // cos(150°) * sin(270°) * 50
        let expected = (150f64).to_radians().cos() * -50.0;
        assert!((state.y() - expected).abs() < 1e-9);
        assert!((state.z() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_frames_are_independent() {
        let p = params();
        let forward: Vec<_> = (0..100).map(|f| position(f, &p)).collect();
        let backward: Vec<_> = (0..100).rev().map(|f| position(f, &p)).collect();
        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_starting_frame_on_node() {
        let state = position(0, &params());
        assert_eq!(state.z(), 0.0);
        assert!(!state.is_behind_star());
        assert!((state.x() - 50.0).abs() < 1e-12);
    }
}
