//! Light curve generation
//!
//! Drives the orbit model and overlap kernel across every phase sample and
//! assembles the brightness sequence an external renderer animates over.
//! Each frame is computed exactly once; the animation's growing history is a
//! prefix slice of the finished curve.

use std::f64::consts::PI;
use std::fmt::Write as _;

use glam::DVec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::orbit::{self, OrbitalState};
use super::overlap::overlap_area;
use crate::consts::FULL_BRIGHTNESS;
use crate::error::{TransitError, TransitResult};
use crate::params::SimulationParameters;

/// One sample of the light curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightCurvePoint {
    pub frame: u32,
    /// Received light, percent of the unobstructed star ([0, 100])
    pub brightness: f64,
    /// Projected planet position on the sky plane
    pub x: f64,
    pub y: f64,
}

/// Brightness samples ordered by frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightCurve {
    points: Vec<LightCurvePoint>,
}

impl LightCurve {
    pub fn points(&self) -> &[LightCurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LightCurvePoint> {
        self.points.iter()
    }

    pub fn point(&self, frame: u32) -> Option<&LightCurvePoint> {
        self.points.get(frame as usize)
    }

    /// Points up to and including `frame`, as drawn by an animation at that frame
    pub fn history(&self, frame: u32) -> TransitResult<&[LightCurvePoint]> {
        let last = frame as usize;
        if last >= self.points.len() {
            return Err(TransitError::FrameOutOfRange {
                frame,
                step_count: self.points.len() as u32,
            });
        }
        Ok(&self.points[..=last])
    }

    pub fn brightness(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.brightness)
    }

    /// Dimmest sample (100 for an empty curve)
    pub fn min_brightness(&self) -> f64 {
        self.brightness().fold(FULL_BRIGHTNESS, f64::min)
    }

    /// Deepest dimming, in percentage points
    pub fn transit_depth(&self) -> f64 {
        FULL_BRIGHTNESS - self.min_brightness()
    }

    /// Whether any frame receives less than full light
    pub fn has_transit(&self) -> bool {
        self.brightness().any(|b| b < FULL_BRIGHTNESS)
    }

    /// CSV with a `frame,brightness,x,y` header
    pub fn to_csv(&self) -> String {
        points_to_csv(&self.points)
    }

    pub fn to_json(&self) -> TransitResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a LightCurve {
    type Item = &'a LightCurvePoint;
    type IntoIter = std::slice::Iter<'a, LightCurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Render samples as CSV with a `frame,brightness,x,y` header
pub fn points_to_csv(points: &[LightCurvePoint]) -> String {
    let mut out = String::from("frame,brightness,x,y\n");
    for p in points {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{},{},{},{}", p.frame, p.brightness, p.x, p.y);
    }
    out
}

/// Percentage of starlight received with the planet at `state`
///
/// The overlap is measured in stellar radii (star = unit disk, planet =
/// `radius_ratio`), so the result does not depend on the absolute scale.
pub fn brightness_at(state: &OrbitalState, params: &SimulationParameters) -> f64 {
    if state.is_behind_star() {
        return FULL_BRIGHTNESS;
    }

    let eclipsed = overlap_area(
        DVec2::ZERO,
        1.0,
        state.sky_position() / params.star_radius,
        state.z(),
        params.radius_ratio,
    );
    FULL_BRIGHTNESS * (1.0 - eclipsed / PI)
}

/// Compute the light-curve sample for one frame
#[inline]
pub fn frame_point(frame: u32, params: &SimulationParameters) -> LightCurvePoint {
    let state = orbit::position(frame, params);
    LightCurvePoint {
        frame,
        brightness: brightness_at(&state, params),
        x: state.x(),
        y: state.y(),
    }
}

/// Generate the full light curve, one pass over all frames
///
/// Fails before computing anything if `params` is invalid.
pub fn generate(params: &SimulationParameters) -> TransitResult<LightCurve> {
    params.validate()?;
    let curve = generate_unchecked(params);
    log_curve(&curve, params);
    Ok(curve)
}

/// Generate the full light curve with frames evaluated on the rayon pool
///
/// Produces exactly the same sequence as [`generate`].
pub fn generate_parallel(params: &SimulationParameters) -> TransitResult<LightCurve> {
    params.validate()?;

    let points: Vec<LightCurvePoint> = (0..params.step_count)
        .into_par_iter()
        .map(|frame| frame_point(frame, params))
        .collect();
    debug_assert!(points.windows(2).all(|w| w[0].frame < w[1].frame));

    let curve = LightCurve { points };
    log_curve(&curve, params);
    Ok(curve)
}

/// Sequential generation for already-validated parameters
pub(crate) fn generate_unchecked(params: &SimulationParameters) -> LightCurve {
    let points = (0..params.step_count)
        .map(|frame| frame_point(frame, params))
        .collect();
    LightCurve { points }
}

fn log_curve(curve: &LightCurve, params: &SimulationParameters) {
    log::debug!(
        "Generated light curve: {} frames, min brightness {:.4}% (Rp/Rs={}, a/Rs={}, i={}°)",
        curve.len(),
        curve.min_brightness(),
        params.radius_ratio,
        params.orbital_radius_ratio,
        params.inclination_deg
    );
}
