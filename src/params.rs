//! Simulation parameters
//!
//! One immutable bundle per run. Lengths are normalized to the stellar
//! radius, so ratios are what the user actually tunes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{TransitError, TransitResult};

/// Parameters for a single light-curve run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParameters {
    /// Stellar radius (reference length unit)
    pub star_radius: f64,
    /// Planet radius / star radius, in (0, 1)
    pub radius_ratio: f64,
    /// Orbital radius / star radius, at least 1
    pub orbital_radius_ratio: f64,
    /// Orbit tilt in degrees, [-90, 90]; 0 is edge-on
    pub inclination_deg: f64,
    /// Phase samples per orbit
    pub step_count: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            star_radius: STAR_RADIUS,
            radius_ratio: DEFAULT_RADIUS_RATIO,
            orbital_radius_ratio: DEFAULT_ORBITAL_RADIUS_RATIO,
            inclination_deg: DEFAULT_INCLINATION_DEG,
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl SimulationParameters {
    /// Build and validate a parameter bundle with the reference star radius
    pub fn new(
        radius_ratio: f64,
        orbital_radius_ratio: f64,
        inclination_deg: f64,
        step_count: u32,
    ) -> TransitResult<Self> {
        let params = Self {
            star_radius: STAR_RADIUS,
            radius_ratio,
            orbital_radius_ratio,
            inclination_deg,
            step_count,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_star_radius(mut self, star_radius: f64) -> Self {
        self.star_radius = star_radius;
        self
    }

    pub fn with_radius_ratio(mut self, radius_ratio: f64) -> Self {
        self.radius_ratio = radius_ratio;
        self
    }

    pub fn with_orbital_radius_ratio(mut self, orbital_radius_ratio: f64) -> Self {
        self.orbital_radius_ratio = orbital_radius_ratio;
        self
    }

    pub fn with_inclination_deg(mut self, inclination_deg: f64) -> Self {
        self.inclination_deg = inclination_deg;
        self
    }

    pub fn with_step_count(mut self, step_count: u32) -> Self {
        self.step_count = step_count;
        self
    }

    /// Check every invariant; the first violation wins
    pub fn validate(&self) -> TransitResult<()> {
        if !(self.star_radius.is_finite() && self.star_radius > 0.0) {
            return Err(TransitError::InvalidStarRadius {
                value: self.star_radius,
            });
        }
        // The containment branch of the overlap kernel assumes the planet is the smaller disk
        if !(self.radius_ratio > 0.0 && self.radius_ratio < 1.0) {
            return Err(TransitError::InvalidRadiusRatio {
                value: self.radius_ratio,
            });
        }
        if !(self.orbital_radius_ratio.is_finite() && self.orbital_radius_ratio >= 1.0) {
            return Err(TransitError::InvalidOrbitalRadiusRatio {
                value: self.orbital_radius_ratio,
            });
        }
        if !(INCLINATION_DEG_MIN..=INCLINATION_DEG_MAX).contains(&self.inclination_deg) {
            return Err(TransitError::InvalidInclination {
                value: self.inclination_deg,
            });
        }
        if self.step_count < 1 {
            return Err(TransitError::InvalidStepCount {
                value: self.step_count,
            });
        }
        Ok(())
    }

    /// Load parameters from a JSON file and validate them
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> TransitResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        log::debug!("Loaded parameters from {}", path.as_ref().display());
        Ok(params)
    }

    #[inline]
    pub fn planet_radius(&self) -> f64 {
        self.radius_ratio * self.star_radius
    }

    #[inline]
    pub fn orbital_radius(&self) -> f64 {
        self.orbital_radius_ratio * self.star_radius
    }

    /// Inclination mapped onto [0, π]; its cosine scales the projected y amplitude
    #[inline]
    pub fn inclination_rad(&self) -> f64 {
        (90.0 + self.inclination_deg).to_radians()
    }

    /// Half-size of a square view that frames the whole orbit
    pub fn view_extent(&self) -> f64 {
        VIEW_EXTENT_FACTOR * self.orbital_radius()
    }

    /// Smallest projected center separation on the near side of the orbit
    pub fn impact_parameter(&self) -> f64 {
        self.orbital_radius() * self.inclination_rad().cos().abs()
    }

    /// Whether the planet's disk can touch the stellar disk at all
    pub fn transit_possible(&self) -> bool {
        self.impact_parameter() < self.star_radius + self.planet_radius()
    }

    /// Whether the ratios fall inside the reference slider ranges
    pub fn within_reference_ranges(&self) -> bool {
        (RADIUS_RATIO_MIN..=RADIUS_RATIO_MAX).contains(&self.radius_ratio)
            && (ORBITAL_RADIUS_RATIO_MIN..=ORBITAL_RADIUS_RATIO_MAX)
                .contains(&self.orbital_radius_ratio)
    }

    /// Exact bit pattern of the bundle, for keyed caches
    pub(crate) fn cache_key(&self) -> [u64; 5] {
        [
            self.star_radius.to_bits(),
            self.radius_ratio.to_bits(),
            self.orbital_radius_ratio.to_bits(),
            self.inclination_deg.to_bits(),
            u64::from(self.step_count),
        ]
    }
}
