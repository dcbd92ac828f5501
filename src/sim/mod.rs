//! Deterministic transit engine
//!
//! Pure functions of the simulation parameters. This module must stay free
//! of presentation state:
//! - Every frame is computed from its index alone
//! - No hidden state between calls
//! - No rendering or platform dependencies

pub mod cache;
pub mod curve;
pub mod orbit;
pub mod overlap;

pub use cache::CurveCache;
pub use curve::{
    LightCurve, LightCurvePoint, brightness_at, frame_point, generate, generate_parallel,
    points_to_csv,
};
pub use orbit::{OrbitalState, phase_angle, position};
pub use overlap::{OverlapKind, classify, lens_area, overlap_area};
