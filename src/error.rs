//! Error types for transit simulation
//!
//! Every configuration problem is reported before a single frame is
//! computed. Floating-point domain slips inside the overlap kernel are not
//! errors: the kernel clamps them and carries on.

use thiserror::Error;

/// Result type for simulation operations
pub type TransitResult<T> = Result<T, TransitError>;

/// Errors raised by the engine and its front-ends
#[derive(Debug, Error)]
pub enum TransitError {
    #[error("star radius must be positive and finite, got {value}")]
    InvalidStarRadius { value: f64 },

    #[error("radius ratio must lie in (0, 1), got {value}")]
    InvalidRadiusRatio { value: f64 },

    #[error("orbital radius ratio must be >= 1, got {value}")]
    InvalidOrbitalRadiusRatio { value: f64 },

    #[error("inclination must lie in [-90, 90] degrees, got {value}")]
    InvalidInclination { value: f64 },

    #[error("step count must be at least 1, got {value}")]
    InvalidStepCount { value: u32 },

    #[error("frame {frame} is outside the curve (step count {step_count})")]
    FrameOutOfRange { frame: u32, step_count: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransitError {
    /// True for errors caused by an invalid parameter bundle
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidStarRadius { .. }
                | Self::InvalidRadiusRatio { .. }
                | Self::InvalidOrbitalRadiusRatio { .. }
                | Self::InvalidInclination { .. }
                | Self::InvalidStepCount { .. }
        )
    }
}
