use std::convert::Infallible;

use thiserror::Error;

/// Errors returned when building or evaluating a spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Error in Spline: at least 4 points are required, found {found}")]
    InsufficientPoints { found: usize },

    #[error("Error in Spline: point {index} has dimension {found}, expected {expected}")]
    DimensionMismatch { index: usize, expected: usize, found: usize },

    #[error("Error in Spline: points must have at least one coordinate")]
    EmptyPoint,

    #[error("Error in Spline: at least 2 interpolants are required, found {found}")]
    InsufficientInterpolants { found: usize },

    #[error("Error in Spline: interpolant {index} = {value} is outside of [0, 1]")]
    InterpolantOutOfRange { index: usize, value: f64 },

    #[error("Error in Spline: segment {index} does not exist, spline has {count} segments")]
    SegmentOutOfRange { index: usize, count: usize },
}

impl From<Infallible> for SplineError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
