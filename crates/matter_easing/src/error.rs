//! Easing error types

use crate::point::Axis;
use thiserror::Error;

/// Errors raised while building easing curves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EasingError {
    /// A control point coordinate lies outside `[0, 1]`
    #[error("control point '{point}' has {axis} = {value}, expected a value in [0, 1]")]
    InvalidControlPoint {
        /// Parameter name of the offending point (`a`, `b1`, `midpoint`, ...)
        point: &'static str,
        axis: Axis,
        value: f64,
    },

    /// No motion preset with this id
    #[error("unknown motion preset: {0}")]
    UnknownPreset(String),

    /// No motion duration token with this id
    #[error("unknown motion duration: {0}")]
    UnknownDuration(String),
}

/// Result type for easing operations
pub type Result<T> = std::result::Result<T, EasingError>;
