//! Bezier control points

use crate::error::{EasingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate axis of a control point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A free control point of a cubic easing curve.
///
/// Serialized as a two-element array `[x, y]`. Curves only accept points
/// whose coordinates both lie in `[0, 1]`; see [`ControlPoint::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ControlPoint {
    x: f64,
    y: f64,
}

impl ControlPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Check that both coordinates lie in `[0, 1]`.
    ///
    /// `name` is the parameter name reported in the error. NaN fails.
    pub fn validate(self, name: &'static str) -> Result<Self> {
        check_unit(name, Axis::X, self.x)?;
        check_unit(name, Axis::Y, self.y)?;
        Ok(self)
    }
}

fn check_unit(point: &'static str, axis: Axis, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EasingError::InvalidControlPoint { point, axis, value })
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<ControlPoint> for (f64, f64) {
    fn from(point: ControlPoint) -> Self {
        (point.x, point.y)
    }
}
