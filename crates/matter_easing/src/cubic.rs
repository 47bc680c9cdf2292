//! Single-segment cubic bezier easing
//!
//! The curve is anchored at (0,0) and (1,1) with two free control points,
//! the same shape as CSS `cubic-bezier()`. Evaluation finds the curve
//! parameter whose x equals the progress value by bisection, then returns
//! the y at that parameter.

use crate::error::Result;
use crate::point::ControlPoint;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum distance between the target progress and the solved x
pub const ERROR_BOUND: f64 = 0.001;

/// Bisection steps before giving up on convergence
pub const MAX_ITERATIONS: u32 = 64;

/// Solve a cubic easing transform for progress `t`.
///
/// `(ax, ay)` and `(bx, by)` are the free control points. The values are
/// not range checked, so callers can pass rescaled segment coordinates.
/// Progress outside `[0, 1]` is not clamped; the search saturates at the
/// nearest end of the parameter range.
pub fn cubic_transform(ax: f64, ay: f64, bx: f64, by: f64, t: f64) -> f64 {
    let mut start = 0.0_f64;
    let mut end = 1.0_f64;
    let mut midpoint = 0.5_f64;

    for _ in 0..MAX_ITERATIONS {
        midpoint = (start + end) * 0.5;
        let estimate = bezier_sample(midpoint, ax, bx);
        if (t - estimate).abs() < ERROR_BOUND {
            return bezier_sample(midpoint, ay, by);
        }
        if estimate < t {
            start = midpoint;
        } else {
            end = midpoint;
        }
    }

    tracing::trace!(
        t,
        ax,
        ay,
        bx,
        by,
        midpoint,
        "cubic easing did not converge, using last estimate"
    );
    bezier_sample(midpoint, ay, by)
}

/// Evaluate one axis of the anchored cubic: B(u) = 3(1-u)²u·p1 + 3(1-u)u²·p2 + u³
#[inline]
fn bezier_sample(u: f64, p1: f64, p2: f64) -> f64 {
    // Horner form: ((1-3p2+3p1)u + 3p2-6p1)u + 3p1) * u
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * u + b) * u + c) * u
}

/// Cubic bezier easing curve through (0,0), `a`, `b`, (1,1)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CubicCurve {
    a: ControlPoint,
    b: ControlPoint,
}

impl CubicCurve {
    /// Build a curve, rejecting control points outside the unit square
    pub fn new(a: ControlPoint, b: ControlPoint) -> Result<Self> {
        Ok(Self {
            a: a.validate("a")?,
            b: b.validate("b")?,
        })
    }

    /// Build a curve from coordinates already known to be in range.
    ///
    /// Used for the `const` presets, which are checked by tests instead.
    pub(crate) const fn from_points(a: ControlPoint, b: ControlPoint) -> Self {
        Self { a, b }
    }

    pub const fn a(&self) -> ControlPoint {
        self.a
    }

    pub const fn b(&self) -> ControlPoint {
        self.b
    }

    /// Map progress `t` to eased output
    pub fn ease(&self, t: f64) -> f64 {
        cubic_transform(self.a.x(), self.a.y(), self.b.x(), self.b.y(), t)
    }
}

#[derive(Deserialize)]
struct CubicPoints {
    a: ControlPoint,
    b: ControlPoint,
}

impl<'de> Deserialize<'de> for CubicCurve {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let points = CubicPoints::deserialize(deserializer)?;
        CubicCurve::new(points.a, points.b).map_err(serde::de::Error::custom)
    }
}
