//! Two cubic segments joined at a shared midpoint
//!
//! Each segment is authored in the coordinates of the whole curve and
//! rescaled into its own unit square before solving, so a curve such as
//! Material's "emphasized" easing can be written with the same control
//! points a designer exports.

use crate::cubic::cubic_transform;
use crate::error::Result;
use crate::point::ControlPoint;
use serde::{Deserialize, Deserializer, Serialize};

/// Composite easing curve: (0,0) → `midpoint` → (1,1)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThreePointCubicCurve {
    a1: ControlPoint,
    b1: ControlPoint,
    midpoint: ControlPoint,
    a2: ControlPoint,
    b2: ControlPoint,
}

impl ThreePointCubicCurve {
    pub fn new(
        a1: ControlPoint,
        b1: ControlPoint,
        midpoint: ControlPoint,
        a2: ControlPoint,
        b2: ControlPoint,
    ) -> Result<Self> {
        Ok(Self {
            a1: a1.validate("a1")?,
            b1: b1.validate("b1")?,
            midpoint: midpoint.validate("midpoint")?,
            a2: a2.validate("a2")?,
            b2: b2.validate("b2")?,
        })
    }

    pub(crate) const fn from_points(
        a1: ControlPoint,
        b1: ControlPoint,
        midpoint: ControlPoint,
        a2: ControlPoint,
        b2: ControlPoint,
    ) -> Self {
        Self {
            a1,
            b1,
            midpoint,
            a2,
            b2,
        }
    }

    pub const fn a1(&self) -> ControlPoint {
        self.a1
    }

    pub const fn b1(&self) -> ControlPoint {
        self.b1
    }

    pub const fn midpoint(&self) -> ControlPoint {
        self.midpoint
    }

    pub const fn a2(&self) -> ControlPoint {
        self.a2
    }

    pub const fn b2(&self) -> ControlPoint {
        self.b2
    }

    /// Map progress `t` to eased output.
    ///
    /// Progress below `midpoint.x` runs the first segment, everything else
    /// the second. A segment with zero width evaluates to its start height.
    pub fn ease(&self, t: f64) -> f64 {
        let m = self.midpoint;

        if t < m.x() {
            let (scale_x, scale_y) = (m.x(), m.y());
            if scale_x == 0.0 {
                return 0.0;
            }
            cubic_transform(
                self.a1.x() / scale_x,
                rescale(self.a1.y(), scale_y),
                self.b1.x() / scale_x,
                rescale(self.b1.y(), scale_y),
                t / scale_x,
            ) * scale_y
        } else {
            let (scale_x, scale_y) = (1.0 - m.x(), 1.0 - m.y());
            if scale_x == 0.0 {
                return m.y();
            }
            cubic_transform(
                (self.a2.x() - m.x()) / scale_x,
                rescale(self.a2.y() - m.y(), scale_y),
                (self.b2.x() - m.x()) / scale_x,
                rescale(self.b2.y() - m.y(), scale_y),
                (t - m.x()) / scale_x,
            ) * scale_y
                + m.y()
        }
    }
}

/// Divide by a segment height, treating a flat segment as all zeros
#[inline]
fn rescale(value: f64, scale: f64) -> f64 {
    if scale == 0.0 {
        0.0
    } else {
        value / scale
    }
}

#[derive(Deserialize)]
struct ThreePoints {
    a1: ControlPoint,
    b1: ControlPoint,
    midpoint: ControlPoint,
    a2: ControlPoint,
    b2: ControlPoint,
}

impl<'de> Deserialize<'de> for ThreePointCubicCurve {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let p = ThreePoints::deserialize(deserializer)?;
        ThreePointCubicCurve::new(p.a1, p.b1, p.midpoint, p.a2, p.b2)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubic::{CubicCurve, ERROR_BOUND};
    use crate::error::EasingError;

    fn p(x: f64, y: f64) -> ControlPoint {
        ControlPoint::new(x, y)
    }

    /// First half mirrored through (0.5, 0.5) onto the second half
    fn mirrored() -> ThreePointCubicCurve {
        ThreePointCubicCurve::new(
            p(0.2, 0.0),
            p(0.4, 0.3),
            p(0.5, 0.5),
            p(0.6, 0.7),
            p(0.8, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn continuous_at_junction() {
        let curve = mirrored();
        assert!((curve.ease(0.5) - 0.5).abs() < ERROR_BOUND);
    }

    #[test]
    fn mirrored_segments_are_point_symmetric() {
        let curve = mirrored();
        for t in [0.1, 0.25, 0.4] {
            let sum = curve.ease(t) + curve.ease(1.0 - t);
            assert!((sum - 1.0).abs() < ERROR_BOUND, "t={t} sum={sum}");
        }
    }

    #[test]
    fn endpoints_are_anchored() {
        let curve = mirrored();
        assert!(curve.ease(0.0).abs() < ERROR_BOUND);
        assert!((curve.ease(1.0) - 1.0).abs() < ERROR_BOUND);
    }

    #[test]
    fn second_segment_matches_rescaled_cubic() {
        // Second half of the mirrored curve is the cubic (0.2,0.4),(0.6,1.0)
        // squeezed into [0.5,1] x [0.5,1]
        let curve = mirrored();
        let local = CubicCurve::new(p(0.2, 0.4), p(0.6, 1.0)).unwrap();
        for t in [0.55, 0.7, 0.9] {
            let expected = local.ease((t - 0.5) / 0.5) * 0.5 + 0.5;
            assert_eq!(curve.ease(t), expected);
        }
    }

    #[test]
    fn validates_every_point_by_name() {
        let err = ThreePointCubicCurve::new(
            p(0.2, 0.0),
            p(0.4, 0.3),
            p(0.5, 1.1),
            p(0.6, 0.7),
            p(0.8, 1.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EasingError::InvalidControlPoint {
                point: "midpoint",
                ..
            }
        ));

        let err = ThreePointCubicCurve::new(
            p(0.2, 0.0),
            p(0.4, 0.3),
            p(0.5, 0.5),
            p(0.6, 0.7),
            p(-0.1, 1.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EasingError::InvalidControlPoint { point: "b2", .. }
        ));
    }

    #[test]
    fn zero_width_segments_do_not_divide_by_zero() {
        let at_end = ThreePointCubicCurve::new(
            p(0.2, 0.0),
            p(0.6, 0.5),
            p(1.0, 0.8),
            p(1.0, 1.0),
            p(1.0, 1.0),
        )
        .unwrap();
        assert_eq!(at_end.ease(1.0), 0.8);
        assert!(at_end.ease(0.5).is_finite());

        let at_start = ThreePointCubicCurve::new(
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(0.4, 0.0),
            p(0.2, 1.0),
        )
        .unwrap();
        assert_eq!(at_start.ease(-0.2), 0.0);
        assert!(at_start.ease(0.0).abs() < ERROR_BOUND);
    }

    #[test]
    fn flat_segment_stays_flat() {
        let curve = ThreePointCubicCurve::new(
            p(0.1, 0.0),
            p(0.3, 0.0),
            p(0.5, 0.0),
            p(0.6, 0.2),
            p(0.9, 1.0),
        )
        .unwrap();
        assert_eq!(curve.ease(0.25), 0.0);
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{"a1":[0.2,0.0],"b1":[0.4,0.3],"midpoint":[0.5,0.5],"a2":[0.6,0.7],"b2":[0.8,1.0]}"#;
        let curve: ThreePointCubicCurve = serde_json::from_str(json).unwrap();
        assert_eq!(curve, mirrored());

        let bad = json.replace("[0.6,0.7]", "[0.6,1.7]");
        let err = serde_json::from_str::<ThreePointCubicCurve>(&bad)
            .unwrap_err()
            .to_string();
        assert!(err.contains("'a2' has y = 1.7"), "{err}");
    }
}
