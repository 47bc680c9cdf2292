//! Material motion presets
//!
//! Easing curves and duration tokens from the Material 3 motion system.
//! The curves are `const` so widgets can hold them without allocation.

use crate::cubic::CubicCurve;
use crate::easing::Easing;
use crate::error::EasingError;
use crate::point::ControlPoint;
use crate::three_point::ThreePointCubicCurve;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const fn cubic(ax: f64, ay: f64, bx: f64, by: f64) -> CubicCurve {
    CubicCurve::from_points(ControlPoint::new(ax, ay), ControlPoint::new(bx, by))
}

// ============================================================================
// Curves
// ============================================================================

pub const LINEAR: CubicCurve = cubic(0.0, 0.0, 1.0, 1.0);

pub const STANDARD: CubicCurve = cubic(0.2, 0.0, 0.0, 1.0);
pub const STANDARD_ACCELERATE: CubicCurve = cubic(0.3, 0.0, 1.0, 1.0);
pub const STANDARD_DECELERATE: CubicCurve = cubic(0.0, 0.0, 0.0, 1.0);

/// Fast start that hands over to a long, soft settle at (0.166666, 0.4)
pub const EMPHASIZED: ThreePointCubicCurve = ThreePointCubicCurve::from_points(
    ControlPoint::new(0.05, 0.0),
    ControlPoint::new(0.133333, 0.06),
    ControlPoint::new(0.166666, 0.4),
    ControlPoint::new(0.208333, 0.82),
    ControlPoint::new(0.25, 1.0),
);
pub const EMPHASIZED_ACCELERATE: CubicCurve = cubic(0.3, 0.0, 0.8, 0.15);
pub const EMPHASIZED_DECELERATE: CubicCurve = cubic(0.05, 0.7, 0.1, 1.0);

pub const LEGACY: CubicCurve = cubic(0.4, 0.0, 0.2, 1.0);
pub const LEGACY_ACCELERATE: CubicCurve = cubic(0.4, 0.0, 1.0, 1.0);
pub const LEGACY_DECELERATE: CubicCurve = cubic(0.0, 0.0, 0.2, 1.0);

/// Named Material easing preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionEasing {
    Linear,
    Standard,
    StandardAccelerate,
    StandardDecelerate,
    Emphasized,
    EmphasizedAccelerate,
    EmphasizedDecelerate,
    Legacy,
    LegacyAccelerate,
    LegacyDecelerate,
}

impl MotionEasing {
    pub fn all() -> &'static [MotionEasing] {
        &[
            MotionEasing::Linear,
            MotionEasing::Standard,
            MotionEasing::StandardAccelerate,
            MotionEasing::StandardDecelerate,
            MotionEasing::Emphasized,
            MotionEasing::EmphasizedAccelerate,
            MotionEasing::EmphasizedDecelerate,
            MotionEasing::Legacy,
            MotionEasing::LegacyAccelerate,
            MotionEasing::LegacyDecelerate,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            MotionEasing::Linear => "linear",
            MotionEasing::Standard => "standard",
            MotionEasing::StandardAccelerate => "standard-accelerate",
            MotionEasing::StandardDecelerate => "standard-decelerate",
            MotionEasing::Emphasized => "emphasized",
            MotionEasing::EmphasizedAccelerate => "emphasized-accelerate",
            MotionEasing::EmphasizedDecelerate => "emphasized-decelerate",
            MotionEasing::Legacy => "legacy",
            MotionEasing::LegacyAccelerate => "legacy-accelerate",
            MotionEasing::LegacyDecelerate => "legacy-decelerate",
        }
    }

    pub fn easing(&self) -> Easing {
        match self {
            MotionEasing::Linear => LINEAR.into(),
            MotionEasing::Standard => STANDARD.into(),
            MotionEasing::StandardAccelerate => STANDARD_ACCELERATE.into(),
            MotionEasing::StandardDecelerate => STANDARD_DECELERATE.into(),
            MotionEasing::Emphasized => EMPHASIZED.into(),
            MotionEasing::EmphasizedAccelerate => EMPHASIZED_ACCELERATE.into(),
            MotionEasing::EmphasizedDecelerate => EMPHASIZED_DECELERATE.into(),
            MotionEasing::Legacy => LEGACY.into(),
            MotionEasing::LegacyAccelerate => LEGACY_ACCELERATE.into(),
            MotionEasing::LegacyDecelerate => LEGACY_DECELERATE.into(),
        }
    }
}

impl fmt::Display for MotionEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MotionEasing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionEasing::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| EasingError::UnknownPreset(s.to_string()))
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Material motion duration token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionDuration {
    Short1,
    Short2,
    Short3,
    Short4,
    Medium1,
    #[default]
    Medium2,
    Medium3,
    Medium4,
    Long1,
    Long2,
    Long3,
    Long4,
    ExtraLong1,
    ExtraLong2,
    ExtraLong3,
    ExtraLong4,
}

impl MotionDuration {
    pub fn all() -> &'static [MotionDuration] {
        &[
            MotionDuration::Short1,
            MotionDuration::Short2,
            MotionDuration::Short3,
            MotionDuration::Short4,
            MotionDuration::Medium1,
            MotionDuration::Medium2,
            MotionDuration::Medium3,
            MotionDuration::Medium4,
            MotionDuration::Long1,
            MotionDuration::Long2,
            MotionDuration::Long3,
            MotionDuration::Long4,
            MotionDuration::ExtraLong1,
            MotionDuration::ExtraLong2,
            MotionDuration::ExtraLong3,
            MotionDuration::ExtraLong4,
        ]
    }

    pub fn id(&self) -> &'static str {
        use MotionDuration::*;
        match self {
            Short1 => "short1",
            Short2 => "short2",
            Short3 => "short3",
            Short4 => "short4",
            Medium1 => "medium1",
            Medium2 => "medium2",
            Medium3 => "medium3",
            Medium4 => "medium4",
            Long1 => "long1",
            Long2 => "long2",
            Long3 => "long3",
            Long4 => "long4",
            ExtraLong1 => "extra-long1",
            ExtraLong2 => "extra-long2",
            ExtraLong3 => "extra-long3",
            ExtraLong4 => "extra-long4",
        }
    }

    pub fn millis(&self) -> u32 {
        use MotionDuration::*;
        match self {
            Short1 => 50,
            Short2 => 100,
            Short3 => 150,
            Short4 => 200,
            Medium1 => 250,
            Medium2 => 300,
            Medium3 => 350,
            Medium4 => 400,
            Long1 => 450,
            Long2 => 500,
            Long3 => 550,
            Long4 => 600,
            ExtraLong1 => 700,
            ExtraLong2 => 800,
            ExtraLong3 => 900,
            ExtraLong4 => 1000,
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.millis()))
    }
}

impl fmt::Display for MotionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MotionDuration {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionDuration::all()
            .iter()
            .copied()
            .find(|token| token.id() == s)
            .ok_or_else(|| EasingError::UnknownDuration(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_points_pass_validation() {
        for preset in MotionEasing::all() {
            match preset.easing() {
                Easing::Linear => {}
                Easing::Cubic(c) => {
                    CubicCurve::new(c.a(), c.b()).unwrap();
                }
                Easing::ThreePoint(c) => {
                    let (a1, b1, m, a2, b2) = (c.a1(), c.b1(), c.midpoint(), c.a2(), c.b2());
                    ThreePointCubicCurve::new(a1, b1, m, a2, b2).unwrap();
                }
            }
        }
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for preset in MotionEasing::all() {
            assert_eq!(preset.id().parse::<MotionEasing>().unwrap(), *preset);
        }
        for token in MotionDuration::all() {
            assert_eq!(token.id().parse::<MotionDuration>().unwrap(), *token);
        }
    }

    #[test]
    fn ids_match_serde_names() {
        for preset in MotionEasing::all() {
            let json = serde_json::to_string(preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.id()));
        }
        for token in MotionDuration::all() {
            let json = serde_json::to_string(token).unwrap();
            assert_eq!(json, format!("\"{}\"", token.id()));
        }
    }

    #[test]
    fn unknown_ids_are_errors() {
        assert_eq!(
            "bouncy".parse::<MotionEasing>(),
            Err(EasingError::UnknownPreset("bouncy".to_string()))
        );
        assert_eq!(
            "medium9".parse::<MotionDuration>(),
            Err(EasingError::UnknownDuration("medium9".to_string()))
        );
    }

    #[test]
    fn durations_increase() {
        let millis: Vec<u32> = MotionDuration::all().iter().map(|d| d.millis()).collect();
        assert!(millis.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(MotionDuration::Medium2.as_duration(), Duration::from_millis(300));
    }

    #[test]
    fn emphasized_segments_match_accelerate_and_decelerate() {
        // Rescaled, the two halves of EMPHASIZED are the standalone variants
        let m = EMPHASIZED.midpoint();
        for t in [0.05, 0.1, 0.15] {
            let expected = EMPHASIZED_ACCELERATE.ease(t / m.x()) * m.y();
            assert!((EMPHASIZED.ease(t) - expected).abs() < 0.01, "t={t}");
        }
        for t in [0.3, 0.6, 0.9] {
            let local = (t - m.x()) / (1.0 - m.x());
            let expected = EMPHASIZED_DECELERATE.ease(local) * (1.0 - m.y()) + m.y();
            assert!((EMPHASIZED.ease(t) - expected).abs() < 0.01, "t={t}");
        }
    }
}
