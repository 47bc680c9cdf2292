//! Declarative curve definitions for config files
//!
//! ```toml
//! [curves.fade]
//! preset = "emphasized-decelerate"
//!
//! [curves.slide]
//! cubic = { a = [0.4, 0.0], b = [0.2, 1.0] }
//! ```

use crate::cubic::CubicCurve;
use crate::easing::Easing;
use crate::presets::MotionEasing;
use crate::three_point::ThreePointCubicCurve;
use serde::{Deserialize, Serialize};

/// A curve as written in configuration: a preset name or explicit points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveDefinition {
    Preset(MotionEasing),
    Cubic(CubicCurve),
    ThreePoint(ThreePointCubicCurve),
}

impl CurveDefinition {
    pub fn easing(&self) -> Easing {
        match self {
            CurveDefinition::Preset(preset) => preset.easing(),
            CurveDefinition::Cubic(curve) => Easing::Cubic(*curve),
            CurveDefinition::ThreePoint(curve) => Easing::ThreePoint(*curve),
        }
    }
}

impl From<CurveDefinition> for Easing {
    fn from(definition: CurveDefinition) -> Self {
        definition.easing()
    }
}

impl From<MotionEasing> for CurveDefinition {
    fn from(preset: MotionEasing) -> Self {
        CurveDefinition::Preset(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use std::collections::BTreeMap;

    #[derive(Deserialize)]
    struct Curves {
        curves: BTreeMap<String, CurveDefinition>,
    }

    #[test]
    fn parses_each_form_from_toml() {
        let parsed: Curves = toml::from_str(
            r#"
            [curves.fade]
            preset = "emphasized-decelerate"

            [curves.slide]
            cubic = { a = [0.4, 0.0], b = [0.2, 1.0] }

            [curves.hero]
            three_point = { a1 = [0.05, 0.0], b1 = [0.133333, 0.06], midpoint = [0.166666, 0.4], a2 = [0.208333, 0.82], b2 = [0.25, 1.0] }
            "#,
        )
        .unwrap();

        assert_eq!(
            parsed.curves["fade"].easing(),
            Easing::Cubic(presets::EMPHASIZED_DECELERATE)
        );
        assert_eq!(
            parsed.curves["slide"].easing(),
            Easing::Cubic(presets::LEGACY)
        );
        assert_eq!(
            parsed.curves["hero"].easing(),
            Easing::ThreePoint(presets::EMPHASIZED)
        );
    }

    #[test]
    fn invalid_points_fail_to_load() {
        let err = toml::from_str::<Curves>(
            r#"
            [curves.bad]
            cubic = { a = [0.4, -0.1], b = [0.2, 1.0] }
            "#,
        )
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default();
        assert!(err.contains("control point 'a' has y = -0.1"), "{err}");
    }

    #[test]
    fn unknown_preset_fails_to_load() {
        let result = toml::from_str::<Curves>(
            r#"
            [curves.bad]
            preset = "wobble"
            "#,
        );
        assert!(result.is_err());
    }
}
