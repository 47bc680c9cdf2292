//! Easing functions for animations

use crate::cubic::CubicCurve;
use crate::three_point::ThreePointCubicCurve;

/// Anything that maps linear progress to eased progress.
///
/// Implementations are pure: the same `t` always yields the same output.
pub trait EasingFunction {
    fn ease(&self, t: f64) -> f64;
}

impl EasingFunction for CubicCurve {
    fn ease(&self, t: f64) -> f64 {
        CubicCurve::ease(self, t)
    }
}

impl EasingFunction for ThreePointCubicCurve {
    fn ease(&self, t: f64) -> f64 {
        ThreePointCubicCurve::ease(self, t)
    }
}

/// Largest `steps` value [`Easing::sample`] honours; larger requests are clamped
pub const MAX_SAMPLE_STEPS: usize = 10_000;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    Cubic(CubicCurve),
    ThreePoint(ThreePointCubicCurve),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn ease(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Cubic(curve) => curve.ease(t),
            Easing::ThreePoint(curve) => curve.ease(t),
        }
    }

    /// Evaluate at `steps + 1` evenly spaced progress values from 0 to 1.
    ///
    /// `steps` is clamped to [`MAX_SAMPLE_STEPS`].
    pub fn sample(&self, steps: usize) -> Vec<(f64, f64)> {
        if steps == 0 {
            return vec![(0.0, self.ease(0.0))];
        }
        let steps = steps.min(MAX_SAMPLE_STEPS);
        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                (t, self.ease(t))
            })
            .collect()
    }
}

impl EasingFunction for Easing {
    fn ease(&self, t: f64) -> f64 {
        Easing::ease(self, t)
    }
}

impl From<CubicCurve> for Easing {
    fn from(curve: CubicCurve) -> Self {
        Easing::Cubic(curve)
    }
}

impl From<ThreePointCubicCurve> for Easing {
    fn from(curve: ThreePointCubicCurve) -> Self {
        Easing::ThreePoint(curve)
    }
}
