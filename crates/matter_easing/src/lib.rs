//! Matter Easing
//!
//! Cubic bezier easing curves for Material motion.
//!
//! # Features
//!
//! - **Cubic curves**: CSS-style `cubic-bezier()` easing anchored at (0,0) and (1,1)
//! - **Three-point curves**: Two cubic segments stitched at a shared midpoint
//! - **Validated construction**: Control points outside the unit square are rejected up front
//! - **Presets**: Material 3 easing curves and duration tokens as `const` values
//! - **Config forms**: Curves deserialize from TOML/JSON through the validating constructors
//!
//! # Example
//!
//! ```rust
//! use matter_easing::{ControlPoint, CubicCurve, Easing, MotionEasing};
//!
//! let curve = CubicCurve::new(ControlPoint::new(0.4, 0.0), ControlPoint::new(0.2, 1.0))?;
//! let eased = curve.ease(0.5);
//! assert!((eased - 0.776).abs() < 0.001);
//!
//! let emphasized: Easing = "emphasized".parse::<MotionEasing>()?.easing();
//! assert!(emphasized.ease(0.0).abs() < 0.001);
//! # Ok::<(), matter_easing::EasingError>(())
//! ```

pub mod cubic;
pub mod definition;
pub mod easing;
pub mod error;
pub mod point;
pub mod presets;
pub mod three_point;

pub use cubic::{cubic_transform, CubicCurve};
pub use definition::CurveDefinition;
pub use easing::{Easing, EasingFunction, MAX_SAMPLE_STEPS};
pub use error::{EasingError, Result};
pub use point::{Axis, ControlPoint};
pub use presets::{MotionDuration, MotionEasing};
pub use three_point::ThreePointCubicCurve;
