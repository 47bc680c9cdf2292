//! Command implementations
//!
//! Each command renders to a `String` so output can be checked in tests.

use anyhow::Result;
use matter_easing::{ControlPoint, Easing, MotionDuration, MotionEasing};
use std::fs;
use std::path::Path;

use crate::config::{MatterConfig, CONFIG_FILE};

/// Write a starter matter.toml into `path`
pub fn init(path: &Path) -> Result<String> {
    fs::create_dir_all(path)?;
    let target = path.join(CONFIG_FILE);
    if target.exists() {
        anyhow::bail!("{} already exists", target.display());
    }
    fs::write(&target, MatterConfig::starter().to_toml()?)?;
    tracing::info!(path = %target.display(), "created motion config");
    Ok(format!("Created {}\n", target.display()))
}

/// Tabulate a curve over [0, 1] with the elapsed time at each sample
pub fn sample(easing: &Easing, steps: usize, duration: MotionDuration) -> String {
    let total = f64::from(duration.millis());
    let mut out = format!("# {} ms ({duration})\n# t\teased\tms\n", duration.millis());
    for (t, eased) in easing.sample(steps) {
        out.push_str(&format!("{t:.3}\t{eased:.4}\t{:.0}\n", t * total));
    }
    out
}

/// `matter sample`: resolve `curve` against the config in `config_dir`
/// (presets only when there is none) and tabulate it
pub fn run_sample(curve: &str, steps: Option<usize>, config_dir: &Path) -> Result<String> {
    let config = MatterConfig::load_or_default(config_dir)?;
    let easing = config.resolve(curve)?;
    let steps = steps.unwrap_or(config.motion.sample_steps);
    Ok(sample(&easing, steps, config.motion.default_duration))
}

fn point(p: ControlPoint) -> String {
    format!("({}, {})", p.x(), p.y())
}

/// One line per built-in preset with its control points
pub fn presets() -> String {
    let mut out = String::new();
    for preset in MotionEasing::all() {
        let shape = match preset.easing() {
            Easing::Linear => "linear".to_string(),
            Easing::Cubic(c) => format!("cubic {} {}", point(c.a()), point(c.b())),
            Easing::ThreePoint(c) => format!(
                "three-point {} {} | {} | {} {}",
                point(c.a1()),
                point(c.b1()),
                point(c.midpoint()),
                point(c.a2()),
                point(c.b2())
            ),
        };
        out.push_str(&format!("{:<24}{shape}\n", preset.id()));
    }
    out
}

/// Load the config in `path` and resolve every named curve
pub fn check(path: &Path) -> Result<String> {
    let config = MatterConfig::load_from_dir(path)?;
    let mut out = String::new();
    for name in config.curves.keys() {
        let easing = config.resolve(name)?;
        out.push_str(&format!(
            "ok  {name:<16} ease(0.5) = {:.4}\n",
            easing.ease(0.5)
        ));
    }
    out.push_str(&format!(
        "{} curve(s), default duration {} ({} ms)\n",
        config.curves.len(),
        config.motion.default_duration,
        config.motion.default_duration.millis()
    ));
    Ok(out)
}
