//! Dial mapping health check

use crate::config::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::knob::DialScale;

/// Checks the angle/value mapping of a scale
///
/// The angle of `min` must be 0, angles must not decrease as the value grows,
/// and mapping a value to its angle and back must land within one step.
pub struct ScaleCheck {
    scale: DialScale,
}

impl ScaleCheck {
    pub fn new(scale: DialScale) -> Self {
        Self { scale }
    }

    /// Checks the scale of the knob preset from the environment's profile
    pub fn from_env() -> Self {
        let knob = AppConfig::load_from_env()
            .map(|config| config.knob)
            .unwrap_or_default();
        Self::new(knob.to_props().scale())
    }
}

impl SystemCheck for ScaleCheck {
    fn name(&self) -> &'static str {
        "Dial Scale"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates angle/value mapping of the configured knob")
    }

    fn check(&self) -> CheckResult {
        let scale = &self.scale;
        if !scale.has_valid_bounds() {
            return CheckResult::fail(format!(
                "Invalid bounds: min {}, max {}, step {}",
                scale.min, scale.max, scale.step
            ));
        }
        if !scale.has_finite_steps() {
            return CheckResult::fail(format!(
                "Step {} does not divide {}..{} into finitely many steps",
                scale.step, scale.min, scale.max
            ));
        }
        if !scale.has_aligned_range() {
            return CheckResult::fail(format!(
                "Range {}..{} is not a multiple of step {}",
                scale.min, scale.max, scale.step
            ));
        }

        let mut problems = Vec::new();
        if scale.angle_from_value(scale.min) != 0.0 {
            problems.push(format!(
                "  angle of min is {}",
                scale.angle_from_value(scale.min)
            ));
        }

        let mut last_angle = f64::NEG_INFINITY;
        for value in scale.values() {
            let angle = scale.angle_from_value(value);
            if angle < last_angle {
                problems.push(format!("  angle drops to {angle} at value {value}"));
            }
            last_angle = angle;

            if value > scale.min && value < scale.max {
                let back = scale.value_from_angle(angle);
                if (back - value).abs() > scale.step {
                    problems.push(format!("  value {value} maps back to {back}"));
                }
            }
        }

        let summary = format!(
            "{} steps, {:.3}° per step",
            scale.num_steps(),
            scale.vals_distribution()
        );
        if problems.is_empty() {
            CheckResult::pass(summary)
        } else {
            CheckResult::fail(format!("{} mapping problems", problems.len()))
                .with_details(format!("  {summary}\n{}", problems.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scale_passes() {
        let check = ScaleCheck::new(DialScale::new(0.0, 100.0, 1.0, true));
        assert!(!check.check().status.is_fail());
    }

    #[test]
    fn test_invalid_bounds_fail() {
        let check = ScaleCheck::new(DialScale::new(100.0, 0.0, 1.0, true));
        assert!(check.check().status.is_fail());
    }

    #[test]
    fn test_zero_step_fails() {
        let result = ScaleCheck::new(DialScale::new(0.0, 100.0, 0.0, true)).check();
        assert!(result.status.is_fail());
        assert!(result.message.contains("finitely many steps"), "{}", result.message);
    }

    #[test]
    fn test_misaligned_range_fails() {
        let result = ScaleCheck::new(DialScale::new(0.0, 100.0, 3.0, true)).check();
        assert!(result.status.is_fail());
        assert!(result.message.contains("not a multiple"), "{}", result.message);
    }
}
