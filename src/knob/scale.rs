//! Angle/value mapping for a quantized dial
//!
//! A dial covers 360 degrees. Its value range `[min, max]` is split into
//! `num_steps` slots of `step` each, and every slot takes up an equal share of
//! the circle. With `space_max_from_zero` set, one extra slot is reserved so
//! that `max` does not sit right next to `min`.

use std::f64::consts::PI;

/// Value range and quantization of a dial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub space_max_from_zero: bool,
}

impl DialScale {
    /// Creates a new scale
    pub fn new(min: f64, max: f64, step: f64, space_max_from_zero: bool) -> Self {
        Self {
            min,
            max,
            step,
            space_max_from_zero,
        }
    }

    /// Returns true if `max > min` and `max >= min + step`
    pub fn has_valid_bounds(&self) -> bool {
        self.max > self.min && self.max >= self.min + self.step
    }

    /// Returns true if `step` is positive and splits the range into a finite
    /// number of steps
    pub fn has_finite_steps(&self) -> bool {
        self.step > 0.0 && self.num_steps().is_finite()
    }

    /// Returns true if `max - min` is a whole multiple of `step`
    pub fn has_aligned_range(&self) -> bool {
        (self.max - self.min) % self.step == 0.0
    }

    /// Number of quantization steps between `min` and `max`
    pub fn num_steps(&self) -> f64 {
        (self.max - self.min) / self.step
    }

    /// Degrees of rotation covered by one step (the angle quantum)
    pub fn vals_distribution(&self) -> f64 {
        if self.space_max_from_zero {
            360.0 / (self.num_steps() + 1.0)
        } else {
            360.0 / self.num_steps()
        }
    }

    /// Display angle for a value, rounded up to a whole degree
    ///
    /// `angle_from_value(min)` is always 0, as is every angle on a scale
    /// without finite steps.
    pub fn angle_from_value(&self, value: f64) -> f64 {
        if !self.has_finite_steps() {
            return 0.0;
        }
        (((value - self.min) / self.step) * self.vals_distribution()).ceil()
    }

    /// Quantized value for an angle
    ///
    /// Angles past the top of the range by more than half a step wrap back to
    /// `min` instead of clamping to `max`. Otherwise the nearest member of
    /// `min, min + step, ..., max` is returned, the lower one on a tie.
    ///
    /// A scale without finite steps always maps to `min`.
    pub fn value_from_angle(&self, angle: f64) -> f64 {
        if !self.has_finite_steps() {
            return self.min;
        }
        let num_steps = self.num_steps();
        let angle_as_percent = angle / (num_steps * self.vals_distribution());
        let total_value = num_steps * self.step;
        let val = self.min + angle_as_percent * total_value;

        if val > self.max + self.step / 2.0 {
            return self.min;
        }

        let mut closest = self.min;
        for i in 1..=num_steps.round() as usize {
            let candidate = self.min + i as f64 * self.step;
            if (candidate - val).abs() < (closest - val).abs() {
                closest = candidate;
            }
        }
        closest
    }

    /// Iterates over every reachable value, `min` first
    ///
    /// Only `min` is reachable on a scale without finite steps.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let last = if self.has_finite_steps() {
            self.num_steps().round() as usize
        } else {
            0
        };
        (0..=last).map(|i| self.min + i as f64 * self.step)
    }
}

/// Clockwise rotation in degrees from "12 o'clock" of `pointer` around `center`
///
/// Both points are page coordinates with y growing downwards. The result lies in
/// `[0, 360]`.
pub fn degree_of_rotation(center: [f64; 2], pointer: [f64; 2]) -> f64 {
    let rad = (pointer[0] - center[0]).atan2(pointer[1] - center[1]);
    (rad * (180.0 / PI) - 180.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent() -> DialScale {
        DialScale::new(0.0, 100.0, 1.0, true)
    }

    #[test]
    fn test_num_steps_and_distribution() {
        let scale = percent();
        assert_eq!(scale.num_steps(), 100.0);
        assert_eq!(scale.vals_distribution(), 360.0 / 101.0);

        let tight = DialScale::new(0.0, 100.0, 1.0, false);
        assert_eq!(tight.vals_distribution(), 3.6);

        let coarse = DialScale::new(10.0, 100.0, 5.0, true);
        assert_eq!(coarse.num_steps(), 18.0);
        assert_eq!(coarse.vals_distribution(), 360.0 / 19.0);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(percent().has_valid_bounds());
        assert!(!DialScale::new(200.0, 100.0, 1.0, true).has_valid_bounds());
        assert!(!DialScale::new(100.0, 100.0, 1.0, true).has_valid_bounds());
        assert!(!DialScale::new(90.0, 100.0, 20.0, true).has_valid_bounds());
        assert!(DialScale::new(90.0, 100.0, 10.0, true).has_valid_bounds());
    }

    #[test]
    fn test_angle_from_value() {
        let scale = percent();
        assert_eq!(scale.angle_from_value(0.0), 0.0);
        assert_eq!(scale.angle_from_value(1.0), 4.0);
        assert_eq!(scale.angle_from_value(50.0), 179.0);
        assert_eq!(scale.angle_from_value(98.0), 350.0);
        assert_eq!(scale.angle_from_value(99.0), 353.0);
        assert_eq!(scale.angle_from_value(100.0), 357.0);
    }

    #[test]
    fn test_angle_from_value_is_monotonic() {
        for scale in [
            percent(),
            DialScale::new(-50.0, 50.0, 5.0, false),
            DialScale::new(10.0, 100.0, 1.0, true),
        ] {
            assert_eq!(scale.angle_from_value(scale.min), 0.0);
            let angles: Vec<f64> = scale.values().map(|v| scale.angle_from_value(v)).collect();
            assert!(angles.windows(2).all(|w| w[0] <= w[1]), "{angles:?}");
        }
    }

    #[test]
    fn test_value_from_angle() {
        let scale = percent();
        assert_eq!(scale.value_from_angle(0.0), 0.0);
        assert_eq!(scale.value_from_angle(36.0), 10.0);
        assert_eq!(scale.value_from_angle(72.0), 20.0);
        assert_eq!(scale.value_from_angle(180.0), 50.0);
    }

    #[test]
    fn test_value_from_angle_wraps_in_dead_zone() {
        let scale = percent();
        assert_eq!(scale.value_from_angle(359.0), 0.0);
        // Just inside the last half step still snaps to max
        assert_eq!(scale.value_from_angle(357.0), 100.0);
    }

    #[test]
    fn test_value_from_angle_tie_prefers_lower() {
        // 4 steps over 360 degrees: 90 degrees per step, 45 is an exact tie
        let scale = DialScale::new(0.0, 4.0, 1.0, false);
        assert_eq!(scale.value_from_angle(45.0), 0.0);
        assert_eq!(scale.value_from_angle(135.0), 1.0);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let scale = DialScale::new(10.0, 100.0, 5.0, true);
        for value in scale.values().filter(|v| *v > scale.min && *v < scale.max) {
            let back = scale.value_from_angle(scale.angle_from_value(value));
            assert!((back - value).abs() <= scale.step, "{value} -> {back}");
        }
    }

    #[test]
    fn test_zero_step_has_no_finite_steps() {
        let scale = DialScale::new(0.0, 100.0, 0.0, true);
        assert!(scale.has_valid_bounds());
        assert!(!scale.has_finite_steps());
        assert_eq!(scale.values().collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(scale.value_from_angle(180.0), 0.0);
        assert_eq!(scale.angle_from_value(0.0), 0.0);

        let negative = DialScale::new(0.0, 100.0, -1.0, true);
        assert!(!negative.has_finite_steps());
        assert_eq!(negative.value_from_angle(90.0), 0.0);
    }

    #[test]
    fn test_range_alignment() {
        assert!(percent().has_aligned_range());
        assert!(DialScale::new(-50.0, 50.0, 5.0, false).has_aligned_range());
        assert!(!DialScale::new(0.0, 100.0, 3.0, true).has_aligned_range());
    }

    #[test]
    fn test_degree_of_rotation() {
        let center = [270.0, 190.0];
        assert_eq!(degree_of_rotation(center, [240.0, 360.0]).ceil(), 191.0);
        // Straight up is zero, right is a quarter turn
        assert!(degree_of_rotation(center, [270.0, 0.0]).abs() < 1e-9);
        assert!((degree_of_rotation(center, [400.0, 190.0]) - 90.0).abs() < 1e-9);
        assert!((degree_of_rotation(center, [270.0, 300.0]) - 180.0).abs() < 1e-9);
        assert!((degree_of_rotation(center, [100.0, 190.0]) - 270.0).abs() < 1e-9);
    }
}
