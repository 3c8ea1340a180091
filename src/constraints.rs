//! Joint limits of the arm

use crate::kinematic_traits::Joints;

/// Mechanical limits of the three joints. Unlike angles of continuous joints, these limits
/// are not normalized: a joint of the range [-3.5, 3.5] is allowed to turn more than a full
/// circle and the angle 2 PI is not the same as 0 for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Lower limits
    pub from: Joints,

    /// Upper limits
    pub to: Joints,
}

impl Constraints {
    pub fn new(from: Joints, to: Joints) -> Self {
        Constraints { from, to }
    }

    /// Checks that all limits are finite and ordered (`from <= to`). Returns the index
    /// of the first offending joint if not.
    pub fn first_invalid_joint(&self) -> Option<usize> {
        (0..3).find(|&i| {
            !self.from[i].is_finite() || !self.to[i].is_finite() || self.from[i] > self.to[i]
        })
    }

    /// Index of the first joint that has zero range, if any.
    pub fn first_zero_range(&self) -> Option<usize> {
        (0..3).find(|&i| self.to[i] - self.from[i] == 0.0)
    }

    /// True if all joints are within their limits, bounds included.
    pub fn compliant(&self, angles: &Joints) -> bool {
        (0..3).all(|i| angles[i] >= self.from[i] && angles[i] <= self.to[i])
    }

    /// Per joint flags, true where the joint is outside its limits.
    pub fn violations(&self, angles: &Joints) -> [bool; 3] {
        std::array::from_fn(|i| angles[i] < self.from[i] || angles[i] > self.to[i])
    }

    /// Saturates every joint into its limits.
    pub fn clamp(&self, angles: &Joints) -> Joints {
        std::array::from_fn(|i| angles[i].max(self.from[i]).min(self.to[i]))
    }

    /// Middle of the range of each joint.
    pub fn centers(&self) -> Joints {
        std::array::from_fn(|i| 0.5 * (self.to[i] + self.from[i]))
    }

    /// Inverse range of each joint, used to weight the distance from the center. Infinite
    /// for joints without range, callers must check `first_zero_range` first.
    pub fn weights(&self) -> Joints {
        std::array::from_fn(|i| 1.0 / (self.to[i] - self.from[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn symmetric(limit: f64) -> Constraints {
        Constraints::new([-limit; 3], [limit; 3])
    }

    #[test]
    fn test_compliant_inside_and_on_bounds() {
        let limits = symmetric(PI / 2.0);
        assert!(limits.compliant(&[0.0, 0.3, -0.3]));
        assert!(limits.compliant(&[PI / 2.0, -PI / 2.0, 0.0]));
    }

    #[test]
    fn test_not_compliant_outside() {
        let limits = symmetric(PI / 2.0);
        assert!(!limits.compliant(&[0.0, 0.0, PI]));
        assert_eq!(limits.violations(&[0.0, 2.0, -2.0]), [false, true, true]);
    }

    #[test]
    fn test_no_wrap_around() {
        // 2 PI is a different angle than 0 for a joint with limits
        let limits = Constraints::new([-0.1, -0.1, -0.1], [0.1, 0.1, 0.1]);
        assert!(!limits.compliant(&[2.0 * PI, 0.0, 0.0]));
    }

    #[test]
    fn test_clamp() {
        let limits = Constraints::new([-1.0, 0.0, -0.5], [1.0, 2.0, 0.5]);
        assert_eq!(limits.clamp(&[-3.0, 1.0, 0.7]), [-1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_centers_and_weights() {
        let limits = Constraints::new([-1.0, 0.0, -0.5], [1.0, 2.0, 1.5]);
        assert_eq!(limits.centers(), [0.0, 1.0, 0.5]);
        assert_eq!(limits.weights(), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_invalid_and_zero_range() {
        let limits = Constraints::new([-1.0, 0.3, 0.0], [1.0, 0.3, -1.0]);
        assert_eq!(limits.first_zero_range(), Some(1));
        assert_eq!(limits.first_invalid_joint(), Some(2));

        let limits = Constraints::new([f64::NEG_INFINITY, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(limits.first_invalid_joint(), Some(0));
        assert_eq!(symmetric(1.0).first_invalid_joint(), None);
    }
}
