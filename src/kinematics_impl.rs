use crate::constraints::Constraints;
use crate::kinematic_traits::{JacobianMatrix, Joints, Kinematics, Point};
use crate::parameters::planar3r::Parameters;

/// Closed-form kinematics of the planar arm with three revolute joints.
#[derive(Debug, Clone, Copy)]
pub struct Planar3RKinematics {
    parameters: Parameters,
}

impl Planar3RKinematics {
    /// Creates a new `Planar3RKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        Planar3RKinematics { parameters }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn constraints(&self) -> &Constraints {
        &self.parameters.constraints
    }

    /// Cumulative link angles θ1, θ1+θ2, θ1+θ2+θ3.
    fn absolute_angles(joints: &Joints) -> [f64; 3] {
        let a1 = joints[0];
        let a12 = a1 + joints[1];
        let a123 = a12 + joints[2];
        [a1, a12, a123]
    }
}

impl Kinematics for Planar3RKinematics {
    fn forward(&self, joints: &Joints) -> Point {
        let p = &self.parameters;
        let [a1, a12, a123] = Self::absolute_angles(joints);
        Point::new(
            p.l1 * a1.cos() + p.l2 * a12.cos() + p.l3 * a123.cos(),
            p.l1 * a1.sin() + p.l2 * a12.sin() + p.l3 * a123.sin(),
        )
    }

    fn jacobian(&self, joints: &Joints) -> JacobianMatrix {
        let p = &self.parameters;
        let [a1, a12, a123] = Self::absolute_angles(joints);

        // Column i is the tip position relative to joint i, turned by 90 degrees.
        let (s3, c3) = (p.l3 * a123.sin(), p.l3 * a123.cos());
        let (s2, c2) = (p.l2 * a12.sin() + s3, p.l2 * a12.cos() + c3);
        let (s1, c1) = (p.l1 * a1.sin() + s2, p.l1 * a1.cos() + c2);

        JacobianMatrix::new(
            -s1, -s2, -s3,
            c1, c2, c3,
        )
    }

    fn forward_with_link_positions(&self, joints: &Joints, base: &Point) -> [Point; 4] {
        let p = &self.parameters;
        let [a1, a12, a123] = Self::absolute_angles(joints);

        let elbow1 = base + Point::new(p.l1 * a1.cos(), p.l1 * a1.sin());
        let elbow2 = elbow1 + Point::new(p.l2 * a12.cos(), p.l2 * a12.sin());
        let tip = elbow2 + Point::new(p.l3 * a123.cos(), p.l3 * a123.sin());
        [*base, elbow1, elbow2, tip]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic_traits::JOINTS_AT_ZERO;
    use crate::utils::as_radians;
    use std::f64::consts::{FRAC_PI_2, PI};

    const SMALL: f64 = 1e-12;

    fn assert_point_eq(actual: &Point, expected: &Point) {
        assert!(
            (actual - expected).norm() < SMALL,
            "{:?} is not {:?}", actual, expected
        );
    }

    #[test]
    fn test_forward_stretched() {
        let robot = Planar3RKinematics::new(Parameters::course_arm());
        let tip = robot.forward(&JOINTS_AT_ZERO);
        assert_point_eq(&tip, &Point::new(1.2, 0.0));
    }

    #[test]
    fn test_forward_folded_square() {
        // Each joint turns by 90 degrees: right, up, left
        let robot = Planar3RKinematics::new(Parameters::new());
        let tip = robot.forward(&as_radians([0, 90, 90]));
        assert_point_eq(&tip, &Point::new(0.0, 1.0));
    }

    #[test]
    fn test_forward_periodic() {
        let robot = Planar3RKinematics::new(Parameters::course_arm());
        let joints = [0.3, -0.7, 1.1];
        let turned = [0.3 + 2.0 * PI, -0.7, 1.1 - 2.0 * PI];
        assert!((robot.forward(&joints) - robot.forward(&turned)).norm() < 1e-9);
    }

    #[test]
    fn test_jacobian_stretched() {
        let robot = Planar3RKinematics::new(Parameters::new());
        let jacobian = robot.jacobian(&JOINTS_AT_ZERO);
        let expected = JacobianMatrix::new(
            0.0, 0.0, 0.0,
            3.0, 2.0, 1.0,
        );
        assert!((jacobian - expected).norm() < SMALL);
    }

    #[test]
    fn test_link_positions() {
        let robot = Planar3RKinematics::new(Parameters::new());
        let joints = [FRAC_PI_2, -FRAC_PI_2, 0.5];
        let base = Point::new(1.0, -2.0);
        let points = robot.forward_with_link_positions(&joints, &base);

        assert_point_eq(&points[0], &base);
        assert_point_eq(&points[1], &Point::new(1.0, -1.0));
        assert_point_eq(&points[2], &Point::new(2.0, -1.0));
        assert_point_eq(&points[3], &(base + robot.forward(&joints)));
    }
}
