//! Hardcoded parameters for a few arms

pub mod planar3r {
    use crate::constraints::Constraints;
    use crate::kinematic_traits::{Point, JOINTS_AT_ZERO};
    use crate::parameters::planar3r::{Parameters, Wall, Workspace};
    use std::f64::consts::PI;

    #[allow(dead_code)]
    impl Parameters {
        /// Provides default values: unit links, no joint limits worth mentioning,
        /// base at the origin, a slightly bent start pose.
        pub fn new() -> Self {
            Parameters {
                l1: 1.0,
                l2: 1.0,
                l3: 1.0,
                workspace: Workspace { x_min: -3.5, x_max: 3.5, y_min: -3.5, y_max: 3.5 },
                base: Point::new(0.0, 0.0),
                start: [0.3, 0.6, 0.4],
                constraints: Constraints::new([-PI; 3], [PI; 3]),
                wall: Wall { x0: 2.5, x1: 2.5, y0: -3.5, y1: 3.5 },
                dt: 40.0,
            }
        }

        /// Three links of one unit, stretched along the x axis at start.
        /// The start pose is a singularity, useful to check how it is reported.
        pub fn unit_arm() -> Self {
            Parameters {
                start: JOINTS_AT_ZERO,
                ..Self::new()
            }
        }

        /// Arm of the drawing exercise: decreasing link lengths, elbow up start pose
        /// and asymmetric limits of the distal joints.
        pub fn course_arm() -> Self {
            Parameters {
                l1: 0.5,
                l2: 0.4,
                l3: 0.3,
                workspace: Workspace { x_min: -0.4, x_max: 1.3, y_min: -0.4, y_max: 1.3 },
                base: Point::new(0.0, 0.0),
                start: [PI / 4.0, -PI / 6.0, -PI / 6.0],
                constraints: Constraints::new(
                    [-PI / 2.0, -2.0 * PI / 3.0, -2.0 * PI / 3.0],
                    [PI, 2.0 * PI / 3.0, PI / 2.0],
                ),
                wall: Wall { x0: 1.0, x1: 1.0, y0: -0.4, y1: 1.3 },
                dt: 20.0,
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Self::new()
        }
    }
}
