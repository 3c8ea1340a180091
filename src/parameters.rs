//! Defines the robot description data structure

pub mod planar3r {
    use crate::constraints::Constraints;
    use crate::kinematic_traits::{Joints, Point};
    use crate::parameter_error::ParameterError;

    /// Rectangle of the plane shown by the visualizer. Read and kept, never enforced.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Workspace {
        pub x_min: f64,
        pub x_max: f64,
        pub y_min: f64,
        pub y_max: f64,
    }

    impl Workspace {
        pub fn contains(&self, point: &Point) -> bool {
            point.x >= self.x_min && point.x <= self.x_max
                && point.y >= self.y_min && point.y <= self.y_max
        }
    }

    /// Wall segment from (x0, y0) to (x1, y1), drawn by the visualizer only.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Wall {
        pub x0: f64,
        pub x1: f64,
        pub y0: f64,
        pub y1: f64,
    }

    /// Parameters of the planar arm with three revolute joints.
    /// See [parameters_robots.rs](parameters_robots.rs) for examples of concrete robots.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Length of the link between joint 1 and joint 2.
        pub l1: f64,

        /// Length of the link between joint 2 and joint 3.
        pub l2: f64,

        /// Length of the link between joint 3 and the end effector.
        pub l3: f64,

        pub workspace: Workspace,

        /// Position of joint 1 in the plane. Only the visualizer draws the arm there,
        /// the inverse kinematics works with the base at the origin.
        pub base: Point,

        /// Joint position the arm starts from and returns to ("home").
        pub start: Joints,

        pub constraints: Constraints,

        pub wall: Wall,

        /// Display interval between two trajectory samples (milliseconds in the visualizer).
        pub dt: f64,
    }

    impl Parameters {
        /// Total length of the stretched arm.
        pub fn reach_radius(&self) -> f64 {
            self.l1 + self.l2 + self.l3
        }

        /// Checks the invariants the solver relies on: positive finite link lengths,
        /// finite ordered joint limits and a finite start pose. Joints with zero range pass
        /// here, the solver rejects them only if limit avoidance needs their weight.
        pub fn validate(&self) -> Result<(), ParameterError> {
            for (name, length) in [("L1", self.l1), ("L2", self.l2), ("L3", self.l3)] {
                if !length.is_finite() || length <= 0.0 {
                    return Err(ParameterError::KinematicsConfigurationError(format!(
                        "link length {} must be positive and finite (got {})",
                        name, length
                    )));
                }
            }
            if let Some(joint) = self.constraints.first_invalid_joint() {
                return Err(ParameterError::KinematicsConfigurationError(format!(
                    "limits of joint {} must be finite and ordered (got [{}, {}])",
                    joint + 1,
                    self.constraints.from[joint],
                    self.constraints.to[joint]
                )));
            }
            if !self.start.iter().all(|q| q.is_finite()) {
                return Err(ParameterError::KinematicsConfigurationError(format!(
                    "start joints must be finite (got {:?})",
                    self.start
                )));
            }
            Ok(())
        }

        /// Convert to the line-per-value text format of the robot description file.
        pub fn to_par(&self) -> String {
            let c = &self.constraints;
            format!(
                "# Link lengths L1 L2 L3\n{}\n{}\n{}\n\
                 # Workspace xmin xmax ymin ymax\n{}\n{}\n{}\n{}\n\
                 # Base x0 y0\n{}\n{}\n\
                 # Start joints (rad)\n{}\n{}\n{}\n\
                 # Joint limits min max (rad)\n{}\n{}\n{}\n{}\n{}\n{}\n\
                 # Wall x0 x1 y0 y1\n{}\n{}\n{}\n{}\n\
                 # dt\n{}\n",
                self.l1, self.l2, self.l3,
                self.workspace.x_min, self.workspace.x_max,
                self.workspace.y_min, self.workspace.y_max,
                self.base.x, self.base.y,
                self.start[0], self.start[1], self.start[2],
                c.from[0], c.to[0], c.from[1], c.to[1], c.from[2], c.to[2],
                self.wall.x0, self.wall.x1, self.wall.y0, self.wall.y1,
                self.dt
            )
        }
    }
}
