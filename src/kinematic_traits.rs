//! Defines the types and the kinematics trait shared by the solver and the trajectory generator

extern crate nalgebra as na;

use na::{Matrix2x3, Vector2};

/// Joint angles of the three revolute joints, in radians. Index 0 is the joint at the base.
/// ```
/// let joints: rs_planar3r_kinematics::kinematic_traits::Joints = [0.1, -0.2, 0.3];
/// ```
pub type Joints = [f64; 3];

/// Position of the end effector (or any other point) in the plane of the arm.
pub type Point = Vector2<f64>;

/// Jacobian of the tip position with respect to the joint angles. Each column corresponds
/// to a joint, the rows are x and y.
pub type JacobianMatrix = Matrix2x3<f64>;

/// The joint position where all links are stretched along the x axis.
/// Note that this is a kinematic singularity of the arm.
pub const JOINTS_AT_ZERO: Joints = [0.0, 0.0, 0.0];

/// Index of the joint at the base of the arm
pub const J1: usize = 0;

/// Index of the middle joint
pub const J2: usize = 1;

/// Index of the joint next to the end effector
pub const J3: usize = 2;

pub trait Kinematics {
    /// Position of the end effector for the given joints, base at the origin.
    fn forward(&self, joints: &Joints) -> Point;

    /// Analytic Jacobian of `forward` at the given joints.
    fn jacobian(&self, joints: &Joints) -> JacobianMatrix;

    /// Positions of the base, the two intermediate joints and the tip, with the base placed
    /// at `base`. The last point equals `base + forward(joints)`.
    fn forward_with_link_positions(&self, joints: &Joints, base: &Point) -> [Point; 4];
}
