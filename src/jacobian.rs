extern crate nalgebra as na;

use na::{Matrix2, Matrix3, Matrix3x2, Vector3};
use crate::kinematic_traits::{JacobianMatrix, Joints, Kinematics, Point};
use crate::solver_error::SolverError;

/// det(J Jᵀ) below this fraction of (L1 + L2 + L3)^4 is treated as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-12;

/// Struct representing the Jacobian of the planar arm, together with the
/// quantities derived from it that the solver needs.
pub struct Jacobian {
    /// A 2x3 matrix mapping joint velocities to the tip velocity in the plane.
    /// Each column corresponds to a joint.
    matrix: JacobianMatrix,

    /// Right pseudo-inverse Jᵀ (J Jᵀ)⁻¹
    pseudo_inverse: Matrix3x2<f64>,
}

impl Jacobian {
    /// Computes the Jacobian for the given robot and joints, and its right pseudo-inverse.
    ///
    /// # Arguments
    ///
    /// * `robot` - A reference to the robot implementing the Kinematics trait
    /// * `joints` - A reference to the joint configuration
    /// * `scale` - Characteristic length of the arm (sum of link lengths), used to make
    ///   the singularity check independent of units
    ///
    /// # Returns
    ///
    /// `SolverError::SingularJacobian` if J Jᵀ cannot be inverted.
    pub fn new(robot: &impl Kinematics, joints: &Joints, scale: f64) -> Result<Self, SolverError> {
        let matrix = robot.jacobian(joints);
        let pseudo_inverse = right_pseudo_inverse(&matrix, scale)?;
        Ok(Self { matrix, pseudo_inverse })
    }

    pub fn matrix(&self) -> &JacobianMatrix {
        &self.matrix
    }

    pub fn pseudo_inverse(&self) -> &Matrix3x2<f64> {
        &self.pseudo_inverse
    }

    /// Minimum-norm joint velocities producing the given tip velocity.
    pub fn velocities(&self, tip_velocity: &Point) -> Vector3<f64> {
        self.pseudo_inverse * tip_velocity
    }

    /// Projector I - J⁺J onto the null space of J. Joint motions in this space
    /// do not move the tip, to the first order.
    pub fn null_space_projector(&self) -> Matrix3<f64> {
        Matrix3::identity() - self.pseudo_inverse * self.matrix
    }
}

/// Right pseudo-inverse Jᵀ (J Jᵀ)⁻¹ of the wide 2x3 Jacobian.
pub fn right_pseudo_inverse(matrix: &JacobianMatrix, scale: f64) -> Result<Matrix3x2<f64>, SolverError> {
    let jjt: Matrix2<f64> = matrix * matrix.transpose();
    let determinant = jjt.determinant();
    if !determinant.is_finite() || determinant.abs() <= SINGULARITY_THRESHOLD * scale.powi(4) {
        return Err(SolverError::SingularJacobian { determinant });
    }
    match jjt.try_inverse() {
        Some(inverse) => Ok(matrix.transpose() * inverse),
        None => Err(SolverError::SingularJacobian { determinant }),
    }
}

/// Jacobian by central differences of `robot.forward`. Used to cross-check the analytic one.
///
/// # Arguments
///
/// * `robot` - A reference to the robot implementing the Kinematics trait
/// * `joints` - A reference to the joint configuration
/// * `epsilon` - Disturbance of each joint
pub fn numeric_jacobian(robot: &impl Kinematics, joints: &Joints, epsilon: f64) -> JacobianMatrix {
    let mut jacobian = JacobianMatrix::zeros();
    for i in 0..3 {
        let mut ahead = *joints;
        let mut behind = *joints;
        ahead[i] += epsilon;
        behind[i] -= epsilon;
        let derivative = (robot.forward(&ahead) - robot.forward(&behind)) / (2.0 * epsilon);
        jacobian.set_column(i, &derivative);
    }
    jacobian
}
