//! Errors of the inverse kinematics solver and the trajectory generator

use thiserror::Error;

/// Numerical failures. They are never retried: a path or robot that produces one of these
/// cannot be followed by the damped Jacobian method.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// J Jᵀ cannot be inverted, typically with the arm fully stretched or folded.
    #[error("Singular Jacobian: det(J Jᵀ) = {determinant:e}")]
    SingularJacobian { determinant: f64 },

    /// Limit avoidance weights joints by their inverse range, undefined for this joint.
    #[error("Joint {} has zero range, limit avoidance weight undefined", .joint + 1)]
    ZeroJointRange { joint: usize },

    #[error("Joint update produced non-finite values")]
    NonFiniteJoints,

    #[error("Cartesian step must be positive and finite (got {step})")]
    InvalidStep { step: f64 },

    #[error("Cartesian path has no waypoints")]
    EmptyPath,

    #[error("Waypoint {index} has non-finite coordinates")]
    NonFiniteWaypoint { index: usize },

    /// The segment would need more targets than the generator accepts for one segment.
    #[error("Segment of length {length} cannot be cut into steps of {step}")]
    SegmentTooLong { length: f64, step: f64 },
}
