//! Damped iterative inverse kinematics for the redundant planar arm
//!
//! The arm has three joints for a two-dimensional task, so infinitely many joint
//! positions put the tip on a given point. Each iteration takes the minimum-norm
//! step J⁺ · d · Δp towards the target. With limit avoidance enabled, a secondary
//! motion is added in the null space of J that pulls every joint towards the middle
//! of its range without moving the tip (to the first order). With clamping enabled,
//! the joints are saturated into their limits after each step.

extern crate nalgebra as na;

use na::Vector3;
use tracing::trace;

use crate::jacobian::Jacobian;
use crate::kinematic_traits::{Joints, Kinematics, Point};
use crate::kinematics_impl::Planar3RKinematics;
use crate::solver_error::SolverError;
use crate::utils::is_valid;

/// Damping applied both to the Cartesian error and to the joint step.
pub const DAMPING: f64 = 0.75;

/// Distance to the target at which the solver stops.
pub const EPSILON: f64 = 1e-5;

pub const MAX_ITERATIONS: usize = 25;

/// Gain of the limit avoidance motion.
pub const ALPHA: f64 = 0.2;

/// Independent switches of the solver. All four combinations are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachOptions {
    /// Pull the redundant degree of freedom towards the middle of the joint ranges.
    pub avoidance: bool,

    /// Saturate the joints into their limits after every step.
    pub clamp: bool,
}

impl ReachOptions {
    /// Plain damped least squares, limits ignored.
    pub const PLAIN: ReachOptions = ReachOptions { avoidance: false, clamp: false };

    pub fn new(avoidance: bool, clamp: bool) -> Self {
        ReachOptions { avoidance, clamp }
    }
}

impl Default for ReachOptions {
    fn default() -> Self {
        ReachOptions { avoidance: true, clamp: true }
    }
}

/// Result of a single `reach` call with the diagnostics the trajectory generator reports.
#[derive(Debug, Clone, Copy)]
pub struct ReachOutcome {
    pub joints: Joints,

    /// Number of steps applied.
    pub iterations: usize,

    /// True if the tip ended closer than `EPSILON` to the target.
    pub converged: bool,

    /// Remaining distance between the tip and the target.
    pub residual: f64,
}

/// Moves the joints so that the tip reaches the target. Returns the last joints if the
/// target is not reached within `MAX_ITERATIONS`, this is not an error.
pub fn reach(
    target: &Point,
    initial: &Joints,
    robot: &Planar3RKinematics,
    options: ReachOptions,
) -> Result<Joints, SolverError> {
    reach_detailed(target, initial, robot, options).map(|outcome| outcome.joints)
}

/// Same as `reach`, also reporting the iteration count and the remaining error.
pub fn reach_detailed(
    target: &Point,
    initial: &Joints,
    robot: &Planar3RKinematics,
    options: ReachOptions,
) -> Result<ReachOutcome, SolverError> {
    let constraints = robot.constraints();
    let scale = robot.parameters().reach_radius();

    let (centers, weights) = if options.avoidance {
        if let Some(joint) = constraints.first_zero_range() {
            return Err(SolverError::ZeroJointRange { joint });
        }
        (Vector3::from(constraints.centers()), Vector3::from(constraints.weights()))
    } else {
        (Vector3::zeros(), Vector3::zeros())
    };

    let mut theta = Vector3::from(*initial);
    for iteration in 0..MAX_ITERATIONS {
        let joints: Joints = theta.into();
        let dp = target - robot.forward(&joints);
        let residual = dp.norm();
        if residual < EPSILON {
            trace!(iteration, residual, "target reached");
            return Ok(ReachOutcome { joints, iterations: iteration, converged: true, residual });
        }

        let jacobian = Jacobian::new(robot, &joints, scale)?;
        let mut dtheta = jacobian.velocities(&(DAMPING * dp));

        if options.avoidance {
            let h = weights.component_mul(&(centers - theta));
            dtheta += ALPHA * (jacobian.null_space_projector() * h);
        }

        theta += DAMPING * dtheta;

        if options.clamp {
            theta = Vector3::from(constraints.clamp(&theta.into()));
        }

        if !is_valid(&theta.into()) {
            return Err(SolverError::NonFiniteJoints);
        }
    }

    let joints: Joints = theta.into();
    let residual = (target - robot.forward(&joints)).norm();
    trace!(residual, "iteration limit reached");
    Ok(ReachOutcome { joints, iterations: MAX_ITERATIONS, converged: residual < EPSILON, residual })
}
