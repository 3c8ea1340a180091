//! Joint trajectory from a Cartesian path
//!
//! The generated trajectory is a closed loop: from the start position to the first
//! waypoint, along the path, from the last waypoint back to the first one and finally
//! back to the start position. Every segment is cut into targets a fixed Cartesian step
//! apart, and each target is solved starting from the joints of the previous one.

use tracing::{debug, info, warn};

use crate::annotations::{AnnotatedJoints, PhaseFlags};
use crate::constraints::Constraints;
use crate::kinematic_traits::{Joints, Kinematics, Point};
use crate::kinematics_impl::Planar3RKinematics;
use crate::reach::{reach_detailed, ReachOptions};
use crate::solver_error::SolverError;

/// Cartesian distance between consecutive targets, in the units of the link lengths.
pub const DEFAULT_STEP: f64 = 0.005;

/// Segments not longer than this produce no targets.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// Upper bound on the number of targets a single segment may be cut into.
pub const MAX_SEGMENT_TARGETS: usize = 1_000_000;

/// Targets along the segment from `from` to `to`. The segment is parameterized by
/// `floor(length / step)` evenly spaced values of s in [0, 1], both ends included, and
/// the targets are (1 - s) from + s to for all s > 0. The last target is exactly `to`.
/// Segments shorter than two steps produce no targets. A segment that is not finite, or
/// would need more than [`MAX_SEGMENT_TARGETS`] targets, is an error.
pub fn resample_segment(from: &Point, to: &Point, step: f64) -> Result<Vec<Point>, SolverError> {
    let length = (to - from).norm();
    if length <= MIN_SEGMENT_LENGTH {
        return Ok(Vec::new());
    }
    let count = (length / step).floor();
    if !count.is_finite() || count > MAX_SEGMENT_TARGETS as f64 {
        return Err(SolverError::SegmentTooLong { length, step });
    }
    let count = count as usize;
    if count < 2 {
        return Ok(Vec::new());
    }
    let delta = 1.0 / (count - 1) as f64;
    Ok((1..count)
        .map(|i| {
            let s = if i == count - 1 { 1.0 } else { i as f64 * delta };
            from * (1.0 - s) + to * s
        })
        .collect())
}

/// Generated joint trajectory, one sample per solved target plus the leading start
/// position. Immutable once returned by the generator.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    samples: Vec<AnnotatedJoints>,
    not_converged: usize,
    worst_residual: f64,
}

impl Trajectory {
    /// Trajectory of plain joints, as read back from a file. No phase information.
    pub fn from_joints(joints: Vec<Joints>) -> Self {
        Trajectory {
            samples: joints
                .into_iter()
                .map(|q| AnnotatedJoints::new(q, PhaseFlags::NONE))
                .collect(),
            ..Default::default()
        }
    }

    fn push(&mut self, joints: Joints, flags: PhaseFlags, converged: bool, residual: f64) {
        let flags = if converged {
            flags
        } else {
            self.not_converged += 1;
            flags | PhaseFlags::NOT_CONVERGED
        };
        self.worst_residual = self.worst_residual.max(residual);
        self.samples.push(AnnotatedJoints::new(joints, flags));
    }

    pub fn samples(&self) -> &[AnnotatedJoints] {
        &self.samples
    }

    pub fn joints(&self) -> Vec<Joints> {
        self.samples.iter().map(|s| s.joints).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&AnnotatedJoints> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&AnnotatedJoints> {
        self.samples.last()
    }

    /// Number of samples produced in any of the given phases.
    pub fn phase_len(&self, phase: PhaseFlags) -> usize {
        self.samples.iter().filter(|s| s.flags.intersects(phase)).count()
    }

    /// Number of samples produced in any of the given phases that did not converge.
    fn phase_not_converged(&self, phase: PhaseFlags) -> usize {
        self.samples
            .iter()
            .filter(|s| s.flags.intersects(phase) && s.flags.contains(PhaseFlags::NOT_CONVERGED))
            .count()
    }

    /// Number of targets the solver did not reach within its iteration limit.
    pub fn not_converged(&self) -> usize {
        self.not_converged
    }

    /// Largest distance between a target and the tip position of its sample.
    pub fn worst_residual(&self) -> f64 {
        self.worst_residual
    }

    /// Per joint count of samples outside the joint limits.
    pub fn limit_violations(&self, constraints: &Constraints) -> [usize; 3] {
        let mut counts = [0; 3];
        for sample in &self.samples {
            for (count, violated) in counts.iter_mut().zip(constraints.violations(&sample.joints)) {
                if violated {
                    *count += 1;
                }
            }
        }
        counts
    }
}

/// Converts Cartesian paths into joint trajectories for the given robot.
pub struct TrajectoryGenerator<'a> {
    pub robot: &'a Planar3RKinematics,

    /// Cartesian distance between consecutive targets.
    pub step: f64,

    pub options: ReachOptions,
}

impl<'a> TrajectoryGenerator<'a> {
    pub fn new(robot: &'a Planar3RKinematics, step: f64, options: ReachOptions) -> Self {
        TrajectoryGenerator { robot, step, options }
    }

    /// Generates the closed loop trajectory start, path[0] .. path[n-1], path[0], start.
    /// Any numerical failure aborts the generation, no partial trajectory is returned.
    pub fn generate(&self, path: &[Point]) -> Result<Trajectory, SolverError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SolverError::InvalidStep { step: self.step });
        }
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err(SolverError::EmptyPath);
        };
        if let Some(index) = path.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(SolverError::NonFiniteWaypoint { index });
        }

        let start = self.robot.parameters().start;
        let home = self.robot.forward(&start);

        let mut trajectory = Trajectory::default();
        trajectory.push(start, PhaseFlags::START, true, 0.0);

        let theta = self.follow_segment(&home, first, PhaseFlags::APPROACH, start, &mut trajectory)?;
        let theta = path.windows(2).try_fold(theta, |theta, pair| {
            self.follow_segment(&pair[0], &pair[1], PhaseFlags::PATH, theta, &mut trajectory)
        })?;
        let theta = self.follow_segment(last, first, PhaseFlags::CLOSURE, theta, &mut trajectory)?;
        self.follow_segment(first, &home, PhaseFlags::RETURN, theta, &mut trajectory)?;

        for phase in [PhaseFlags::APPROACH, PhaseFlags::PATH, PhaseFlags::CLOSURE, PhaseFlags::RETURN] {
            info!(
                ?phase,
                samples = trajectory.phase_len(phase),
                not_converged = trajectory.phase_not_converged(phase),
                "phase completed"
            );
        }
        info!(
            samples = trajectory.len(),
            not_converged = trajectory.not_converged(),
            worst_residual = trajectory.worst_residual(),
            "joint trajectory generated"
        );

        if !self.options.clamp {
            let violations = trajectory.limit_violations(self.robot.constraints());
            if violations.iter().any(|&count| count > 0) {
                warn!(?violations, "samples outside joint limits (clamping disabled)");
            }
        }

        Ok(trajectory)
    }

    /// Solves the targets of one segment in order, each from the joints of the previous
    /// one. Returns the joints of the last sample, or `theta` if the segment is degenerate.
    fn follow_segment(
        &self,
        from: &Point,
        to: &Point,
        phase: PhaseFlags,
        theta: Joints,
        trajectory: &mut Trajectory,
    ) -> Result<Joints, SolverError> {
        let targets = resample_segment(from, to, self.step)?;
        debug!(
            ?phase,
            from = ?(from.x, from.y),
            to = ?(to.x, to.y),
            targets = targets.len(),
            "following segment"
        );

        targets.iter().try_fold(theta, |theta, target| {
            let outcome = reach_detailed(target, &theta, self.robot, self.options)?;
            trajectory.push(outcome.joints, phase, outcome.converged, outcome.residual);
            Ok(outcome.joints)
        })
    }
}
