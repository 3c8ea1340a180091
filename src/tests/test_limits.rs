//! The four combinations of limit avoidance and clamping on a path that cannot be
//! followed within the joint limits.

use crate::constraints::Constraints;
use crate::kinematic_traits::Point;
use crate::kinematics_impl::Planar3RKinematics;
use crate::parameters::planar3r::Parameters;
use crate::reach::ReachOptions;
use crate::trajectory::{Trajectory, TrajectoryGenerator};

fn tight_robot() -> Planar3RKinematics {
    Planar3RKinematics::new(Parameters {
        start: [0.3, 0.3, 0.3],
        constraints: Constraints::new([-0.6; 3], [0.6; 3]),
        ..Parameters::new()
    })
}

fn generate(robot: &Planar3RKinematics, options: ReachOptions) -> Trajectory {
    // Close to the base, needs more bending than the limits allow
    let path = [Point::new(1.6, 1.6), Point::new(1.0, 1.9)];
    TrajectoryGenerator::new(robot, 0.02, options)
        .generate(&path)
        .expect("Must generate")
}

fn violating_samples(trajectory: &Trajectory, constraints: &Constraints) -> usize {
    trajectory
        .samples()
        .iter()
        .filter(|s| !constraints.compliant(&s.joints))
        .count()
}

#[test]
fn test_clamped_stays_within_limits() {
    let robot = tight_robot();
    for options in [ReachOptions::new(false, true), ReachOptions::new(true, true)] {
        let trajectory = generate(&robot, options);
        assert_eq!(violating_samples(&trajectory, robot.constraints()), 0);
        assert_eq!(trajectory.limit_violations(robot.constraints()), [0, 0, 0]);
        // The path cannot be followed, the solver gives up silently
        assert!(trajectory.not_converged() > 0);
    }
}

#[test]
fn test_unclamped_follows_path_outside_limits() {
    let robot = tight_robot();
    let plain = generate(&robot, ReachOptions::PLAIN);
    let avoiding = generate(&robot, ReachOptions::new(true, false));

    for trajectory in [&plain, &avoiding] {
        assert_eq!(trajectory.not_converged(), 0);
        assert!(violating_samples(trajectory, robot.constraints()) > 0);
    }

    // Avoidance does not make it worse
    assert!(
        violating_samples(&avoiding, robot.constraints())
            <= violating_samples(&plain, robot.constraints())
    );
}

#[test]
fn test_same_sample_count_for_all_options() {
    // Sampling depends on the Cartesian path only
    let robot = tight_robot();
    let lengths: Vec<usize> = [
        ReachOptions::new(false, false),
        ReachOptions::new(true, false),
        ReachOptions::new(false, true),
        ReachOptions::new(true, true),
    ]
    .into_iter()
    .map(|options| generate(&robot, options).len())
    .collect();
    assert!(lengths.iter().all(|&len| len == lengths[0]));
}
