use crate::kinematic_traits::{Kinematics, Point};
use crate::kinematics_impl::Planar3RKinematics;
use crate::parameter_error::ParameterError;
use crate::parameters::planar3r::{Parameters, Workspace};
use crate::path_io::{read_path_file, read_trajectory_file, write_trajectory_file};
use crate::reach::{ReachOptions, EPSILON};
use crate::tests::test_utils::{load_case, temp_file, COURSE_DIR};
use crate::trajectory::{TrajectoryGenerator, DEFAULT_STEP};

const READ_ERROR: &str = "Failed to load test case from files";

#[test]
fn test_course_case_loads() {
    let (parameters, path) = load_case(COURSE_DIR).expect(READ_ERROR);

    assert_eq!((parameters.l1, parameters.l2, parameters.l3), (0.5, 0.4, 0.3));
    assert_eq!(parameters.workspace, Workspace { x_min: -0.4, x_max: 1.3, y_min: -0.4, y_max: 1.3 });
    assert_eq!(parameters.constraints.to, [3.14159, 2.0944, 1.5708]);
    assert_eq!(path.len(), 8);
    assert_eq!(path[0], Point::new(0.85, 0.4));
    assert_eq!(path[7], Point::new(0.8061, 0.2939));
}

#[test]
fn test_generate_write_read_back() {
    let (parameters, path) = load_case(COURSE_DIR).expect(READ_ERROR);
    let robot = Planar3RKinematics::new(parameters);
    let generator = TrajectoryGenerator::new(&robot, DEFAULT_STEP, ReachOptions::default());
    let trajectory = generator.generate(&path).expect("Octagon must be reachable");

    let output = temp_file("octagon.trj");
    write_trajectory_file(&output, &trajectory.joints()).expect("Failed to write trajectory");
    let read_back = read_trajectory_file(&output).expect("Failed to read trajectory");
    let _ = std::fs::remove_file(&output);

    // Written with enough digits to read back bit-identical
    assert_eq!(read_back, trajectory.joints());
    assert_eq!(read_back[0], parameters.start);
}

#[test]
fn test_octagon_is_traced() {
    let (parameters, path) = load_case(COURSE_DIR).expect(READ_ERROR);
    let robot = Planar3RKinematics::new(parameters);
    let generator = TrajectoryGenerator::new(&robot, DEFAULT_STEP, ReachOptions::default());
    let trajectory = generator.generate(&path).expect("Octagon must be reachable");

    assert_eq!(trajectory.not_converged(), 0);
    assert!(trajectory.worst_residual() < EPSILON);

    // Every waypoint is hit by some sample
    for waypoint in &path {
        let closest = trajectory
            .samples()
            .iter()
            .map(|s| (robot.forward(&s.joints) - waypoint).norm())
            .fold(f64::INFINITY, f64::min);
        assert!(closest < EPSILON, "waypoint {:?} missed by {}", waypoint, closest);
    }

    // The loop ends with the tip back at the start position
    let home = robot.forward(&parameters.start);
    let back = robot.forward(&trajectory.last().unwrap().joints);
    assert!((back - home).norm() < EPSILON);
}

#[test]
fn test_wrong_columns_in_file() {
    let file = format!("{}/three_columns.xy", COURSE_DIR);
    match read_path_file(&file) {
        Err(ParameterError::InvalidColumns { line, expected, found }) => {
            assert_eq!((line, expected, found), (2, 2, 3));
        }
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let result = Parameters::from_par_file(format!("{}/does_not_exist.par", COURSE_DIR));
    assert!(matches!(result, Err(ParameterError::IoError(_))));
}
