//! Rust implementation of inverse kinematics and Cartesian path following for planar robot arms
//! with three revolute joints (3R).
//!
//! The arm has three joints but its tip only has two coordinates, so it is kinematically redundant.
//! This crate follows a Cartesian path with a damped iterative Jacobian method and uses the spare
//! degree of freedom to keep the joints away from their limits.
//!
//! # Features
//!
//! - Closed-form forward kinematics and analytic Jacobian of the 3R chain.
//! - Damped pseudo-inverse inverse kinematics (`reach`), with optional joint limit avoidance in the
//!   null space of the Jacobian and optional hard clamping to the joint limits. Both switches are
//!   independent.
//! - Singular configurations (arm fully stretched or folded) are reported as errors rather than
//!   producing huge joint steps.
//! - Joint trajectory generation for a closed loop: from the start pose to the path, along the path,
//!   back to its first point and back to the start pose. Every sample is annotated with its phase.
//! - Reading of the robot description and path files, writing of the trajectory file that the
//!   companion visualizer plays back.
//!
//! # Parameters
//!
//! The arm is described by the link lengths _L1, L2, L3_, the joint limits and the start ("home")
//! joint position, see [parameters::planar3r::Parameters]. All joint angles are relative to the
//! previous link, the first one to the x axis.
//!
//! ```
//! use rs_planar3r_kinematics::kinematic_traits::{Kinematics, Point};
//! use rs_planar3r_kinematics::kinematics_impl::Planar3RKinematics;
//! use rs_planar3r_kinematics::parameters::planar3r::Parameters;
//! use rs_planar3r_kinematics::reach::ReachOptions;
//! use rs_planar3r_kinematics::trajectory::TrajectoryGenerator;
//!
//! let robot = Planar3RKinematics::new(Parameters::course_arm());
//! let square = [
//!     Point::new(0.6, 0.3), Point::new(0.8, 0.3),
//!     Point::new(0.8, 0.5), Point::new(0.6, 0.5),
//! ];
//! let generator = TrajectoryGenerator::new(&robot, 0.01, ReachOptions::default());
//! let trajectory = generator.generate(&square).expect("square is reachable");
//! assert_eq!(trajectory.first().unwrap().joints, robot.parameters().start);
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

#[cfg(feature = "allow_filesystem")]
pub mod path_io;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod constraints;

pub mod jacobian;

pub mod reach;

pub mod annotations;

pub mod trajectory;

pub mod parameter_error;
pub mod solver_error;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
