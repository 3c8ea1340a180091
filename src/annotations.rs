use crate::kinematic_traits::Joints;
use crate::utils::format_joints_degrees;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Flags that can be set on AnnotatedJoints in the output
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PhaseFlags: u32 {
        const NONE =                0b0000_0000;

        /// The start ("home") position, first sample of every trajectory.
        const START =               0b0000_0001;

        /// Movement from the start position to the first waypoint of the path.
        const APPROACH =            0b0000_0010;

        /// Movement along the path, between consecutive waypoints.
        const PATH =                0b0000_0100;

        /// Movement from the last waypoint back to the first one, closing the path.
        const CLOSURE =             0b0000_1000;

        /// Movement from the first waypoint back towards the start position.
        const RETURN =              0b0001_0000;

        /// Sample where the solver stopped before reaching the tolerance.
        const NOT_CONVERGED =       0b0010_0000;

        /// Samples on the requested path, closure included.
        const TRACE = Self::PATH.bits() | Self::CLOSURE.bits();

        /// Samples of transfer moves to and from the start position.
        const TRANSFER = Self::APPROACH.bits() | Self::RETURN.bits();
    }
}

/// Joints of one trajectory sample with the phase they were produced in.
#[derive(Clone, Copy, PartialEq)]
pub struct AnnotatedJoints {
    pub joints: Joints,
    pub flags: PhaseFlags,
}

impl AnnotatedJoints {
    pub fn new(joints: Joints, flags: PhaseFlags) -> Self {
        AnnotatedJoints { joints, flags }
    }
}

impl fmt::Debug for AnnotatedJoints {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flag_representation(flags: &PhaseFlags) -> String {
            const FLAG_MAP: &[(PhaseFlags, &str)] = &[
                (PhaseFlags::START, "START"),
                (PhaseFlags::APPROACH, "APPROACH"),
                (PhaseFlags::PATH, "PATH"),
                (PhaseFlags::CLOSURE, "CLOSURE"),
                (PhaseFlags::RETURN, "RETURN"),
                (PhaseFlags::NOT_CONVERGED, "NOT_CONVERGED"),
            ];

            FLAG_MAP
                .iter()
                .filter(|(flag, _)| flags.contains(*flag))
                .map(|(_, name)| *name)
                .collect::<Vec<_>>()
                .join(" | ")
        }

        write!(
            formatter,
            "{}: {}",
            flag_representation(&self.flags),
            format_joints_degrees(&self.joints)
        )
    }
}
