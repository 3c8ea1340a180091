//! Supports reading the robot description file (optional)
//!
//! The file holds one number per line, in a fixed order. Empty lines and lines starting
//! with `#` are skipped, and only the first token of a line is read, so a value may be
//! followed by a note:
//! ```text
//! # Link lengths
//! 0.5   L1
//! 0.4   L2
//! 0.3   L3
//! ...
//! ```

use std::path::Path;
use tracing::warn;

use crate::constraints::Constraints;
use crate::kinematic_traits::Point;
use crate::parameter_error::ParameterError;
use crate::parameters::planar3r::{Parameters, Wall, Workspace};

/// Number of values in the robot description: L1 L2 L3, xmin xmax ymin ymax, x0 y0,
/// three start joints, min and max of three joints, wall x0 x1 y0 y1, dt.
pub const PAR_VALUE_COUNT: usize = 23;

impl Parameters {
    /// Read the robot description from a file, see the module documentation for the format.
    pub fn from_par_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_par_str(&contents)
    }

    /// Parse the robot description from its text, see the module documentation for the format.
    pub fn from_par_str(contents: &str) -> Result<Self, ParameterError> {
        let mut values = Vec::with_capacity(PAR_VALUE_COUNT);
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let token = line.split_whitespace().next().unwrap_or(line);
            let value: f64 = token.parse().map_err(|_| ParameterError::ParseError {
                line: index + 1,
                message: format!("'{}' is not a number", token),
            })?;
            values.push(value);
        }

        if values.len() < PAR_VALUE_COUNT {
            return Err(ParameterError::InvalidLength { expected: PAR_VALUE_COUNT, found: values.len() });
        }
        if values.len() > PAR_VALUE_COUNT {
            warn!(found = values.len(), expected = PAR_VALUE_COUNT, "surplus values in robot description ignored");
        }

        let v = &values;
        let parameters = Parameters {
            l1: v[0],
            l2: v[1],
            l3: v[2],
            workspace: Workspace { x_min: v[3], x_max: v[4], y_min: v[5], y_max: v[6] },
            base: Point::new(v[7], v[8]),
            start: [v[9], v[10], v[11]],
            constraints: Constraints::new([v[12], v[14], v[16]], [v[13], v[15], v[17]]),
            wall: Wall { x0: v[18], x1: v[19], y0: v[20], y1: v[21] },
            dt: v[22],
        };
        parameters.validate()?;
        Ok(parameters)
    }
}
