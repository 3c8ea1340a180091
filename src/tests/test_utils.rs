use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::kinematic_traits::Point;
use crate::parameters::planar3r::Parameters;
use crate::path_io::read_path_file;

pub(crate) const COURSE_DIR: &str = "src/tests/data/course";

/// Loads the robot description and the path of a test case directory.
pub(crate) fn load_case(dir: impl AsRef<Path>) -> Result<(Parameters, Vec<Point>)> {
    let dir = dir.as_ref();
    let robot_file = dir.join("Robot.par");
    let path_file = dir.join("Trajet.xy");
    let parameters = Parameters::from_par_file(&robot_file)
        .with_context(|| format!("Failed to read robot description: {}", robot_file.display()))?;
    let path = read_path_file(&path_file)
        .with_context(|| format!("Failed to read path: {}", path_file.display()))?;
    Ok((parameters, path))
}

/// File in the system temporary directory, unique per process and test name.
pub(crate) fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rs-planar3r-{}-{}", std::process::id(), name))
}
